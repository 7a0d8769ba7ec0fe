// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

/// Wake-up interval used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

/// Wake-up interval while paused: the loop only wakes on an explicit signal.
pub const PAUSED_TIMEOUT: Duration = Duration::MAX;

/// How long a synchronous `start`/`stop` waits for the transition.
pub const DEFAULT_START_STOP_TIMEOUT: Duration = Duration::from_millis(2000);

/// Poll interval of a synchronous `start`/`stop`.
pub const SYNC_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Whether `start`/`stop` block the calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartStopMode {
    /// Return immediately; the transition runs on a detached thread.
    #[default]
    Async,
    /// Run the transition inline, then poll until it settles or
    /// the start/stop timeout elapses.
    Sync,
}

/// Construction parameters for a [`crate::Worker`].
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub name: String,
    pub timeout: Duration,
    pub mode: StartStopMode,
    pub start_stop_timeout: Duration,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            name: "Worker".to_string(),
            timeout: DEFAULT_TIMEOUT,
            mode: StartStopMode::default(),
            start_stop_timeout: DEFAULT_START_STOP_TIMEOUT,
        }
    }
}

impl WorkerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn mode(mut self, mode: StartStopMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn start_stop_timeout(mut self, timeout: Duration) -> Self {
        self.start_stop_timeout = timeout;
        self
    }
}
