// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;

/// Lifecycle state of a [`crate::Worker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkerState {
    #[default]
    Stopped,
    Starting,
    Started,
    Paused,
    Stopping,
}

impl WorkerState {
    /// A thread is (or is about to be) running the work loop.
    pub fn is_running(self) -> bool {
        matches!(self, WorkerState::Started | WorkerState::Paused)
    }

    /// A transition is in flight.
    pub fn is_transitional(self) -> bool {
        matches!(self, WorkerState::Starting | WorkerState::Stopping)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WorkerState::Stopped => "stopped",
            WorkerState::Starting => "starting",
            WorkerState::Started => "started",
            WorkerState::Paused => "paused",
            WorkerState::Stopping => "stopping",
        }
    }
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
