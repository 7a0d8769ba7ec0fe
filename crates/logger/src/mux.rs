// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-caller line buffers.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use twine_core::CallerId;

use crate::level::LogLevel;
use crate::value::Loggable;

/// The uncommitted line of one caller.
#[derive(Debug, Default)]
pub(crate) struct LogMux {
    buffer: String,
    level: LogLevel,
}

impl LogMux {
    pub fn append(&mut self, value: &dyn Loggable) {
        value.write_log(&mut self.buffer);
        self.buffer.push(' ');
    }

    /// Take the buffered text without its trailing separator.
    ///
    /// Returns `None` when nothing was appended since the last take.
    pub fn take_line(&mut self) -> Option<String> {
        let mut line = std::mem::take(&mut self.buffer);
        if line.ends_with(' ') {
            line.pop();
        }
        if line.is_empty() {
            None
        } else {
            Some(line)
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Nothing buffered and the default level selected.
    pub fn is_idle(&self) -> bool {
        self.buffer.is_empty() && self.level == LogLevel::default()
    }

    #[cfg(test)]
    pub fn pending(&self) -> &str {
        &self.buffer
    }
}

/// Sharded map from caller to its buffer.
///
/// The shard lock is only held while looking up or inserting the entry;
/// the buffer itself has its own lock.
#[derive(Default)]
pub(crate) struct MuxTable {
    muxes: DashMap<CallerId, Arc<Mutex<LogMux>>>,
}

impl MuxTable {
    pub fn get(&self, caller: CallerId) -> Arc<Mutex<LogMux>> {
        if let Some(mux) = self.muxes.get(&caller) {
            return Arc::clone(mux.value());
        }
        Arc::clone(self.muxes.entry(caller).or_default().value())
    }

    /// Forget `caller` if its buffer is idle and no handle to it is out.
    ///
    /// An idle buffer is indistinguishable from a fresh one, so short-lived
    /// threads leave nothing behind.
    pub fn release(&self, caller: CallerId) {
        self.muxes
            .remove_if(&caller, |_, mux| Arc::strong_count(mux) == 1 && mux.lock().is_idle());
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.muxes.len()
    }
}

#[cfg(test)]
#[path = "mux_tests.rs"]
mod tests;
