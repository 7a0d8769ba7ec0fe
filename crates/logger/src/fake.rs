// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use std::sync::Arc;

use parking_lot::Mutex;
use twine_core::CallerId;

use crate::error::SinkError;
use crate::level::LogLevel;
use crate::sink::{LogEntry, LogSink};

/// A delivered entry as captured by [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEntry {
    pub caller: CallerId,
    pub level: LogLevel,
    pub sequence: u64,
    /// Message as handed to the sink, including any color codes
    pub message: String,
    pub time: String,
}

#[derive(Default)]
struct MemoryState {
    entries: Vec<CapturedEntry>,
    connects: usize,
    disconnects: usize,
    failing_connects: usize,
    failing_deliveries: usize,
    accepts_color: bool,
}

/// Sink that keeps every delivered entry and fails on demand
#[derive(Clone, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<MemoryState>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<CapturedEntry> {
        self.inner.lock().entries.clone()
    }

    /// Delivered messages, in order
    pub fn messages(&self) -> Vec<String> {
        self.inner
            .lock()
            .entries
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }

    pub fn connects(&self) -> usize {
        self.inner.lock().connects
    }

    pub fn disconnects(&self) -> usize {
        self.inner.lock().disconnects
    }

    /// Make the next `n` connection attempts fail
    pub fn fail_connects(&self, n: usize) {
        self.inner.lock().failing_connects = n;
    }

    /// Make the next `n` deliveries fail
    pub fn fail_deliveries(&self, n: usize) {
        self.inner.lock().failing_deliveries = n;
    }

    pub fn set_accepts_color(&self, accepts: bool) {
        self.inner.lock().accepts_color = accepts;
    }
}

impl LogSink for MemorySink {
    fn connect(&mut self) -> Result<(), SinkError> {
        let mut state = self.inner.lock();
        if state.failing_connects > 0 {
            state.failing_connects -= 1;
            return Err(SinkError::Custom("connect refused".to_string()));
        }
        state.connects += 1;
        Ok(())
    }

    fn deliver(&mut self, entry: &LogEntry<'_>) -> Result<(), SinkError> {
        let mut state = self.inner.lock();
        if state.failing_deliveries > 0 {
            state.failing_deliveries -= 1;
            return Err(SinkError::Custom("delivery refused".to_string()));
        }
        state.entries.push(CapturedEntry {
            caller: entry.record.caller,
            level: entry.record.level,
            sequence: entry.sequence,
            message: entry.message.to_string(),
            time: entry.record.time.clone(),
        });
        Ok(())
    }

    fn disconnect(&mut self) {
        self.inner.lock().disconnects += 1;
    }

    fn accepts_color(&self) -> bool {
        self.inner.lock().accepts_color
    }
}
