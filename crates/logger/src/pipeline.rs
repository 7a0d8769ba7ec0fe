// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared state of a logger and the drain run by its worker.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;
use std::io::Write;
use std::ops::ControlFlow;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use twine_core::{colorize, format_local, CallerId, Clock, TimeStyle};
use twine_worker::{HookError, WorkerHooks};

use crate::error::SinkError;
use crate::level::LogLevel;
use crate::mux::MuxTable;
use crate::record::LogRecord;
use crate::sink::{LogEntry, LogSink};

/// Whether the active sink is known to accept deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    Yes,
    No,
    Unknown,
}

impl Connection {
    fn as_u8(self) -> u8 {
        match self {
            Connection::Yes => 0,
            Connection::No => 1,
            Connection::Unknown => 2,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => Connection::Yes,
            1 => Connection::No,
            _ => Connection::Unknown,
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Connection::Yes => "yes",
            Connection::No => "no",
            Connection::Unknown => "unknown",
        })
    }
}

struct Output {
    sink: Box<dyn LogSink>,
    /// The current sink has connected at least once.
    greeted: bool,
    sequence: u64,
    /// Where echoed lines go, stdout outside tests.
    echo: Box<dyn Write + Send>,
}

pub(crate) struct PipelineOptions {
    pub threshold: LogLevel,
    pub use_color: bool,
    pub color_capable: bool,
    pub announce: bool,
    pub echo_stdout: bool,
    pub clock: Arc<dyn Clock>,
    pub sink: Box<dyn LogSink>,
    pub echo: Box<dyn Write + Send>,
}

/// Everything a logger shares with its worker thread.
pub(crate) struct Pipeline {
    muxes: MuxTable,
    queue: Mutex<VecDeque<LogRecord>>,
    pending_sink: Mutex<Option<Box<dyn LogSink>>>,
    output: Mutex<Output>,
    threshold: AtomicU8,
    connection: AtomicU8,
    use_color: AtomicBool,
    echo_stdout: AtomicBool,
    /// Stdout is a terminal, or color was forced.
    color_capable: bool,
    announce: bool,
    clock: Arc<dyn Clock>,
}

impl Pipeline {
    pub(crate) fn new(options: PipelineOptions) -> Self {
        Self {
            muxes: MuxTable::default(),
            queue: Mutex::new(VecDeque::new()),
            pending_sink: Mutex::new(None),
            output: Mutex::new(Output {
                sink: options.sink,
                greeted: false,
                sequence: 0,
                echo: options.echo,
            }),
            threshold: AtomicU8::new(options.threshold.index()),
            connection: AtomicU8::new(Connection::Unknown.as_u8()),
            use_color: AtomicBool::new(options.use_color),
            echo_stdout: AtomicBool::new(options.echo_stdout),
            color_capable: options.color_capable,
            announce: options.announce,
            clock: options.clock,
        }
    }

    pub(crate) fn muxes(&self) -> &MuxTable {
        &self.muxes
    }

    pub(crate) fn announce(&self) -> bool {
        self.announce
    }

    pub fn threshold(&self) -> LogLevel {
        let index = self.threshold.load(Ordering::Acquire) as usize;
        LogLevel::ALL
            .get(index)
            .copied()
            .unwrap_or(LogLevel::Highlight)
    }

    pub(crate) fn set_threshold(&self, level: LogLevel) {
        self.threshold.store(level.index(), Ordering::Release);
    }

    pub fn connection(&self) -> Connection {
        Connection::from_u8(self.connection.load(Ordering::Acquire))
    }

    fn set_connection(&self, connection: Connection) {
        self.connection.store(connection.as_u8(), Ordering::Release);
    }

    pub fn use_color(&self) -> bool {
        self.use_color.load(Ordering::Relaxed)
    }

    pub(crate) fn set_use_color(&self, enabled: bool) {
        self.use_color.store(enabled, Ordering::Relaxed);
    }

    pub fn echo_stdout(&self) -> bool {
        self.echo_stdout.load(Ordering::Relaxed)
    }

    pub(crate) fn set_echo_stdout(&self, enabled: bool) {
        self.echo_stdout.store(enabled, Ordering::Relaxed);
    }

    /// Number of committed records waiting for the next drain.
    pub fn queued(&self) -> usize {
        self.queue.lock().len()
    }

    /// Build a record stamped with the current local time.
    pub(crate) fn record(&self, caller: CallerId, level: LogLevel, message: String) -> LogRecord {
        LogRecord {
            caller,
            level,
            message,
            time: format_local(self.clock.as_ref(), TimeStyle::Punctuated),
        }
    }

    pub(crate) fn enqueue(&self, record: LogRecord) {
        self.queue.lock().push_back(record);
    }

    /// Replace the sink at the start of the next drain.
    pub(crate) fn swap_sink(&self, sink: Box<dyn LogSink>) {
        *self.pending_sink.lock() = Some(sink);
    }

    fn install_pending_sink(&self) {
        let Some(sink) = self.pending_sink.lock().take() else {
            return;
        };
        let mut output = self.output.lock();
        output.sink.disconnect();
        output.sink = sink;
        output.greeted = false;
        self.set_connection(Connection::Unknown);
        tracing::debug!("log sink replaced");
    }

    /// Connect the active sink unless it is already connected.
    fn ensure_connected(&self, output: &mut Output) -> bool {
        if self.connection() == Connection::Yes {
            return true;
        }
        let connected = panic::catch_unwind(AssertUnwindSafe(|| output.sink.connect()))
            .unwrap_or(Err(SinkError::Panicked));
        if let Err(e) = connected {
            if self.connection() != Connection::No {
                tracing::warn!(error = %e, "log sink not connected, records stay queued");
            }
            self.set_connection(Connection::No);
            return false;
        }
        self.set_connection(Connection::Yes);

        let greeting = if output.greeted {
            "Reconnected!"
        } else {
            "Hello!"
        };
        output.greeted = true;
        if self.announce {
            let record = self.record(CallerId::current(), LogLevel::Highlight, greeting.into());
            if let Err(e) = self.deliver(output, &record) {
                tracing::warn!(error = %e, "log sink failed after connecting");
                self.set_connection(Connection::No);
                return false;
            }
        }
        true
    }

    fn deliver(&self, output: &mut Output, record: &LogRecord) -> Result<(), SinkError> {
        let message = if self.use_color() && self.color_capable && output.sink.accepts_color() {
            Cow::Owned(colorize(&record.message, record.level.color()))
        } else {
            Cow::Borrowed(record.message.as_str())
        };
        let entry = LogEntry {
            record,
            sequence: output.sequence,
            message,
        };
        panic::catch_unwind(AssertUnwindSafe(|| output.sink.deliver(&entry)))
            .unwrap_or(Err(SinkError::Panicked))?;
        output.sequence += 1;

        // The record has reached its sink, so a broken echo only turns echo off.
        if self.echo_stdout() && !output.sink.is_console() {
            let echoed = writeln!(output.echo, "{}", entry.line())
                .and_then(|()| output.echo.flush());
            if let Err(e) = echoed {
                tracing::warn!(error = %e, "echo to stdout failed, echo disabled");
                self.set_echo_stdout(false);
            }
        }
        Ok(())
    }

    /// Deliver everything queued at entry, in order.
    ///
    /// Records below the threshold are dropped. When the sink fails, the
    /// undelivered part of the batch goes back to the front of the queue.
    pub(crate) fn drain(&self) {
        self.install_pending_sink();

        let batch = std::mem::take(&mut *self.queue.lock());
        if batch.is_empty() {
            return;
        }

        let undelivered = self.deliver_batch(batch);
        if !undelivered.is_empty() {
            let mut queue = self.queue.lock();
            for record in undelivered.into_iter().rev() {
                queue.push_front(record);
            }
        }
    }

    fn deliver_batch(&self, batch: VecDeque<LogRecord>) -> VecDeque<LogRecord> {
        let mut output = self.output.lock();
        if !self.ensure_connected(&mut output) {
            return batch;
        }

        let threshold = self.threshold();
        let mut batch = batch;
        while let Some(record) = batch.pop_front() {
            if record.level < threshold {
                continue;
            }
            if let Err(e) = self.deliver(&mut output, &record) {
                tracing::warn!(error = %e, remaining = batch.len() + 1, "log delivery failed");
                self.set_connection(Connection::No);
                batch.push_front(record);
                return batch;
            }
        }
        batch
    }

    fn farewell(&self) {
        let mut output = self.output.lock();
        if self.announce && self.connection() == Connection::Yes {
            let record = self.record(CallerId::current(), LogLevel::Highlight, "Bye Bye!".into());
            if let Err(e) = self.deliver(&mut output, &record) {
                tracing::warn!(error = %e, "failed to deliver farewell");
            }
        }
        output.sink.disconnect();
        output.sequence = 0;
        self.set_connection(Connection::Unknown);
    }
}

impl WorkerHooks for Pipeline {
    fn prepare_to_start(&self) -> Result<(), HookError> {
        self.install_pending_sink();
        let mut output = self.output.lock();
        self.ensure_connected(&mut output);
        Ok(())
    }

    fn worker_job(&self) -> Result<ControlFlow<()>, HookError> {
        self.drain();
        Ok(ControlFlow::Continue(()))
    }

    fn after_work(&self) -> Result<(), HookError> {
        self.drain();
        let left = self.queued();
        if left > 0 {
            tracing::warn!(records = left, "logger stopped with undelivered records");
        }
        self.farewell();
        Ok(())
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
