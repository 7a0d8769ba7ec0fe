// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Destinations for delivered records.

use std::borrow::Cow;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::SinkError;
use crate::record::LogRecord;

/// A record on its way to a sink.
#[derive(Debug, Clone)]
pub struct LogEntry<'a> {
    pub record: &'a LogRecord,
    /// Value of the message counter at delivery.
    pub sequence: u64,
    /// The record's message, wrapped in color codes when decoration applies.
    pub message: Cow<'a, str>,
}

impl LogEntry<'_> {
    /// `<caller> <level index> <timestamp> <sequence> <message>`
    pub fn line(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.record.caller,
            self.record.level.index(),
            self.record.time,
            self.sequence,
            self.message
        )
    }
}

/// Output of the logging pipeline.
///
/// A sink is owned by the logger's worker thread; only its hooks call into it.
pub trait LogSink: Send + 'static {
    fn connect(&mut self) -> Result<(), SinkError> {
        Ok(())
    }

    fn deliver(&mut self, entry: &LogEntry<'_>) -> Result<(), SinkError>;

    fn disconnect(&mut self) {}

    /// Whether messages may be wrapped in terminal color codes.
    fn accepts_color(&self) -> bool {
        false
    }

    /// Whether this sink already writes to stdout, making echo redundant.
    fn is_console(&self) -> bool {
        false
    }
}

/// Writes lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn deliver(&mut self, entry: &LogEntry<'_>) -> Result<(), SinkError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", entry.line())?;
        out.flush()?;
        Ok(())
    }

    fn accepts_color(&self) -> bool {
        true
    }

    fn is_console(&self) -> bool {
        true
    }
}

/// Appends lines to a file, creating it if needed.
///
/// The handle is closed on `disconnect` and reopened on the next `connect`.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Option<File>,
}

impl FileSink {
    /// Open `path` for appending right away, so failures surface to the caller.
    pub fn open(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let file = Self::open_append(&path)?;
        Ok(Self {
            path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_append(path: &Path) -> std::io::Result<File> {
        OpenOptions::new().create(true).append(true).open(path)
    }
}

impl LogSink for FileSink {
    fn connect(&mut self) -> Result<(), SinkError> {
        if self.file.is_none() {
            self.file = Some(Self::open_append(&self.path)?);
        }
        Ok(())
    }

    fn deliver(&mut self, entry: &LogEntry<'_>) -> Result<(), SinkError> {
        let file = self.file.as_mut().ok_or(SinkError::NotConnected)?;
        writeln!(file, "{}", entry.line())?;
        Ok(())
    }

    fn disconnect(&mut self) {
        if let Some(mut file) = self.file.take() {
            if let Err(e) = file.flush() {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to flush log file");
            }
        }
    }
}

/// Sink backed by a closure, see [`from_fn`].
pub struct FnSink<F> {
    deliver: F,
}

impl<F> LogSink for FnSink<F>
where
    F: FnMut(&LogEntry<'_>) -> Result<(), SinkError> + Send + 'static,
{
    fn deliver(&mut self, entry: &LogEntry<'_>) -> Result<(), SinkError> {
        (self.deliver)(entry)
    }
}

/// Adapt a closure into an uncolored [`LogSink`].
pub fn from_fn<F>(deliver: F) -> FnSink<F>
where
    F: FnMut(&LogEntry<'_>) -> Result<(), SinkError> + Send + 'static,
{
    FnSink { deliver }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
