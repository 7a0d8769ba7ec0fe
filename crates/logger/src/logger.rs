// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Front end of the logging pipeline.

use std::path::Path;
use std::sync::Arc;

use twine_core::{should_colorize, CallerId, Clock, SystemClock};
use twine_worker::{Worker, WorkerState};

use crate::config::LoggerConfig;
use crate::error::LoggerError;
use crate::level::LogLevel;
use crate::pipeline::{Connection, Pipeline, PipelineOptions};
use crate::sink::{ConsoleSink, FileSink, LogSink};
use crate::value::Loggable;

/// Commands understood by [`Logger::command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Commit the caller's line.
    Endl,
    /// Discard the caller's line.
    Reset,
    Start,
    Close,
}

/// Asynchronous logger backed by one background worker.
///
/// Callers build a line with [`append`](Logger::append) and finish it with
/// [`commit`](Logger::commit); the worker delivers committed lines to the
/// sink in the order they were committed. Lines are buffered per
/// [`CallerId`], the calling thread by default or an explicit id through
/// [`Logger::caller`].
///
/// Nothing is delivered until [`start`](Logger::start). Dropping a running
/// logger closes it, draining everything committed so far.
pub struct Logger {
    pipeline: Arc<Pipeline>,
    worker: Worker<Pipeline>,
}

/// Builder for a [`Logger`] with an injected sink, clock or color capability.
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Option<Box<dyn LogSink>>,
    clock: Option<Arc<dyn Clock>>,
    color_capable: Option<bool>,
}

impl LoggerBuilder {
    /// Initial sink, instead of the console.
    pub fn sink(mut self, sink: impl LogSink) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn clock(mut self, clock: impl Clock) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Override terminal detection for color decoration.
    pub fn color_capable(mut self, capable: bool) -> Self {
        self.color_capable = Some(capable);
        self
    }

    /// Build the logger. `config.file` is not opened here, see [`Logger::from_config`].
    pub fn build(self) -> Logger {
        let config = self.config;
        let pipeline = Arc::new(Pipeline::new(PipelineOptions {
            threshold: config.threshold,
            use_color: config.use_color,
            color_capable: self.color_capable.unwrap_or_else(should_colorize),
            announce: config.announce,
            echo_stdout: config.echo_stdout,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            sink: self.sink.unwrap_or_else(|| Box::new(ConsoleSink)),
            echo: Box::new(std::io::stdout()),
        }));
        let worker = Worker::with_config(config.worker_config(), Arc::clone(&pipeline));
        Logger { pipeline, worker }
    }
}

impl Logger {
    pub fn builder(config: LoggerConfig) -> LoggerBuilder {
        LoggerBuilder {
            config,
            sink: None,
            clock: None,
            color_capable: None,
        }
    }

    /// Build a console logger, or a file logger when `config.file` is set.
    pub fn from_config(config: LoggerConfig) -> Result<Self, LoggerError> {
        let file = config.file.clone();
        let logger = Self::builder(config).build();
        if let Some(path) = file {
            logger.set_log_file(&path)?;
        }
        Ok(logger)
    }

    /// A handle that logs as `caller` instead of the current thread.
    pub fn caller(&self, caller: CallerId) -> LogStream<'_> {
        LogStream {
            logger: self,
            caller,
        }
    }

    fn current(&self) -> LogStream<'_> {
        self.caller(CallerId::current())
    }

    /// Append `value` and a separating space to the current line.
    pub fn append(&self, value: impl Loggable) -> &Self {
        self.current().append(value);
        self
    }

    /// Finish the current line and queue it for delivery.
    pub fn commit(&self) -> &Self {
        self.current().commit();
        self
    }

    /// Commit what is buffered, then use `level` for the next line.
    pub fn level(&self, level: LogLevel) -> &Self {
        self.current().level(level);
        self
    }

    pub fn verbose(&self) -> &Self {
        self.level(LogLevel::Verbose)
    }

    pub fn debug(&self) -> &Self {
        self.level(LogLevel::Debug)
    }

    pub fn info(&self) -> &Self {
        self.level(LogLevel::Info)
    }

    pub fn warn(&self) -> &Self {
        self.level(LogLevel::Warn)
    }

    pub fn error(&self) -> &Self {
        self.level(LogLevel::Error)
    }

    pub fn fatal(&self) -> &Self {
        self.level(LogLevel::Fatal)
    }

    pub fn highlight(&self) -> &Self {
        self.level(LogLevel::Highlight)
    }

    /// Discard the current line.
    pub fn reset(&self) -> &Self {
        self.current().reset();
        self
    }

    pub fn command(&self, command: Command) -> &Self {
        self.current().command(command);
        self
    }

    /// Start delivering. Returns once the worker has started.
    pub fn start(&self) {
        self.worker.start();
    }

    /// Stop delivering. Returns once everything committed before the call
    /// has been delivered and the sink is disconnected, or after the
    /// start/stop timeout.
    pub fn close(&self) {
        self.worker.stop();
    }

    pub fn state(&self) -> WorkerState {
        self.worker.state()
    }

    pub fn log_threshold(&self) -> LogLevel {
        self.pipeline.threshold()
    }

    /// Change the threshold applied at the next drain.
    pub fn set_log_threshold(&self, level: LogLevel) {
        self.pipeline.set_threshold(level);
        if self.pipeline.announce() {
            let notice = format!("Setting log threshold to {level}");
            self.pipeline.enqueue(self.pipeline.record(
                CallerId::current(),
                LogLevel::Highlight,
                notice,
            ));
            self.worker.wake_up();
        }
    }

    pub fn use_color(&self) -> bool {
        self.pipeline.use_color()
    }

    pub fn set_use_color(&self, enabled: bool) {
        self.pipeline.set_use_color(enabled);
    }

    pub fn echo_stdout(&self) -> bool {
        self.pipeline.echo_stdout()
    }

    /// Also print delivered lines on stdout while a non-console sink is active.
    pub fn set_echo_stdout(&self, enabled: bool) {
        self.pipeline.set_echo_stdout(enabled);
    }

    pub fn is_connected(&self) -> bool {
        self.connection() == Connection::Yes
    }

    pub fn connection(&self) -> Connection {
        self.pipeline.connection()
    }

    /// Committed records not yet drained.
    pub fn queued(&self) -> usize {
        self.pipeline.queued()
    }

    /// Append to `path` from the next drain on, creating the file if needed.
    ///
    /// The file is opened here so that failures reach the caller.
    pub fn set_log_file(&self, path: &Path) -> Result<(), LoggerError> {
        let sink = FileSink::open(path).map_err(|source| LoggerError::OpenLogFile {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "switching log output to file");
        self.set_sink(sink);
        Ok(())
    }

    /// Write to stdout from the next drain on.
    pub fn set_log_stdout(&self) {
        self.set_sink(ConsoleSink);
    }

    /// Deliver to `sink` from the next drain on.
    pub fn set_sink(&self, sink: impl LogSink) {
        self.pipeline.swap_sink(Box::new(sink));
        self.worker.wake_up();
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.worker.state().is_running() {
            self.close();
        }
    }
}

/// Logger handle bound to one caller, from [`Logger::caller`].
#[derive(Clone, Copy)]
pub struct LogStream<'a> {
    logger: &'a Logger,
    caller: CallerId,
}

impl LogStream<'_> {
    pub fn caller_id(&self) -> CallerId {
        self.caller
    }

    pub fn append(&self, value: impl Loggable) -> &Self {
        let mux = self.logger.pipeline.muxes().get(self.caller);
        mux.lock().append(&value);
        self
    }

    pub fn commit(&self) -> &Self {
        let pipeline = &self.logger.pipeline;
        let mux = pipeline.muxes().get(self.caller);
        let committed = {
            let mut mux = mux.lock();
            match mux.take_line() {
                Some(line) => {
                    // Pushed under the caller's lock to keep its lines in order.
                    pipeline.enqueue(pipeline.record(self.caller, mux.level(), line));
                    true
                }
                None => false,
            }
        };
        drop(mux);
        pipeline.muxes().release(self.caller);
        if committed {
            self.logger.worker.wake_up();
        }
        self
    }

    pub fn level(&self, level: LogLevel) -> &Self {
        let pipeline = &self.logger.pipeline;
        let mux = pipeline.muxes().get(self.caller);
        let committed = {
            let mut mux = mux.lock();
            let previous = mux.level();
            mux.set_level(level);
            match mux.take_line() {
                Some(line) => {
                    pipeline.enqueue(pipeline.record(self.caller, previous, line));
                    true
                }
                None => false,
            }
        };
        if committed {
            self.logger.worker.wake_up();
        }
        self
    }

    pub fn verbose(&self) -> &Self {
        self.level(LogLevel::Verbose)
    }

    pub fn debug(&self) -> &Self {
        self.level(LogLevel::Debug)
    }

    pub fn info(&self) -> &Self {
        self.level(LogLevel::Info)
    }

    pub fn warn(&self) -> &Self {
        self.level(LogLevel::Warn)
    }

    pub fn error(&self) -> &Self {
        self.level(LogLevel::Error)
    }

    pub fn fatal(&self) -> &Self {
        self.level(LogLevel::Fatal)
    }

    pub fn highlight(&self) -> &Self {
        self.level(LogLevel::Highlight)
    }

    pub fn reset(&self) -> &Self {
        let muxes = self.logger.pipeline.muxes();
        muxes.get(self.caller).lock().clear();
        muxes.release(self.caller);
        self
    }

    pub fn command(&self, command: Command) -> &Self {
        match command {
            Command::Endl => self.commit(),
            Command::Reset => self.reset(),
            Command::Start => {
                self.logger.start();
                self
            }
            Command::Close => {
                self.logger.close();
                self
            }
        }
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
