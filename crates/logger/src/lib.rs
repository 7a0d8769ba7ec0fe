// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! twine-logger: asynchronous, per-caller ordered logging.
//!
//! Lines are built per caller, committed into a FIFO queue and delivered
//! by a background [`twine_worker::Worker`] to a pluggable [`LogSink`].
//! The level threshold is applied when the queue is drained.

mod config;
mod env;
mod error;
mod global;
mod level;
mod logger;
mod macros;
mod mux;
mod pipeline;
mod record;
pub mod sink;
mod value;

pub use config::{LoggerConfig, DEFAULT_LOGGER_TIMEOUT};
pub use error::{ConfigError, LoggerError, SinkError};
pub use global::global;
pub use level::LogLevel;
pub use logger::{Command, LogStream, Logger, LoggerBuilder};
pub use pipeline::Connection;
pub use record::LogRecord;
pub use sink::{ConsoleSink, FileSink, LogEntry, LogSink};
pub use value::Loggable;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{CapturedEntry, MemorySink};
