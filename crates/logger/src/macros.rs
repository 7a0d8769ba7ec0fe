// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-line logging macros.
//!
//! ```ignore
//! log_warn!(logger, "queue depth", depth, "over", limit);
//! log_info!(twine_logger::global(), "ready");
//! ```
//!
//! Each expands to a level switch, one append per value and a commit.
//! Works with a [`crate::Logger`] as well as a [`crate::LogStream`].

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($level:expr, $logger:expr, $($value:expr),+ $(,)?) => {{
        let logger = &$logger;
        logger.level($level);
        $( logger.append($value); )+
        logger.commit();
    }};
}

#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::__log_at!($crate::LogLevel::Verbose, $logger, $($value),+)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::__log_at!($crate::LogLevel::Debug, $logger, $($value),+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::__log_at!($crate::LogLevel::Info, $logger, $($value),+)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::__log_at!($crate::LogLevel::Warn, $logger, $($value),+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::__log_at!($crate::LogLevel::Error, $logger, $($value),+)
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::__log_at!($crate::LogLevel::Fatal, $logger, $($value),+)
    };
}

#[macro_export]
macro_rules! log_highlight {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::__log_at!($crate::LogLevel::Highlight, $logger, $($value),+)
    };
}
