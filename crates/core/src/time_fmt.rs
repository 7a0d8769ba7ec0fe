// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable local timestamps.

use crate::clock::{Clock, SystemClock};

/// Layout of a formatted timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeStyle {
    /// `YYYYMMDDHHMMSS`, suitable for file names.
    Numeric,
    /// `YYYY/MM/DD HH:MM:SS`
    #[default]
    Punctuated,
}

impl TimeStyle {
    fn pattern(self) -> &'static str {
        match self {
            TimeStyle::Numeric => "%Y%m%d%H%M%S",
            TimeStyle::Punctuated => "%Y/%m/%d %H:%M:%S",
        }
    }
}

/// Format the clock's current local time.
pub fn format_local(clock: &dyn Clock, style: TimeStyle) -> String {
    clock.now_local().format(style.pattern()).to_string()
}

/// Format the real local time.
pub fn local_now(style: TimeStyle) -> String {
    format_local(&SystemClock, style)
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
