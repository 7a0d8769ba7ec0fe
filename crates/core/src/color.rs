// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI colorization of plain strings.

use std::io::IsTerminal;

pub mod codes {
    /// Closes any color opened by [`super::Color::start`]
    pub const RESET: &str = "\x1b[0m";

    /// Pre-formatted ANSI escape sequences for use in tests
    #[cfg(test)]
    pub const RED_START: &str = "\x1b[0;31m";
    #[cfg(test)]
    pub const BOLD_CYAN_START: &str = "\x1b[1;36m";
}

/// Colors understood by [`colorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Violet,
    Cyan,
    White,
    BoldRed,
    BoldGreen,
    BoldYellow,
    BoldBlue,
    BoldViolet,
    BoldCyan,
    BoldWhite,
}

impl Color {
    /// Escape sequence that opens this color.
    pub fn start(self) -> &'static str {
        match self {
            Color::Red => "\x1b[0;31m",
            Color::Green => "\x1b[0;32m",
            Color::Yellow => "\x1b[0;33m",
            Color::Blue => "\x1b[0;34m",
            Color::Violet => "\x1b[0;35m",
            Color::Cyan => "\x1b[0;36m",
            Color::White => "\x1b[0;37m",
            Color::BoldRed => "\x1b[1;31m",
            Color::BoldGreen => "\x1b[1;32m",
            Color::BoldYellow => "\x1b[1;33m",
            Color::BoldBlue => "\x1b[1;34m",
            Color::BoldViolet => "\x1b[1;35m",
            Color::BoldCyan => "\x1b[1;36m",
            Color::BoldWhite => "\x1b[1;37m",
        }
    }

    /// Look up a color by name (`"red"`, `"bold-cyan"`, `"bold_cyan"`...).
    ///
    /// Matching is case-insensitive. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase().replace('_', "-");
        let color = match lower.as_str() {
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "violet" | "magenta" => Color::Violet,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bold-red" => Color::BoldRed,
            "bold-green" => Color::BoldGreen,
            "bold-yellow" => Color::BoldYellow,
            "bold-blue" => Color::BoldBlue,
            "bold-violet" | "bold-magenta" => Color::BoldViolet,
            "bold-cyan" => Color::BoldCyan,
            "bold-white" => Color::BoldWhite,
            _ => return None,
        };
        Some(color)
    }
}

/// Wrap `text` in the escape sequence for `color`, closed by a reset.
pub fn colorize(text: &str, color: Color) -> String {
    format!("{}{}{}", color.start(), text, codes::RESET)
}

/// Like [`colorize`], but takes a color name. Unknown names return the text unchanged.
pub fn colorize_named(text: &str, name: &str) -> String {
    match Color::from_name(name) {
        Some(color) => colorize(text, color),
        None => text.to_string(),
    }
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
