// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of values appended to a log line.

use std::fmt::Write;

/// A value that can be appended to a log line.
pub trait Loggable {
    /// Append this value's text to `out`.
    fn write_log(&self, out: &mut String);

    fn to_log_string(&self) -> String {
        let mut out = String::new();
        self.write_log(&mut out);
        out
    }
}

impl<T: Loggable + ?Sized> Loggable for &T {
    fn write_log(&self, out: &mut String) {
        (**self).write_log(out);
    }
}

impl Loggable for str {
    fn write_log(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Loggable for String {
    fn write_log(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Loggable for char {
    fn write_log(&self, out: &mut String) {
        out.push(*self);
    }
}

impl Loggable for bool {
    fn write_log(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

macro_rules! loggable_integer {
    ($($ty:ty),*) => {
        $(
            impl Loggable for $ty {
                fn write_log(&self, out: &mut String) {
                    let _ = write!(out, "{self}");
                }
            }
        )*
    };
}

loggable_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Fixed notation, six decimals.
macro_rules! loggable_float {
    ($($ty:ty),*) => {
        $(
            impl Loggable for $ty {
                fn write_log(&self, out: &mut String) {
                    let _ = write!(out, "{self:.6}");
                }
            }
        )*
    };
}

loggable_float!(f32, f64);

/// `None` renders as `NULL`.
impl<T: Loggable> Loggable for Option<T> {
    fn write_log(&self, out: &mut String) {
        match self {
            Some(value) => value.write_log(out),
            None => out.push_str("NULL"),
        }
    }
}

/// `[a, b, c]`, or `[Empty]` for an empty sequence.
impl<T: Loggable> Loggable for [T] {
    fn write_log(&self, out: &mut String) {
        if self.is_empty() {
            out.push_str("[Empty]");
            return;
        }
        out.push('[');
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            item.write_log(out);
        }
        out.push(']');
    }
}

impl<T: Loggable> Loggable for Vec<T> {
    fn write_log(&self, out: &mut String) {
        self.as_slice().write_log(out);
    }
}

impl<T: Loggable, const N: usize> Loggable for [T; N] {
    fn write_log(&self, out: &mut String) {
        self.as_slice().write_log(out);
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
