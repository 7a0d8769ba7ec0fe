// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stable identity for a logical caller.
//!
//! Each OS thread gets a small numeric id the first time it asks for one.
//! Ids are never reused within a process, so a caller's identity stays
//! stable for the lifetime of its thread.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CALLER: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static CURRENT: CallerId = CallerId(NEXT_CALLER.fetch_add(1, Ordering::Relaxed));
}

/// Identifier of one logical caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallerId(u64);

impl CallerId {
    /// The id of the calling thread.
    pub fn current() -> Self {
        CURRENT.with(|id| *id)
    }

    /// An explicit id, for callers that are not tied to one thread.
    ///
    /// Explicit ids share the numeric space with thread ids; pick values
    /// well away from the thread counter (e.g. `u64::MAX - n`) to avoid
    /// sharing a buffer with a thread.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CallerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[path = "caller_tests.rs"]
mod tests;
