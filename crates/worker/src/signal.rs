// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timeout-or-signal wait primitive of the worker loop.

use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

#[derive(Debug, Default)]
struct Flags {
    /// Set by `wake`, consumed by `wait`.
    pending: bool,
    /// Sticky until `reset` or `clear_stop`.
    stop: bool,
}

/// What a [`Signal::wait`] returned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Wake {
    /// Woken explicitly rather than by the timeout.
    pub signalled: bool,
    pub stop_requested: bool,
}

/// A condition variable with a latched wake flag.
///
/// A wake delivered while nobody is waiting is kept until the next `wait`,
/// so signals sent while the worker is busy are never lost.
#[derive(Debug, Default)]
pub(crate) struct Signal {
    flags: Mutex<Flags>,
    condvar: Condvar,
}

impl Signal {
    pub fn wake(&self) {
        let mut flags = self.flags.lock();
        flags.pending = true;
        self.condvar.notify_one();
    }

    pub fn request_stop(&self) {
        let mut flags = self.flags.lock();
        flags.stop = true;
        flags.pending = true;
        self.condvar.notify_one();
    }

    /// Forget a stop request, keeping any latched wake.
    pub fn clear_stop(&self) {
        self.flags.lock().stop = false;
    }

    pub fn reset(&self) {
        *self.flags.lock() = Flags::default();
    }

    /// Block until woken or until `timeout` elapses.
    ///
    /// A timeout too large to represent as a deadline waits for a signal only.
    pub fn wait(&self, timeout: Duration) -> Wake {
        let mut flags = self.flags.lock();
        match Instant::now().checked_add(timeout) {
            Some(deadline) => {
                while !flags.pending {
                    if self.condvar.wait_until(&mut flags, deadline).timed_out() {
                        break;
                    }
                }
            }
            None => {
                while !flags.pending {
                    self.condvar.wait(&mut flags);
                }
            }
        }
        Wake {
            signalled: std::mem::take(&mut flags.pending),
            stop_requested: flags.stop,
        }
    }
}

#[cfg(test)]
#[path = "signal_tests.rs"]
mod tests;
