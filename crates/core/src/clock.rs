// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock abstraction so timestamps can be pinned in tests.

use chrono::NaiveDateTime;

/// Source of the current local wall-clock time.
pub trait Clock: Send + Sync + 'static {
    fn now_local(&self) -> NaiveDateTime;
}

/// Reads the real local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_local(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::Clock;
    use chrono::{Duration, NaiveDateTime};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Manually driven clock for tests.
    #[derive(Clone)]
    pub struct FakeClock {
        now: Arc<Mutex<NaiveDateTime>>,
    }

    impl FakeClock {
        pub fn new(now: NaiveDateTime) -> Self {
            Self {
                now: Arc::new(Mutex::new(now)),
            }
        }

        pub fn set(&self, now: NaiveDateTime) {
            *self.now.lock() = now;
        }

        pub fn advance(&self, by: Duration) {
            let mut now = self.now.lock();
            *now += by;
        }
    }

    impl Clock for FakeClock {
        fn now_local(&self) -> NaiveDateTime {
            *self.now.lock()
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeClock;
