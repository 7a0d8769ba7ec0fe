// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! twine-core: collaborators shared by the worker engine and the logger

pub mod caller;
pub mod clock;
pub mod color;
mod env;
pub mod time_fmt;

pub use caller::CallerId;
#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
pub use clock::{Clock, SystemClock};
pub use color::{colorize, colorize_named, should_colorize, Color};
pub use time_fmt::{format_local, local_now, TimeStyle};
