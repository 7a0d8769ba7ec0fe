// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Background worker lifecycle engine.
//!
//! A [`Worker`] owns one background thread and drives it through
//! `Stopped → Starting → Started ⇄ Paused → Stopping → Stopped`.
//! What the thread actually does is supplied through [`WorkerHooks`].

mod config;
mod hooks;
mod signal;
mod state;
mod worker;

pub use config::{
    StartStopMode, WorkerConfig, DEFAULT_START_STOP_TIMEOUT, DEFAULT_TIMEOUT, PAUSED_TIMEOUT,
    SYNC_POLL_INTERVAL,
};
pub use hooks::{HookError, WorkerHooks};
pub use state::WorkerState;
pub use worker::Worker;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{HookCall, RecordingHooks};
