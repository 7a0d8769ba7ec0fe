// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording hooks for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use std::collections::HashSet;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::hooks::{HookError, WorkerHooks};

/// A hook invocation observed by [`RecordingHooks`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookCall {
    PrepareToStart,
    PrepareToStop,
    BeforeWork,
    WorkerJob,
    AfterWork,
    StopAfterWakeUp,
}

#[derive(Default)]
struct RecordingState {
    calls: Vec<HookCall>,
    failing: HashSet<HookCall>,
    panicking: HashSet<HookCall>,
    /// Job returns `Break` once this many jobs have run.
    finish_after: Option<usize>,
    job_delay: Duration,
    stop_delay: Duration,
    stop_fast: bool,
}

/// Hooks that record every call and fail on demand
#[derive(Clone, Default)]
pub struct RecordingHooks {
    inner: Arc<Mutex<RecordingState>>,
}

impl RecordingHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, in order
    pub fn calls(&self) -> Vec<HookCall> {
        self.inner.lock().calls.clone()
    }

    pub fn count(&self, call: HookCall) -> usize {
        self.inner.lock().calls.iter().filter(|c| **c == call).count()
    }

    /// Make `call` return an error until [`RecordingHooks::clear_failures`]
    pub fn fail(&self, call: HookCall) {
        self.inner.lock().failing.insert(call);
    }

    /// Make `call` panic until [`RecordingHooks::clear_failures`]
    pub fn panic_in(&self, call: HookCall) {
        self.inner.lock().panicking.insert(call);
    }

    pub fn clear_failures(&self) {
        let mut state = self.inner.lock();
        state.failing.clear();
        state.panicking.clear();
    }

    pub fn set_stop_fast(&self, stop_fast: bool) {
        self.inner.lock().stop_fast = stop_fast;
    }

    pub fn set_job_delay(&self, delay: Duration) {
        self.inner.lock().job_delay = delay;
    }

    /// Make `prepare_to_stop` sleep before returning
    pub fn set_stop_delay(&self, delay: Duration) {
        self.inner.lock().stop_delay = delay;
    }

    pub fn finish_after(&self, jobs: usize) {
        self.inner.lock().finish_after = Some(jobs);
    }

    #[allow(clippy::panic)]
    fn record(&self, call: HookCall) -> Result<(), HookError> {
        let mut state = self.inner.lock();
        state.calls.push(call);
        if state.panicking.contains(&call) {
            drop(state);
            panic!("{call:?} panicked");
        }
        if state.failing.contains(&call) {
            return Err(HookError::failed(format!("{call:?} failed")));
        }
        Ok(())
    }
}

impl WorkerHooks for RecordingHooks {
    fn prepare_to_start(&self) -> Result<(), HookError> {
        self.record(HookCall::PrepareToStart)
    }

    fn prepare_to_stop(&self) -> Result<(), HookError> {
        let delay = self.inner.lock().stop_delay;
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        self.record(HookCall::PrepareToStop)
    }

    fn before_work(&self) -> Result<(), HookError> {
        self.record(HookCall::BeforeWork)
    }

    fn worker_job(&self) -> Result<ControlFlow<()>, HookError> {
        self.record(HookCall::WorkerJob)?;
        let (delay, finished) = {
            let state = self.inner.lock();
            let jobs = state
                .calls
                .iter()
                .filter(|c| **c == HookCall::WorkerJob)
                .count();
            let finished = state.finish_after.is_some_and(|limit| jobs >= limit);
            (state.job_delay, finished)
        };
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        if finished {
            return Ok(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(()))
    }

    fn after_work(&self) -> Result<(), HookError> {
        self.record(HookCall::AfterWork)
    }

    fn stop_after_wake_up_if_stopped(&self) -> bool {
        let mut state = self.inner.lock();
        state.calls.push(HookCall::StopAfterWakeUp);
        state.stop_fast
    }
}
