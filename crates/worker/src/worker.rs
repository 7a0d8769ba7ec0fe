// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The worker lifecycle state machine.

use std::any::Any;
use std::ops::ControlFlow;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::{debug, info, trace, warn};

use crate::config::{StartStopMode, WorkerConfig, PAUSED_TIMEOUT, SYNC_POLL_INTERVAL};
use crate::hooks::{HookError, WorkerHooks};
use crate::signal::Signal;
use crate::state::WorkerState;

#[derive(Debug, Clone, Copy)]
struct Timing {
    current: Duration,
    /// Value to restore on resume while paused.
    backup: Duration,
}

#[derive(Debug, Clone, Copy)]
struct Settings {
    mode: StartStopMode,
    start_stop_timeout: Duration,
}

struct Shared<H> {
    name: String,
    hooks: Arc<H>,
    state: Mutex<WorkerState>,
    timing: Mutex<Timing>,
    settings: Mutex<Settings>,
    signal: Signal,
}

/// A controllable unit of background work running on its own thread.
///
/// `start`, `stop`, `pause` and `resume` never fail: calls made from a
/// state where they make no sense are reported through `tracing` and
/// otherwise ignored. Hook failures are reported the same way.
///
/// Dropping a running worker requests a cooperative stop without waiting
/// for it; call [`Worker::stop`] in [`StartStopMode::Sync`] to wait.
pub struct Worker<H: WorkerHooks> {
    shared: Arc<Shared<H>>,
}

impl<H: WorkerHooks> Worker<H> {
    pub fn new(name: impl Into<String>, hooks: Arc<H>) -> Self {
        Self::with_config(WorkerConfig::new(name), hooks)
    }

    pub fn with_config(config: WorkerConfig, hooks: Arc<H>) -> Self {
        Self {
            shared: Arc::new(Shared {
                name: config.name,
                hooks,
                state: Mutex::new(WorkerState::Stopped),
                timing: Mutex::new(Timing {
                    current: config.timeout,
                    backup: config.timeout,
                }),
                settings: Mutex::new(Settings {
                    mode: config.mode,
                    start_stop_timeout: config.start_stop_timeout,
                }),
                signal: Signal::default(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    pub fn hooks(&self) -> &Arc<H> {
        &self.shared.hooks
    }

    pub fn state(&self) -> WorkerState {
        self.shared.state()
    }

    pub fn is_stopped(&self) -> bool {
        self.state() == WorkerState::Stopped
    }

    pub fn is_stopping(&self) -> bool {
        self.state() == WorkerState::Stopping
    }

    pub fn is_started(&self) -> bool {
        self.state() == WorkerState::Started
    }

    pub fn is_starting(&self) -> bool {
        self.state() == WorkerState::Starting
    }

    pub fn is_paused(&self) -> bool {
        self.state() == WorkerState::Paused
    }

    /// Wake-up interval currently in effect ([`PAUSED_TIMEOUT`] while paused).
    pub fn timeout(&self) -> Duration {
        self.shared.timing.lock().current
    }

    /// Change the wake-up interval.
    ///
    /// While paused the new value is stored for `resume`. The running loop
    /// picks it up at its next wait.
    pub fn set_timeout(&self, timeout: Duration) {
        let state = self.shared.state.lock();
        let mut timing = self.shared.timing.lock();
        if *state == WorkerState::Paused {
            timing.backup = timeout;
        } else {
            timing.current = timeout;
            timing.backup = timeout;
        }
    }

    pub fn start_stop_mode(&self) -> StartStopMode {
        self.shared.settings.lock().mode
    }

    pub fn set_start_stop_mode(&self, mode: StartStopMode) {
        self.shared.settings.lock().mode = mode;
    }

    pub fn start_stop_timeout(&self) -> Duration {
        self.shared.settings.lock().start_stop_timeout
    }

    pub fn set_start_stop_timeout(&self, timeout: Duration) {
        self.shared.settings.lock().start_stop_timeout = timeout;
    }

    /// Wake the worker thread so it runs its job now.
    pub fn wake_up(&self) {
        self.shared.signal.wake();
    }

    /// Start the worker. Only valid from `Stopped`.
    pub fn start(&self) {
        let shared = &self.shared;
        {
            let mut state = shared.state.lock();
            if *state != WorkerState::Stopped {
                warn!(worker = %shared.name, state = %*state, "start ignored");
                return;
            }
            *state = WorkerState::Starting;
        }
        // Wakes sent while stopped stay latched so the first wait returns at once.
        shared.signal.clear_stop();

        match self.start_stop_mode() {
            StartStopMode::Async => {
                let starting = Arc::clone(shared);
                let spawned = thread::Builder::new()
                    .name(format!("{}-start", shared.thread_name()))
                    .spawn(move || starting.run_starting());
                if let Err(e) = spawned {
                    warn!(worker = %shared.name, error = %e, "failed to spawn starting thread");
                    shared.set_state(WorkerState::Stopped);
                }
            }
            StartStopMode::Sync => {
                shared.run_starting();
                self.await_transition("start", |s| s != WorkerState::Starting);
            }
        }
    }

    /// Stop the worker. Valid from `Started` or `Paused`.
    ///
    /// The loop wakes, runs its job once more unless
    /// [`WorkerHooks::stop_after_wake_up_if_stopped`] says otherwise, then exits.
    pub fn stop(&self) {
        let shared = &self.shared;
        let previous = {
            let mut state = shared.state.lock();
            if !state.is_running() {
                warn!(worker = %shared.name, state = %*state, "stop ignored");
                return;
            }
            std::mem::replace(&mut *state, WorkerState::Stopping)
        };

        match self.start_stop_mode() {
            StartStopMode::Async => {
                let stopping = Arc::clone(shared);
                let spawned = thread::Builder::new()
                    .name(format!("{}-stop", shared.thread_name()))
                    .spawn(move || stopping.run_stopping(previous));
                if let Err(e) = spawned {
                    warn!(worker = %shared.name, error = %e, "failed to spawn stopping thread");
                    shared.revert_stopping(previous);
                }
            }
            StartStopMode::Sync => {
                shared.run_stopping(previous);
                self.await_transition("stop", |s| s != WorkerState::Stopping);
            }
        }
    }

    /// Suspend timed wake-ups. Only valid from `Started`.
    pub fn pause(&self) {
        let shared = &self.shared;
        {
            let mut state = shared.state.lock();
            if *state != WorkerState::Started {
                warn!(worker = %shared.name, state = %*state, "pause ignored");
                return;
            }
            {
                let mut timing = shared.timing.lock();
                timing.backup = timing.current;
                timing.current = PAUSED_TIMEOUT;
            }
            *state = WorkerState::Paused;
        }
        debug!(worker = %shared.name, "paused");
        shared.signal.wake();
    }

    /// Restore the timeout saved by `pause`. Only valid from `Paused`.
    pub fn resume(&self) {
        let shared = &self.shared;
        {
            let mut state = shared.state.lock();
            if *state != WorkerState::Paused {
                warn!(worker = %shared.name, state = %*state, "resume ignored");
                return;
            }
            shared.restore_timeout();
            *state = WorkerState::Started;
        }
        debug!(worker = %shared.name, "resumed");
        shared.signal.wake();
    }

    fn await_transition(&self, action: &str, settled: impl Fn(WorkerState) -> bool) {
        let limit = self.start_stop_timeout();
        let began = Instant::now();
        loop {
            if settled(self.state()) {
                return;
            }
            let waited = began.elapsed();
            if waited > limit {
                warn!(
                    worker = %self.shared.name,
                    action,
                    waited_ms = waited.as_millis() as u64,
                    "transition did not settle in time"
                );
                return;
            }
            thread::sleep(SYNC_POLL_INTERVAL);
        }
    }
}

impl<H: WorkerHooks> Drop for Worker<H> {
    fn drop(&mut self) {
        if !self.is_stopped() {
            debug!(worker = %self.shared.name, "dropped while running, requesting stop");
            self.shared.signal.request_stop();
        }
    }
}

impl<H: WorkerHooks> Shared<H> {
    fn state(&self) -> WorkerState {
        *self.state.lock()
    }

    fn set_state(&self, state: WorkerState) {
        *self.state.lock() = state;
    }

    fn timeout(&self) -> Duration {
        self.timing.lock().current
    }

    fn restore_timeout(&self) {
        let mut timing = self.timing.lock();
        timing.current = timing.backup;
    }

    fn thread_name(&self) -> String {
        self.name.replace('\0', "")
    }

    fn revert_stopping(&self, previous: WorkerState) {
        let mut state = self.state.lock();
        if *state == WorkerState::Stopping {
            *state = previous;
        }
    }

    fn run_starting(self: &Arc<Self>) {
        if let Err(e) = guarded(|| self.hooks.prepare_to_start()) {
            warn!(worker = %self.name, error = %e, "failed to prepare to start");
            self.set_state(WorkerState::Stopped);
            return;
        }

        debug!(worker = %self.name, "starting");
        let working = Arc::clone(self);
        let spawned = thread::Builder::new()
            .name(self.thread_name())
            .spawn(move || working.run_worker());
        if let Err(e) = spawned {
            warn!(worker = %self.name, error = %e, "failed to spawn worker thread");
            self.set_state(WorkerState::Stopped);
        }
    }

    fn run_stopping(&self, previous: WorkerState) {
        if let Err(e) = guarded(|| self.hooks.prepare_to_stop()) {
            warn!(worker = %self.name, error = %e, "failed to prepare to stop");
            self.revert_stopping(previous);
            return;
        }

        // The loop may have ended on its own, and even been restarted,
        // while the hook ran.
        let state = self.state.lock();
        if *state != WorkerState::Stopping {
            debug!(worker = %self.name, state = %*state, "already left stopping");
            return;
        }
        debug!(worker = %self.name, "stopping");
        self.signal.request_stop();
    }

    fn run_worker(&self) {
        {
            let mut state = self.state.lock();
            if *state == WorkerState::Starting {
                *state = WorkerState::Started;
            }
        }

        match guarded(|| self.hooks.before_work()) {
            Ok(()) => {
                info!(worker = %self.name, "started");
                self.work_loop();
            }
            Err(e) => warn!(worker = %self.name, error = %e, "failed to do before work"),
        }

        if let Err(e) = guarded(|| self.hooks.after_work()) {
            warn!(worker = %self.name, error = %e, "failed to do after work");
        }

        // Leave the engine ready for the next start whatever the hooks did.
        if self.timeout() == PAUSED_TIMEOUT {
            self.restore_timeout();
        }
        self.signal.reset();
        self.set_state(WorkerState::Stopped);
        info!(worker = %self.name, "stopped");
    }

    fn work_loop(&self) {
        loop {
            let wake = self.signal.wait(self.timeout());
            trace!(worker = %self.name, signalled = wake.signalled, "woke up");

            if wake.stop_requested {
                let leave = guarded(|| Ok(self.hooks.stop_after_wake_up_if_stopped()))
                    .unwrap_or_else(|e| {
                        warn!(
                            worker = %self.name,
                            error = %e,
                            "stop_after_wake_up_if_stopped failed"
                        );
                        true
                    });
                if leave {
                    debug!(worker = %self.name, "leaving without a final job");
                    break;
                }
            } else if self.state() == WorkerState::Paused {
                continue;
            }

            match guarded(|| self.hooks.worker_job()) {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => {
                    debug!(worker = %self.name, "worker job finished");
                    break;
                }
                Err(e) => {
                    warn!(worker = %self.name, error = %e, "worker job failed");
                    break;
                }
            }

            if wake.stop_requested {
                break;
            }
        }
    }
}

/// Run a hook, reporting a panic as a [`HookError`].
fn guarded<T>(hook: impl FnOnce() -> Result<T, HookError>) -> Result<T, HookError> {
    panic::catch_unwind(AssertUnwindSafe(hook))
        .unwrap_or_else(|payload| Err(HookError::Panicked(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
