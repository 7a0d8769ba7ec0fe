// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Override points of the worker lifecycle.

use std::ops::ControlFlow;

use thiserror::Error;

/// Failure reported by a hook.
///
/// Hook failures are never fatal: the engine reports them and either
/// aborts the pending transition or winds the worker down.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("{0}")]
    Failed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("panicked: {0}")]
    Panicked(String),
}

impl HookError {
    pub fn failed(message: impl Into<String>) -> Self {
        HookError::Failed(message.into())
    }
}

/// Customization points of a [`crate::Worker`].
///
/// Every method has a default, so implementors override only what they need.
/// Hooks run outside every engine lock.
pub trait WorkerHooks: Send + Sync + 'static {
    /// Runs before the worker thread is spawned. Failure aborts the start.
    fn prepare_to_start(&self) -> Result<(), HookError> {
        tracing::trace!("prepare_to_start not overridden");
        Ok(())
    }

    /// Runs before the loop is told to exit. Failure cancels the stop.
    fn prepare_to_stop(&self) -> Result<(), HookError> {
        tracing::trace!("prepare_to_stop not overridden");
        Ok(())
    }

    /// Runs once on the worker thread, after reaching `Started` and before
    /// the first wait. Failure skips the loop entirely.
    fn before_work(&self) -> Result<(), HookError> {
        tracing::trace!("before_work not overridden");
        Ok(())
    }

    /// Runs on every wake-up. `Break` or an error ends the loop.
    fn worker_job(&self) -> Result<ControlFlow<()>, HookError> {
        tracing::trace!("worker_job not overridden");
        Ok(ControlFlow::Continue(()))
    }

    /// Runs once after the loop exits. The worker reaches `Stopped`
    /// whatever this returns.
    fn after_work(&self) -> Result<(), HookError> {
        tracing::trace!("after_work not overridden");
        Ok(())
    }

    /// Evaluated on a wake-up that follows a stop request: `true` leaves
    /// the loop at once, `false` runs the job one final time first.
    fn stop_after_wake_up_if_stopped(&self) -> bool {
        false
    }
}
