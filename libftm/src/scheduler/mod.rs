// libftm/src/scheduler/mod.rs

//! Recurring task scheduling for the mailbox poll loop.
//!
//! A `Scheduler` runs a task after an initial delay and then at a fixed
//! rate until the returned `TaskHandle` is cancelled or dropped.

pub mod manual;
pub mod thread;
#[cfg(feature = "async")]
pub mod tokio_rt;

pub use manual::ManualScheduler;
pub use thread::ThreadScheduler;
#[cfg(feature = "async")]
pub use tokio_rt::TokioScheduler;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::Result;

/// Body of a recurring task.
pub type RepeatingTask = Box<dyn FnMut() + Send + 'static>;

/// Scheduler trait abstracts timer plumbing away from the engine.
pub trait Scheduler: Send + Sync {
    /// Run `task` after `initial_delay`, then every `period`, until the
    /// returned handle is cancelled. Fails with `Error::Scheduler` when no
    /// timer could be started; nothing runs in that case.
    fn schedule_repeating(
        &self,
        initial_delay: Duration,
        period: Duration,
        task: RepeatingTask,
    ) -> Result<TaskHandle>;
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    fn schedule_repeating(
        &self,
        initial_delay: Duration,
        period: Duration,
        task: RepeatingTask,
    ) -> Result<TaskHandle> {
        (**self).schedule_repeating(initial_delay, period, task)
    }
}

/// Cancellation handle for one scheduled recurring task. Cancelling is
/// idempotent and safe from inside the task itself; dropping the handle
/// cancels the task.
pub struct TaskHandle {
    cancelled: Arc<AtomicBool>,
    on_cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TaskHandle {
    /// Wrap a flag the scheduler checks before every run.
    pub fn new(cancelled: Arc<AtomicBool>) -> Self {
        Self {
            cancelled,
            on_cancel: None,
        }
    }

    /// Attach a hook run once on the first cancel (wake a sleeping
    /// thread, abort a runtime task, ...).
    pub fn with_on_cancel(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_cancel = Some(Box::new(hook));
        self
    }

    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(hook) = self.on_cancel.take() {
            hook();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
