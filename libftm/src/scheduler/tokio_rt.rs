// libftm/src/scheduler/tokio_rt.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::{Instant, interval_at};

use super::{RepeatingTask, Scheduler, TaskHandle};
use crate::Result;

/// Scheduler that drives recurring tasks from a tokio runtime. Task bodies
/// block on the tag link, so each run is moved onto the blocking pool.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Use the runtime of the calling task. Panics outside a runtime, like
    /// `Handle::current`.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_repeating(
        &self,
        initial_delay: Duration,
        period: Duration,
        task: RepeatingTask,
    ) -> Result<TaskHandle> {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();
        let task = Arc::new(Mutex::new(task));

        let join = self.handle.spawn(async move {
            let mut ticker = interval_at(Instant::now() + initial_delay, period);
            loop {
                ticker.tick().await;
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                let body = task.clone();
                let run = tokio::task::spawn_blocking(move || {
                    let mut body = body.lock().unwrap_or_else(|e| e.into_inner());
                    (*body)();
                })
                .await;
                if let Err(e) = run {
                    log::warn!("recurring task panicked: {}", e);
                    break;
                }
                if flag.load(Ordering::SeqCst) {
                    break;
                }
            }
        });

        Ok(TaskHandle::new(cancelled).with_on_cancel(move || join.abort()))
    }
}
