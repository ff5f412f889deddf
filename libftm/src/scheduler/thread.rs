// libftm/src/scheduler/thread.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use super::{RepeatingTask, Scheduler, TaskHandle};
use crate::{Error, Result};

/// Scheduler backed by one OS thread per recurring task. The thread sleeps
/// on a channel so cancellation wakes it immediately instead of waiting
/// out the current period.
#[derive(Debug, Clone)]
pub struct ThreadScheduler {
    thread_name: String,
}

impl ThreadScheduler {
    pub fn new() -> Self {
        Self::with_thread_name("ftm-poll")
    }

    pub fn with_thread_name(name: impl Into<String>) -> Self {
        Self {
            thread_name: name.into(),
        }
    }
}

impl Default for ThreadScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule_repeating(
        &self,
        initial_delay: Duration,
        period: Duration,
        mut task: RepeatingTask,
    ) -> Result<TaskHandle> {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();
        let (wake_tx, wake_rx) = mpsc::channel::<()>();

        thread::Builder::new()
            .name(self.thread_name.clone())
            .spawn(move || {
                // Fixed-rate: each run is due one period after the previous
                // due time, not after the previous run finished.
                let mut due = Instant::now() + initial_delay;
                loop {
                    let wait = due.saturating_duration_since(Instant::now());
                    match wake_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {}
                        // Message or disconnected sender: cancelled.
                        _ => break,
                    }
                    if flag.load(Ordering::SeqCst) {
                        break;
                    }
                    task();
                    if flag.load(Ordering::SeqCst) {
                        break;
                    }
                    due += period;
                }
                log::trace!("recurring task stopped");
            })
            .map_err(|e| {
                log::error!("failed to spawn scheduler thread: {}", e);
                Error::Scheduler(e.to_string())
            })?;

        Ok(TaskHandle::new(cancelled).with_on_cancel(move || drop(wake_tx)))
    }
}
