// libftm/src/scheduler/manual.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use super::{RepeatingTask, Scheduler, TaskHandle};
use crate::{Error, Result};

struct ScheduledTask {
    cancelled: Arc<AtomicBool>,
    task: Arc<Mutex<RepeatingTask>>,
}

#[derive(Default)]
struct ManualState {
    tasks: Vec<ScheduledTask>,
    scheduled_total: usize,
    last_timing: Option<(Duration, Duration)>,
    refuse_next: bool,
}

/// Deterministic scheduler for tests: tasks only run when `tick` is called.
/// Clones share the same task list.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run every live task once. Tasks scheduled while ticking first run on
    /// the next tick. Returns the number of tasks that ran.
    pub fn tick(&self) -> usize {
        let due: Vec<_> = {
            let mut st = self.state();
            st.tasks.retain(|t| !t.cancelled.load(Ordering::SeqCst));
            st.tasks
                .iter()
                .map(|t| (t.cancelled.clone(), t.task.clone()))
                .collect()
        };

        let mut ran = 0;
        for (cancelled, task) in due {
            if cancelled.load(Ordering::SeqCst) {
                continue;
            }
            let mut body = task.lock().unwrap_or_else(|e| e.into_inner());
            (*body)();
            ran += 1;
        }
        ran
    }

    /// Tick `n` times, returning the total number of task runs.
    pub fn tick_n(&self, n: usize) -> usize {
        (0..n).map(|_| self.tick()).sum()
    }

    /// Number of scheduled tasks that have not been cancelled.
    pub fn active_tasks(&self) -> usize {
        self.state()
            .tasks
            .iter()
            .filter(|t| !t.cancelled.load(Ordering::SeqCst))
            .count()
    }

    /// Number of `schedule_repeating` calls so far.
    pub fn scheduled_total(&self) -> usize {
        self.state().scheduled_total
    }

    /// Make the next `schedule_repeating` call fail, as a thread or runtime
    /// that cannot start a timer would.
    pub fn refuse_next_schedule(&self) {
        self.state().refuse_next = true;
    }

    /// `(initial_delay, period)` of the most recent schedule call.
    pub fn last_timing(&self) -> Option<(Duration, Duration)> {
        self.state().last_timing
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(
        &self,
        initial_delay: Duration,
        period: Duration,
        task: RepeatingTask,
    ) -> Result<TaskHandle> {
        let mut st = self.state();
        if std::mem::take(&mut st.refuse_next) {
            return Err(Error::Scheduler("timer refused".into()));
        }
        let cancelled = Arc::new(AtomicBool::new(false));
        st.tasks.push(ScheduledTask {
            cancelled: cancelled.clone(),
            task: Arc::new(Mutex::new(task)),
        });
        st.scheduled_total += 1;
        st.last_timing = Some((initial_delay, period));
        Ok(TaskHandle::new(cancelled))
    }
}
