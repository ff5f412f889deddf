// libftm/src/engine/builder.rs

use std::sync::Arc;
use std::time::Duration;

use crate::Result;
use crate::engine::{Engine, EngineConfig};
use crate::listener::Listener;
use crate::scheduler::{Scheduler, ThreadScheduler};
use crate::transport::Transceiver;

/// Helper to construct an Engine with optional configuration.
#[derive(Default)]
pub struct EngineBuilder {
    config: EngineConfig,
    listener: Option<Arc<dyn Listener>>,
    scheduler: Option<Arc<dyn Scheduler>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.config.initial_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval_ms = interval.as_millis() as u64;
        self
    }

    pub fn with_listener(mut self, listener: impl Listener + 'static) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    /// Share one listener between several engines.
    pub fn with_shared_listener(mut self, listener: Arc<dyn Listener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Provide the scheduler driving the poll loop (defaults to
    /// `ThreadScheduler`).
    pub fn with_scheduler(mut self, scheduler: impl Scheduler + 'static) -> Self {
        self.scheduler = Some(Arc::new(scheduler));
        self
    }

    /// Consume the builder and return an Engine.
    /// Fails with `InvalidConfig` when the timing cannot be scheduled.
    pub fn build<T: Transceiver + 'static>(self) -> Result<Engine<T>> {
        self.config.validate()?;
        let scheduler = self
            .scheduler
            .unwrap_or_else(|| Arc::new(ThreadScheduler::new()));
        Ok(Engine::from_parts(self.config, scheduler, self.listener))
    }
}
