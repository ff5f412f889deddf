// libftm/src/engine/config.rs
//! Engine configuration

use std::time::Duration;

use crate::constants::{DEFAULT_POLL_INITIAL_DELAY_MS, DEFAULT_POLL_INTERVAL_MS};
use crate::utils::ms;
use crate::{Error, Result};

/// Timing of the mailbox poll loop. The defaults trade detection latency
/// against radio traffic on the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineConfig {
    /// Delay before the first status read after polling starts (ms)
    pub initial_delay_ms: u64,
    /// Period between status reads (ms)
    pub poll_interval_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: DEFAULT_POLL_INITIAL_DELAY_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl EngineConfig {
    pub fn initial_delay(&self) -> Duration {
        ms(self.initial_delay_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        ms(self.poll_interval_ms)
    }

    /// Reject settings no scheduler can honour.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(Error::InvalidConfig(
                "poll_interval_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
