// libftm/src/prelude.rs

pub use crate::engine::{Engine, EngineBuilder, EngineConfig};
pub use crate::listener::{Event, EventRecorder, Listener};
pub use crate::protocol::{Command, Frame, Response};
pub use crate::scheduler::{ManualScheduler, Scheduler, TaskHandle, ThreadScheduler};
pub use crate::transport::{MockTransceiver, Transceiver};
pub use crate::{Error, LinkError, MailboxControl, PollStage, ResponseFlags, Result};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex_spaced, ms, parse_hex};
