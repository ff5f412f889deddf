// libftm/src/lib.rs

//! libftm
//!
//! Pure Rust fast transfer mode (FTM) mailbox engine for ISO 15693 dynamic
//! tags. The engine writes a payload into the tag mailbox and then polls the
//! tag until an external reader leaves a reply.
#![warn(missing_docs)]

pub mod constants;
pub mod engine;
pub mod error;
pub mod listener;
pub mod prelude;
pub mod protocol;
pub mod scheduler;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
