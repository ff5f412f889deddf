//! Small helpers shared across libftm: hex rendering for logs and test
//! fixtures, and millisecond conversions for poll timing.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
