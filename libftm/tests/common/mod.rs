// Shared helpers for integration tests. Each test file includes this module
// via `#[path]`, so not every helper is used by every file.
#![allow(dead_code)]

pub mod fixtures;

pub use libftm::test_support::*;

/// Route library logs to the test harness. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
