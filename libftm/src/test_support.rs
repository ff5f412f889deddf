//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockTransceiver / ManualScheduler setup so tests
//! across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::engine::{Engine, EngineBuilder};
use crate::listener::EventRecorder;
use crate::scheduler::ManualScheduler;
use crate::transport::MockTransceiver;
use crate::types::MailboxControl;
use crate::Result;

/// Successful response flags byte.
pub const OK_FLAGS: u8 = 0x00;

/// MB_CTRL_Dyn response with the given register value.
#[doc(hidden)]
pub fn status_response(bits: u8) -> Vec<u8> {
    vec![OK_FLAGS, bits]
}

/// MB_CTRL_Dyn response with HOST_PUT_MSG set (mailbox enabled).
#[doc(hidden)]
pub fn host_put_msg_response() -> Vec<u8> {
    status_response(MailboxControl::MB_EN | MailboxControl::HOST_PUT_MSG)
}

/// MB_LEN_Dyn response.
#[doc(hidden)]
pub fn length_response(len: u8) -> Vec<u8> {
    vec![OK_FLAGS, len]
}

/// ReadMsg response carrying `data`.
#[doc(hidden)]
pub fn message_response(data: &[u8]) -> Vec<u8> {
    let mut v = Vec::with_capacity(data.len() + 1);
    v.push(OK_FLAGS);
    v.extend_from_slice(data);
    v
}

/// Queue the three responses of one complete mailbox cycle: flag set,
/// length, message.
#[doc(hidden)]
pub fn seed_mailbox_message(mock: &MockTransceiver, text: &str) {
    let len = u8::try_from(text.len()).expect("mailbox fixture longer than 255 bytes");
    mock.push_response(host_put_msg_response());
    mock.push_response(length_response(len));
    mock.push_response(message_response(text.as_bytes()));
}

/// Engine on a ManualScheduler with an EventRecorder listener.
#[doc(hidden)]
pub fn manual_engine() -> Result<(Engine<MockTransceiver>, ManualScheduler, EventRecorder)> {
    let scheduler = ManualScheduler::new();
    let recorder = EventRecorder::new();
    let engine = EngineBuilder::new()
        .with_scheduler(scheduler.clone())
        .with_listener(recorder.clone())
        .build()?;
    Ok((engine, scheduler, recorder))
}

/// Convenience: a manual engine that has already written `payload` to a
/// fresh mock tag and is polling it. The recorder is cleared after the
/// write so tests only see poll events.
#[doc(hidden)]
pub fn polling_engine(
    payload: &str,
) -> Result<(Engine<MockTransceiver>, ManualScheduler, EventRecorder, MockTransceiver)> {
    let (engine, scheduler, recorder) = manual_engine()?;
    let tag = MockTransceiver::new();
    tag.push_response(vec![OK_FLAGS]);
    engine.write(payload, Some(tag.clone()))?;
    recorder.take();
    Ok((engine, scheduler, recorder, tag))
}
