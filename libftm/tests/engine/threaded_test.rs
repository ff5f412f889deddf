#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use common::fixtures;
use libftm::prelude::*;
use serial_test::serial;

/// Wait for the first event matching `pred`, skipping others.
fn wait_for(
    rx: &mpsc::Receiver<Event>,
    pred: impl Fn(&Event) -> bool,
) -> anyhow::Result<Event> {
    loop {
        let event = rx.recv_timeout(Duration::from_secs(2))?;
        if pred(&event) {
            return Ok(event);
        }
    }
}

#[test]
#[serial]
fn thread_scheduler_delivers_mailbox_reply() -> anyhow::Result<()> {
    common::init_logger();
    let (tx, rx) = mpsc::channel();
    let engine: Engine<MockTransceiver> = EngineBuilder::new()
        .with_initial_delay(ms(5))
        .with_poll_interval(ms(10))
        .with_shared_listener(Arc::new(tx))
        .build()?;

    let tag = MockTransceiver::new();
    tag.push_response(fixtures::write_ack());
    tag.push_response(common::status_response(MailboxControl::MB_EN));
    common::seed_mailbox_message(&tag, fixtures::REPLY);

    engine.write(fixtures::HELLO, Some(tag.clone()))?;

    let event = wait_for(&rx, |e| {
        matches!(e, Event::OperationSucceeded(m) if m.starts_with("Message read"))
    })?;
    assert_eq!(
        event,
        Event::OperationSucceeded(format!("Message read from tag: {}", fixtures::REPLY))
    );

    engine.shutdown();
    assert!(!engine.is_polling());
    assert!(tag.close_calls() >= 1);
    Ok(())
}

#[test]
#[serial]
fn shutdown_stops_thread_ticks() -> anyhow::Result<()> {
    let engine: Engine<MockTransceiver> = EngineBuilder::new()
        .with_initial_delay(ms(5))
        .with_poll_interval(ms(5))
        .build()?;
    let tag = MockTransceiver::new();
    tag.push_response(fixtures::write_ack());
    for _ in 0..1000 {
        tag.push_response(common::status_response(MailboxControl::MB_EN));
    }

    engine.write(fixtures::HELLO, Some(tag.clone()))?;
    std::thread::sleep(ms(30));
    engine.shutdown();
    let after_shutdown = tag.transceive_count();
    std::thread::sleep(ms(30));

    assert_eq!(tag.transceive_count(), after_shutdown);
    Ok(())
}
