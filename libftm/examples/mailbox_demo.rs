// Mailbox round trip against a simulated tag.
//
// Writes a payload, lets the poll thread notice the reply the "reader"
// leaves in the mailbox, then shuts the session down. Run with
// `RUST_LOG=debug` to see the engine's state transitions.

use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use libftm::prelude::*;
use libftm::test_support::{seed_mailbox_message, status_response};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env().init();

    let (tx, rx) = mpsc::channel();
    let engine: Engine<MockTransceiver> = EngineBuilder::new()
        .with_initial_delay(ms(50))
        .with_poll_interval(ms(100))
        .with_shared_listener(Arc::new(tx))
        .build()?;

    let tag = MockTransceiver::new();
    // write acknowledgement, two idle polls, then a reply
    tag.push_response(vec![0x00]);
    tag.push_response(status_response(MailboxControl::MB_EN));
    tag.push_response(status_response(MailboxControl::MB_EN));
    seed_mailbox_message(&tag, "reader says hi");

    println!("Writing to tag...");
    engine.write("hello from the handset", Some(tag.clone()))?;

    while let Ok(event) = rx.recv_timeout(Duration::from_secs(2)) {
        println!("event: {}", event);
        if matches!(&event, Event::OperationSucceeded(m) if m.starts_with("Message read")) {
            break;
        }
    }

    engine.shutdown();
    println!(
        "Sent {} frames: {}",
        tag.transceive_count(),
        tag.sent()
            .iter()
            .map(|f| bytes_to_hex_spaced(f))
            .collect::<Vec<_>>()
            .join(" | ")
    );
    Ok(())
}
