#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libftm::prelude::*;

#[test]
fn reply_in_mailbox_is_read_once() {
    common::init_logger();
    let (engine, sched, rec, tag) = common::polling_engine(fixtures::HELLO).unwrap();
    common::seed_mailbox_message(&tag, fixtures::REPLY);

    assert_eq!(sched.tick(), 1);

    assert_eq!(
        rec.events(),
        vec![Event::OperationSucceeded(format!(
            "Message read from tag: {}",
            fixtures::REPLY
        ))]
    );
    let sent = tag.sent();
    assert_eq!(
        &sent[sent.len() - 3..],
        &[
            fixtures::status_request(),
            fixtures::length_request(),
            fixtures::message_request(fixtures::REPLY.len() as u8),
        ]
    );
    // polling resumed on a fresh task
    assert!(engine.is_polling());
    assert_eq!(sched.active_tasks(), 1);
    assert_eq!(sched.scheduled_total(), 2);
}

#[test]
fn flag_clear_means_no_mailbox_read() {
    let (engine, sched, rec, tag) = common::polling_engine(fixtures::HELLO).unwrap();
    for _ in 0..3 {
        tag.push_response(common::status_response(MailboxControl::MB_EN));
    }

    assert_eq!(sched.tick_n(3), 3);

    assert!(rec.events().is_empty());
    assert!(engine.is_polling());
    // write + three status reads
    assert_eq!(tag.transceive_count(), 4);
    assert!(
        tag.sent()[1..]
            .iter()
            .all(|req| *req == fixtures::status_request())
    );
}

#[test]
fn empty_mailbox_is_silent() {
    let (engine, sched, rec, tag) = common::polling_engine(fixtures::HELLO).unwrap();
    tag.push_response(common::host_put_msg_response());
    tag.push_response(common::length_response(0));

    sched.tick();

    assert!(rec.events().is_empty());
    assert!(engine.is_polling());
    assert_eq!(tag.transceive_count(), 3);
}

#[test]
fn status_error_flag_stops_polling() {
    let (engine, sched, rec, tag) = common::polling_engine(fixtures::HELLO).unwrap();
    tag.push_response(vec![0x01, 0x0F]);

    sched.tick();

    assert_eq!(
        rec.events(),
        vec![Event::OperationFailed(
            "polling mailbox status failed: tag error: code=0x0f".into()
        )]
    );
    assert!(!engine.is_polling());
    assert!(!engine.has_tag());
    assert_eq!(tag.close_calls(), 1);
}

#[test]
fn mailbox_read_failure_names_the_stage() {
    let (engine, sched, rec, tag) = common::polling_engine(fixtures::HELLO).unwrap();
    tag.push_response(common::host_put_msg_response());
    tag.push_error(LinkError::Other("timeout".into()));

    sched.tick();

    assert_eq!(
        rec.events(),
        vec![Event::OperationFailed(
            "reading mailbox failed: timeout".into()
        )]
    );
    assert!(!engine.is_polling());
    assert_eq!(sched.active_tasks(), 0);
}

#[test]
fn tag_lost_while_polling_disconnects() {
    let (engine, sched, rec, tag) = common::polling_engine(fixtures::HELLO).unwrap();
    tag.push_error(LinkError::TagLost);

    sched.tick();

    assert_eq!(rec.events(), vec![Event::Disconnected]);
    assert!(!engine.is_polling());
    assert!(!engine.has_tag());
    assert!(!engine.is_connected());
}

#[test]
fn closed_link_ends_polling_quietly() {
    let (engine, sched, rec, tag) = common::polling_engine(fixtures::HELLO).unwrap();
    tag.set_connected(false);

    sched.tick();

    assert!(rec.events().is_empty());
    assert!(!engine.is_polling());
    assert!(!engine.has_tag());
    assert_eq!(tag.close_calls(), 1);
    assert_eq!(tag.transceive_count(), 1);
}

#[test]
fn stopped_polling_never_ticks() {
    let (engine, sched, _rec, tag) = common::polling_engine(fixtures::HELLO).unwrap();

    engine.stop_polling();
    engine.stop_polling();

    assert_eq!(sched.tick(), 0);
    assert_eq!(tag.transceive_count(), 1);
    assert!(engine.has_tag());
}

#[test]
fn start_polling_is_idempotent() {
    let (engine, sched, _rec, _tag) = common::polling_engine(fixtures::HELLO).unwrap();

    engine.start_polling().unwrap();
    engine.start_polling().unwrap();

    assert_eq!(sched.scheduled_total(), 1);
    assert_eq!(sched.active_tasks(), 1);
}

#[test]
fn start_polling_without_tag_fails() {
    let (engine, sched, _rec) = common::manual_engine().unwrap();

    assert!(matches!(engine.start_polling(), Err(Error::NoTag)));
    assert_eq!(sched.scheduled_total(), 0);
}

#[test]
fn rearm_failure_after_reply_is_reported() {
    let (engine, sched, rec, tag) = common::polling_engine(fixtures::HELLO).unwrap();
    common::seed_mailbox_message(&tag, fixtures::REPLY);
    sched.refuse_next_schedule();

    sched.tick();

    let events = rec.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], Event::OperationSucceeded(m) if m.ends_with(fixtures::REPLY)));
    assert!(
        matches!(&events[1], Event::OperationFailed(m) if m.starts_with("could not start mailbox polling"))
    );
    assert!(!engine.is_polling());
    assert_eq!(sched.active_tasks(), 0);
}
