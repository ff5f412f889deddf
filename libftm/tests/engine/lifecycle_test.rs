#[path = "../common/mod.rs"]
mod common;

use std::sync::{Arc, Mutex, OnceLock, Weak};

use common::fixtures;
use libftm::prelude::*;

#[test]
fn discovered_tag_is_ignored_while_connected() {
    let (engine, _sched, _rec, tag) = common::polling_engine(fixtures::HELLO).unwrap();
    let newcomer = MockTransceiver::new();

    assert!(!engine.on_tag_discovered(newcomer.clone()));

    assert_eq!(engine.with_tag(|held| held.same_tag(&tag)), Some(true));
    assert_eq!(newcomer.connect_calls(), 0);
}

#[test]
fn discovered_tag_replaces_idle_handle() {
    let (engine, _sched, _rec) = common::manual_engine().unwrap();
    let first = MockTransceiver::new();
    let second = MockTransceiver::new();

    assert!(engine.on_tag_discovered(first.clone()));
    assert!(engine.on_tag_discovered(second.clone()));

    assert_eq!(engine.with_tag(|held| held.same_tag(&second)), Some(true));
    // never connected, so never closed
    assert_eq!(first.close_calls(), 0);
}

#[test]
fn discovered_tag_is_used_by_next_write() {
    let (engine, _sched, rec) = common::manual_engine().unwrap();
    let tag = MockTransceiver::new();
    tag.push_response(fixtures::write_ack());

    engine.on_tag_discovered(tag.clone());
    engine.write(fixtures::HELLO, None).unwrap();

    assert_eq!(tag.sent(), vec![fixtures::hello_frame()]);
    assert_eq!(rec.count(|e| *e == Event::Connected), 1);
}

#[test]
fn shutdown_stops_polling_and_closes_tag() {
    let (engine, sched, rec, tag) = common::polling_engine(fixtures::HELLO).unwrap();

    engine.shutdown();

    assert!(!engine.is_polling());
    assert!(!engine.has_tag());
    assert_eq!(tag.close_calls(), 1);
    assert_eq!(sched.active_tasks(), 0);
    assert!(rec.events().is_empty());

    // a second shutdown has nothing left to do
    engine.shutdown();
    assert_eq!(tag.close_calls(), 1);
}

#[test]
fn shutdown_swallows_close_errors() {
    let (engine, _sched, rec, tag) = common::polling_engine(fixtures::HELLO).unwrap();
    tag.fail_close_with(LinkError::Other("busy".into()));

    engine.shutdown();

    assert!(!engine.has_tag());
    assert!(rec.events().is_empty());
}

#[test]
fn dropping_engine_cancels_poll_task() {
    let (engine, sched, _rec, tag) = common::polling_engine(fixtures::HELLO).unwrap();

    drop(engine);

    assert_eq!(sched.active_tasks(), 0);
    assert_eq!(sched.tick(), 0);
    assert_eq!(tag.close_calls(), 1);
}

#[test]
fn builder_timing_reaches_scheduler() {
    let sched = ManualScheduler::new();
    let engine: Engine<MockTransceiver> = EngineBuilder::new()
        .with_initial_delay(ms(10))
        .with_poll_interval(ms(20))
        .with_scheduler(sched.clone())
        .build()
        .unwrap();
    let tag = MockTransceiver::new();
    tag.push_response(fixtures::write_ack());

    engine.write(fixtures::HELLO, Some(tag)).unwrap();

    assert_eq!(sched.last_timing(), Some((ms(10), ms(20))));
    assert_eq!(engine.config().poll_interval(), ms(20));
}

#[test]
fn zero_poll_interval_is_rejected() {
    let result = EngineBuilder::new()
        .with_poll_interval(ms(0))
        .with_scheduler(ManualScheduler::new())
        .build::<MockTransceiver>();

    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

/// Listener that queries the engine from inside its callback.
#[derive(Default)]
struct Reentrant {
    engine: OnceLock<Weak<Engine<MockTransceiver>>>,
    observed: Mutex<Vec<bool>>,
}

impl Listener for Reentrant {
    fn on_operation_succeeded(&self, _message: &str) {
        if let Some(engine) = self.engine.get().and_then(Weak::upgrade) {
            self.observed.lock().unwrap().push(engine.is_polling());
        }
    }
}

#[test]
fn listener_may_call_back_into_engine() {
    let sched = ManualScheduler::new();
    let listener = Arc::new(Reentrant::default());
    let engine = Arc::new(
        EngineBuilder::new()
            .with_scheduler(sched.clone())
            .with_shared_listener(listener.clone())
            .build::<MockTransceiver>()
            .unwrap(),
    );
    listener.engine.set(Arc::downgrade(&engine)).unwrap();

    let tag = MockTransceiver::new();
    tag.push_response(fixtures::write_ack());
    common::seed_mailbox_message(&tag, fixtures::REPLY);

    assert!(engine.write_message(fixtures::HELLO, Some(tag)));
    sched.tick();

    assert_eq!(*listener.observed.lock().unwrap(), vec![true, true]);
}

#[test]
fn replaced_listener_receives_later_events() {
    let (engine, sched, first, tag) = common::polling_engine(fixtures::HELLO).unwrap();
    let second = EventRecorder::new();
    engine.set_listener(Arc::new(second.clone()));
    tag.push_error(LinkError::TagLost);

    sched.tick();

    assert!(first.events().is_empty());
    assert_eq!(second.events(), vec![Event::Disconnected]);
}
