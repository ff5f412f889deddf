// libftm/src/listener.rs

//! Notifications delivered to the application layer.
//!
//! The engine calls the listener from whatever thread it runs on (the
//! caller's thread for writes, the scheduler's thread for poll ticks). UI
//! thread marshaling is the consumer's job.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, MutexGuard};

use derive_more::Display;

/// One notification produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    #[display(fmt = "tag connected")]
    Connected,
    #[display(fmt = "tag disconnected")]
    Disconnected,
    #[display(fmt = "{}", _0)]
    OperationSucceeded(String),
    #[display(fmt = "{}", _0)]
    OperationFailed(String),
}

impl Event {
    /// Deliver this event to the matching listener callback.
    pub fn dispatch(&self, listener: &dyn Listener) {
        match self {
            Event::Connected => listener.on_connected(),
            Event::Disconnected => listener.on_disconnected(),
            Event::OperationSucceeded(msg) => listener.on_operation_succeeded(msg),
            Event::OperationFailed(msg) => listener.on_operation_failed(msg),
        }
    }
}

/// Callbacks exposed to the application. All methods default to no-ops.
pub trait Listener: Send + Sync {
    fn on_connected(&self) {}

    fn on_disconnected(&self) {}

    fn on_operation_failed(&self, _message: &str) {}

    fn on_operation_succeeded(&self, _message: &str) {}
}

/// Forward events into a channel; a closed receiver is ignored.
impl Listener for Sender<Event> {
    fn on_connected(&self) {
        let _ = self.send(Event::Connected);
    }

    fn on_disconnected(&self) {
        let _ = self.send(Event::Disconnected);
    }

    fn on_operation_failed(&self, message: &str) {
        let _ = self.send(Event::OperationFailed(message.to_string()));
    }

    fn on_operation_succeeded(&self, message: &str) {
        let _ = self.send(Event::OperationSucceeded(message.to_string()));
    }
}

/// Listener that stores every event it receives. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<Event>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, Vec<Event>> {
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, event: Event) {
        log::trace!("event: {}", event);
        self.entries().push(event);
    }

    /// Snapshot of all events so far.
    pub fn events(&self) -> Vec<Event> {
        self.entries().clone()
    }

    /// Remove and return all events so far.
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.entries())
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.entries().iter().filter(|e| pred(e)).count()
    }

    pub fn last(&self) -> Option<Event> {
        self.entries().last().cloned()
    }
}

impl Listener for EventRecorder {
    fn on_connected(&self) {
        self.record(Event::Connected);
    }

    fn on_disconnected(&self) {
        self.record(Event::Disconnected);
    }

    fn on_operation_failed(&self, message: &str) {
        self.record(Event::OperationFailed(message.to_string()));
    }

    fn on_operation_succeeded(&self, message: &str) {
        self.record(Event::OperationSucceeded(message.to_string()));
    }
}
