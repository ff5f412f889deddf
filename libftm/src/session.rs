// libftm/src/session.rs

//! Per-tag session state.
//!
//! `TagSession` owns the one live tag handle, the connected flag and the
//! poll task. Every mutation goes through a transition method; events those
//! transitions produce are queued in an outbox and handed to the listener
//! by the engine once the session lock is released.

use crate::listener::Event;
use crate::scheduler::TaskHandle;
use crate::transport::Transceiver;
use crate::{Error, Result};

struct PollTask {
    generation: u64,
    task: TaskHandle,
}

/// State for the tag currently in range.
pub struct TagSession<T> {
    handle: Option<T>,
    connected: bool,
    poll: Option<PollTask>,
    poll_generation: u64,
    outbox: Vec<Event>,
}

impl<T> Default for TagSession<T> {
    fn default() -> Self {
        Self {
            handle: None,
            connected: false,
            poll: None,
            poll_generation: 0,
            outbox: Vec::new(),
        }
    }
}

impl<T: Transceiver> TagSession<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// Session-level connected flag (set by `mark_connected`).
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// True while exactly one poll task is outstanding.
    pub fn is_polling(&self) -> bool {
        self.poll.is_some()
    }

    /// Whether the link behind the current handle reports itself open.
    pub fn link_connected(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| h.is_connected())
    }

    pub fn handle(&self) -> Option<&T> {
        self.handle.as_ref()
    }

    /// Borrow the live handle; a missing handle is `Error::NoTag`, never a panic.
    pub fn handle_mut(&mut self) -> Result<&mut T> {
        self.handle.as_mut().ok_or(Error::NoTag)
    }

    /// Take ownership of `tag`, releasing any handle held before.
    pub fn adopt(&mut self, tag: T) {
        if self.handle.is_some() {
            log::debug!("replacing tag handle");
            self.release();
        }
        self.handle = Some(tag);
        self.connected = false;
    }

    /// Adopt `tag` only when no handle is held. Returns whether it was adopted.
    pub fn adopt_if_empty(&mut self, tag: T) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.adopt(tag);
        true
    }

    /// Record a successful connect; emits `Connected` on the first transition.
    pub fn mark_connected(&mut self) {
        if !self.connected {
            self.connected = true;
            self.emit(Event::Connected);
        }
    }

    /// The tag left the field: release everything and emit `Disconnected`.
    pub fn lose_connection(&mut self) {
        log::debug!("tag connection lost");
        self.release();
        self.emit(Event::Disconnected);
    }

    /// Stop polling, close the handle if its link is open and forget it.
    /// Close-time errors are logged and swallowed.
    pub fn release(&mut self) {
        self.stop_polling();
        if let Some(mut handle) = self.handle.take() {
            if handle.is_connected() {
                if let Err(e) = handle.close() {
                    log::warn!("ignoring error while closing tag: {}", e);
                }
            }
        }
        self.connected = false;
    }

    /// The link reported itself closed: stop polling, close unconditionally
    /// and forget the handle, without an event.
    pub fn release_disconnected(&mut self) {
        self.stop_polling();
        if let Some(mut handle) = self.handle.take() {
            if let Err(e) = handle.close() {
                log::warn!("ignoring error while closing tag: {}", e);
            }
        }
        self.connected = false;
    }

    /// Arm the poll task. `schedule` receives the generation number the
    /// task must present to `is_current_poll`. No-op (returns false) when
    /// already polling; a scheduling error leaves the session not polling.
    pub fn begin_polling(
        &mut self,
        schedule: impl FnOnce(u64) -> Result<TaskHandle>,
    ) -> Result<bool> {
        if self.poll.is_some() {
            return Ok(false);
        }
        self.poll_generation += 1;
        let generation = self.poll_generation;
        let task = schedule(generation)?;
        self.poll = Some(PollTask { generation, task });
        Ok(true)
    }

    /// Whether a tick from the task armed as `generation` should run.
    pub fn is_current_poll(&self, generation: u64) -> bool {
        self.poll.as_ref().is_some_and(|p| p.generation == generation)
    }

    /// Cancel the poll task. Idempotent; returns whether one was running.
    pub fn stop_polling(&mut self) -> bool {
        match self.poll.take() {
            Some(mut p) => {
                p.task.cancel();
                true
            }
            None => false,
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.outbox.push(event);
    }

    /// Queue an `OperationFailed` carrying the error's display text.
    pub fn fail(&mut self, err: &Error) {
        self.emit(Event::OperationFailed(err.to_string()));
    }

    /// Drain queued events for delivery.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.outbox)
    }
}
