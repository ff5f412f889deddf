// libftm/src/engine/mod.rs

//! The FTM mailbox engine: one-shot writes plus the background poll loop
//! that picks up replies left in the tag mailbox.

pub mod builder;
pub mod config;
pub mod mailbox;
mod poll;
mod write;

pub use builder::EngineBuilder;
pub use config::EngineConfig;
pub use mailbox::{read_mailbox, read_mailbox_control};

use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use crate::Result;
use crate::listener::{Event, Listener};
use crate::scheduler::{Scheduler, ThreadScheduler};
use crate::session::TagSession;
use crate::transport::Transceiver;

/// State shared between the caller-facing engine and its poll task.
pub(crate) struct Shared<T> {
    session: Mutex<TagSession<T>>,
    listener: RwLock<Option<Arc<dyn Listener>>>,
    scheduler: Arc<dyn Scheduler>,
    config: EngineConfig,
}

impl<T: Transceiver> Shared<T> {
    /// Lock the session. Every transceive happens under this lock, which is
    /// what serializes the write path against poll ticks on the one link.
    fn lock(&self) -> MutexGuard<'_, TagSession<T>> {
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run `f` under the session lock, then deliver the events it queued
    /// with the lock released so listeners may call back into the engine.
    fn with_session<R>(&self, f: impl FnOnce(&mut TagSession<T>) -> R) -> R {
        let (out, events) = {
            let mut session = self.lock();
            let out = f(&mut session);
            (out, session.take_events())
        };
        self.deliver(events);
        out
    }

    fn deliver(&self, events: Vec<Event>) {
        if events.is_empty() {
            return;
        }
        let listener = self
            .listener
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        for event in events {
            log::debug!("event: {}", event);
            if let Some(l) = &listener {
                event.dispatch(l.as_ref());
            }
        }
    }
}

/// Engine handle. Dropping it shuts the session down.
pub struct Engine<T: Transceiver + 'static> {
    shared: Arc<Shared<T>>,
}

impl<T: Transceiver + 'static> Engine<T> {
    /// Engine with default timing on a `ThreadScheduler` and no listener.
    pub fn new() -> Self {
        Self::from_parts(
            EngineConfig::default(),
            Arc::new(ThreadScheduler::new()),
            None,
        )
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub(crate) fn from_parts(
        config: EngineConfig,
        scheduler: Arc<dyn Scheduler>,
        listener: Option<Arc<dyn Listener>>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                session: Mutex::new(TagSession::new()),
                listener: RwLock::new(listener),
                scheduler,
                config,
            }),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.shared.config
    }

    pub fn set_listener(&self, listener: Arc<dyn Listener>) {
        *self
            .shared
            .listener
            .write()
            .unwrap_or_else(|e| e.into_inner()) = Some(listener);
    }

    pub fn clear_listener(&self) {
        *self
            .shared
            .listener
            .write()
            .unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Write `payload` to the tag and start watching its mailbox. `tag` is
    /// adopted only when the session holds no handle yet. Returns whether
    /// the write succeeded; the outcome is also reported to the listener.
    pub fn write_message(&self, payload: &str, tag: Option<T>) -> bool {
        self.write(payload, tag).is_ok()
    }

    /// Same as `write_message` but returns the typed error.
    pub fn write(&self, payload: &str, tag: Option<T>) -> Result<()> {
        write::write(&self.shared, payload.as_bytes(), tag)
    }

    /// A tag came into range. The new handle is ignored while a connected
    /// handle is held; otherwise it replaces whatever was held before.
    /// Returns whether the handle was adopted.
    pub fn on_tag_discovered(&self, tag: T) -> bool {
        self.shared.with_session(|session| {
            if session.link_connected() {
                log::debug!("ignoring discovered tag: session already connected");
                return false;
            }
            session.adopt(tag);
            log::debug!("adopted discovered tag");
            true
        })
    }

    /// Start the mailbox poll loop on the held handle. No-op when already
    /// polling.
    pub fn start_polling(&self) -> Result<()> {
        self.shared
            .with_session(|session| poll::arm(&self.shared, session))
    }

    /// Stop the mailbox poll loop. Idempotent.
    pub fn stop_polling(&self) {
        self.shared.with_session(|session| {
            if session.stop_polling() {
                log::debug!("mailbox polling stopped");
            }
        });
    }

    /// Stop polling and release the tag handle (foreground loss).
    pub fn shutdown(&self) {
        self.shared.with_session(|session| {
            if session.has_handle() || session.is_polling() {
                log::debug!("shutting down tag session");
            }
            session.release();
        });
    }

    pub fn is_polling(&self) -> bool {
        self.shared.lock().is_polling()
    }

    pub fn is_connected(&self) -> bool {
        self.shared.lock().is_connected()
    }

    pub fn has_tag(&self) -> bool {
        self.shared.lock().has_handle()
    }

    /// Inspect the held handle, if any.
    pub fn with_tag<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.shared.lock().handle().map(f)
    }
}

impl<T: Transceiver + 'static> Default for Engine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transceiver + 'static> Drop for Engine<T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
