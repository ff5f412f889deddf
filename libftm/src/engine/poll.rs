// libftm/src/engine/poll.rs

use std::sync::Arc;

use crate::engine::{Shared, mailbox};
use crate::listener::Event;
use crate::session::TagSession;
use crate::transport::Transceiver;
use crate::{Error, PollStage, Result};

/// Arm the poll task on the held handle. No-op when already polling.
pub(crate) fn arm<T: Transceiver + 'static>(
    shared: &Arc<Shared<T>>,
    session: &mut TagSession<T>,
) -> Result<()> {
    if session.is_polling() {
        log::trace!("mailbox polling already active");
        return Ok(());
    }
    if !session.has_handle() {
        return Err(Error::NoTag);
    }

    let config = shared.config;
    let scheduler = shared.scheduler.clone();
    let weak = Arc::downgrade(shared);
    session.begin_polling(|generation| {
        scheduler.schedule_repeating(
            config.initial_delay(),
            config.poll_interval(),
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.with_session(|session| tick(&shared, session, generation));
                }
            }),
        )
    })?;
    log::debug!("mailbox polling started");
    Ok(())
}

/// One poll cycle: read MB_CTRL_Dyn and, when HOST_PUT_MSG is set, stop,
/// read the mailbox and re-arm for the next message.
fn tick<T: Transceiver + 'static>(
    shared: &Arc<Shared<T>>,
    session: &mut TagSession<T>,
    generation: u64,
) {
    // A cancelled task may still be waiting on the lock.
    if !session.is_current_poll(generation) {
        return;
    }

    let link = match session.handle_mut() {
        Ok(link) => link,
        Err(_) => {
            session.stop_polling();
            return;
        }
    };

    // Disconnect was reported where it was first observed.
    if !link.is_connected() {
        log::debug!("tag link closed; stopping mailbox polling");
        session.release_disconnected();
        return;
    }

    let control = match mailbox::read_mailbox_control(link) {
        Ok(control) => control,
        Err(e) => return fail(session, Error::in_poll(PollStage::Status, e)),
    };
    log::trace!("MB_CTRL_Dyn = {:#04x}", control.bits());
    if !control.host_put_msg() {
        return;
    }

    log::debug!("HOST_PUT_MSG set; reading mailbox");
    session.stop_polling();
    match session.handle_mut().and_then(|link| mailbox::read_mailbox(link)) {
        Ok(Some(text)) => session.emit(Event::OperationSucceeded(format!(
            "Message read from tag: {}",
            text
        ))),
        Ok(None) => log::debug!("mailbox empty"),
        Err(e) => return fail(session, Error::in_poll(PollStage::Mailbox, e)),
    }

    if let Err(e) = arm(shared, session) {
        log::warn!("could not re-arm mailbox polling: {}", e);
        session.fail(&e);
    }
}

fn fail<T: Transceiver>(session: &mut TagSession<T>, err: Error) {
    if err.is_tag_lost() {
        session.lose_connection();
    } else {
        log::warn!("{}", err);
        session.release();
        session.fail(&err);
    }
}
