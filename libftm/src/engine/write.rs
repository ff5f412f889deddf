// libftm/src/engine/write.rs

use std::sync::Arc;

use crate::engine::{Shared, poll};
use crate::listener::Event;
use crate::protocol::{Command, Frame, Response, decode_response_text};
use crate::session::TagSession;
use crate::transport::Transceiver;
use crate::{Error, Result};

/// One-shot write of `payload` into the mailbox. Every outcome produces
/// exactly one success or failure event (a lost tag also emits
/// `Disconnected` first). If the poll timer cannot be started after a
/// completed write, the success is followed by that failure.
pub(crate) fn write<T: Transceiver + 'static>(
    shared: &Arc<Shared<T>>,
    payload: &[u8],
    tag: Option<T>,
) -> Result<()> {
    shared.with_session(|session| {
        let result = write_locked(shared, session, payload, tag);
        if let Err(e) = &result {
            report_failure(session, e);
        }
        result
    })
}

fn write_locked<T: Transceiver + 'static>(
    shared: &Arc<Shared<T>>,
    session: &mut TagSession<T>,
    payload: &[u8],
    tag: Option<T>,
) -> Result<()> {
    let frame_len = Frame::checked_write_len(payload.len())?;
    let command = Command::WriteMessage {
        payload: payload.to_vec(),
    };

    if let Some(tag) = tag {
        if !session.adopt_if_empty(tag) {
            log::trace!("reusing held tag handle");
        }
    }

    let link = session.handle_mut()?;
    if !link.is_connected() {
        link.connect()?;
    }

    let max = link.max_transceive_len();
    if frame_len > max {
        return Err(Error::FrameTooLargeForLink { frame_len, max });
    }

    if !link.is_connected() {
        return Err(Error::ReadOnlyTag);
    }

    session.mark_connected();
    let raw = match session.handle_mut()?.execute(&command)? {
        Response::WriteMessage { raw } => raw,
        other => {
            return Err(Error::FrameFormat(format!(
                "unexpected write response: {:?}",
                other
            )));
        }
    };
    log::debug!("wrote {} byte payload", payload.len());
    session.emit(Event::OperationSucceeded(format!(
        "Message is written to tag successfully. Response: {}",
        decode_response_text(&raw)
    )));

    poll::arm(shared, session)
}

fn report_failure<T: Transceiver>(session: &mut TagSession<T>, err: &Error) {
    log::warn!("write failed: {}", err);
    match err {
        Error::TagLost => session.lose_connection(),
        Error::Link(_) => session.release(),
        _ => {}
    }
    session.fail(err);
}
