// libftm/src/engine/mailbox.rs

use crate::protocol::{Command, Response, decode_mailbox_payload};
use crate::transport::Transceiver;
use crate::types::MailboxControl;
use crate::{Error, Result};

/// Read MB_CTRL_Dyn.
pub fn read_mailbox_control<T: Transceiver + ?Sized>(link: &mut T) -> Result<MailboxControl> {
    let resp = link.execute(&Command::mailbox_status())?;
    resp.mailbox_control()
        .ok_or_else(|| Error::FrameFormat(format!("unexpected status response: {:?}", resp)))
}

/// Read the message waiting in the mailbox: MB_LEN_Dyn first, then that
/// many bytes from offset 0. Returns `None` when the mailbox is empty or
/// its content does not decode as text. Link failures propagate to the
/// caller.
pub fn read_mailbox<T: Transceiver + ?Sized>(link: &mut T) -> Result<Option<String>> {
    let length = match link.execute(&Command::ReadMessageLength)? {
        Response::MessageLength { length } => length,
        other => {
            return Err(Error::FrameFormat(format!(
                "unexpected length response: {:?}",
                other
            )));
        }
    };
    if length == 0 {
        return Ok(None);
    }

    let data = match link.execute(&Command::ReadMessage { pointer: 0, length })? {
        Response::Message { data } => data,
        other => {
            return Err(Error::FrameFormat(format!(
                "unexpected message response: {:?}",
                other
            )));
        }
    };

    let text = decode_mailbox_payload(&data);
    Ok((!text.is_empty()).then_some(text))
}
