// libftm/src/protocol/responses/mod.rs

pub mod length;
pub mod message;
pub mod status;
pub mod write;

pub use length::decode_message_length;
pub use message::decode_message;
pub use status::decode_dynamic_config;
pub use write::decode_write_message;

use crate::constants::{
    CMD_READ_DYNAMIC_CONFIG, CMD_READ_MESSAGE, CMD_READ_MESSAGE_LENGTH, CMD_WRITE_MESSAGE,
};
use crate::types::MailboxControl;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Raw write acknowledgement, kept verbatim for the trace text.
    WriteMessage { raw: Vec<u8> },
    DynamicConfig { value: u8 },
    MessageLength { length: u8 },
    Message { data: Vec<u8> },
}

impl Response {
    /// Decode raw transceiver output for the given command code.
    pub fn decode(cmd: u8, data: &[u8]) -> crate::Result<Self> {
        match cmd {
            CMD_WRITE_MESSAGE => Ok(Self::WriteMessage {
                raw: decode_write_message(data),
            }),
            CMD_READ_DYNAMIC_CONFIG => Ok(Self::DynamicConfig {
                value: decode_dynamic_config(data)?,
            }),
            CMD_READ_MESSAGE_LENGTH => Ok(Self::MessageLength {
                length: decode_message_length(data)?,
            }),
            CMD_READ_MESSAGE => Ok(Self::Message {
                data: decode_message(data)?,
            }),
            other => Err(crate::Error::FrameFormat(format!(
                "unsupported command code {:#04x}",
                other
            ))),
        }
    }

    /// Interpret a DynamicConfig response as MB_CTRL_Dyn.
    pub fn mailbox_control(&self) -> Option<MailboxControl> {
        match self {
            Self::DynamicConfig { value } => Some(MailboxControl::new(*value)),
            _ => None,
        }
    }
}
