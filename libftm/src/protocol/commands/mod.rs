// libftm/src/protocol/commands/mod.rs

pub mod mailbox;
pub mod write;

pub use mailbox::{encode_read_dynamic_config, encode_read_message, encode_read_message_length};
pub use write::encode_write_message;

use crate::constants::{
    CMD_READ_DYNAMIC_CONFIG, CMD_READ_MESSAGE, CMD_READ_MESSAGE_LENGTH, CMD_WRITE_MESSAGE,
    REG_MB_CTRL_DYN,
};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Put a message into the FTM mailbox.
    WriteMessage { payload: Vec<u8> },
    /// Read one dynamic configuration register.
    ReadDynamicConfig { register: u8 },
    /// Read MB_LEN_Dyn.
    ReadMessageLength,
    /// Read `length` bytes of the mailbox starting at `pointer`.
    ReadMessage { pointer: u8, length: u8 },
}

impl Command {
    /// Status read used by the poll loop (MB_CTRL_Dyn).
    pub const fn mailbox_status() -> Self {
        Self::ReadDynamicConfig {
            register: REG_MB_CTRL_DYN,
        }
    }

    /// Return the ST25DV custom command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::WriteMessage { .. } => CMD_WRITE_MESSAGE,
            Self::ReadDynamicConfig { .. } => CMD_READ_DYNAMIC_CONFIG,
            Self::ReadMessageLength => CMD_READ_MESSAGE_LENGTH,
            Self::ReadMessage { .. } => CMD_READ_MESSAGE,
        }
    }

    /// Encode the command into the raw request bytes. Only the write
    /// command can fail (payload larger than its length field).
    pub fn encode(&self) -> crate::Result<Vec<u8>> {
        match self {
            Self::WriteMessage { payload } => encode_write_message(payload),
            Self::ReadDynamicConfig { register } => Ok(encode_read_dynamic_config(*register)),
            Self::ReadMessageLength => Ok(encode_read_message_length()),
            Self::ReadMessage { pointer, length } => Ok(encode_read_message(*pointer, *length)),
        }
    }
}
