// libftm/src/protocol/commands/mailbox.rs

use crate::constants::{
    CMD_READ_DYNAMIC_CONFIG, CMD_READ_MESSAGE, CMD_READ_MESSAGE_LENGTH, MANUFACTURER_CODE,
    REQUEST_FLAGS,
};

/// ReadDynConfig (0xAD): flags + cmd + mfg + register address
pub fn encode_read_dynamic_config(register: u8) -> Vec<u8> {
    vec![
        REQUEST_FLAGS,
        CMD_READ_DYNAMIC_CONFIG,
        MANUFACTURER_CODE,
        register,
    ]
}

/// ReadMsgLength (0xAB): flags + cmd + mfg
pub fn encode_read_message_length() -> Vec<u8> {
    vec![REQUEST_FLAGS, CMD_READ_MESSAGE_LENGTH, MANUFACTURER_CODE]
}

/// ReadMsg (0xAC): flags + cmd + mfg + mailbox pointer + byte count
pub fn encode_read_message(pointer: u8, length: u8) -> Vec<u8> {
    vec![
        REQUEST_FLAGS,
        CMD_READ_MESSAGE,
        MANUFACTURER_CODE,
        pointer,
        length,
    ]
}
