// libftm/src/constants.rs
//! Common protocol constants used across the crate

/// ISO 15693 request flags: high data rate, unaddressed
pub const REQUEST_FLAGS: u8 = 0x02;

/// IC manufacturer code sent with every custom command (STMicroelectronics)
pub const MANUFACTURER_CODE: u8 = 0x02;

/// Custom command: write message into the FTM mailbox
pub const CMD_WRITE_MESSAGE: u8 = 0xAA;

/// Custom command: read the mailbox message length (MB_LEN_Dyn)
pub const CMD_READ_MESSAGE_LENGTH: u8 = 0xAB;

/// Custom command: read bytes out of the mailbox
pub const CMD_READ_MESSAGE: u8 = 0xAC;

/// Custom command: read a dynamic configuration register
pub const CMD_READ_DYNAMIC_CONFIG: u8 = 0xAD;

/// Dynamic register address of MB_CTRL_Dyn
pub const REG_MB_CTRL_DYN: u8 = 0x0D;

/// Trailing byte of the write-message frame
pub const WRITE_TERMINATOR: u8 = 0x00;

/// Length marker used in place of `len + payload` for an empty payload
pub const EMPTY_PAYLOAD_MARKER: u8 = 0x00;

/// Largest payload the one-byte length field can describe
pub const MAX_PAYLOAD_LEN: usize = 255;

/// Fixed header length: flags + command code + manufacturer code
pub const HEADER_LEN: usize = 3;

/// ISO 15693 response flag signalling an error code follows
pub const RESPONSE_ERROR_FLAG: u8 = 0x01;

/// Default delay before the first mailbox poll (ms)
pub const DEFAULT_POLL_INITIAL_DELAY_MS: u64 = 50;

/// Default period between mailbox polls (ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;
