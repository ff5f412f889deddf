// libftm/src/types.rs

use crate::constants::RESPONSE_ERROR_FLAG;

/// MB_CTRL_Dyn register value (one byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MailboxControl(u8);

impl MailboxControl {
    /// Mailbox enabled
    pub const MB_EN: u8 = 0x01;
    /// Host (I2C side) has put a message for the RF side
    pub const HOST_PUT_MSG: u8 = 0x02;
    /// RF side has put a message for the host
    pub const RF_PUT_MSG: u8 = 0x04;
    /// Host message was not read before timeout
    pub const HOST_MISS_MSG: u8 = 0x10;
    /// RF message was not read before timeout
    pub const RF_MISS_MSG: u8 = 0x20;
    /// Current mailbox message was written by the host
    pub const HOST_CURRENT_MSG: u8 = 0x40;
    /// Current mailbox message was written over RF
    pub const RF_CURRENT_MSG: u8 = 0x80;

    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    fn is_set(&self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    pub fn mailbox_enabled(&self) -> bool {
        self.is_set(Self::MB_EN)
    }

    /// The flag the poll loop waits for.
    pub fn host_put_msg(&self) -> bool {
        self.is_set(Self::HOST_PUT_MSG)
    }

    pub fn rf_put_msg(&self) -> bool {
        self.is_set(Self::RF_PUT_MSG)
    }

    pub fn host_miss_msg(&self) -> bool {
        self.is_set(Self::HOST_MISS_MSG)
    }

    pub fn rf_miss_msg(&self) -> bool {
        self.is_set(Self::RF_MISS_MSG)
    }

    pub fn host_current_msg(&self) -> bool {
        self.is_set(Self::HOST_CURRENT_MSG)
    }

    pub fn rf_current_msg(&self) -> bool {
        self.is_set(Self::RF_CURRENT_MSG)
    }
}

impl From<u8> for MailboxControl {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

/// ISO 15693 response flags byte (first byte of every tag response)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ResponseFlags(u8);

impl ResponseFlags {
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    /// When set, the byte following the flags is an error code.
    pub fn is_error(&self) -> bool {
        self.0 & RESPONSE_ERROR_FLAG != 0
    }
}
