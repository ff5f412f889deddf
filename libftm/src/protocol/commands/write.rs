// libftm/src/protocol/commands/write.rs

use crate::Result;
use crate::protocol::Frame;

/// Encode the WriteMessage command (custom command code 0xAA).
/// Layout: flags(1) + 0xAA + mfg(1) + length(1) + payload(N) + 0x00
pub fn encode_write_message(payload: &[u8]) -> Result<Vec<u8>> {
    Frame::encode_write(payload)
}
