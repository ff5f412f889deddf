// libftm/src/protocol/responses/length.rs

use crate::Result;
use crate::protocol::parser;

/// Decode a ReadMsgLength response: flags(1) + MB_LEN_Dyn(1).
pub fn decode_message_length(data: &[u8]) -> Result<u8> {
    parser::expect_success_flags(data)?;
    parser::byte_at(data, 1)
}
