// libftm/src/protocol/responses/message.rs

use crate::Result;
use crate::protocol::parser;

/// Decode a ReadMsg response: flags(1) + message bytes(N). Returns the
/// message bytes only; an empty tail is valid.
pub fn decode_message(data: &[u8]) -> Result<Vec<u8>> {
    parser::expect_success_flags(data)?;
    Ok(parser::rest_from(data, 1)?.to_vec())
}
