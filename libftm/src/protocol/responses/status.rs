// libftm/src/protocol/responses/status.rs

use crate::Result;
use crate::protocol::parser;

/// Decode a ReadDynConfig response: flags(1) + register value(1).
pub fn decode_dynamic_config(data: &[u8]) -> Result<u8> {
    parser::expect_success_flags(data)?;
    parser::byte_at(data, 1)
}
