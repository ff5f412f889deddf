// libftm/src/protocol/codec.rs

use crate::Result;

use super::commands::Command;
use super::responses::Response;

/// Encode a Command into the raw bytes handed to the transceiver.
pub fn encode_command(cmd: &Command) -> Result<Vec<u8>> {
    cmd.encode()
}

/// Parse raw transceiver output as the response to `cmd`.
pub fn decode_response(cmd: &Command, raw: &[u8]) -> Result<Response> {
    Response::decode(cmd.command_code(), raw)
}

/// Render a response as the signed decimal value of each byte, concatenated
/// with no separator. This is a diagnostic trace, not a semantic decode:
/// `[0x00, 0xFF, 0x10]` becomes `"0-116"`.
pub fn decode_response_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| (b as i8).to_string()).collect()
}

/// Interpret mailbox bytes as UTF-8 text. Invalid data yields an empty
/// string; mailbox content is display data and never fails an operation.
pub fn decode_mailbox_payload(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).unwrap_or_default()
}
