// libftm/src/protocol/responses/write.rs

/// WriteMessage response. The tag's acknowledgement is only ever shown to
/// the user as a trace string, so it is returned unchanged and never
/// rejected.
pub fn decode_write_message(data: &[u8]) -> Vec<u8> {
    data.to_vec()
}
