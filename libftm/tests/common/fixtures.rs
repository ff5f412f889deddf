// Request frames and tag responses shared by the integration tests.

pub const HELLO: &str = "hello";

pub const REPLY: &str = "ack:hello";

/// Write frame for "hello" as captured from the wire.
pub fn hello_frame() -> Vec<u8> {
    hex::decode("02aa020568656c6c6f00").unwrap()
}

pub fn empty_write_frame() -> Vec<u8> {
    libftm::parse_hex("02 AA 02 00 00").unwrap()
}

pub fn status_request() -> Vec<u8> {
    hex::decode("02ad020d").unwrap()
}

pub fn length_request() -> Vec<u8> {
    hex::decode("02ab02").unwrap()
}

pub fn message_request(len: u8) -> Vec<u8> {
    vec![0x02, 0xAC, 0x02, 0x00, len]
}

/// Write acknowledgement with no error flag.
pub fn write_ack() -> Vec<u8> {
    vec![0x00]
}

/// Payload of exactly `len` ASCII bytes.
pub fn ascii_payload(len: usize) -> String {
    "x".repeat(len)
}
