// libftm/src/protocol/mod.rs

pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use codec::{decode_mailbox_payload, decode_response_text};
pub use commands::{
    Command, encode_read_dynamic_config, encode_read_message, encode_read_message_length,
    encode_write_message,
};
pub use frame::Frame;
pub use responses::{
    Response, decode_dynamic_config, decode_message, decode_message_length, decode_write_message,
};
