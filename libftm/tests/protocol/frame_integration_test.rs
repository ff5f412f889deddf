#[path = "../common/mod.rs"]
mod common;

use libftm::Error;
use libftm::protocol::Frame;
use proptest::prelude::*;

#[test]
fn hello_frame_matches_fixture() {
    let frame = Frame::encode_write(common::fixtures::HELLO.as_bytes()).expect("encode");
    assert_eq!(frame, common::fixtures::hello_frame());
    let payload = Frame::decode_write(&frame).expect("frame decode");
    assert_eq!(payload, common::fixtures::HELLO.as_bytes());
}

#[test]
fn empty_payload_frame_is_fixed() {
    let frame = Frame::encode_write(&[]).unwrap();
    assert_eq!(frame, common::fixtures::empty_write_frame());
    assert!(Frame::decode_write(&frame).unwrap().is_empty());
}

#[test]
fn multibyte_text_counts_bytes() {
    // 5 characters, 6 UTF-8 bytes
    let text = "héllo";
    let frame = Frame::encode_write(text.as_bytes()).unwrap();
    assert_eq!(frame[3], 6);
    assert_eq!(frame.len(), Frame::write_len(6));
    assert_eq!(
        String::from_utf8(Frame::decode_write(&frame).unwrap()).unwrap(),
        text
    );
}

#[test]
fn payload_length_ceiling() {
    assert!(Frame::encode_write(common::fixtures::ascii_payload(255).as_bytes()).is_ok());
    match Frame::encode_write(common::fixtures::ascii_payload(256).as_bytes()) {
        Err(Error::PayloadTooLarge { actual, max }) => {
            assert_eq!(actual, 256);
            assert_eq!(max, 255);
        }
        other => panic!("expected PayloadTooLarge, got {:?}", other),
    }
}

proptest! {
    #[test]
    fn text_payload_roundtrip(text in "[ -~]{0,255}") {
        let frame = Frame::encode_write(text.as_bytes()).unwrap();
        let decoded = Frame::decode_write(&frame).unwrap();
        prop_assert_eq!(String::from_utf8(decoded).unwrap(), text);
    }
}
