#[path = "../common/mod.rs"]
mod common;

use libftm::Error;
use libftm::protocol::{Command, Response, codec};

#[test]
fn status_response_decodes_to_mailbox_control() {
    let raw = common::host_put_msg_response();
    let resp = codec::decode_response(&Command::mailbox_status(), &raw).unwrap();
    let ctrl = resp.mailbox_control().expect("status response");
    assert!(ctrl.mailbox_enabled());
    assert!(ctrl.host_put_msg());
    assert!(!ctrl.rf_put_msg());
}

#[test]
fn status_error_flag_is_reported() {
    let err = codec::decode_response(&Command::mailbox_status(), &[0x01, 0x0F]).unwrap_err();
    assert!(matches!(err, Error::TagStatus { code: 0x0F }));
}

#[test]
fn message_response_strips_flags() {
    let raw = common::message_response(common::fixtures::REPLY.as_bytes());
    let cmd = Command::ReadMessage {
        pointer: 0,
        length: common::fixtures::REPLY.len() as u8,
    };
    match codec::decode_response(&cmd, &raw).unwrap() {
        Response::Message { data } => {
            assert_eq!(codec::decode_mailbox_payload(&data), common::fixtures::REPLY);
        }
        other => panic!("expected message response, got {:?}", other),
    }
}

#[test]
fn write_ack_trace_text() {
    let raw = common::fixtures::write_ack();
    match codec::decode_response(&Command::WriteMessage { payload: vec![] }, &raw).unwrap() {
        Response::WriteMessage { raw } => assert_eq!(codec::decode_response_text(&raw), "0"),
        other => panic!("expected write response, got {:?}", other),
    }
}
