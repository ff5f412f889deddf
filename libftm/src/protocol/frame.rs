// libftm/src/protocol/frame.rs

use crate::constants::{
    CMD_WRITE_MESSAGE, EMPTY_PAYLOAD_MARKER, HEADER_LEN, MANUFACTURER_CODE, MAX_PAYLOAD_LEN,
    REQUEST_FLAGS, WRITE_TERMINATOR,
};
use crate::{Error, Result};

/// Write-message frame helper.
/// Format: [Flags(1)] [Cmd 0xAA(1)] [Mfg(1)] [Len(1)] [Payload(n)] [Terminator(1)]
/// An empty payload is sent as a single 0x00 marker in place of Len+Payload,
/// which is byte-identical to Len = 0 with no payload bytes.
pub struct Frame;

impl Frame {
    /// Fixed header of the write-message command.
    pub const WRITE_HEADER: [u8; HEADER_LEN] =
        [REQUEST_FLAGS, CMD_WRITE_MESSAGE, MANUFACTURER_CODE];

    /// Smallest valid write frame (empty payload).
    pub const MIN_WRITE_LEN: usize = HEADER_LEN + 1 + 1;

    /// Encode a payload into a full write-message frame.
    pub fn encode_write(payload: &[u8]) -> Result<Vec<u8>> {
        Self::checked_write_len(payload.len())?;

        let mut out = Vec::with_capacity(Self::MIN_WRITE_LEN + payload.len());
        out.extend_from_slice(&Self::WRITE_HEADER);
        if payload.is_empty() {
            out.push(EMPTY_PAYLOAD_MARKER);
        } else {
            out.push(payload.len() as u8);
            out.extend_from_slice(payload);
        }
        out.push(WRITE_TERMINATOR);
        Ok(out)
    }

    /// Length of the frame `encode_write` would produce, without building it.
    pub fn write_len(payload_len: usize) -> usize {
        Self::MIN_WRITE_LEN + payload_len
    }

    /// Frame length for a payload of `payload_len` bytes, or
    /// `PayloadTooLarge` when the length field cannot hold it.
    pub fn checked_write_len(payload_len: usize) -> Result<usize> {
        if payload_len > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge {
                actual: payload_len,
                max: MAX_PAYLOAD_LEN,
            });
        }
        Ok(Self::write_len(payload_len))
    }

    /// Decode a write-message frame and return the payload it carries.
    pub fn decode_write(frame: &[u8]) -> Result<Vec<u8>> {
        if frame.len() < Self::MIN_WRITE_LEN {
            return Err(Error::InvalidLength {
                expected: Self::MIN_WRITE_LEN,
                actual: frame.len(),
            });
        }

        if frame[..HEADER_LEN] != Self::WRITE_HEADER {
            return Err(Error::FrameFormat("invalid write header".into()));
        }

        let len = frame[HEADER_LEN] as usize;
        let required_len = Self::write_len(len);
        if frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let payload_start = HEADER_LEN + 1;
        let payload_end = payload_start + len;
        if frame[payload_end] != WRITE_TERMINATOR {
            return Err(Error::FrameFormat("invalid terminator".into()));
        }

        Ok(frame[payload_start..payload_end].to_vec())
    }
}
