// libftm/src/protocol/parser.rs

use crate::types::ResponseFlags;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return everything from `idx` onward, with bounds checking.
pub fn rest_from(data: &[u8], idx: usize) -> Result<&[u8]> {
    ensure_len(data, idx)?;
    Ok(&data[idx..])
}

/// Read the leading response flags byte and surface a tag-reported error
/// as `Error::TagStatus`. The error code byte follows the flags; a missing
/// code is reported as 0.
pub fn expect_success_flags(data: &[u8]) -> Result<ResponseFlags> {
    let flags = ResponseFlags::new(byte_at(data, 0)?);
    if flags.is_error() {
        let code = data.get(1).copied().unwrap_or(0);
        return Err(Error::TagStatus { code });
    }
    Ok(flags)
}
