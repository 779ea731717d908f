//! Base64 passthrough mode.

use base64::prelude::*;

use super::errors::DecodeError;

/// Standard Base64 with padding. Empty input encodes to the empty string.
pub fn encode(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }
    BASE64_STANDARD.encode(data)
}

/// Strict standard Base64 decode: canonical padding is required.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(BASE64_STANDARD.decode(text)?)
}

/// Decodes the part of a longer Base64 text that starts `offset` bytes in.
///
/// Error offsets are shifted so they point into the whole text, as [`decode`]
/// on the whole text would report them.
pub fn decode_at(text: &str, offset: usize) -> Result<Vec<u8>, DecodeError> {
    use base64::DecodeError as Base64Error;

    BASE64_STANDARD.decode(text).map_err(|err| {
        DecodeError::InvalidBase64(match err {
            Base64Error::InvalidByte(at, byte) => Base64Error::InvalidByte(at + offset, byte),
            Base64Error::InvalidLastSymbol(at, byte) => {
                Base64Error::InvalidLastSymbol(at + offset, byte)
            }
            Base64Error::InvalidLength(len) => Base64Error::InvalidLength(len + offset),
            other => other,
        })
    })
}
