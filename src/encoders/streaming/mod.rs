mod decoder;
mod encoder;

pub use decoder::StreamingDecoder;
pub use encoder::StreamingEncoder;

use crate::encoders::algorithms::DecodeError;
use std::fmt;

const CHUNK_SIZE: usize = 4096; // 4KB chunks

/// Errors that can occur while decoding a stream.
#[derive(Debug)]
pub enum StreamError {
    /// Reading the input or writing the output failed
    Io(std::io::Error),
    /// The input is not valid UTF-8 at the given byte offset
    InvalidUtf8 { offset: usize },
    /// The input text is malformed
    Decode(DecodeError),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Io(err) => write!(f, "error: {}", err),
            StreamError::InvalidUtf8 { offset } => {
                write!(f, "error: input is not valid UTF-8 at byte {}", offset)
            }
            StreamError::Decode(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Io(err) => Some(err),
            StreamError::Decode(err) => Some(err),
            StreamError::InvalidUtf8 { .. } => None,
        }
    }
}

impl From<std::io::Error> for StreamError {
    fn from(err: std::io::Error) -> Self {
        StreamError::Io(err)
    }
}

impl From<DecodeError> for StreamError {
    fn from(err: DecodeError) -> Self {
        StreamError::Decode(err)
    }
}
