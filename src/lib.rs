//! Binary-to-text encoding over a 32,164-symbol Unicode alphabet.
//!
//! Bytes are repacked into 15-bit groups. Each group becomes one Hangul
//! syllable or CJK ideograph, or an escape pair (`.` plus a symbol) for the
//! 604 values above the alphabet size. A stop bit after the last data bit
//! makes the output self-terminating, so no length field is needed.
//!
//! Plain Base64 is supported as a second mode. Decoding detects the mode from
//! the first character, and ignores `\r`, `\n` and spaces anywhere.
//!
//! # Example
//!
//! ```
//! use base32k::{Encoder, EncodingMode};
//!
//! let encoder = Encoder::new();
//! let data = [0xFF, 0xEE, 0xFF, 0xFF, 0xFF, 0xDC, 0xFF, 0xFF];
//!
//! let text = encoder.encode(&data, EncodingMode::Wide);
//! assert_eq!(encoder.decode(&text).unwrap(), data);
//! ```

mod core;
mod encoders;
mod features;

pub mod prelude;


pub use crate::core::alphabet::{
    Alphabet, CJK_LEN, CJK_START, ESCAPE, EXTENSION_WIDTH, GROUP_BITS, GROUP_VALUES, HANGUL_LEN,
    HANGUL_START, THRESHOLD,
};
pub use crate::core::config::{CodecConfig, EncodingMode, Settings};

pub use encoders::algorithms::{BitState, DecodeError, SymbolDecoder};
pub use encoders::encoding::{Encoder, decode, encode};
pub use encoders::streaming::{StreamError, StreamingDecoder, StreamingEncoder};

// Lower-level building blocks
pub use encoders::{packer, unpacker};

pub use features::{
    Format, LineWrapper, detect_format, is_transport_whitespace, strip_transport_whitespace, wrap,
};
