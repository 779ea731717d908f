//! Convenient re-exports for common usage.
//!
//! This module provides a single import for the most commonly used types
//! and functions in base32k.
//!
//! # Example
//!
//! ```
//! use base32k::prelude::*;
//!
//! let encoder = Encoder::new();
//! let text = encoder.encode(b"Hello", EncodingMode::Wide);
//! assert_eq!(detect_format(&text), Format::Wide);
//! ```

pub use crate::{
    Alphabet,
    // Config
    CodecConfig,
    DecodeError,
    Encoder,
    EncodingMode,
    // Detection
    Format,
    // Streaming
    StreamError,
    StreamingDecoder,
    StreamingEncoder,
    // Core encoding/decoding
    decode,
    detect_format,
    encode,
    wrap,
};
