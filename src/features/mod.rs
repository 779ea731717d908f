//! Helpers around the core codec.
//!
//! Format detection for the decode dispatcher and line wrapping for
//! transport-friendly output. Neither touches the bit packing itself.

pub mod detection;
pub mod wrap;

// Re-export main types and functions for convenience
pub use detection::{Format, detect_format, is_transport_whitespace, strip_transport_whitespace};
pub use wrap::{LineWrapper, wrap};
