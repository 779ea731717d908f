pub mod bits;
pub mod errors;
pub mod packer;
pub mod passthrough;
pub mod unpacker;

// Re-export error types for public API
pub use bits::BitState;
pub use errors::DecodeError;
pub use unpacker::SymbolDecoder;
