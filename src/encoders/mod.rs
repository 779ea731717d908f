pub mod algorithms;
pub mod encoding;
pub mod streaming;

// Re-export commonly used items
pub use algorithms::{packer, unpacker};
