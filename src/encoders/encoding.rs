use crate::core::alphabet::Alphabet;
use crate::core::config::EncodingMode;
use crate::encoders::algorithms::{DecodeError, packer, passthrough, unpacker};
use crate::features::detection::{Format, detect_format, strip_transport_whitespace};
use std::sync::Arc;
use tracing::debug;

/// Encodes `data` in the given mode.
///
/// Base64 of empty input is the empty string; the wide mode always emits at
/// least one symbol.
pub fn encode(data: &[u8], alphabet: &Alphabet, mode: EncodingMode) -> String {
    let encoded = match mode {
        EncodingMode::Base64 => passthrough::encode(data),
        EncodingMode::Wide => packer::encode(data, alphabet),
    };
    debug!(
        mode = mode.as_str(),
        input_bytes = data.len(),
        output_chars = encoded.chars().count(),
        "encoded"
    );
    encoded
}

/// Decodes text produced by either mode.
///
/// `\r`, `\n` and spaces are removed first. The format is chosen from the
/// first remaining character (see [`Format::of_first_char`]); empty input
/// decodes to no bytes.
pub fn decode(text: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    let symbols = strip_transport_whitespace(text);
    let format = detect_format(&symbols);

    let decoded = match format {
        Format::Empty => Vec::new(),
        Format::Base64 => passthrough::decode(&symbols)?,
        Format::Wide => unpacker::decode(&symbols, alphabet)?,
    };
    debug!(
        format = format.as_str(),
        input_chars = symbols.chars().count(),
        output_bytes = decoded.len(),
        "decoded"
    );
    Ok(decoded)
}

/// Owns (or shares) an alphabet and exposes the codec over it.
///
/// Cloning is cheap: clones share the same immutable alphabet, and the
/// encoder can be used from many threads at once.
///
/// # Example
///
/// ```
/// use base32k::{Encoder, EncodingMode};
///
/// let encoder = Encoder::new();
/// let text = encoder.encode(b"Hello, world!", EncodingMode::Wide);
/// assert_eq!(encoder.decode(&text).unwrap(), b"Hello, world!");
///
/// let text = encoder.encode(b"Hello, world!", EncodingMode::Base64);
/// assert_eq!(text, "SGVsbG8sIHdvcmxkIQ==");
/// assert_eq!(encoder.decode(&text).unwrap(), b"Hello, world!");
/// ```
#[derive(Debug, Clone)]
pub struct Encoder {
    alphabet: Arc<Alphabet>,
}

impl Encoder {
    /// Builds a fresh alphabet for this encoder.
    pub fn new() -> Self {
        Self::with_alphabet(Arc::new(Alphabet::new()))
    }

    /// Uses an alphabet shared with other encoders.
    pub fn with_alphabet(alphabet: Arc<Alphabet>) -> Self {
        Encoder { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encodes `data` in the given mode. Never fails.
    pub fn encode(&self, data: &[u8], mode: EncodingMode) -> String {
        encode(data, &self.alphabet, mode)
    }

    /// Decodes Base64 or wide-mode text, detected from the first character.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        decode(text, &self.alphabet)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
