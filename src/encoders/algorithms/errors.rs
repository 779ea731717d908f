use std::fmt;

/// Errors that can occur during decoding.
///
/// Every variant is a format error: the input text is structurally invalid.
/// Nothing is retried or partially recovered, the first violation wins.
/// Positions count code points of the input after `\r`, `\n` and spaces have
/// been stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// An escape character is the last symbol of the input
    TruncatedEscape { position: usize },
    /// The symbol after an escape lies outside the extension range
    InvalidEscape { char: char, position: usize },
    /// The input contains a character that is not in the alphabet
    UnknownSymbol { char: char, position: usize },
    /// The input looked like Base64 but failed to decode as Base64
    InvalidBase64(base64::DecodeError),
}

impl DecodeError {
    pub fn truncated_escape(position: usize) -> Self {
        DecodeError::TruncatedEscape { position }
    }

    pub fn invalid_escape(c: char, position: usize) -> Self {
        DecodeError::InvalidEscape { char: c, position }
    }

    pub fn unknown_symbol(c: char, position: usize) -> Self {
        DecodeError::UnknownSymbol { char: c, position }
    }

    /// Position of the offending symbol, when the error has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            DecodeError::TruncatedEscape { position }
            | DecodeError::InvalidEscape { position, .. }
            | DecodeError::UnknownSymbol { position, .. } => Some(*position),
            DecodeError::InvalidBase64(_) => None,
        }
    }
}

impl From<base64::DecodeError> for DecodeError {
    fn from(err: base64::DecodeError) -> Self {
        DecodeError::InvalidBase64(err)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();
        let (header, hint) = match self {
            DecodeError::TruncatedEscape { position } => (
                format!("truncated escape at position {}", position),
                "an escape '.' must be followed by one more symbol".to_string(),
            ),
            DecodeError::InvalidEscape { char: c, position } => (
                format!(
                    "invalid escape: '{}' (U+{:04X}) at position {} cannot follow '.'",
                    c, *c as u32, position
                ),
                "only the first 604 symbols of the alphabet are valid after an escape".to_string(),
            ),
            DecodeError::UnknownSymbol { char: c, position } => (
                format!(
                    "unknown symbol '{}' (U+{:04X}) at position {}",
                    c.escape_debug(),
                    *c as u32,
                    position
                ),
                "valid symbols are U+AC00..U+D7A3, U+4E00..U+9FFF and '.'".to_string(),
            ),
            DecodeError::InvalidBase64(err) => (
                format!("invalid base64: {}", err),
                "input starting with an ASCII character is decoded as standard base64".to_string(),
            ),
        };

        if use_color {
            writeln!(f, "\x1b[1;31merror:\x1b[0m {}", header)?;
            write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)
        } else {
            writeln!(f, "error: {}", header)?;
            write!(f, "hint: {}", hint)
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::InvalidBase64(err) => Some(err),
            _ => None,
        }
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
