use crate::core::alphabet::ESCAPE;
use std::borrow::Cow;
use std::fmt;

/// Format of an encoded text, as decided by its first significant character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Nothing left after removing transport whitespace
    Empty,
    /// Standard Base64
    Base64,
    /// Wide-alphabet encoding
    Wide,
}

impl Format {
    /// Classifies a text by its first non-whitespace character.
    ///
    /// ASCII selects Base64, except for the escape character, which can only
    /// open a wide-mode escape pair. Everything else selects the wide mode.
    pub fn of_first_char(c: char) -> Self {
        if c.is_ascii() && c != ESCAPE {
            Format::Base64
        } else {
            Format::Wide
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Empty => "empty",
            Format::Base64 => "base64",
            Format::Wide => "wide",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Characters that transports may insert and decoding ignores.
///
/// Only carriage return, line feed and plain space. Tabs and other Unicode
/// whitespace are not ignored.
pub fn is_transport_whitespace(c: char) -> bool {
    matches!(c, '\r' | '\n' | ' ')
}

/// Removes transport whitespace, borrowing when there is none.
pub fn strip_transport_whitespace(text: &str) -> Cow<'_, str> {
    if text.contains(is_transport_whitespace) {
        Cow::Owned(text.chars().filter(|&c| !is_transport_whitespace(c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Detects which decoder a text would be routed to.
pub fn detect_format(text: &str) -> Format {
    text.chars()
        .find(|&c| !is_transport_whitespace(c))
        .map_or(Format::Empty, Format::of_first_char)
}
