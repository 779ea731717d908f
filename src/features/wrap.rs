//! Line wrapping for encoded output.
//!
//! Decoding ignores line feeds, so wrapped text decodes to the same bytes.
//! Widths count code points, not UTF-8 bytes: an escape pair counts as two
//! and may be split across lines.

use std::io::{self, Write};

/// Inserts a `\n` after every `width` characters. `width == 0` disables
/// wrapping. No trailing newline is added.
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let capacity = text.len() + text.len() / width + 1;
    let mut wrapper = LineWrapper::new(Vec::with_capacity(capacity), width);
    // Writing into a Vec cannot fail
    let _ = wrapper.write_str(text);
    String::from_utf8(wrapper.into_inner()).unwrap_or_default()
}

/// Writer adapter that wraps text incrementally.
///
/// Keeps the current column across calls so the result matches [`wrap`] on
/// the concatenated input.
#[derive(Debug)]
pub struct LineWrapper<W: Write> {
    writer: W,
    width: usize,
    column: usize,
}

impl<W: Write> LineWrapper<W> {
    pub fn new(writer: W, width: usize) -> Self {
        LineWrapper {
            writer,
            width,
            column: 0,
        }
    }

    /// Writes `text`, breaking lines at the configured width.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        if self.width == 0 {
            return self.writer.write_all(text.as_bytes());
        }

        let mut rest = text;
        while !rest.is_empty() {
            if self.column == self.width {
                self.writer.write_all(b"\n")?;
                self.column = 0;
            }
            let room = self.width - self.column;
            let split = rest
                .char_indices()
                .nth(room)
                .map_or(rest.len(), |(index, _)| index);
            let (line, tail) = rest.split_at(split);
            self.writer.write_all(line.as_bytes())?;
            self.column += line.chars().count();
            rest = tail;
        }
        Ok(())
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
