use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::{SymbolDecoder, passthrough};
use crate::features::detection::{Format, is_transport_whitespace};
use std::io::{Read, Write};
use tracing::{debug, trace};

use super::{CHUNK_SIZE, StreamError};

/// Characters per Base64 quantum.
const QUANTUM: usize = 4;

/// Streaming decoder for processing large amounts of encoded data efficiently.
///
/// Accepts the same input as [`crate::decode`]: transport whitespace is
/// skipped, the format is detected from the first significant character, and
/// errors are the same. UTF-8 sequences split across reads are reassembled.
pub struct StreamingDecoder<'a, W: Write> {
    alphabet: &'a Alphabet,
    writer: W,
}

enum Sink<'a> {
    Undecided,
    Wide(SymbolDecoder<'a>),
    Base64 {
        quanta: String,
        /// Characters already decoded and removed from `quanta`
        drained: usize,
    },
}

impl<'a, W: Write> StreamingDecoder<'a, W> {
    /// Creates a new streaming decoder.
    ///
    /// # Arguments
    ///
    /// * `alphabet` - The alphabet used for the wide mode
    /// * `writer` - The destination for decoded output
    pub fn new(alphabet: &'a Alphabet, writer: W) -> Self {
        StreamingDecoder { alphabet, writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Decodes everything `reader` yields.
    ///
    /// Returns the number of bytes written. Bytes are written as they become
    /// final; on error, output already written stays written.
    pub fn decode<R: Read>(&mut self, reader: &mut R) -> Result<u64, StreamError> {
        let mut buffer = vec![0u8; CHUNK_SIZE];
        // Incomplete UTF-8 sequence left over from the previous read
        let mut pending: Vec<u8> = Vec::with_capacity(CHUNK_SIZE + 4);
        let mut consumed = 0usize;
        let mut sink = Sink::Undecided;
        let mut out = Vec::with_capacity(CHUNK_SIZE);
        let mut total = 0u64;

        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            trace!(bytes_read, "decoding chunk");
            pending.extend_from_slice(&buffer[..bytes_read]);

            let valid = match std::str::from_utf8(&pending) {
                Ok(text) => text.len(),
                Err(e) if e.error_len().is_none() => e.valid_up_to(),
                Err(e) => {
                    return Err(StreamError::InvalidUtf8 {
                        offset: consumed + e.valid_up_to(),
                    });
                }
            };
            // `valid` is a char boundary reported by from_utf8
            let text = std::str::from_utf8(&pending[..valid]).unwrap_or_default();

            out.clear();
            self.feed(&mut sink, text, &mut out)?;
            total += self.write(&out)?;

            consumed += valid;
            pending.drain(..valid);
        }

        if !pending.is_empty() {
            return Err(StreamError::InvalidUtf8 { offset: consumed });
        }

        out.clear();
        match sink {
            Sink::Undecided => {}
            Sink::Wide(decoder) => decoder.finish(&mut out)?,
            Sink::Base64 { quanta, drained } => {
                out = passthrough::decode_at(&quanta, drained)?;
            }
        }
        total += self.write(&out)?;
        self.writer.flush()?;

        debug!(output_bytes = total, "stream decoded");
        Ok(total)
    }

    fn feed(&self, sink: &mut Sink<'a>, text: &str, out: &mut Vec<u8>) -> Result<(), StreamError> {
        for c in text.chars().filter(|&c| !is_transport_whitespace(c)) {
            if let Sink::Undecided = sink {
                *sink = match Format::of_first_char(c) {
                    Format::Wide => Sink::Wide(SymbolDecoder::new(self.alphabet)),
                    _ => Sink::Base64 {
                        quanta: String::with_capacity(CHUNK_SIZE),
                        drained: 0,
                    },
                };
            }
            match sink {
                Sink::Wide(decoder) => decoder.push(c, out)?,
                Sink::Base64 { quanta, .. } => quanta.push(c),
                Sink::Undecided => {}
            }
        }

        if let Sink::Base64 { quanta, drained } = sink {
            drain_base64(quanta, drained, out)?;
        }
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> std::io::Result<u64> {
        self.writer.write_all(bytes)?;
        Ok(bytes.len() as u64)
    }
}

/// Decodes all complete Base64 quanta except the last one.
///
/// The last quantum may carry padding, so it waits until end of input. Any
/// padding among the quanta decoded here is an error, exactly as it would be
/// for the whole text. `drained` counts the characters removed so far, so
/// error offsets match the whole text.
fn drain_base64(
    quanta: &mut String,
    drained: &mut usize,
    out: &mut Vec<u8>,
) -> Result<(), StreamError> {
    let complete = quanta.len() / QUANTUM * QUANTUM;
    if complete <= QUANTUM {
        return Ok(());
    }
    let ready = complete - QUANTUM;
    if !quanta.is_char_boundary(ready) || quanta[..ready].contains('=') {
        // Let the one-shot decoder report the precise error
        passthrough::decode_at(quanta, *drained)?;
    }
    out.extend(passthrough::decode_at(&quanta[..ready], *drained)?);
    quanta.drain(..ready);
    *drained += ready;
    Ok(())
}
