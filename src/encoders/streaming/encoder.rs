use crate::core::alphabet::Alphabet;
use crate::core::config::EncodingMode;
use crate::encoders::algorithms::{BitState, packer, passthrough};
use crate::features::wrap::LineWrapper;
use std::io::{Read, Write};
use tracing::{debug, trace};

use super::CHUNK_SIZE;

/// Streaming encoder for processing large amounts of data efficiently.
///
/// Reads the input in fixed-size chunks and writes encoded text as it is
/// produced, so memory use does not grow with the input. The output is
/// identical to [`crate::encode`] on the whole input (plus line breaks when
/// wrapping is enabled).
pub struct StreamingEncoder<'a, W: Write> {
    alphabet: &'a Alphabet,
    writer: LineWrapper<W>,
    mode: EncodingMode,
}

impl<'a, W: Write> StreamingEncoder<'a, W> {
    /// Creates a new streaming encoder in wide mode without wrapping.
    ///
    /// # Arguments
    ///
    /// * `alphabet` - The alphabet to use for the wide mode
    /// * `writer` - The destination for encoded output
    pub fn new(alphabet: &'a Alphabet, writer: W) -> Self {
        StreamingEncoder {
            alphabet,
            writer: LineWrapper::new(writer, 0),
            mode: EncodingMode::Wide,
        }
    }

    /// Sets the output mode.
    pub fn with_mode(mut self, mode: EncodingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Wraps output after `width` characters (0 disables wrapping).
    pub fn with_wrap(self, width: usize) -> Self {
        StreamingEncoder {
            alphabet: self.alphabet,
            writer: LineWrapper::new(self.writer.into_inner(), width),
            mode: self.mode,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Encodes everything `reader` yields.
    ///
    /// Returns the number of input bytes consumed.
    pub fn encode<R: Read>(&mut self, reader: &mut R) -> std::io::Result<u64> {
        let total = match self.mode {
            EncodingMode::Wide => self.encode_wide(reader)?,
            EncodingMode::Base64 => self.encode_base64(reader)?,
        };
        self.writer.get_mut().flush()?;
        debug!(mode = self.mode.as_str(), input_bytes = total, "stream encoded");
        Ok(total)
    }

    fn encode_wide<R: Read>(&mut self, reader: &mut R) -> std::io::Result<u64> {
        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut encoded = String::with_capacity(packer::group_count(CHUNK_SIZE) * 3);
        let mut state = BitState::new();
        let mut total = 0u64;

        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            total += bytes_read as u64;
            trace!(bytes_read, "encoding chunk");

            encoded.clear();
            state = buffer[..bytes_read].iter().fold(state, |state, &byte| {
                packer::pack_byte(state, byte, self.alphabet, &mut encoded)
            });
            self.writer.write_str(&encoded)?;
        }

        encoded.clear();
        packer::finish(state, self.alphabet, &mut encoded);
        self.writer.write_str(&encoded)?;
        Ok(total)
    }

    fn encode_base64<R: Read>(&mut self, reader: &mut R) -> std::io::Result<u64> {
        // Base64 works on 3-byte groups; the tail carries over to the next chunk
        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut carry: Vec<u8> = Vec::with_capacity(CHUNK_SIZE + 2);
        let mut total = 0u64;

        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            total += bytes_read as u64;
            trace!(bytes_read, "encoding chunk");

            carry.extend_from_slice(&buffer[..bytes_read]);
            let aligned = carry.len() - carry.len() % 3;
            if aligned > 0 {
                self.writer.write_str(&passthrough::encode(&carry[..aligned]))?;
                carry.drain(..aligned);
            }
        }

        self.writer.write_str(&passthrough::encode(&carry))?;
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reader that hands out at most `step` bytes per call.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    fn stream(data: &[u8], mode: EncodingMode, step: usize) -> String {
        let alphabet = Alphabet::new();
        let mut encoder = StreamingEncoder::new(&alphabet, Vec::new()).with_mode(mode);
        let consumed = encoder.encode(&mut Trickle { data, step }).unwrap();
        assert_eq!(consumed, data.len() as u64);
        String::from_utf8(encoder.into_inner()).unwrap()
    }

    #[test]
    fn test_wide_matches_one_shot() {
        let alphabet = Alphabet::new();
        let data: Vec<u8> = (0..10_000u32).map(|i| (i * 7 % 251) as u8).collect();
        for step in [1, 2, 7, 4096] {
            assert_eq!(
                stream(&data, EncodingMode::Wide, step),
                packer::encode(&data, &alphabet)
            );
        }
    }

    #[test]
    fn test_base64_matches_one_shot() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 256) as u8).collect();
        for step in [1, 2, 5, 4096] {
            assert_eq!(stream(&data, EncodingMode::Base64, step), passthrough::encode(&data));
        }
    }

    #[test]
    fn test_empty_input() {
        let alphabet = Alphabet::new();
        assert_eq!(stream(&[], EncodingMode::Wide, 16), packer::encode(&[], &alphabet));
        assert_eq!(stream(&[], EncodingMode::Base64, 16), "");
    }

    #[test]
    fn test_wrap() {
        let alphabet = Alphabet::new();
        let data = vec![0xA5u8; 100];
        let mut encoder = StreamingEncoder::new(&alphabet, Vec::new())
            .with_mode(EncodingMode::Base64)
            .with_wrap(10);
        encoder.encode(&mut Cursor::new(&data)).unwrap();
        let out = String::from_utf8(encoder.into_inner()).unwrap();
        assert_eq!(out, crate::features::wrap::wrap(&passthrough::encode(&data), 10));
    }
}
