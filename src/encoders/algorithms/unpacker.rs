//! Decode path of the wide mode: symbols to 15-bit groups to bytes.

use crate::core::alphabet::{Alphabet, ESCAPE, GROUP_BITS, THRESHOLD};

use super::bits::BitState;
use super::errors::DecodeError;

/// Pushes a group that is known not to be the last one and flushes every
/// complete byte.
pub fn unpack_group(state: BitState, group: u32, out: &mut Vec<u8>) -> BitState {
    drain_bytes(state.push(group, GROUP_BITS), out)
}

/// Pushes the final group (if any), strips the stop-bit padding and flushes
/// the remaining bytes.
pub fn finish(state: BitState, last: Option<u32>, out: &mut Vec<u8>) {
    let state = match last {
        Some(group) => state.push(group, GROUP_BITS),
        None => state,
    };
    drain_bytes(state.strip_padding(), out);
}

fn drain_bytes(mut state: BitState, out: &mut Vec<u8>) -> BitState {
    while let Some((byte, rest)) = state.take(8) {
        out.push(byte as u8);
        state = rest;
    }
    state
}

/// Incremental symbol reader for the wide mode.
///
/// Resolves escape pairs and holds back the most recent group, since only
/// the last group of the input carries the stop-bit tail and must not be
/// flushed before [`finish`](Self::finish). Escapes and the held group
/// survive between calls, so input may arrive in arbitrary pieces.
#[derive(Debug)]
pub struct SymbolDecoder<'a> {
    alphabet: &'a Alphabet,
    state: BitState,
    pending: Option<u32>,
    escape_at: Option<usize>,
    position: usize,
}

impl<'a> SymbolDecoder<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        SymbolDecoder {
            alphabet,
            state: BitState::new(),
            pending: None,
            escape_at: None,
            position: 0,
        }
    }

    /// Consumes one symbol. Bytes that become final are appended to `out`.
    pub fn push(&mut self, c: char, out: &mut Vec<u8>) -> Result<(), DecodeError> {
        let position = self.position;
        self.position += 1;

        let group = if self.escape_at.take().is_some() {
            let offset = self
                .alphabet
                .escaped_index_of(c)
                .ok_or_else(|| self.reject_escaped(c, position))?;
            THRESHOLD as u32 + u32::from(offset)
        } else if c == ESCAPE {
            self.escape_at = Some(position);
            return Ok(());
        } else {
            let index = self
                .alphabet
                .index_of(c)
                .ok_or(DecodeError::unknown_symbol(c, position))?;
            u32::from(index)
        };

        if let Some(previous) = self.pending.replace(group) {
            self.state = unpack_group(self.state, previous, out);
        }
        Ok(())
    }

    /// Consumes every character of `symbols`.
    pub fn push_str(&mut self, symbols: &str, out: &mut Vec<u8>) -> Result<(), DecodeError> {
        symbols.chars().try_for_each(|c| self.push(c, out))
    }

    /// Completes decoding after the last symbol.
    pub fn finish(self, out: &mut Vec<u8>) -> Result<(), DecodeError> {
        if let Some(position) = self.escape_at {
            return Err(DecodeError::truncated_escape(position));
        }
        finish(self.state, self.pending, out);
        Ok(())
    }

    fn reject_escaped(&self, c: char, position: usize) -> DecodeError {
        if self.alphabet.index_of(c).is_some() {
            DecodeError::invalid_escape(c, position)
        } else {
            DecodeError::unknown_symbol(c, position)
        }
    }
}

/// Decodes wide-mode text that has already been stripped of whitespace.
pub fn decode(symbols: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    // Roughly 15 bits per 3-byte UTF-8 symbol
    let mut result = Vec::with_capacity(symbols.len() * 5 / 8);
    let mut decoder = SymbolDecoder::new(alphabet);
    decoder.push_str(symbols, &mut result)?;
    decoder.finish(&mut result)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::algorithms::packer;

    #[test]
    fn test_decode_single_zero_byte() {
        let alphabet = Alphabet::new();
        let text = alphabet.symbol(64).unwrap().to_string();
        assert_eq!(decode(&text, &alphabet).unwrap(), vec![0x00]);
    }

    #[test]
    fn test_decode_empty_marker() {
        let alphabet = Alphabet::new();
        let text = alphabet.symbol(1 << 14).unwrap().to_string();
        assert_eq!(decode(&text, &alphabet).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_round_trip_through_packer() {
        let alphabet = Alphabet::new();
        let data = b"\xff\x00\x00\x01\xff\x00\x00\x01\x10";
        let encoded = packer::encode(data, &alphabet);
        assert_eq!(decode(&encoded, &alphabet).unwrap(), data);
    }

    #[test]
    fn test_unknown_symbol() {
        let alphabet = Alphabet::new();
        let mut text = packer::encode(b"hello", &alphabet);
        text.insert(3, 'Z');
        let err = decode(&text, &alphabet).unwrap_err();
        assert_eq!(err, DecodeError::unknown_symbol('Z', 1));
    }

    #[test]
    fn test_truncated_escape() {
        let alphabet = Alphabet::new();
        let mut text = packer::encode(b"hi", &alphabet);
        text.push(ESCAPE);
        let last = text.chars().count() - 1;
        assert_eq!(
            decode(&text, &alphabet).unwrap_err(),
            DecodeError::truncated_escape(last)
        );
    }

    #[test]
    fn test_escape_out_of_range() {
        let alphabet = Alphabet::new();
        let beyond = alphabet.symbol(604).unwrap();
        let text: String = [ESCAPE, beyond].iter().collect();
        assert_eq!(
            decode(&text, &alphabet).unwrap_err(),
            DecodeError::invalid_escape(beyond, 1)
        );
    }

    #[test]
    fn test_double_escape() {
        let alphabet = Alphabet::new();
        assert_eq!(
            decode("..", &alphabet).unwrap_err(),
            DecodeError::unknown_symbol('.', 1)
        );
    }

    #[test]
    fn test_split_input_matches_whole() {
        let alphabet = Alphabet::new();
        let data: Vec<u8> = (0..=255).rev().collect();
        let encoded = packer::encode(&data, &alphabet);
        let chars: Vec<char> = encoded.chars().collect();

        for split in [1, 2, chars.len() / 2, chars.len() - 1] {
            let head: String = chars[..split].iter().collect();
            let tail: String = chars[split..].iter().collect();

            let mut out = Vec::new();
            let mut decoder = SymbolDecoder::new(&alphabet);
            decoder.push_str(&head, &mut out).unwrap();
            decoder.push_str(&tail, &mut out).unwrap();
            decoder.finish(&mut out).unwrap();
            assert_eq!(out, data);
        }
    }
}
