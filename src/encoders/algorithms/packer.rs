//! Encode path of the wide mode: bytes to 15-bit groups to symbols.

use crate::core::alphabet::{Alphabet, GROUP_BITS};

use super::bits::BitState;

/// Number of groups (symbols, counting an escape pair as one) produced for
/// `len` input bytes, including the final stop-bit group.
pub fn group_count(len: usize) -> usize {
    (len * 8 + 1).div_ceil(GROUP_BITS as usize)
}

/// Feeds one byte into the packer, emitting every group that completes.
pub fn pack_byte(state: BitState, byte: u8, alphabet: &Alphabet, out: &mut String) -> BitState {
    let mut state = state.push(u32::from(byte), 8);
    while let Some((group, rest)) = state.take(GROUP_BITS) {
        alphabet.emit(group, out);
        state = rest;
    }
    state
}

/// Emits the final group carrying the leftover bits and the stop bit.
///
/// Always produces output, also when no byte was packed.
pub fn finish(state: BitState, alphabet: &Alphabet, out: &mut String) {
    alphabet.emit(state.seal(), out);
}

/// Encodes `data` with the wide alphabet.
pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    // 3 UTF-8 bytes per symbol; escape pairs add one more but are rare
    let mut result = String::with_capacity(group_count(data.len()) * 3);

    let state = data.iter().fold(BitState::new(), |state, &byte| {
        pack_byte(state, byte, alphabet, &mut result)
    });
    finish(state, alphabet, &mut result);

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::{ESCAPE, THRESHOLD};

    #[test]
    fn test_empty_input_is_one_symbol() {
        let alphabet = Alphabet::new();
        let encoded = encode(&[], &alphabet);
        assert_eq!(encoded.chars().count(), 1);
        assert_eq!(encoded.chars().next(), alphabet.symbol(1 << 14));
    }

    #[test]
    fn test_group_count() {
        assert_eq!(group_count(0), 1);
        assert_eq!(group_count(1), 1);
        assert_eq!(group_count(2), 2);
        assert_eq!(group_count(15), 9);
    }

    #[test]
    fn test_single_zero_byte() {
        let alphabet = Alphabet::new();
        // 00000000 + stop bit + 6 zeros = 64
        assert_eq!(encode(&[0x00], &alphabet), alphabet.symbol(64).unwrap().to_string());
    }

    #[test]
    fn test_pack_byte_emits_when_group_completes() {
        let alphabet = Alphabet::new();
        let mut out = String::new();

        let state = pack_byte(BitState::new(), 0xFF, &alphabet, &mut out);
        assert!(out.is_empty());
        assert_eq!(state.bits(), 8);

        let state = pack_byte(state, 0xFF, &alphabet, &mut out);
        // 0x7FFF is the top of the escape range
        let expected: String = [ESCAPE, alphabet.escaped_symbol(603).unwrap()].iter().collect();
        assert_eq!(out, expected);
        assert_eq!(state.bits(), 1);
        assert_eq!(state.accumulator(), 1);
    }

    #[test]
    fn test_threshold_boundary_groups() {
        let alphabet = Alphabet::new();

        // First group = THRESHOLD - 1: the top 15 of 16 bits, low bit zero
        let below = ((THRESHOLD as u32 - 1) << 1) as u16;
        let encoded = encode(&below.to_be_bytes(), &alphabet);
        assert_eq!(encoded.chars().next(), alphabet.symbol(THRESHOLD - 1));
        assert_eq!(encoded.chars().count(), 2);

        let at = ((THRESHOLD as u32) << 1) as u16;
        let encoded: Vec<char> = encode(&at.to_be_bytes(), &alphabet).chars().collect();
        assert_eq!(encoded[0], ESCAPE);
        assert_eq!(Some(encoded[1]), alphabet.escaped_symbol(0));
    }
}
