use std::collections::HashMap;
use std::fmt;

/// First code point of the Hangul syllables block.
pub const HANGUL_START: u32 = 0xAC00;
/// Number of Hangul syllables (U+AC00..=U+D7A3).
pub const HANGUL_LEN: u32 = 11_172;
/// First code point of the CJK unified ideographs block.
pub const CJK_START: u32 = 0x4E00;
/// Number of CJK unified ideographs (U+4E00..=U+9FFF).
pub const CJK_LEN: u32 = 20_992;

/// Count of directly addressable group values. Equal to the alphabet size.
pub const THRESHOLD: usize = (HANGUL_LEN + CJK_LEN) as usize;

/// Sentinel that marks the next symbol as an offset above [`THRESHOLD`].
pub const ESCAPE: char = '.';

/// Width of one packed group in bits.
pub const GROUP_BITS: u32 = 15;

/// Number of distinct group values (`2^15`).
pub const GROUP_VALUES: usize = 1 << GROUP_BITS;

/// Number of group values that need an escape pair: `[THRESHOLD, 2^15)`.
pub const EXTENSION_WIDTH: usize = GROUP_VALUES - THRESHOLD;

const _: () = assert!(EXTENSION_WIDTH <= THRESHOLD);

/// The symbol table of the wide encoding and its reverse index.
///
/// Built once from two gap-free Unicode blocks, Hangul syllables followed by
/// CJK unified ideographs, and never mutated afterwards. The first
/// [`EXTENSION_WIDTH`] entries double as the second-level alphabet used after
/// an [`ESCAPE`].
///
/// Building is cheap but not free (a 32k-entry hash map), so share one
/// instance behind an `Arc` rather than rebuilding per call.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    char_to_index: HashMap<char, u16>,
}

impl Alphabet {
    /// Builds the symbol table and reverse index.
    pub fn new() -> Self {
        let symbols: Vec<char> = (HANGUL_START..HANGUL_START + HANGUL_LEN)
            .chain(CJK_START..CJK_START + CJK_LEN)
            .filter_map(char::from_u32)
            .collect();
        debug_assert_eq!(symbols.len(), THRESHOLD);

        let char_to_index = symbols
            .iter()
            .zip(0u16..)
            .map(|(&c, i)| (c, i))
            .collect();

        Alphabet {
            symbols,
            char_to_index,
        }
    }

    /// Number of directly addressable symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All symbols in table order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Symbol for a direct group value.
    ///
    /// Returns `None` if `index >= THRESHOLD`.
    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Symbol that follows an escape for the group value `THRESHOLD + offset`.
    ///
    /// Returns `None` if `offset >= EXTENSION_WIDTH`.
    pub fn escaped_symbol(&self, offset: usize) -> Option<char> {
        self.extension().get(offset).copied()
    }

    /// Position of `c` in the table, if it is a symbol.
    pub fn index_of(&self, c: char) -> Option<u16> {
        self.char_to_index.get(&c).copied()
    }

    /// Offset of `c` when read after an escape.
    ///
    /// Returns `None` for symbols outside the first [`EXTENSION_WIDTH`]
    /// entries as well as for unknown characters.
    pub fn escaped_index_of(&self, c: char) -> Option<u16> {
        self.index_of(c)
            .filter(|&index| usize::from(index) < EXTENSION_WIDTH)
    }

    /// Appends the text form of a 15-bit group value.
    ///
    /// Values below [`THRESHOLD`] become one symbol, the rest an escape pair.
    pub fn emit(&self, group: u32, out: &mut String) {
        let group = group as usize;
        debug_assert!(group < GROUP_VALUES);
        if group < THRESHOLD {
            out.push(self.symbols[group]);
        } else {
            out.push(ESCAPE);
            out.push(self.extension()[group - THRESHOLD]);
        }
    }

    fn extension(&self) -> &[char] {
        &self.symbols[..EXTENSION_WIDTH]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("len", &self.symbols.len())
            .field("first", &self.symbols.first())
            .field("last", &self.symbols.last())
            .finish_non_exhaustive()
    }
}
