//! Bit accumulator shared by the packer and the unpacker.

use crate::core::alphabet::GROUP_BITS;

/// Accumulator plus the number of valid low-order bits it holds.
///
/// A plain `Copy` value: every operation returns a new state, so packing and
/// unpacking are folds over the input. The accumulator never holds bits above
/// `bits`. Both codecs stay below 23 live bits, so `u32` is wide enough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitState {
    acc: u32,
    bits: u32,
}

impl BitState {
    pub const fn new() -> Self {
        BitState { acc: 0, bits: 0 }
    }

    pub const fn accumulator(self) -> u32 {
        self.acc
    }

    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Appends the low `width` bits of `value` below the current contents.
    #[must_use]
    pub fn push(self, value: u32, width: u32) -> Self {
        debug_assert!(self.bits + width < u32::BITS);
        debug_assert!(value >> width == 0);
        BitState {
            acc: (self.acc << width) | value,
            bits: self.bits + width,
        }
    }

    /// Removes the top `width` bits, or `None` if fewer are held.
    #[must_use]
    pub fn take(self, width: u32) -> Option<(u32, Self)> {
        if self.bits < width {
            return None;
        }
        let bits = self.bits - width;
        let value = self.acc >> bits;
        Some((
            value,
            BitState {
                acc: self.acc & low_mask(bits),
                bits,
            },
        ))
    }

    /// Final group of the packer: the leftover bits, a stop bit, then zeros.
    ///
    /// Must only be called with fewer than [`GROUP_BITS`] bits held.
    pub fn seal(self) -> u32 {
        debug_assert!(self.bits < GROUP_BITS);
        ((self.acc << 1) | 1) << (GROUP_BITS - 1 - self.bits)
    }

    /// Inverse of [`seal`](Self::seal): drops trailing zero padding and then
    /// the stop bit.
    #[must_use]
    pub fn strip_padding(self) -> Self {
        let mut state = self;
        while state.bits > 0 && state.acc & 1 == 0 {
            state.acc >>= 1;
            state.bits -= 1;
        }
        if state.bits > 0 {
            state.acc >>= 1;
            state.bits -= 1;
        }
        state
    }
}

fn low_mask(bits: u32) -> u32 {
    (1u32 << bits) - 1
}
