use bitvec::prelude::*;

/// Most-significant-bit-first cursor over one encoded frame
///
/// Reading past the end never fails: missing bits read as zero and the overflow flag is raised
/// so that a truncated frame degrades the audio instead of aborting the decode.
pub struct BitReader<'b> {
    bits: &'b BitSlice<u8, Msb0>,
    cursor: usize,
    overflow: bool,
}

impl<'b> BitReader<'b> {
    pub fn new(buf: &'b [u8]) -> Self {
        Self {
            bits: buf.view_bits::<Msb0>(),
            cursor: 0,
            overflow: false,
        }
    }

    /// Returns the next bit without consuming it
    pub fn peek(&self) -> bool {
        self.bits.get(self.cursor).map(|bit| *bit).unwrap_or(false)
    }

    /// Consumes the next `num_bits` bits (at most 32) and returns them as an unsigned integer,
    /// first bit in the most significant position
    pub fn unpack(&mut self, num_bits: usize) -> u32 {
        debug_assert!(num_bits <= 32);

        let end = self.cursor + num_bits;
        if end > self.bits.len() {
            self.overflow = true;
            self.cursor = self.bits.len();
            return 0;
        }

        let value = self.bits[self.cursor..end]
            .iter()
            .fold(0_u32, |acc, bit| (acc << 1) | *bit as u32);
        self.cursor = end;
        value
    }

    /// Skips `num_bits` bits
    pub fn advance(&mut self, num_bits: usize) {
        let end = self.cursor + num_bits;
        if end > self.bits.len() {
            self.overflow = true;
            self.cursor = self.bits.len();
        } else {
            self.cursor = end;
        }
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.cursor
    }

    pub fn bits_consumed(&self) -> usize {
        self.cursor
    }

    pub fn has_overflowed(&self) -> bool {
        self.overflow
    }
}
