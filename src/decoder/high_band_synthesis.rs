use super::{
    filters::{filter_mem2, iir_mem2},
    line_spectral_pairs::LpcState,
};
use crate::common::Scaler;

/// How the high band excitation is turned into a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisFilter {
    /// Perceptual enhancement cascade: `awk2 / awk1` followed by `awk3 / A(z)`
    Enhanced,

    /// Plain all-pole `1 / A(z)`
    Plain,
}

impl SynthesisFilter {
    pub fn from_enhancement(enabled: bool) -> Self {
        if enabled {
            Self::Enhanced
        } else {
            Self::Plain
        }
    }

    pub fn is_enhanced(&self) -> bool {
        matches!(self, Self::Enhanced)
    }

    /// Filters `signal` in place with the filters currently held by `lpc`
    ///
    /// # Arguments
    ///
    /// * `mem` - Synthesis memory, `2 * lpc_order` long. The plain filter and the second
    ///   enhancement stage use the first half, the first enhancement stage the second half.
    pub fn apply(&self, signal: &mut [Scaler], lpc: &LpcState, mem: &mut [Scaler]) {
        let order = lpc.interpolated_lpc().len() - 1;
        match self {
            Self::Enhanced => {
                let (base, offset) = mem.split_at_mut(order);
                filter_mem2(signal, lpc.awk2(), lpc.awk1(), offset);
                filter_mem2(signal, lpc.awk3(), lpc.interpolated_lpc(), base);
            }
            Self::Plain => {
                // the enhancement stage is out of the loop, its memory would be stale next time
                mem[order..2 * order].fill(0.0);
                iir_mem2(signal, lpc.interpolated_lpc(), &mut mem[..order]);
            }
        }
    }
}
