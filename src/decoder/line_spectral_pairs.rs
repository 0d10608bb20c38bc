use super::{
    bit_reader::BitReader,
    filters::{alternating_response, bw_lpc, bw_lpc_in_place},
    submode::HighLspQuant,
};
use crate::common::{constants::LSP_MARGIN, Scaler};
use core::f32::consts::PI;
use itertools::izip;
#[allow(unused_imports)]
use num_traits::real::Real;

/// Pushes line spectral pairs (radians) apart so that neighbours are at least `margin` away
/// from each other and from 0 and pi. This keeps the synthesis filter stable.
pub fn enforce_margin(lsp: &mut [Scaler], margin: Scaler) {
    let len = lsp.len();
    if len == 0 {
        return;
    }

    if lsp[0] < margin {
        lsp[0] = margin;
    }
    if lsp[len - 1] > PI - margin {
        lsp[len - 1] = PI - margin;
    }
    for i in 1..len.saturating_sub(1) {
        if lsp[i] < lsp[i - 1] + margin {
            lsp[i] = lsp[i - 1] + margin;
        }
        if lsp[i] > lsp[i + 1] - margin {
            lsp[i] = 0.5 * (lsp[i] + lsp[i + 1] - margin);
        }
    }
}

/// Converts line spectral pairs in the cosine domain into prediction coefficients
/// by expanding the symmetric and antisymmetric polynomials one second order section at a time
///
/// # Arguments
///
/// * `freq` - Cosines of the line spectral pairs (even length)
/// * `ak` - Output prediction coefficients, `freq.len() + 1` long with `ak[0] == 1`
/// * `pw` - Scratch space, at least `2 * freq.len() + 2` long
pub fn lsp_to_lpc(freq: &[Scaler], ak: &mut [Scaler], pw: &mut [Scaler]) {
    let order = freq.len();
    let m = order / 2;
    let tail = 4 * m;
    pw[..tail + 2].fill(0.0);

    let mut xin1: Scaler = 1.0;
    let mut xin2: Scaler = 1.0;

    for coef in ak[..=order].iter_mut() {
        for i in 0..m {
            let n1 = 4 * i;
            let n2 = n1 + 1;
            let n3 = n1 + 2;
            let n4 = n1 + 3;
            let xout1 = xin1 - 2.0 * freq[2 * i] * pw[n1] + pw[n2];
            let xout2 = xin2 - 2.0 * freq[2 * i + 1] * pw[n3] + pw[n4];
            pw[n2] = pw[n1];
            pw[n4] = pw[n3];
            pw[n1] = xin1;
            pw[n3] = xin2;
            xin1 = xout1;
            xin2 = xout2;
        }
        let xout1 = xin1 + pw[tail];
        let xout2 = xin2 - pw[tail + 1];
        *coef = (xout1 + xout2) * 0.5;
        pw[tail] = xin1;
        pw[tail + 1] = xin2;
        xin1 = 0.0;
        xin2 = 0.0;
    }
}

/// Spectral envelope of the high band across frames: the quantized line spectral pairs of the
/// previous and current frame, their per-subframe interpolation and the filters derived from it
pub struct LpcState<'a> {
    first_frame: bool,
    old_qlsp: &'a mut [Scaler],
    qlsp: &'a mut [Scaler],
    interp_qlsp: &'a mut [Scaler],
    interp_qlpc: &'a mut [Scaler],
    awk1: &'a mut [Scaler],
    awk2: &'a mut [Scaler],
    awk3: &'a mut [Scaler],
    pw: &'a mut [Scaler],
}

impl<'a> LpcState<'a> {
    pub fn new(lpc_order: usize, scaler_buf: &'a mut [Scaler]) -> (Self, &'a mut [Scaler]) {
        let (old_qlsp, scaler_buf) = scaler_buf.split_at_mut(lpc_order);
        let (qlsp, scaler_buf) = scaler_buf.split_at_mut(lpc_order);
        let (interp_qlsp, scaler_buf) = scaler_buf.split_at_mut(lpc_order);
        let (interp_qlpc, scaler_buf) = scaler_buf.split_at_mut(lpc_order + 1);
        let (awk1, scaler_buf) = scaler_buf.split_at_mut(lpc_order + 1);
        let (awk2, scaler_buf) = scaler_buf.split_at_mut(lpc_order + 1);
        let (awk3, scaler_buf) = scaler_buf.split_at_mut(lpc_order + 1);
        let (pw, scaler_buf) = scaler_buf.split_at_mut(2 * lpc_order + 2);

        // the buffer may be reused so start from a flat (pass-through) filter
        for buf in [
            &mut *old_qlsp,
            &mut *qlsp,
            &mut *interp_qlsp,
            &mut *interp_qlpc,
            &mut *awk1,
            &mut *awk2,
            &mut *awk3,
        ] {
            buf.fill(0.0);
        }
        interp_qlpc[0] = 1.0;

        (
            Self {
                first_frame: true,
                old_qlsp,
                qlsp,
                interp_qlsp,
                interp_qlpc,
                awk1,
                awk2,
                awk3,
                pw,
            },
            scaler_buf,
        )
    }

    pub const fn calc_working_buffer_length(lpc_order: usize) -> usize {
        3 * lpc_order + 4 * (lpc_order + 1) + 2 * lpc_order + 2
    }

    pub fn is_first_frame(&self) -> bool {
        self.first_frame
    }

    /// Forces the next frame to start interpolating from its own spectral pairs
    pub fn reset_interpolation(&mut self) {
        self.first_frame = true;
    }

    /// Reads the current frame's spectral pairs. On the first frame the previous pairs are
    /// taken to be the same so that interpolation starts from a known state.
    pub fn load_frame(&mut self, quant: &HighLspQuant, reader: &mut BitReader) {
        quant.unquant(self.qlsp, reader);
        if self.first_frame {
            self.old_qlsp.copy_from_slice(self.qlsp);
        }
    }

    /// Interpolates the spectral pairs for one subframe and converts them to prediction coefficients
    pub fn interpolate(&mut self, subframe: usize, nb_subframes: usize) {
        let weight = (1.0 + subframe as Scaler) / nb_subframes as Scaler;
        for (interp, old, current) in izip!(self.interp_qlsp.iter_mut(), self.old_qlsp.iter(), self.qlsp.iter()) {
            *interp = (1.0 - weight) * *old + weight * *current;
        }

        enforce_margin(self.interp_qlsp, LSP_MARGIN);

        // to the x-domain
        for lsp in self.interp_qlsp.iter_mut() {
            *lsp = (*lsp as f64).cos() as Scaler;
        }

        lsp_to_lpc(self.interp_qlsp, self.interp_qlpc, self.pw);
    }

    /// Derives the perceptual enhancement filters from the interpolated coefficients
    pub fn compute_enhancement(&mut self, k1: Scaler, k2: Scaler) {
        let k3 = k1 - k2;
        bw_lpc(k1, self.interp_qlpc, self.awk1);
        bw_lpc(k2, self.interp_qlpc, self.awk2);
        bw_lpc(k3, self.interp_qlpc, self.awk3);
    }

    pub fn bandwidth_expand(&mut self, gamma: Scaler) {
        bw_lpc_in_place(gamma, self.interp_qlpc);
    }

    /// Response of the interpolated filter at the band splitting frequency and its coefficient sum
    pub fn band_edge_response(&self) -> (Scaler, Scaler) {
        alternating_response(self.interp_qlpc)
    }

    /// Makes the current spectral pairs the starting point of the next frame's interpolation
    pub fn commit_frame(&mut self) {
        self.old_qlsp.copy_from_slice(self.qlsp);
        self.first_frame = false;
    }

    pub fn old_lsp(&self) -> &[Scaler] {
        &*self.old_qlsp
    }

    pub fn current_lsp(&self) -> &[Scaler] {
        &*self.qlsp
    }

    pub fn interpolated_lpc(&self) -> &[Scaler] {
        &*self.interp_qlpc
    }

    pub fn awk1(&self) -> &[Scaler] {
        &*self.awk1
    }

    pub fn awk2(&self) -> &[Scaler] {
        &*self.awk2
    }

    pub fn awk3(&self) -> &[Scaler] {
        &*self.awk3
    }
}
