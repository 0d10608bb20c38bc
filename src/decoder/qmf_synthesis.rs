use crate::{
    common::{constants::QMF_ORDER, Scaler},
    tables::qmf_tables::{H0, H1},
};
use itertools::izip;

/// Zero-stuffing upsampler followed by an FIR filter, `y = a * up2(x)`
///
/// Produces `y.len()` output samples from the first `y.len() / 2` samples of `x`. The filter
/// history survives between calls in `mem` so consecutive frames join without a seam.
///
/// # Arguments
///
/// * `x` - Input at half rate
/// * `a` - Filter taps (length a multiple of 4)
/// * `y` - Output at full rate (length a multiple of 4)
/// * `xx` - Scratch space, at least `y.len() + a.len() - 1` long
/// * `mem` - Filter history, `a.len()` long
pub fn fir_mem_up(x: &[Scaler], a: &[Scaler], y: &mut [Scaler], xx: &mut [Scaler], mem: &mut [Scaler]) {
    let n = y.len();
    let m = a.len();
    let half = n / 2;

    // time reversed input, only the even positions are ever read
    for i in 0..half {
        xx[2 * i] = x[half - 1 - i];
    }
    for i in (0..m - 1).step_by(2) {
        xx[n + i] = mem[i + 1];
    }

    for i in (0..n).step_by(4) {
        let mut y0 = 0.0;
        let mut y1 = 0.0;
        let mut y2 = 0.0;
        let mut y3 = 0.0;
        let mut x0 = xx[n - 4 - i];

        for j in (0..m).step_by(4) {
            let a0 = a[j];
            let a1 = a[j + 1];
            let x1 = xx[n - 2 + j - i];
            y0 += a0 * x1;
            y1 += a1 * x1;
            y2 += a0 * x0;
            y3 += a1 * x0;

            let a0 = a[j + 2];
            let a1 = a[j + 3];
            x0 = xx[n + j - i];
            y0 += a0 * x0;
            y1 += a1 * x0;
            y2 += a0 * x1;
            y3 += a1 * x1;
        }

        y[i] = y0;
        y[i + 1] = y1;
        y[i + 2] = y2;
        y[i + 3] = y3;
    }

    for i in (0..m - 1).step_by(2) {
        mem[i + 1] = xx[i];
    }
}

/// Recombines a low band and a high band into one signal at twice their sampling rate
pub struct QmfSynthesis<'a> {
    low_up: &'a mut [Scaler],
    high_up: &'a mut [Scaler],
    scratch: &'a mut [Scaler],
    low_mem: &'a mut [Scaler],
    high_mem: &'a mut [Scaler],
}

impl<'a> QmfSynthesis<'a> {
    pub fn new(full_frame_size: usize, scaler_buf: &'a mut [Scaler]) -> (Self, &'a mut [Scaler]) {
        let (low_up, scaler_buf) = scaler_buf.split_at_mut(full_frame_size);
        let (high_up, scaler_buf) = scaler_buf.split_at_mut(full_frame_size);
        let (scratch, scaler_buf) = scaler_buf.split_at_mut(full_frame_size + QMF_ORDER - 1);
        let (low_mem, scaler_buf) = scaler_buf.split_at_mut(QMF_ORDER);
        let (high_mem, scaler_buf) = scaler_buf.split_at_mut(QMF_ORDER);
        low_mem.fill(0.0);
        high_mem.fill(0.0);

        (
            Self {
                low_up,
                high_up,
                scratch,
                low_mem,
                high_mem,
            },
            scaler_buf,
        )
    }

    pub const fn calc_working_buffer_length(full_frame_size: usize) -> usize {
        3 * full_frame_size + QMF_ORDER - 1 + 2 * QMF_ORDER
    }

    /// Writes `2 * (H0 * up2(low) - H1 * up2(high))` into `samples_out[..full_frame_size]`
    pub fn merge(&mut self, low: &[Scaler], high: &[Scaler], samples_out: &mut [Scaler]) {
        fir_mem_up(low, &H0, self.low_up, self.scratch, self.low_mem);
        fir_mem_up(high, &H1, self.high_up, self.scratch, self.high_mem);

        for (out, y0, y1) in izip!(samples_out.iter_mut(), self.low_up.iter(), self.high_up.iter()) {
            *out = 2.0 * (*y0 - *y1);
        }
    }

    #[cfg(test)]
    pub(crate) fn memories(&self) -> (&[Scaler], &[Scaler]) {
        (&*self.low_mem, &*self.high_mem)
    }
}
