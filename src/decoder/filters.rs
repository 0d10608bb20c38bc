use crate::common::Scaler;
use itertools::izip;

/// Bandwidth expansion: `lpc_out[i] = gamma^i * lpc_in[i]`
pub fn bw_lpc(gamma: Scaler, lpc_in: &[Scaler], lpc_out: &mut [Scaler]) {
    let mut factor = 1.0;
    for (to, from) in lpc_out.iter_mut().zip(lpc_in) {
        *to = factor * *from;
        factor *= gamma;
    }
}

/// Same as [`bw_lpc`] but overwrites the coefficients
pub fn bw_lpc_in_place(gamma: Scaler, lpc: &mut [Scaler]) {
    let mut factor = 1.0;
    for coef in lpc.iter_mut() {
        *coef *= factor;
        factor *= gamma;
    }
}

/// All-pole synthesis filter `1 / A(z)` run in place (transposed direct form II)
///
/// # Arguments
///
/// * `signal` - Excitation in, filtered signal out
/// * `den` - Prediction coefficients `a[0..=order]` (`a[0]` is assumed to be 1 and ignored)
/// * `mem` - Filter state carried between calls, at least `order` long
pub fn iir_mem2(signal: &mut [Scaler], den: &[Scaler], mem: &mut [Scaler]) {
    let order = den.len() - 1;
    let mem = &mut mem[..order];

    for sample in signal.iter_mut() {
        let y = *sample + mem[0];
        *sample = y;
        for j in 0..order - 1 {
            mem[j] = mem[j + 1] - den[j + 1] * y;
        }
        mem[order - 1] = -den[order] * y;
    }
}

/// Pole-zero filter `N(z) / D(z)` run in place (transposed direct form II)
///
/// # Arguments
///
/// * `signal` - Input in, filtered signal out
/// * `num` - Numerator coefficients `n[0..=order]`
/// * `den` - Denominator coefficients `d[0..=order]` (`d[0]` is assumed to be 1 and ignored)
/// * `mem` - Filter state carried between calls, at least `order` long
pub fn filter_mem2(signal: &mut [Scaler], num: &[Scaler], den: &[Scaler], mem: &mut [Scaler]) {
    let order = den.len() - 1;
    let mem = &mut mem[..order];

    for sample in signal.iter_mut() {
        let xi = *sample;
        let yi = num[0] * xi + mem[0];
        *sample = yi;
        for j in 0..order - 1 {
            mem[j] = mem[j + 1] + num[j + 1] * xi - den[j + 1] * yi;
        }
        mem[order - 1] = num[order] * xi - den[order] * yi;
    }
}

/// Sum of the coefficients with alternating sign, i.e. `A(z)` evaluated at `z = -1`
/// (the response of the filter at the band splitting frequency) together with the plain sum
pub fn alternating_response(lpc: &[Scaler]) -> (Scaler, Scaler) {
    let mut sign = 1.0;
    let mut alternating = 0.0;
    let mut plain = 0.0;
    for coef in lpc {
        alternating += sign * *coef;
        sign = -sign;
        plain += *coef;
    }
    (alternating, plain)
}

/// Multiplies a buffer by a constant
pub fn scale(signal: &mut [Scaler], gain: Scaler) {
    for sample in signal.iter_mut() {
        *sample *= gain;
    }
}

/// `signal[i] += gain * addend[i]`
pub fn add_scaled(signal: &mut [Scaler], addend: &[Scaler], gain: Scaler) {
    for (sample, add) in izip!(signal.iter_mut(), addend) {
        *sample += *add * gain;
    }
}
