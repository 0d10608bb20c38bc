use super::bit_reader::BitReader;
use crate::common::Scaler;
#[allow(unused_imports)]
use num_traits::real::Real;

const E_RATIO_QUANT: [Scaler; 4] = [0.25, 0.315, 0.397, 0.5];

/// Intensity stereo parameters and the smoothed channel gains carried between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereoState {
    /// Left to right energy balance (1 is centred)
    pub balance: Scaler,

    /// Ratio between the mono energy and the total stereo energy
    pub e_ratio: Scaler,
    smooth_left: Scaler,
    smooth_right: Scaler,
}

impl Default for StereoState {
    fn default() -> Self {
        Self::new()
    }
}

impl StereoState {
    pub const fn new() -> Self {
        Self {
            balance: 1.0,
            e_ratio: 0.5,
            smooth_left: 1.0,
            smooth_right: 1.0,
        }
    }

    /// Reads the in-band stereo parameters: a sign bit, a 5 bit balance and a 2 bit energy ratio
    pub fn read_parameters(&mut self, reader: &mut BitReader) {
        let sign: Scaler = if reader.unpack(1) != 0 { -1.0 } else { 1.0 };
        let balance_index = reader.unpack(5) as Scaler;
        self.balance = (sign * 0.25 * balance_index).exp();
        self.e_ratio = E_RATIO_QUANT[reader.unpack(2) as usize];
        log::trace!("Stereo balance {} energy ratio {}", self.balance, self.e_ratio);
    }

    /// Expands the mono samples in `data[..frame_size]` into interleaved stereo over
    /// `data[..2 * frame_size]`. Runs backwards so that it can work in place.
    pub fn decode(&mut self, data: &mut [Scaler], frame_size: usize) {
        let frame_size = frame_size.min(data.len() / 2);
        let e_tot: Scaler = data[..frame_size].iter().rev().map(|x| x * x).sum();
        let e_sum = e_tot / self.e_ratio;
        let e_left = e_sum * self.balance / (1.0 + self.balance);
        let e_right = e_sum - e_left;

        let e_left = (e_left / (e_tot + 0.01)).sqrt();
        let e_right = (e_right / (e_tot + 0.01)).sqrt();

        for i in (0..frame_size).rev() {
            let mono = data[i];
            self.smooth_left = 0.98 * self.smooth_left + 0.02 * e_left;
            self.smooth_right = 0.98 * self.smooth_right + 0.02 * e_right;
            data[2 * i] = self.smooth_left * mono;
            data[2 * i + 1] = self.smooth_right * mono;
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn centred_stereo_duplicates_the_mono_signal() {
        let mut stereo = StereoState::new();
        let mut data = [1.0, 2.0, 3.0, 4.0, 0.0, 0.0, 0.0, 0.0];

        stereo.decode(&mut data, 4);

        let expected = [1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0];
        for (got, expected) in data.iter().zip(expected.iter()) {
            assert!((got - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn silence_stays_silent() {
        let mut stereo = StereoState::default();
        let mut data = [0.0; 8];

        stereo.decode(&mut data, 4);

        assert_eq!(data, [0.0; 8]);
        assert!(stereo.smooth_left.is_finite());
    }

    #[test]
    fn read_parameters_and_pan_left() {
        let mut stereo = StereoState::new();
        // sign 1, balance 4, ratio index 3
        let buf = [0b1001_0011];
        let mut reader = BitReader::new(&buf);

        stereo.read_parameters(&mut reader);

        assert!((stereo.balance - (-1.0_f32).exp()).abs() < 1e-6);
        assert_eq!(stereo.e_ratio, 0.5);
        assert_eq!(reader.bits_consumed(), 8);

        // balance below 1 moves energy to the right channel
        let mut data = [0.0; 400];
        for (i, sample) in data[..200].iter_mut().enumerate() {
            *sample = if i % 2 == 0 { 1.0 } else { -1.0 };
        }
        stereo.decode(&mut data, 200);

        assert!(data[0].abs() < data[1].abs());
    }
}
