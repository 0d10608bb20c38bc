use crate::common::{constants::QMF_ORDER, Scaler};

// low-pass prototype of the QMF pair (symmetric)
pub const H0: [Scaler; QMF_ORDER] = [
    3.596189e-05, -0.0001123515, -0.0001104587, 0.0002790277, 0.0002298438, -0.0005953563, -0.0003823631,
    0.00113826, 0.0005308539, -0.001986177, -0.0006243724, 0.003235877, 0.0005743159, -0.004989147,
    -0.0002584767, 0.007367171, -0.0004857935, -0.01050689, 0.001894714, 0.01459396, -0.004313674,
    -0.01994365, 0.00828756, 0.02716055, -0.01485397, -0.03764973, 0.026447, 0.05543245, -0.05095487,
    -0.09779096, 0.1382363, 0.4600981, 0.4600981, 0.1382363, -0.09779096, -0.05095487, 0.05543245, 0.026447,
    -0.03764973, -0.01485397, 0.02716055, 0.00828756, -0.01994365, -0.004313674, 0.01459396, 0.001894714,
    -0.01050689, -0.0004857935, 0.007367171, -0.0002584767, -0.004989147, 0.0005743159, 0.003235877,
    -0.0006243724, -0.001986177, 0.0005308539, 0.00113826, -0.0003823631, -0.0005953563, 0.0002298438,
    0.0002790277, -0.0001104587, -0.0001123515, 3.596189e-05,
];

// high-pass mirror of H0: h1[n] = (-1)^n h0[n]
pub const H1: [Scaler; QMF_ORDER] = [
    3.596189e-05, 0.0001123515, -0.0001104587, -0.0002790277, 0.0002298438, 0.0005953563, -0.0003823631,
    -0.00113826, 0.0005308539, 0.001986177, -0.0006243724, -0.003235877, 0.0005743159, 0.004989147,
    -0.0002584767, -0.007367171, -0.0004857935, 0.01050689, 0.001894714, -0.01459396, -0.004313674,
    0.01994365, 0.00828756, -0.02716055, -0.01485397, 0.03764973, 0.026447, -0.05543245, -0.05095487,
    0.09779096, 0.1382363, -0.4600981, 0.4600981, -0.1382363, -0.09779096, 0.05095487, 0.05543245, -0.026447,
    -0.03764973, 0.01485397, 0.02716055, -0.00828756, -0.01994365, 0.004313674, 0.01459396, -0.001894714,
    -0.01050689, 0.0004857935, 0.007367171, 0.0002584767, -0.004989147, -0.0005743159, 0.003235877,
    0.0006243724, -0.001986177, -0.0005308539, 0.00113826, 0.0003823631, -0.0005953563, -0.0002298438,
    0.0002790277, 0.0001104587, -0.0001123515, -3.596189e-05,
];

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn low_pass_is_symmetric() {
        for n in 0..QMF_ORDER {
            assert_eq!(H0[n], H0[QMF_ORDER - 1 - n]);
        }
    }

    #[test]
    fn high_pass_alternates_sign() {
        assert_eq!(&H1[..4], &[3.596189e-05, 0.0001123515, -0.0001104587, -0.0002790277]);
        let dc_gain: Scaler = H0.iter().sum();
        let nyquist_gain: Scaler = H1.iter().sum();
        assert!((dc_gain - 1.0).abs() < 0.01);
        assert!(nyquist_gain.abs() < 0.01);
    }
}
