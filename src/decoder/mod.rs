pub mod band_decoder;
pub mod bit_reader;
pub mod codebooks;
pub mod filters;
pub mod high_band_synthesis;
pub mod line_spectral_pairs;
pub mod packet_loss_concealment;
pub mod qmf_synthesis;
pub mod sideband_decoder;
pub mod stereo;
pub mod submode;

#[cfg(test)]
pub(crate) mod test_support;
