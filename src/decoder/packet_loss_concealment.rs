use super::{
    band_decoder::{check_output_length, BandDecoder, DecodeStatus, DecoderError},
    filters::scale,
    sideband_decoder::SidebandDecoder,
};
use crate::common::{
    constants::{
        DTX_SUBMODE_ID, FALLBACK_ENHANCEMENT_FACTOR, LOST_FRAME_BANDWIDTH_EXPANSION, LOST_FRAME_EXCITATION_DECAY,
    },
    Scaler,
};

impl<'a, L: BandDecoder> SidebandDecoder<'a, L> {
    /// Synthesizes the high band of a frame that carried no usable high band data
    ///
    /// A lost frame reuses the last filter, slightly widened, and a decayed copy of the last
    /// excitation so that repeated losses fade out. A silence (dtx) frame keeps the filter and
    /// excitation as they are and shapes them as if submode 1 was active. The lower band signal
    /// is whatever the lower band last produced.
    ///
    /// # Arguments
    ///
    /// * `samples_out` - Output buffer, at least `full_frame_size` long
    /// * `dtx` - Whether the frame is a silence frame rather than a lost one
    pub fn decode_lost(&mut self, samples_out: &mut [Scaler], dtx: bool) -> Result<DecodeStatus, DecoderError> {
        check_output_length(samples_out, self.config.full_frame_size)?;
        log::debug!("Concealing high band (dtx: {})", dtx);

        let saved_submode_id = self.submode_id;
        if dtx {
            self.submode_id = DTX_SUBMODE_ID;
        } else {
            self.lpc.bandwidth_expand(LOST_FRAME_BANDWIDTH_EXPANSION);
        }
        self.lpc.reset_interpolation();

        if self.synthesis_filter.is_enhanced() {
            let (k1, k2) = self
                .submodes
                .get(self.submode_id)
                .map(|submode| (submode.lpc_enh_k1, submode.lpc_enh_k2))
                .unwrap_or((FALLBACK_ENHANCEMENT_FACTOR, FALLBACK_ENHANCEMENT_FACTOR));
            self.lpc.compute_enhancement(k1, k2);
        }

        let frame_size = self.config.frame_size;
        let exc = &mut self.excitation[..frame_size];
        if !dtx {
            scale(exc, LOST_FRAME_EXCITATION_DECAY);
        }

        let high = &mut self.high[..frame_size];
        high.copy_from_slice(exc);
        self.synthesis_filter.apply(high, &self.lpc, self.synthesis_mem);

        self.qmf.merge(self.low_signal, self.high, samples_out);
        self.submode_id = saved_submode_id;
        self.update_excitation_out();

        Ok(DecodeStatus::Decoded)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::{
        common::config::{BandTier, SidebandConfig},
        decoder::{
            band_decoder::{FrameInput, OutputBufferErrorDetails},
            bit_reader::BitReader,
            codebooks::HighBandCodebooks,
            filters::bw_lpc,
            submode::SubmodeTable,
            test_support::{init_logging, pack_bits, synthetic_tables, ScriptedLowBand},
        },
    };
    use std::vec::Vec;

    const BUF_LEN: usize = SidebandConfig::new(BandTier::Wideband).working_buffer_length();

    fn codebooks() -> HighBandCodebooks {
        let (lsp1, lsp2, exc, exc_lbr) = synthetic_tables();
        HighBandCodebooks::from_tables(&lsp1, &lsp2, &exc, &exc_lbr).unwrap()
    }

    // a submode 3 frame
    fn good_frame() -> Vec<u8> {
        let mut fields = std::vec![(1, 1), (3, 3), (21, 6), (9, 6)];
        for sub in 0..4 {
            fields.push((6 + sub, 4));
            for vector in 0..5 {
                fields.push(((sub + vector) % 2, 1));
                fields.push((vector * 23 + sub * 3, 7));
            }
        }
        pack_bits(&fields)
    }

    fn energy(signal: &[Scaler]) -> Scaler {
        signal.iter().map(|x| x * x).sum()
    }

    #[test]
    fn lost_frame_decays_the_excitation_and_widens_the_filter() {
        init_logging();
        let codebooks = codebooks();
        let submodes = SubmodeTable::wideband(&codebooks);
        let mut scaler_buf = [0.0; BUF_LEN];
        let config = SidebandConfig::new(BandTier::Wideband);
        let mut decoder = SidebandDecoder::new(config, &submodes, ScriptedLowBand::new(160), &mut scaler_buf).unwrap();
        let mut out = [0.0; 320];

        let frame = good_frame();
        let mut reader = BitReader::new(&frame);
        decoder.decode(FrameInput::Present(&mut reader), &mut out).unwrap();

        let exc_before: Vec<Scaler> = decoder.excitation[..160].to_vec();
        let lpc_before: Vec<Scaler> = decoder.lpc.interpolated_lpc().to_vec();

        let status = decoder.decode(FrameInput::Lost, &mut out).unwrap();

        assert_eq!(status, DecodeStatus::Decoded);
        for (after, before) in decoder.excitation[..160].iter().zip(exc_before.iter()) {
            assert_eq!(*after, *before * 0.9);
        }
        let mut factor = 1.0;
        for (after, before) in decoder.lpc.interpolated_lpc().iter().zip(lpc_before.iter()) {
            assert!((after - before * factor).abs() < 1e-6);
            factor *= 0.99;
        }
        assert!(decoder.lpc.is_first_frame());
        assert_eq!(decoder.submode_id(), 3);
        assert!(out.iter().all(|sample| sample.is_finite()));
    }

    #[test]
    fn repeated_losses_fade_out() {
        let codebooks = codebooks();
        let submodes = SubmodeTable::wideband(&codebooks);
        let mut scaler_buf = [0.0; BUF_LEN];
        let config = SidebandConfig::new(BandTier::Wideband);
        let mut decoder = SidebandDecoder::new(config, &submodes, ScriptedLowBand::new(160), &mut scaler_buf).unwrap();
        let mut out = [0.0; 320];

        let frame = good_frame();
        let mut reader = BitReader::new(&frame);
        decoder.decode(FrameInput::Present(&mut reader), &mut out).unwrap();
        let initial = energy(&decoder.excitation[..160]);
        assert!(initial > 0.0);

        for _ in 0..10 {
            decoder.decode(FrameInput::Lost, &mut out).unwrap();
        }

        assert!(energy(&decoder.excitation[..160]) < 0.5 * initial);
    }

    #[test]
    fn silence_frame_keeps_the_excitation() {
        let codebooks = codebooks();
        let submodes = SubmodeTable::wideband(&codebooks);
        let mut scaler_buf = [0.0; BUF_LEN];
        let config = SidebandConfig::new(BandTier::Wideband);
        let mut decoder = SidebandDecoder::new(config, &submodes, ScriptedLowBand::new(160), &mut scaler_buf).unwrap();
        let mut out = [0.0; 320];

        let frame = good_frame();
        let mut reader = BitReader::new(&frame);
        decoder.decode(FrameInput::Present(&mut reader), &mut out).unwrap();
        let exc_before: Vec<Scaler> = decoder.excitation[..160].to_vec();
        let lpc_before: Vec<Scaler> = decoder.lpc.interpolated_lpc().to_vec();

        decoder.lower_mut().dtx = true;
        decoder.decode(FrameInput::Lost, &mut out).unwrap();

        assert_eq!(&decoder.excitation[..160], &exc_before[..]);
        assert_eq!(decoder.lpc.interpolated_lpc(), &lpc_before[..]);
        // shaped as submode 1 (0.75 / 0.75)
        let mut expected = [0.0; 9];
        bw_lpc(0.75, decoder.lpc.interpolated_lpc(), &mut expected);
        assert_eq!(decoder.lpc.awk1(), &expected[..]);
        assert_eq!(decoder.lpc.awk2(), &expected[..]);
        assert_eq!(decoder.submode_id(), 3);
    }

    #[test]
    fn unassigned_submode_falls_back_to_default_enhancement() {
        let codebooks = codebooks();
        let submodes = SubmodeTable::wideband(&codebooks);
        let mut scaler_buf = [0.0; BUF_LEN];
        let config = SidebandConfig::new(BandTier::Wideband);
        let mut decoder = SidebandDecoder::new(config, &submodes, ScriptedLowBand::new(160), &mut scaler_buf).unwrap();
        let mut out = [0.0; 320];

        let frame = good_frame();
        let mut reader = BitReader::new(&frame);
        decoder.decode(FrameInput::Present(&mut reader), &mut out).unwrap();

        // a narrowband only frame leaves submode 0 active
        let frame = [0];
        let mut reader = BitReader::new(&frame);
        decoder.decode(FrameInput::Present(&mut reader), &mut out).unwrap();
        assert_eq!(decoder.submode_id(), 0);

        decoder.decode(FrameInput::Lost, &mut out).unwrap();

        // k1 == k2 == 0.7 so the third filter collapses to a pass-through
        let mut expected = [0.0; 9];
        bw_lpc(0.7, decoder.lpc.interpolated_lpc(), &mut expected);
        assert_eq!(decoder.lpc.awk1(), &expected[..]);
        assert_eq!(decoder.lpc.awk2(), &expected[..]);
        assert_eq!(decoder.lpc.awk3()[0], 1.0);
        assert!(decoder.lpc.awk3()[1..].iter().all(|coef| *coef == 0.0));
    }

    #[test]
    fn plain_filter_concealment() {
        let codebooks = codebooks();
        let submodes = SubmodeTable::wideband(&codebooks);
        let mut scaler_buf = [0.0; BUF_LEN];
        let config = SidebandConfig::new(BandTier::Wideband);
        let mut decoder = SidebandDecoder::new(config, &submodes, ScriptedLowBand::new(160), &mut scaler_buf).unwrap();
        decoder.set_perceptual_enhancement(false);
        let mut out = [0.0; 320];

        let frame = good_frame();
        let mut reader = BitReader::new(&frame);
        decoder.decode(FrameInput::Present(&mut reader), &mut out).unwrap();
        decoder.decode(FrameInput::Lost, &mut out).unwrap();

        assert!(out.iter().all(|sample| sample.is_finite()));
        assert!(decoder.synthesis_mem[8..].iter().all(|mem| *mem == 0.0));
    }

    #[test]
    fn output_buffer_is_checked() {
        let codebooks = codebooks();
        let submodes = SubmodeTable::wideband(&codebooks);
        let mut scaler_buf = [0.0; BUF_LEN];
        let config = SidebandConfig::new(BandTier::Wideband);
        let mut decoder = SidebandDecoder::new(config, &submodes, ScriptedLowBand::new(160), &mut scaler_buf).unwrap();
        let mut out = [0.0; 160];

        let result = decoder.decode_lost(&mut out, false);

        assert_eq!(
            result,
            Err(DecoderError::InvalidSampleOutBuffer(OutputBufferErrorDetails {
                required_length: 320,
                actual_length: 160
            }))
        );
    }
}
