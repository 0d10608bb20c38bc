// Copyright 2022 David Haig
// Licensed under the Apache License, Version 2.0 (the "License");
//

use super::{
    band_decoder::{check_output_length, BandDecoder, DecodeStatus, DecoderError, FrameInput},
    bit_reader::BitReader,
    filters::iir_mem2,
    high_band_synthesis::SynthesisFilter,
    line_spectral_pairs::LpcState,
    qmf_synthesis::QmfSynthesis,
    stereo::StereoState,
    submode::{decode_innovation, Submode, SubmodeTable},
};
use crate::common::{
    config::{ConfigError, SidebandConfig},
    constants::{FILTER_RATIO_FLOOR, SB_SUBMODE_BITS, VERY_SMALL},
    Scaler,
};
use itertools::izip;
#[allow(unused_imports)]
use num_traits::real::Real;

/// Main entry point of library - Start here for the Decoder
///
/// Decodes one band tier: the lower band is decoded first by `L` and the high band is then
/// rebuilt from the side information that follows it in the same frame. Because a
/// `SidebandDecoder` is itself a [`BandDecoder`], an ultra-wideband decoder is simply a
/// `SidebandDecoder<SidebandDecoder<N>>`.
///
/// All state lives in a caller supplied working buffer, see
/// [`SidebandConfig::working_buffer_length`].
pub struct SidebandDecoder<'a, L: BandDecoder> {
    pub(super) config: SidebandConfig,
    pub(super) submodes: &'a SubmodeTable<'a>,
    pub(super) lower: L,
    pub(super) submode_id: usize,
    pub(super) synthesis_filter: SynthesisFilter,
    pub(super) dtx: bool,
    pub(super) lpc: LpcState<'a>,
    pub(super) qmf: QmfSynthesis<'a>,
    pub(super) low_signal: &'a mut [Scaler],     // lower band output (length frame_size e.g. 160)
    pub(super) excitation: &'a mut [Scaler],     // high band excitation (length buffer_size e.g. 640)
    pub(super) high: &'a mut [Scaler],           // high band signal (length full_frame_size e.g. 320)
    pub(super) innov2: &'a mut [Scaler],         // second codebook layer (length subframe_size e.g. 40)
    pub(super) synthesis_mem: &'a mut [Scaler],  // synthesis filter memory (length 2 * lpc_order)
    pub(super) pi_gain: &'a mut [Scaler],        // per subframe (length nb_subframes)
    pub(super) excitation_out: &'a mut [Scaler], // reported to an upper tier (length full_frame_size)
    pub(super) stereo: StereoState,
}

/// Number of scalers a [`SidebandDecoder`] needs for its state
pub const fn calc_working_buffer_length(config: &SidebandConfig) -> usize {
    LpcState::calc_working_buffer_length(config.lpc_order)
        + QmfSynthesis::calc_working_buffer_length(config.full_frame_size)
        + config.frame_size
        + config.buffer_size
        + config.full_frame_size
        + config.subframe_size
        + 2 * config.lpc_order
        + config.nb_subframes
        + config.full_frame_size
}

impl<'a, L: BandDecoder> SidebandDecoder<'a, L> {
    /// Creates a decoder for one band tier
    ///
    /// # Arguments
    ///
    /// * `config` - Frame geometry of this tier
    /// * `submodes` - Submode table for this tier, shared with other decoders
    /// * `lower` - Decoder for the band below, its frame size must equal `config.frame_size`
    /// * `scaler_buf` - Working buffer, at least `config.working_buffer_length()` long
    pub fn new(
        config: SidebandConfig,
        submodes: &'a SubmodeTable<'a>,
        mut lower: L,
        scaler_buf: &'a mut [Scaler],
    ) -> Result<Self, ConfigError> {
        let required = calc_working_buffer_length(&config);
        if scaler_buf.len() < required {
            return Err(ConfigError::WorkingBufferTooSmall {
                required,
                actual: scaler_buf.len(),
            });
        }
        if lower.frame_size() != config.frame_size {
            return Err(ConfigError::LowerBandFrameSizeMismatch {
                expected: config.frame_size,
                actual: lower.frame_size(),
            });
        }
        if let Some(codebook_order) = submodes
            .iter()
            .map(|submode| submode.lsp_quant.order())
            .find(|order| *order != config.lpc_order)
        {
            return Err(ConfigError::CodebookOrderMismatch {
                lpc_order: config.lpc_order,
                codebook_order,
            });
        }

        let (scaler_buf, _) = scaler_buf.split_at_mut(required);
        scaler_buf.fill(0.0);

        let (lpc, scaler_buf) = LpcState::new(config.lpc_order, scaler_buf);
        let (qmf, scaler_buf) = QmfSynthesis::new(config.full_frame_size, scaler_buf);
        let (low_signal, scaler_buf) = scaler_buf.split_at_mut(config.frame_size);
        let (excitation, scaler_buf) = scaler_buf.split_at_mut(config.buffer_size);
        let (high, scaler_buf) = scaler_buf.split_at_mut(config.full_frame_size);
        let (innov2, scaler_buf) = scaler_buf.split_at_mut(config.subframe_size);
        let (synthesis_mem, scaler_buf) = scaler_buf.split_at_mut(2 * config.lpc_order);
        let (pi_gain, scaler_buf) = scaler_buf.split_at_mut(config.nb_subframes);
        let (excitation_out, _) = scaler_buf.split_at_mut(config.full_frame_size);

        let enhanced = true;
        lower.set_perceptual_enhancement(enhanced);

        log::debug!(
            "Sideband decoder: {} hz, frame {} ({} subframes), lpc order {}",
            config.sampling_rate,
            config.frame_size,
            config.nb_subframes,
            config.lpc_order
        );

        Ok(Self {
            config,
            submodes,
            lower,
            submode_id: config.default_submode,
            synthesis_filter: SynthesisFilter::from_enhancement(enhanced),
            dtx: false,
            lpc,
            qmf,
            low_signal,
            excitation,
            high,
            innov2,
            synthesis_mem,
            pi_gain,
            excitation_out,
            stereo: StereoState::new(),
        })
    }

    /// Decodes one frame into `samples_out[..full_frame_size]`
    ///
    /// The lower band reads its part of the frame first, the high band side information follows.
    /// A lost frame is concealed. When the lower band hits a stream terminator its status is
    /// returned unchanged and `samples_out` is left alone.
    pub fn decode(&mut self, mut frame: FrameInput<'_, '_>, samples_out: &mut [Scaler]) -> Result<DecodeStatus, DecoderError> {
        check_output_length(samples_out, self.config.full_frame_size)?;

        if let DecodeStatus::Terminated(code) = self.lower.decode(frame.reborrow(), self.low_signal)? {
            log::debug!("Lower band reached a terminator ({})", code);
            return Ok(DecodeStatus::Terminated(code));
        }
        self.dtx = self.lower.dtx();

        let reader = match frame {
            FrameInput::Present(reader) => reader,
            FrameInput::Lost => return self.decode_lost(samples_out, self.dtx),
        };

        self.submode_id = read_submode_id(reader);
        log::trace!("High band submode {}", self.submode_id);

        let frame_size = self.config.frame_size;
        self.excitation[..frame_size].fill(0.0);

        let submodes = self.submodes;
        let submode = match submodes.get(self.submode_id) {
            Some(submode) => *submode,
            None if self.dtx => {
                log::debug!("Silence frame without high band data, generating comfort noise");
                return self.decode_lost(samples_out, true);
            }
            None => {
                self.decode_null(samples_out);
                return Ok(DecodeStatus::Decoded);
            }
        };

        self.decode_high_band(&submode, reader);

        self.qmf.merge(self.low_signal, self.high, samples_out);
        self.lpc.commit_frame();
        self.update_excitation_out();
        Ok(DecodeStatus::Decoded)
    }

    // reads the spectral envelope and synthesizes the high band one subframe at a time
    fn decode_high_band(&mut self, submode: &Submode, reader: &mut BitReader) {
        let SidebandConfig {
            subframe_size,
            nb_subframes,
            folding_gain,
            ..
        } = self.config;

        self.lpc.load_frame(&submode.lsp_quant, reader);

        for sub in 0..nb_subframes {
            let range = sub * subframe_size..(sub + 1) * subframe_size;

            self.lpc.interpolate(sub, nb_subframes);
            if self.synthesis_filter.is_enhanced() {
                self.lpc.compute_enhancement(submode.lpc_enh_k1, submode.lpc_enh_k2);
            }

            let (high_response, pi_gain) = self.lpc.band_edge_response();
            self.pi_gain[sub] = pi_gain;
            let low_pi_gain = self.lower.pitch_gain().get(sub).copied().unwrap_or(0.0);
            let filter_ratio = filter_ratio(low_pi_gain, high_response);

            let exc = &mut self.excitation[range.clone()];
            exc.fill(0.0);

            match &submode.innovation {
                None => {
                    // fold the low band innovation up into the high band
                    let quant = reader.unpack(5);
                    let gain = ((quant as f64 - 10.0) / 8.0).exp() as Scaler / filter_ratio;
                    let low_innovation = self.lower.innovation().get(range.clone()).unwrap_or(&[]);
                    for (sample, innov) in exc.iter_mut().zip(low_innovation) {
                        *sample = folding_gain * gain * *innov;
                    }
                }
                Some(codebook) => {
                    let qgc = reader.unpack(4);
                    let low_excitation = self.lower.excitation().get(range.clone()).unwrap_or(&[]);
                    let el: Scaler = low_excitation.iter().map(|x| x * x).sum();
                    let gc = (((1.0 / 3.7) * qgc as Scaler - 2.0) as f64).exp() as Scaler;
                    let scale = gc * (1.0 + el).sqrt() / filter_ratio;
                    decode_innovation(codebook, submode.double_codebook, reader, scale, exc, self.innov2);
                }
            }

            let high = &mut self.high[range];
            high.copy_from_slice(exc);
            self.synthesis_filter.apply(high, &self.lpc, self.synthesis_mem);
        }
    }

    // no high band data: keep the previous filter and excite it with (almost) nothing
    fn decode_null(&mut self, samples_out: &mut [Scaler]) {
        log::debug!("No high band data in frame");
        let frame_size = self.config.frame_size;
        let order = self.config.lpc_order;

        self.excitation[..frame_size].fill(VERY_SMALL);
        self.lpc.reset_interpolation();

        let high = &mut self.high[..frame_size];
        high.copy_from_slice(&self.excitation[..frame_size]);
        iir_mem2(high, self.lpc.interpolated_lpc(), &mut self.synthesis_mem[..order]);

        self.qmf.merge(self.low_signal, self.high, samples_out);
        self.update_excitation_out();
    }

    // excitation at the output rate as seen by an upper tier
    pub(super) fn update_excitation_out(&mut self) {
        for (pair, exc) in izip!(self.excitation_out.chunks_exact_mut(2), self.excitation.iter()) {
            pair[0] = 2.0 * *exc;
            pair[1] = 0.0;
        }
    }

    /// Expands a decoded mono frame into interleaved stereo using the stereo state
    ///
    /// # Arguments
    ///
    /// * `data` - Mono samples in `data[..frame_size]`, at least `2 * frame_size` long
    /// * `frame_size` - Number of mono samples
    pub fn decode_stereo(&mut self, data: &mut [Scaler], frame_size: usize) {
        self.stereo.decode(data, frame_size);
    }

    /// Stereo parameters, updated by whoever parses the in-band stereo request
    pub fn stereo_mut(&mut self) -> &mut StereoState {
        &mut self.stereo
    }

    pub fn submode_id(&self) -> usize {
        self.submode_id
    }

    pub fn config(&self) -> &SidebandConfig {
        &self.config
    }

    pub fn lower(&self) -> &L {
        &self.lower
    }

    pub fn lower_mut(&mut self) -> &mut L {
        &mut self.lower
    }
}

// a set wideband bit announces a 3 bit submode id, otherwise nothing is consumed
fn read_submode_id(reader: &mut BitReader) -> usize {
    if reader.peek() {
        reader.advance(1);
        reader.unpack(SB_SUBMODE_BITS) as usize
    } else {
        0
    }
}

// how much louder the high band filter is than the low band one around the band edge
fn filter_ratio(low_pi_gain: Scaler, high_response: Scaler) -> Scaler {
    let rl = 1.0 / (low_pi_gain.abs() + FILTER_RATIO_FLOOR);
    let rh = 1.0 / (high_response.abs() + FILTER_RATIO_FLOOR);
    (FILTER_RATIO_FLOOR + rh).abs() / (FILTER_RATIO_FLOOR + rl.abs())
}

impl<'a, L: BandDecoder> BandDecoder for SidebandDecoder<'a, L> {
    fn decode(&mut self, frame: FrameInput<'_, '_>, samples_out: &mut [Scaler]) -> Result<DecodeStatus, DecoderError> {
        SidebandDecoder::decode(self, frame, samples_out)
    }

    fn frame_size(&self) -> usize {
        self.config.full_frame_size
    }

    fn pitch_gain(&self) -> &[Scaler] {
        &*self.pi_gain
    }

    fn excitation(&self) -> &[Scaler] {
        &*self.excitation_out
    }

    fn innovation(&self) -> &[Scaler] {
        &*self.excitation_out
    }

    fn dtx(&self) -> bool {
        self.dtx
    }

    fn perceptual_enhancement(&self) -> bool {
        self.synthesis_filter.is_enhanced()
    }

    fn set_perceptual_enhancement(&mut self, enabled: bool) {
        self.synthesis_filter = SynthesisFilter::from_enhancement(enabled);
        self.lower.set_perceptual_enhancement(enabled);
    }

    fn sampling_rate(&self) -> usize {
        self.config.sampling_rate
    }

    fn bitrate(&self) -> usize {
        let bits_per_frame = self
            .submodes
            .get(self.submode_id)
            .map(|submode| submode.bits_per_frame)
            .unwrap_or(SB_SUBMODE_BITS + 1);

        self.lower.bitrate() + self.config.sampling_rate * bits_per_frame / self.config.full_frame_size
    }
}
