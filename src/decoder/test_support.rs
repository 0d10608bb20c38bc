//! Test doubles shared by the decoder unit tests

extern crate std;

use super::{
    band_decoder::{check_output_length, BandDecoder, DecodeStatus, DecoderError, FrameInput},
    codebooks::{EXC_CODEBOOK_LEN, EXC_LBR_CODEBOOK_LEN, LSP_CODEBOOK_LEN},
};
use crate::common::Scaler;
use bitvec::prelude::*;
use simple_logger::SimpleLogger;
use std::vec::Vec;

pub fn init_logging() {
    // only the first test to get here installs the logger
    let _ = SimpleLogger::new().init();
}

/// Deterministic stand-in for the narrowband decoder (or any lower tier)
pub struct ScriptedLowBand {
    pub frame_size: usize,
    pub frame_index: usize,
    pub dtx: bool,
    pub terminate_with: Option<i32>,
    pub enhancement: bool,
    pub bits_per_frame: usize,
    pub bitrate: usize,
    pub pitch_gain: Vec<Scaler>,
    pub excitation: Vec<Scaler>,
    pub innovation: Vec<Scaler>,
}

impl ScriptedLowBand {
    pub fn new(frame_size: usize) -> Self {
        Self {
            frame_size,
            frame_index: 0,
            dtx: false,
            terminate_with: None,
            enhancement: false,
            bits_per_frame: 0,
            bitrate: 5950,
            pitch_gain: std::vec![0.0; 4],
            excitation: std::vec![0.0; frame_size],
            innovation: std::vec![0.0; frame_size],
        }
    }
}

impl BandDecoder for ScriptedLowBand {
    fn decode(&mut self, frame: FrameInput<'_, '_>, samples_out: &mut [Scaler]) -> Result<DecodeStatus, DecoderError> {
        check_output_length(samples_out, self.frame_size)?;
        if let Some(code) = self.terminate_with {
            return Ok(DecodeStatus::Terminated(code));
        }

        if let FrameInput::Present(reader) = frame {
            reader.advance(self.bits_per_frame);
        }

        let phase = self.frame_index as Scaler;
        for (i, sample) in samples_out[..self.frame_size].iter_mut().enumerate() {
            let t = i as Scaler;
            *sample = 1000.0 * (0.05 * t + phase).sin() + 300.0 * (0.31 * t).cos();
        }
        for (i, (exc, innov)) in self.excitation.iter_mut().zip(self.innovation.iter_mut()).enumerate() {
            let t = (i + 7 * self.frame_index) as Scaler;
            *innov = 50.0 * (0.7 * t).sin();
            *exc = *innov + 20.0 * (0.13 * t).cos();
        }
        for (sub, gain) in self.pitch_gain.iter_mut().enumerate() {
            *gain = 0.5 + 0.1 * ((sub + self.frame_index) % 3) as Scaler;
        }

        self.frame_index += 1;
        Ok(DecodeStatus::Decoded)
    }

    fn frame_size(&self) -> usize {
        self.frame_size
    }

    fn pitch_gain(&self) -> &[Scaler] {
        &self.pitch_gain
    }

    fn excitation(&self) -> &[Scaler] {
        &self.excitation
    }

    fn innovation(&self) -> &[Scaler] {
        &self.innovation
    }

    fn dtx(&self) -> bool {
        self.dtx
    }

    fn perceptual_enhancement(&self) -> bool {
        self.enhancement
    }

    fn set_perceptual_enhancement(&mut self, enabled: bool) {
        self.enhancement = enabled;
    }

    fn sampling_rate(&self) -> usize {
        self.frame_size * 50
    }

    fn bitrate(&self) -> usize {
        self.bitrate
    }
}

/// Packs `(value, width)` fields most significant bit first
pub fn pack_bits(fields: &[(u32, usize)]) -> Vec<u8> {
    let total: usize = fields.iter().map(|(_, width)| width).sum();
    let mut bytes = std::vec![0_u8; (total + 7) / 8];
    let bits = bytes.view_bits_mut::<Msb0>();

    let mut cursor = 0;
    for (value, width) in fields {
        for i in 0..*width {
            bits.set(cursor + i, (value >> (width - 1 - i)) & 1 == 1);
        }
        cursor += width;
    }

    bytes
}

/// Small, well behaved codebooks: every lsp offset stays within a few steps and the shapes
/// cycle through a handful of amplitudes
pub fn synthetic_tables() -> (Vec<i8>, Vec<i8>, Vec<i8>, Vec<i8>) {
    let lsp1 = (0..LSP_CODEBOOK_LEN).map(|i| ((i * 5) % 17) as i8 - 8).collect();
    let lsp2 = (0..LSP_CODEBOOK_LEN).map(|i| ((i * 3) % 11) as i8 - 5).collect();
    let exc = (0..EXC_CODEBOOK_LEN).map(|i| ((i * 37) % 61) as i8 - 30).collect();
    let exc_lbr = (0..EXC_LBR_CODEBOOK_LEN).map(|i| ((i * 29) % 41) as i8 - 20).collect();
    (lsp1, lsp2, exc, exc_lbr)
}

/// The synthetic tables serialized in the codebook blob format
pub fn codebook_blob() -> Vec<u8> {
    let (lsp1, lsp2, exc, exc_lbr) = synthetic_tables();
    let mut blob = b"SBCB".to_vec();
    blob.extend_from_slice(&1_u16.to_be_bytes());
    for section in [&lsp1, &lsp2, &exc, &exc_lbr] {
        blob.extend_from_slice(&(section.len() as u16).to_be_bytes());
        blob.extend(section.iter().map(|value| *value as u8));
    }
    blob
}
