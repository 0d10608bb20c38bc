use super::bit_reader::BitReader;
use crate::common::Scaler;

/// One frame of input for a band decoder
pub enum FrameInput<'r, 'b> {
    /// Encoded bits for the frame, shared by every tier of the decoder stack
    Present(&'r mut BitReader<'b>),

    /// The frame never arrived and has to be concealed
    Lost,
}

impl<'r, 'b> FrameInput<'r, 'b> {
    pub fn reborrow(&mut self) -> FrameInput<'_, 'b> {
        match self {
            FrameInput::Present(reader) => FrameInput::Present(&mut **reader),
            FrameInput::Lost => FrameInput::Lost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// A full frame of samples was written
    Decoded,

    /// The stream signalled its end (the code is passed on unchanged), nothing was written
    Terminated(i32),
}

#[derive(Debug, PartialEq, Eq)]
pub enum DecoderError {
    InvalidSampleOutBuffer(OutputBufferErrorDetails),
}

#[derive(Debug, PartialEq, Eq)]
pub struct OutputBufferErrorDetails {
    pub required_length: usize,
    pub actual_length: usize,
}

/// A decoder for one bandwidth tier
///
/// The base tier is a narrowband decoder supplied by the caller. Higher tiers are
/// [`SidebandDecoder`](super::sideband_decoder::SidebandDecoder)s wrapping the tier below them
/// and reading the side information it leaves behind after every call to `decode`.
pub trait BandDecoder {
    /// Decodes one frame into `samples_out[..self.frame_size()]`
    fn decode(&mut self, frame: FrameInput<'_, '_>, samples_out: &mut [Scaler]) -> Result<DecodeStatus, DecoderError>;

    /// Number of samples produced per frame
    fn frame_size(&self) -> usize;

    /// Per-subframe gain of the last decoded frame
    fn pitch_gain(&self) -> &[Scaler];

    /// Excitation of the last decoded frame (at least `frame_size()` samples)
    fn excitation(&self) -> &[Scaler];

    /// Innovation of the last decoded frame (at least `frame_size()` samples)
    fn innovation(&self) -> &[Scaler];

    /// Whether the last frame was a discontinuous transmission (silence) frame
    fn dtx(&self) -> bool;

    fn perceptual_enhancement(&self) -> bool;

    fn set_perceptual_enhancement(&mut self, enabled: bool);

    /// Output sampling rate in hz
    fn sampling_rate(&self) -> usize;

    /// Bitrate of the last decoded frame in bits per second
    fn bitrate(&self) -> usize;
}

impl<D: BandDecoder + ?Sized> BandDecoder for &mut D {
    fn decode(&mut self, frame: FrameInput<'_, '_>, samples_out: &mut [Scaler]) -> Result<DecodeStatus, DecoderError> {
        (**self).decode(frame, samples_out)
    }

    fn frame_size(&self) -> usize {
        (**self).frame_size()
    }

    fn pitch_gain(&self) -> &[Scaler] {
        (**self).pitch_gain()
    }

    fn excitation(&self) -> &[Scaler] {
        (**self).excitation()
    }

    fn innovation(&self) -> &[Scaler] {
        (**self).innovation()
    }

    fn dtx(&self) -> bool {
        (**self).dtx()
    }

    fn perceptual_enhancement(&self) -> bool {
        (**self).perceptual_enhancement()
    }

    fn set_perceptual_enhancement(&mut self, enabled: bool) {
        (**self).set_perceptual_enhancement(enabled)
    }

    fn sampling_rate(&self) -> usize {
        (**self).sampling_rate()
    }

    fn bitrate(&self) -> usize {
        (**self).bitrate()
    }
}

#[cfg(feature = "alloc")]
impl<D: BandDecoder + ?Sized> BandDecoder for alloc::boxed::Box<D> {
    fn decode(&mut self, frame: FrameInput<'_, '_>, samples_out: &mut [Scaler]) -> Result<DecodeStatus, DecoderError> {
        (**self).decode(frame, samples_out)
    }

    fn frame_size(&self) -> usize {
        (**self).frame_size()
    }

    fn pitch_gain(&self) -> &[Scaler] {
        (**self).pitch_gain()
    }

    fn excitation(&self) -> &[Scaler] {
        (**self).excitation()
    }

    fn innovation(&self) -> &[Scaler] {
        (**self).innovation()
    }

    fn dtx(&self) -> bool {
        (**self).dtx()
    }

    fn perceptual_enhancement(&self) -> bool {
        (**self).perceptual_enhancement()
    }

    fn set_perceptual_enhancement(&mut self, enabled: bool) {
        (**self).set_perceptual_enhancement(enabled)
    }

    fn sampling_rate(&self) -> usize {
        (**self).sampling_rate()
    }

    fn bitrate(&self) -> usize {
        (**self).bitrate()
    }
}

/// Checks that an output buffer can hold `required_length` samples
pub fn check_output_length(samples_out: &[Scaler], required_length: usize) -> Result<(), DecoderError> {
    if samples_out.len() < required_length {
        Err(DecoderError::InvalidSampleOutBuffer(OutputBufferErrorDetails {
            required_length,
            actual_length: samples_out.len(),
        }))
    } else {
        Ok(())
    }
}
