use super::{constants::FRAMES_PER_SECOND, Scaler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandTier {
    /// 16 khz output built on top of a narrowband (8 khz) decoder
    Wideband,

    /// 32 khz output built on top of a wideband decoder
    UltraWideband,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    SubframeSizeZero,
    FrameNotMultipleOfSubframe(usize, usize),
    FrameSizeNotEven(usize),
    InvalidLpcOrder(usize),
    HistoryShorterThanFrame(usize, usize),
    WorkingBufferTooSmall { required: usize, actual: usize },
    LowerBandFrameSizeMismatch { expected: usize, actual: usize },
    CodebookOrderMismatch { lpc_order: usize, codebook_order: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebandConfig {
    /// Number of high band samples per frame (e.g. 160)
    pub frame_size: usize,

    /// Number of high band samples per subframe (e.g. 40)
    pub subframe_size: usize,

    /// Order of the high band linear prediction filter (e.g. 8)
    pub lpc_order: usize,

    /// Length of the excitation history buffer (e.g. 640)
    pub buffer_size: usize,

    /// Scale applied to the low band innovation when it is folded into the high band
    pub folding_gain: Scaler,

    /// Number of output samples per frame, both bands merged (e.g. 320)
    pub full_frame_size: usize,

    /// Number of subframes per frame (e.g. 4)
    pub nb_subframes: usize,

    /// Output sampling rate in hz (e.g. 16000)
    pub sampling_rate: usize,

    /// Submode assumed active before the first frame arrives
    pub default_submode: usize,
}

impl SidebandConfig {
    pub const fn new(tier: BandTier) -> Self {
        let (frame_size, subframe_size, lpc_order, buffer_size, folding_gain, default_submode) = match tier {
            BandTier::Wideband => (160, 40, 8, 640, 0.7, 3),
            BandTier::UltraWideband => (320, 80, 8, 1280, 0.5, 1),
        };

        Self::from_parts(
            frame_size,
            subframe_size,
            lpc_order,
            buffer_size,
            folding_gain,
            default_submode,
        )
    }

    /// Builds a config for a non-standard frame geometry
    ///
    /// # Arguments
    ///
    /// * `frame_size` - High band samples per frame, must be even and a multiple of `subframe_size`
    /// * `subframe_size` - High band samples per subframe
    /// * `lpc_order` - Prediction order, must be even and at least 2
    /// * `buffer_size` - Excitation history length, at least `frame_size`
    /// * `folding_gain` - Blend factor for folded excitation
    pub fn custom(
        frame_size: usize,
        subframe_size: usize,
        lpc_order: usize,
        buffer_size: usize,
        folding_gain: Scaler,
    ) -> Result<Self, ConfigError> {
        if subframe_size == 0 {
            return Err(ConfigError::SubframeSizeZero);
        }
        if frame_size == 0 || frame_size % subframe_size != 0 {
            return Err(ConfigError::FrameNotMultipleOfSubframe(frame_size, subframe_size));
        }
        if frame_size % 2 != 0 {
            return Err(ConfigError::FrameSizeNotEven(frame_size));
        }
        if lpc_order < 2 || lpc_order % 2 != 0 {
            return Err(ConfigError::InvalidLpcOrder(lpc_order));
        }
        if buffer_size < frame_size {
            return Err(ConfigError::HistoryShorterThanFrame(buffer_size, frame_size));
        }

        Ok(Self::from_parts(
            frame_size,
            subframe_size,
            lpc_order,
            buffer_size,
            folding_gain,
            0,
        ))
    }

    const fn from_parts(
        frame_size: usize,
        subframe_size: usize,
        lpc_order: usize,
        buffer_size: usize,
        folding_gain: Scaler,
        default_submode: usize,
    ) -> Self {
        let full_frame_size = 2 * frame_size;

        Self {
            frame_size,
            subframe_size,
            lpc_order,
            buffer_size,
            folding_gain,
            full_frame_size,
            nb_subframes: frame_size / subframe_size,
            sampling_rate: full_frame_size * FRAMES_PER_SECOND,
            default_submode,
        }
    }

    /// Number of scalers a decoder with this config carves out of its working buffer
    pub const fn working_buffer_length(&self) -> usize {
        crate::decoder::sideband_decoder::calc_working_buffer_length(self)
    }
}
