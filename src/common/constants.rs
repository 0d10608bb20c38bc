use super::Scaler;

// number of taps in each of the QMF synthesis filters
pub const QMF_ORDER: usize = 64;

// number of entries in a submode table (ids are 3 bits wide)
pub const NB_SUBMODES: usize = 8;

// number of bits used to signal the high band submode id
pub const SB_SUBMODE_BITS: usize = 3;

// all speech frames are 20 ms long regardless of the band tier
pub const FRAMES_PER_SECOND: usize = 50;

// excitation used when a frame carries no high band data
pub const VERY_SMALL: Scaler = 1e-15;

// minimum distance between adjacent line spectral pairs (radians)
pub const LSP_MARGIN: Scaler = 0.05;

// floor added to both filter responses before taking their ratio
pub const FILTER_RATIO_FLOOR: Scaler = 0.01;

// submode forced on while synthesizing comfort noise
pub const DTX_SUBMODE_ID: usize = 1;

// bandwidth expansion applied to the last filter when a frame is lost
pub const LOST_FRAME_BANDWIDTH_EXPANSION: Scaler = 0.99;

// excitation attenuation per lost frame
pub const LOST_FRAME_EXCITATION_DECAY: Scaler = 0.9;

// perceptual enhancement factors used when the active submode is unassigned
pub const FALLBACK_ENHANCEMENT_FACTOR: Scaler = 0.7;

// the second codebook layer is attenuated by this divisor
pub const DOUBLE_CODEBOOK_DIVISOR: Scaler = 2.5;
