use super::{bit_reader::BitReader, codebooks::HighBandCodebooks, filters::add_scaled};
use crate::common::{
    constants::{DOUBLE_CODEBOOK_DIVISOR, NB_SUBMODES},
    Scaler,
};

const LSP_STAGE_BITS: usize = 6;
const LSP_STAGE_ENTRIES: usize = 1 << LSP_STAGE_BITS;
const LSP_STAGE1_SCALE: Scaler = 0.0039062;
const LSP_STAGE2_SCALE: Scaler = 0.0019531;
const SHAPE_SCALE: Scaler = 0.03125;

/// Two stage vector quantizer for the high band line spectral pairs
#[derive(Debug, Clone, Copy)]
pub struct HighLspQuant<'a> {
    stage1: &'a [i8],
    stage2: &'a [i8],
}

impl<'a> HighLspQuant<'a> {
    pub const fn new(stage1: &'a [i8], stage2: &'a [i8]) -> Self {
        Self { stage1, stage2 }
    }

    /// Number of line spectral pairs in one codebook row
    pub const fn order(&self) -> usize {
        self.stage1.len() / LSP_STAGE_ENTRIES
    }

    /// Reads two 6 bit indices and rebuilds `lsp` (radians) around an evenly spaced default
    pub fn unquant(&self, lsp: &mut [Scaler], reader: &mut BitReader) {
        for (i, value) in lsp.iter_mut().enumerate() {
            *value = 0.3125 * i as Scaler + 0.75;
        }

        add_stage(lsp, self.stage1, LSP_STAGE1_SCALE, reader);
        add_stage(lsp, self.stage2, LSP_STAGE2_SCALE, reader);
    }
}

fn add_stage(lsp: &mut [Scaler], table: &[i8], scale: Scaler, reader: &mut BitReader) {
    let order = lsp.len();
    let id = reader.unpack(LSP_STAGE_BITS) as usize;
    if let Some(row) = table.get(id * order..(id + 1) * order) {
        for (value, offset) in lsp.iter_mut().zip(row) {
            *value += scale * *offset as Scaler;
        }
    }
}

/// Split vector quantizer for the innovation: the slice is cut into `nb_subvect` sub-vectors
/// of `subvect_size` samples, each one a signed (optionally) entry of `shape_cb`
#[derive(Debug, Clone, Copy)]
pub struct SplitShapeCodebook<'a> {
    subvect_size: usize,
    nb_subvect: usize,
    shape_bits: usize,
    have_sign: bool,
    shape_cb: &'a [i8],
}

impl<'a> SplitShapeCodebook<'a> {
    pub const fn new(subvect_size: usize, nb_subvect: usize, shape_bits: usize, have_sign: bool, shape_cb: &'a [i8]) -> Self {
        Self {
            subvect_size,
            nb_subvect,
            shape_bits,
            have_sign,
            shape_cb,
        }
    }

    /// Number of samples covered by one pass
    pub const fn len(&self) -> usize {
        self.subvect_size * self.nb_subvect
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bits read by one pass
    pub const fn bits(&self) -> usize {
        self.nb_subvect * (self.shape_bits + self.have_sign as usize)
    }

    /// Adds the decoded shapes into `exc`. All indices are read even when `exc` is too
    /// short to hold them so that the bit position stays in step with the encoder.
    pub fn unquant(&self, exc: &mut [Scaler], reader: &mut BitReader) {
        for i in 0..self.nb_subvect {
            let negative = self.have_sign && reader.unpack(1) != 0;
            let index = reader.unpack(self.shape_bits) as usize;
            let sign: Scaler = if negative { -1.0 } else { 1.0 };

            let start = i * self.subvect_size;
            let target = exc.get_mut(start..start + self.subvect_size);
            let shape = self
                .shape_cb
                .get(index * self.subvect_size..(index + 1) * self.subvect_size);
            if let (Some(target), Some(shape)) = (target, shape) {
                for (sample, entry) in target.iter_mut().zip(shape) {
                    *sample += sign * SHAPE_SCALE * *entry as Scaler;
                }
            }
        }
    }
}

/// One high band coding mode
#[derive(Debug, Clone, Copy)]
pub struct Submode<'a> {
    pub lsp_quant: HighLspQuant<'a>,

    /// `None` means the excitation is folded from the low band innovation
    pub innovation: Option<SplitShapeCodebook<'a>>,
    pub lpc_enh_k1: Scaler,
    pub lpc_enh_k2: Scaler,
    pub double_codebook: bool,
    pub bits_per_frame: usize,
}

/// Submodes indexed by the 3 bit id read from the stream. Absent entries select the
/// null path (or concealment on a silence frame).
pub struct SubmodeTable<'a> {
    modes: [Option<Submode<'a>>; NB_SUBMODES],
}

impl<'a> SubmodeTable<'a> {
    pub const fn new(modes: [Option<Submode<'a>>; NB_SUBMODES]) -> Self {
        Self { modes }
    }

    pub fn wideband(codebooks: &'a HighBandCodebooks) -> Self {
        let lsp_quant = HighLspQuant::new(codebooks.lsp_stage1(), codebooks.lsp_stage2());
        let split_vq = SplitShapeCodebook::new(8, 5, 7, true, codebooks.excitation());
        let split_vq_lbr = SplitShapeCodebook::new(10, 4, 5, false, codebooks.excitation_lbr());

        Self::new([
            None,
            Some(folded(lsp_quant)),
            Some(Submode {
                lsp_quant,
                innovation: Some(split_vq_lbr),
                lpc_enh_k1: 0.85,
                lpc_enh_k2: 0.6,
                double_codebook: false,
                bits_per_frame: 112,
            }),
            Some(Submode {
                lsp_quant,
                innovation: Some(split_vq),
                lpc_enh_k1: 0.75,
                lpc_enh_k2: 0.7,
                double_codebook: false,
                bits_per_frame: 192,
            }),
            Some(Submode {
                lsp_quant,
                innovation: Some(split_vq),
                lpc_enh_k1: 0.75,
                lpc_enh_k2: 0.75,
                double_codebook: true,
                bits_per_frame: 352,
            }),
            None,
            None,
            None,
        ])
    }

    pub fn ultra_wideband(codebooks: &'a HighBandCodebooks) -> Self {
        let lsp_quant = HighLspQuant::new(codebooks.lsp_stage1(), codebooks.lsp_stage2());

        Self::new([None, Some(folded(lsp_quant)), None, None, None, None, None, None])
    }

    pub fn get(&self, id: usize) -> Option<&Submode<'a>> {
        self.modes.get(id).and_then(|mode| mode.as_ref())
    }

    /// Assigned submodes in id order
    pub fn iter(&self) -> impl Iterator<Item = &Submode<'a>> {
        self.modes.iter().flatten()
    }
}

// lsp only, excitation folded from the low band
const fn folded(lsp_quant: HighLspQuant) -> Submode {
    Submode {
        lsp_quant,
        innovation: None,
        lpc_enh_k1: 0.75,
        lpc_enh_k2: 0.75,
        double_codebook: false,
        bits_per_frame: 36,
    }
}

/// Decodes one subframe of innovation into `exc` (which must be zeroed by the caller) and
/// applies `scale`. With `double_codebook` a second pass is decoded into `innov2` and added
/// at `scale / 2.5`.
pub fn decode_innovation(
    codebook: &SplitShapeCodebook,
    double_codebook: bool,
    reader: &mut BitReader,
    scale: Scaler,
    exc: &mut [Scaler],
    innov2: &mut [Scaler],
) {
    codebook.unquant(exc, reader);
    for sample in exc.iter_mut() {
        *sample *= scale;
    }

    if double_codebook {
        innov2.fill(0.0);
        codebook.unquant(innov2, reader);
        add_scaled(exc, innov2, scale * (1.0 / DOUBLE_CODEBOOK_DIVISOR));
    }
}
