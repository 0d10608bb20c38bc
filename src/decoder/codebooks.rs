use byteorder::{BigEndian, ByteOrder};
use heapless::Vec;

use crate::tables::high_band_tables::{HIGH_EXCITATION, HIGH_EXCITATION_LBR, HIGH_LSP_STAGE1, HIGH_LSP_STAGE2};

// 64 entries of 8 line spectral pair offsets per stage
pub const LSP_CODEBOOK_LEN: usize = 64 * 8;

// 128 shapes of 8 samples
pub const EXC_CODEBOOK_LEN: usize = 128 * 8;

// 32 shapes of 10 samples
pub const EXC_LBR_CODEBOOK_LEN: usize = 32 * 10;

const MAGIC: &[u8; 4] = b"SBCB";
const VERSION: u16 = 1;
const HEADER_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodebookSection {
    LspStage1,
    LspStage2,
    Excitation,
    ExcitationLowBitrate,
}

impl CodebookSection {
    pub const fn expected_len(self) -> usize {
        match self {
            CodebookSection::LspStage1 | CodebookSection::LspStage2 => LSP_CODEBOOK_LEN,
            CodebookSection::Excitation => EXC_CODEBOOK_LEN,
            CodebookSection::ExcitationLowBitrate => EXC_LBR_CODEBOOK_LEN,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum CodebookError {
    InvalidMagic,
    UnsupportedVersion(u16),
    Truncated(CodebookSection),
    SectionLength {
        section: CodebookSection,
        expected: usize,
        actual: usize,
    },
    TrailingBytes(usize),
}

/// Vector quantizer codebooks for the high band
///
/// These are loaded once (the built in reference tables, caller tables or a binary blob) and
/// then borrowed by every [`SubmodeTable`](super::submode::SubmodeTable) built on top of them.
///
/// The binary layout is big endian: the magic `SBCB`, a `u16` version (1) and then four sections
/// in the order lsp stage 1, lsp stage 2, excitation shapes, low bitrate excitation shapes.
/// Each section is a `u16` entry count followed by that many signed bytes.
pub struct HighBandCodebooks {
    lsp_stage1: Vec<i8, LSP_CODEBOOK_LEN>,
    lsp_stage2: Vec<i8, LSP_CODEBOOK_LEN>,
    excitation: Vec<i8, EXC_CODEBOOK_LEN>,
    excitation_lbr: Vec<i8, EXC_LBR_CODEBOOK_LEN>,
}

impl HighBandCodebooks {
    /// The codebooks every conforming encoder uses
    pub fn reference() -> Self {
        // the table lengths match the capacities so collecting never overflows
        Self {
            lsp_stage1: HIGH_LSP_STAGE1.iter().copied().collect(),
            lsp_stage2: HIGH_LSP_STAGE2.iter().copied().collect(),
            excitation: HIGH_EXCITATION.iter().copied().collect(),
            excitation_lbr: HIGH_EXCITATION_LBR.iter().copied().collect(),
        }
    }

    pub fn from_tables(
        lsp_stage1: &[i8],
        lsp_stage2: &[i8],
        excitation: &[i8],
        excitation_lbr: &[i8],
    ) -> Result<Self, CodebookError> {
        Ok(Self {
            lsp_stage1: copy_section(CodebookSection::LspStage1, lsp_stage1)?,
            lsp_stage2: copy_section(CodebookSection::LspStage2, lsp_stage2)?,
            excitation: copy_section(CodebookSection::Excitation, excitation)?,
            excitation_lbr: copy_section(CodebookSection::ExcitationLowBitrate, excitation_lbr)?,
        })
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Self, CodebookError> {
        if buf.len() < HEADER_LEN || &buf[..4] != MAGIC {
            return Err(CodebookError::InvalidMagic);
        }

        let version = BigEndian::read_u16(&buf[4..HEADER_LEN]);
        if version != VERSION {
            return Err(CodebookError::UnsupportedVersion(version));
        }

        let mut cursor = HEADER_LEN;
        let codebooks = Self {
            lsp_stage1: read_section(buf, &mut cursor, CodebookSection::LspStage1)?,
            lsp_stage2: read_section(buf, &mut cursor, CodebookSection::LspStage2)?,
            excitation: read_section(buf, &mut cursor, CodebookSection::Excitation)?,
            excitation_lbr: read_section(buf, &mut cursor, CodebookSection::ExcitationLowBitrate)?,
        };

        if cursor != buf.len() {
            return Err(CodebookError::TrailingBytes(buf.len() - cursor));
        }

        log::debug!("Loaded high band codebooks ({} bytes)", buf.len());
        Ok(codebooks)
    }

    pub fn lsp_stage1(&self) -> &[i8] {
        &self.lsp_stage1
    }

    pub fn lsp_stage2(&self) -> &[i8] {
        &self.lsp_stage2
    }

    pub fn excitation(&self) -> &[i8] {
        &self.excitation
    }

    pub fn excitation_lbr(&self) -> &[i8] {
        &self.excitation_lbr
    }
}

fn copy_section<const N: usize>(section: CodebookSection, values: &[i8]) -> Result<Vec<i8, N>, CodebookError> {
    let length_error = CodebookError::SectionLength {
        section,
        expected: section.expected_len(),
        actual: values.len(),
    };

    if values.len() != section.expected_len() {
        return Err(length_error);
    }

    Vec::from_slice(values).map_err(|_| length_error)
}

fn read_section<const N: usize>(
    buf: &[u8],
    cursor: &mut usize,
    section: CodebookSection,
) -> Result<Vec<i8, N>, CodebookError> {
    let count_bytes = buf
        .get(*cursor..*cursor + 2)
        .ok_or(CodebookError::Truncated(section))?;
    let count = BigEndian::read_u16(count_bytes) as usize;
    if count != section.expected_len() {
        return Err(CodebookError::SectionLength {
            section,
            expected: section.expected_len(),
            actual: count,
        });
    }

    let data = buf
        .get(*cursor + 2..*cursor + 2 + count)
        .ok_or(CodebookError::Truncated(section))?;
    *cursor += 2 + count;

    let mut values = Vec::new();
    for byte in data {
        values
            .push(*byte as i8)
            .map_err(|_| CodebookError::SectionLength {
                section,
                expected: N,
                actual: count,
            })?;
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::decoder::test_support::{codebook_blob, synthetic_tables};
    use std::vec::Vec as StdVec;

    #[test]
    fn load_from_tables() {
        let (lsp1, lsp2, exc, exc_lbr) = synthetic_tables();

        let codebooks = HighBandCodebooks::from_tables(&lsp1, &lsp2, &exc, &exc_lbr).unwrap();

        assert_eq!(codebooks.lsp_stage1(), &lsp1[..]);
        assert_eq!(codebooks.lsp_stage2(), &lsp2[..]);
        assert_eq!(codebooks.excitation(), &exc[..]);
        assert_eq!(codebooks.excitation_lbr(), &exc_lbr[..]);
    }

    #[test]
    fn reference_tables() {
        let codebooks = HighBandCodebooks::reference();

        assert_eq!(codebooks.lsp_stage1(), &HIGH_LSP_STAGE1[..]);
        assert_eq!(codebooks.lsp_stage2(), &HIGH_LSP_STAGE2[..]);
        assert_eq!(codebooks.excitation(), &HIGH_EXCITATION[..]);
        assert_eq!(codebooks.excitation_lbr(), &HIGH_EXCITATION_LBR[..]);
    }

    #[test]
    fn table_with_wrong_length_is_rejected() {
        let (lsp1, lsp2, exc, _) = synthetic_tables();

        let result = HighBandCodebooks::from_tables(&lsp1, &lsp2, &exc, &[0; 10]);

        assert_eq!(
            result.err(),
            Some(CodebookError::SectionLength {
                section: CodebookSection::ExcitationLowBitrate,
                expected: EXC_LBR_CODEBOOK_LEN,
                actual: 10
            })
        );
    }

    #[test]
    fn load_from_bytes() {
        let (lsp1, lsp2, exc, exc_lbr) = synthetic_tables();
        let blob = codebook_blob();

        let codebooks = HighBandCodebooks::from_bytes(&blob).unwrap();

        assert_eq!(codebooks.lsp_stage1(), &lsp1[..]);
        assert_eq!(codebooks.lsp_stage2(), &lsp2[..]);
        assert_eq!(codebooks.excitation(), &exc[..]);
        assert_eq!(codebooks.excitation_lbr(), &exc_lbr[..]);
    }

    #[test]
    fn bad_header() {
        let mut blob = codebook_blob();
        blob[0] = b'X';
        assert_eq!(HighBandCodebooks::from_bytes(&blob).err(), Some(CodebookError::InvalidMagic));
        assert_eq!(HighBandCodebooks::from_bytes(b"SB").err(), Some(CodebookError::InvalidMagic));

        let mut blob = codebook_blob();
        blob[5] = 2;
        assert_eq!(
            HighBandCodebooks::from_bytes(&blob).err(),
            Some(CodebookError::UnsupportedVersion(2))
        );
    }

    #[test]
    fn truncated_blob() {
        let blob = codebook_blob();

        let result = HighBandCodebooks::from_bytes(&blob[..blob.len() - 1]);

        assert_eq!(
            result.err(),
            Some(CodebookError::Truncated(CodebookSection::ExcitationLowBitrate))
        );
    }

    #[test]
    fn trailing_bytes() {
        let mut blob: StdVec<u8> = codebook_blob();
        blob.extend_from_slice(&[1, 2, 3]);

        assert_eq!(
            HighBandCodebooks::from_bytes(&blob).err(),
            Some(CodebookError::TrailingBytes(3))
        );
    }

    #[test]
    fn wrong_section_count() {
        let mut blob = codebook_blob();
        // first section count 512 -> 511
        blob[7] = 0xFF;
        blob[6] = 0x01;

        assert_eq!(
            HighBandCodebooks::from_bytes(&blob).err(),
            Some(CodebookError::SectionLength {
                section: CodebookSection::LspStage1,
                expected: LSP_CODEBOOK_LEN,
                actual: 511
            })
        );
    }
}
