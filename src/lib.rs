#![no_std]

//! Sideband decoding for a layered CELP speech codec.
//!
//! A wideband decoder wraps a narrowband decoder and an ultra-wideband decoder wraps a
//! wideband one. Each tier reconstructs its high band from quantized side information and
//! merges it with the lower band through a QMF synthesis filter bank.
//! Start with [`decoder::sideband_decoder::SidebandDecoder`].

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod common;
pub mod decoder;
pub mod tables;
