pub mod high_band_tables;
pub mod qmf_tables;
