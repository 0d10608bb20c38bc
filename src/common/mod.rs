pub mod config;
pub mod constants;

pub type Scaler = f32;
