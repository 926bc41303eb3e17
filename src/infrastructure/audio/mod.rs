mod symphonia_converter;
pub mod wav;

pub use symphonia_converter::{SymphoniaConverter, TARGET_SAMPLE_RATE};
