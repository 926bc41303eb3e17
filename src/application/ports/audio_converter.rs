use crate::domain::{AudioFormat, Waveform};

/// Decodes uploaded audio into the mono waveform the recognition engines
/// consume. Decoding is CPU-bound and synchronous; callers that must not
/// block an async runtime wrap the call themselves.
pub trait AudioConverter: Send + Sync {
    fn convert(&self, data: &[u8], format: AudioFormat) -> Result<Waveform, ConversionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("audio decoding failed: {0}")]
    DecodeFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
