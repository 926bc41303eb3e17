use async_trait::async_trait;

use crate::domain::Waveform;

#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, waveform: &Waveform) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    /// The recognition backend could not be reached or reported an error.
    #[error("recognition request failed: {0}")]
    ServiceUnavailable(String),
    /// The backend consumed the audio but found no recognizable speech.
    /// Retrying the same recording will not help.
    #[error("speech recognition could not understand the audio")]
    Unintelligible,
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
}
