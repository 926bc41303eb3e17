use std::sync::Arc;

use crate::application::ports::{Transcriber, TranscriptionError};

use super::local_whisper_transcriber::LocalWhisperTranscriber;
use super::whisper_api_transcriber::WhisperApiTranscriber;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TranscriberProvider {
    Local,
    OpenAi,
}

pub struct TranscriberFactory;

impl TranscriberFactory {
    pub fn create(
        provider: TranscriberProvider,
        model: &str,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Arc<dyn Transcriber>, TranscriptionError> {
        match provider {
            TranscriberProvider::Local => {
                let engine = LocalWhisperTranscriber::new(model)?;
                Ok(Arc::new(engine))
            }
            TranscriberProvider::OpenAi => {
                let key = api_key.ok_or_else(|| {
                    TranscriptionError::ModelLoadFailed(
                        "API key required for the hosted recognizer".to_string(),
                    )
                })?;
                let engine = WhisperApiTranscriber::new(key, base_url, Some(model.to_string()));
                Ok(Arc::new(engine))
            }
        }
    }
}
