use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::Waveform;
use crate::infrastructure::audio::wav::encode_wav;

/// Sends audio to an OpenAI-compatible `audio/transcriptions` endpoint.
/// The waveform is re-encoded as 16-bit WAV on every call since the API
/// only takes containers, not raw PCM.
pub struct WhisperApiTranscriber {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl WhisperApiTranscriber {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
        }
    }
}

#[async_trait]
impl Transcriber for WhisperApiTranscriber {
    async fn transcribe(&self, waveform: &Waveform) -> Result<String, TranscriptionError> {
        let wav_data = encode_wav(waveform)
            .map_err(|e| TranscriptionError::ServiceUnavailable(format!("wav encode: {}", e)))?;

        let url = format!(
            "{}/audio/transcriptions",
            self.base_url.trim_end_matches('/')
        );

        let file_part = multipart::Part::bytes(wav_data)
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| TranscriptionError::ServiceUnavailable(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(
            model = %self.model,
            duration_secs = waveform.duration_secs(),
            "Sending audio to the recognition API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ServiceUnavailable(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ServiceUnavailable(format!(
                "status {}: {}",
                status, body
            )));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| TranscriptionError::ServiceUnavailable(format!("body: {}", e)))?;

        let transcript = transcript.trim();
        if transcript.is_empty() {
            return Err(TranscriptionError::Unintelligible);
        }

        tracing::info!(chars = transcript.len(), "Hosted transcription completed");

        Ok(transcript.to_string())
    }
}
