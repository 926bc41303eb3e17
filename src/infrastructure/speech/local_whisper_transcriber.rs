use async_trait::async_trait;
use candle_core::{Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::whisper::{self as m, Config};
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tokenizers::Tokenizer;
use tokio::sync::Mutex;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::Waveform;

const MEL_FILTER_REPO: &str = "FL33TW00D-HF/whisper-base";
const MAX_DECODE_TOKENS: usize = 224;

/// Runs Whisper locally on CPU via candle. Works fully offline once the
/// model files are cached by hf-hub.
pub struct LocalWhisperTranscriber {
    model: Mutex<m::model::Whisper>,
    tokenizer: Tokenizer,
    config: Config,
    device: Device,
    mel_filters: Vec<f32>,
}

impl LocalWhisperTranscriber {
    pub fn new(model_id: &str) -> Result<Self, TranscriptionError> {
        let device = Device::Cpu;

        tracing::info!(model = model_id, "Loading local Whisper model");

        let api = Api::new().map_err(load_error)?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));

        let config_path = repo
            .get("config.json")
            .map_err(|e| named_load_error("config.json", e))?;
        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| named_load_error("tokenizer.json", e))?;
        let weights_path = repo
            .get("model.safetensors")
            .map_err(|e| named_load_error("model.safetensors", e))?;

        let mel_repo = api.repo(Repo::new(MEL_FILTER_REPO.to_string(), RepoType::Model));
        let mel_path = mel_repo
            .get("melfilters.bytes")
            .map_err(|e| named_load_error("melfilters.bytes", e))?;

        let config_contents = std::fs::read_to_string(&config_path)
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("read config: {}", e)))?;
        let config: Config = serde_json::from_str(&config_contents)
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("parse config: {}", e)))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("tokenizer: {}", e)))?;

        let mel_bytes = std::fs::read(&mel_path)
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("mel filters: {}", e)))?;
        let mel_filters = parse_mel_filters(&mel_bytes, config.num_mel_bins)?;

        // SAFETY: safetensors files are memory-mapped read-only
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], m::DTYPE, &device)
                .map_err(|e| TranscriptionError::ModelLoadFailed(format!("weights: {}", e)))?
        };

        let model = m::model::Whisper::load(&vb, config.clone())
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("model: {}", e)))?;

        tracing::info!("Local Whisper model loaded");

        Ok(Self {
            model: Mutex::new(model),
            tokenizer,
            config,
            device,
            mel_filters,
        })
    }

    fn mel_spectrogram(&self, chunk: &[f32]) -> Result<Tensor, TranscriptionError> {
        let samples = if chunk.len() < m::N_SAMPLES {
            let mut padded = chunk.to_vec();
            padded.resize(m::N_SAMPLES, 0.0);
            padded
        } else {
            chunk.to_vec()
        };

        let mel = m::audio::pcm_to_mel(&self.config, &samples, &self.mel_filters);
        let n_mel = self.config.num_mel_bins;
        let n_frames = mel.len() / n_mel;

        Tensor::from_vec(mel, (1, n_mel, n_frames), &self.device)
            .map_err(|e| inference_error("mel tensor", e))
    }

    fn decode_segment(
        &self,
        model: &mut m::model::Whisper,
        mel: &Tensor,
    ) -> Result<String, TranscriptionError> {
        let sot_token = self.token_id(m::SOT_TOKEN)?;
        let transcribe_token = self.token_id(m::TRANSCRIBE_TOKEN)?;
        let no_timestamps_token = self.token_id(m::NO_TIMESTAMPS_TOKEN)?;
        let eot_token = self.token_id(m::EOT_TOKEN)?;

        let audio_features = model
            .encoder
            .forward(mel, true)
            .map_err(|e| inference_error("encoder", e))?;

        let mut tokens = vec![sot_token, transcribe_token, no_timestamps_token];
        let mut text = String::new();

        for _ in 0..MAX_DECODE_TOKENS {
            let token_tensor = Tensor::new(tokens.as_slice(), &self.device)
                .and_then(|t| t.unsqueeze(0))
                .map_err(|e| inference_error("tokens", e))?;

            let decoder_output = model
                .decoder
                .forward(&token_tensor, &audio_features, tokens.len() == 3)
                .map_err(|e| inference_error("decoder", e))?;

            let logits = decoder_output
                .squeeze(0)
                .and_then(|t| model.decoder.final_linear(&t))
                .map_err(|e| inference_error("linear", e))?;

            let next_token = logits
                .dim(0)
                .and_then(|seq_len| logits.get(seq_len - 1))
                .and_then(|last| last.argmax(0))
                .and_then(|t| t.to_scalar::<u32>())
                .map_err(|e| inference_error("argmax", e))?;

            if next_token == eot_token {
                break;
            }
            tokens.push(next_token);

            if let Some(piece) = self.tokenizer.id_to_token(next_token) {
                text.push_str(&piece.replace("Ġ", " ").replace("▁", " "));
            }
        }

        model.reset_kv_cache();

        Ok(text.trim().to_string())
    }

    fn token_id(&self, token: &str) -> Result<u32, TranscriptionError> {
        self.tokenizer
            .token_to_id(token)
            .ok_or_else(|| TranscriptionError::ServiceUnavailable(format!("token not found: {}", token)))
    }
}

#[async_trait]
impl Transcriber for LocalWhisperTranscriber {
    async fn transcribe(&self, waveform: &Waveform) -> Result<String, TranscriptionError> {
        let mut segments: Vec<String> = Vec::new();
        let mut model = self.model.lock().await;

        for (index, chunk) in waveform.samples.chunks(m::N_SAMPLES).enumerate() {
            let mel = self.mel_spectrogram(chunk)?;
            tracing::debug!(segment = index, "Decoding audio segment");
            let text = self.decode_segment(&mut model, &mel)?;
            if !text.is_empty() {
                segments.push(text);
            }
        }
        drop(model);

        let transcript = segments.join(" ");
        if transcript.trim().is_empty() {
            return Err(TranscriptionError::Unintelligible);
        }

        tracing::info!(
            segments = segments.len(),
            chars = transcript.len(),
            "Local transcription completed"
        );

        Ok(transcript)
    }
}

/// Reads the precomputed little-endian f32 mel filterbank that ships
/// separately from the model weights.
pub fn parse_mel_filters(
    bytes: &[u8],
    num_mel_bins: usize,
) -> Result<Vec<f32>, TranscriptionError> {
    let expected_len = num_mel_bins * (m::N_FFT / 2 + 1);
    if bytes.len() < expected_len * 4 {
        return Err(TranscriptionError::ModelLoadFailed(format!(
            "mel filters file too small: {} bytes, expected at least {}",
            bytes.len(),
            expected_len * 4
        )));
    }

    Ok(bytes
        .chunks_exact(4)
        .take(expected_len)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

fn load_error(error: hf_hub::api::sync::ApiError) -> TranscriptionError {
    TranscriptionError::ModelLoadFailed(error.to_string())
}

fn named_load_error(file: &str, error: hf_hub::api::sync::ApiError) -> TranscriptionError {
    TranscriptionError::ModelLoadFailed(format!("{}: {}", file, error))
}

fn inference_error(stage: &str, error: candle_core::Error) -> TranscriptionError {
    TranscriptionError::ServiceUnavailable(format!("{}: {}", stage, error))
}
