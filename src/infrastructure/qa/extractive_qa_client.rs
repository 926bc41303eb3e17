use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{QaModel, QaModelError};
use crate::domain::Answer;

/// Question answering against a hosted extractive QA model speaking the
/// Hugging Face inference protocol. The model returns the best span of the
/// context, not generated text, so answers are always quotable.
pub struct ExtractiveQaClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct QaRequest<'a> {
    inputs: QaInputs<'a>,
}

#[derive(Serialize)]
struct QaInputs<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Deserialize)]
struct QaResponse {
    answer: String,
    score: f32,
    start: usize,
    end: usize,
}

impl ExtractiveQaClient {
    pub fn new(base_url: &str, model: &str, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/models/{}", base_url.trim_end_matches('/'), model),
            api_key,
        }
    }
}

#[async_trait]
impl QaModel for ExtractiveQaClient {
    async fn answer(&self, question: &str, context: &str) -> Result<Answer, QaModelError> {
        let request_body = QaRequest {
            inputs: QaInputs { question, context },
        };

        tracing::debug!(endpoint = %self.endpoint, "Querying the QA model");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| QaModelError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(QaModelError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(QaModelError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let parsed: QaResponse = response
            .json()
            .await
            .map_err(|e| QaModelError::InvalidResponse(e.to_string()))?;

        if parsed.answer.is_empty() {
            return Err(QaModelError::InvalidResponse(
                "empty answer span".to_string(),
            ));
        }

        Ok(Answer {
            text: parsed.answer,
            score: parsed.score,
            start: parsed.start,
            end: parsed.end,
        })
    }
}
