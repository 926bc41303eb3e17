use async_trait::async_trait;

use crate::domain::Answer;

/// Extractive question answering over a text context. The answer is a span
/// of the context, not generated text.
#[async_trait]
pub trait QaModel: Send + Sync {
    async fn answer(&self, question: &str, context: &str) -> Result<Answer, QaModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum QaModelError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
