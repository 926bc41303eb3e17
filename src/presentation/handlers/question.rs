use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AudioConverter, QaModel, Transcriber};
use crate::infrastructure::observability::sanitize_question;
use crate::presentation::handlers::error::pipeline_error_response;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

#[derive(Serialize)]
pub struct AnswerResponse {
    pub answer: String,
    pub score: f32,
    pub start: usize,
    pub end: usize,
}

#[tracing::instrument(skip(state, request))]
pub async fn question_handler<C, T, Q>(
    State(state): State<AppState<C, T, Q>>,
    Json(request): Json<QuestionRequest>,
) -> impl IntoResponse
where
    C: AudioConverter + 'static,
    T: Transcriber + 'static + ?Sized,
    Q: QaModel + 'static,
{
    tracing::debug!(question = %sanitize_question(&request.question), "Processing question");

    match state.pipeline.ask(&request.question).await {
        Ok(answer) => (
            StatusCode::OK,
            Json(AnswerResponse {
                answer: answer.text,
                score: answer.score,
                start: answer.start,
                end: answer.end,
            }),
        )
            .into_response(),
        Err(error) => pipeline_error_response(&error),
    }
}
