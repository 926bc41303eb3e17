use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::TranscriptionError;
use crate::application::services::PipelineError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Maps pipeline failures onto HTTP statuses. Client mistakes land in the
/// 4xx range; upstream engine trouble surfaces as 502/504 so callers can
/// tell "fix your input" apart from "try again later".
pub(crate) fn pipeline_error_response(error: &PipelineError) -> Response {
    let status = match error {
        PipelineError::Conversion(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::Transcription(TranscriptionError::Unintelligible) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        PipelineError::Transcription(_) => StatusCode::BAD_GATEWAY,
        PipelineError::Answering(_) => StatusCode::BAD_GATEWAY,
        PipelineError::Staging(_) => StatusCode::INTERNAL_SERVER_ERROR,
        PipelineError::NoRecording => StatusCode::NOT_FOUND,
        PipelineError::TranscriptNotReady { .. } => StatusCode::CONFLICT,
        PipelineError::EmptyQuestion => StatusCode::BAD_REQUEST,
        PipelineError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
    };

    if status.is_server_error() {
        tracing::error!(error = %error, status = %status, "Pipeline request failed");
    } else {
        tracing::warn!(error = %error, status = %status, "Pipeline request rejected");
    }

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
