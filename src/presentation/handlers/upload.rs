use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AudioConverter, QaModel, Transcriber};
use crate::domain::AudioFormat;
use crate::presentation::handlers::error::{pipeline_error_response, ErrorResponse};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub recording_id: String,
    pub filename: String,
    pub transcript: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_recording_handler<C, T, Q>(
    State(state): State<AppState<C, T, Q>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    C: AudioConverter + 'static,
    T: Transcriber + 'static + ?Sized,
    Q: QaModel + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read multipart");
            return (
                e.status(),
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("recording.mp3").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    tracing::debug!(filename = %filename, content_type = %content_type, "Processing recording upload");

    // Browsers sometimes send octet-stream for mp3, so fall back to the
    // file extension before rejecting.
    let format = AudioFormat::from_mime(&content_type)
        .or_else(|| AudioFormat::from_filename(&filename));

    if format != Some(AudioFormat::Mp3) {
        tracing::warn!(content_type = %content_type, filename = %filename, "Rejected non-mp3 upload");
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(ErrorResponse {
                error: format!("Only MP3 uploads are accepted, got: {}", content_type),
            }),
        )
            .into_response();
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read file bytes");
            return (
                e.status(),
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    if data.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Uploaded file is empty".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(bytes = data.len(), "Recording data received");

    match state
        .pipeline
        .process_upload(filename.clone(), AudioFormat::Mp3, data)
        .await
    {
        Ok(transcript) => (
            StatusCode::OK,
            Json(UploadResponse {
                recording_id: transcript.recording_id.to_string(),
                filename,
                transcript: transcript.text,
            }),
        )
            .into_response(),
        Err(error) => pipeline_error_response(&error),
    }
}
