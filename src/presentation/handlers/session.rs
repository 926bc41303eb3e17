use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AudioConverter, QaModel, Transcriber};
use crate::domain::SessionPhase;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct SessionResponse {
    pub phase: String,
    pub recording: Option<RecordingView>,
    pub transcript: Option<String>,
    pub error: Option<String>,
    pub failure_kind: Option<String>,
}

#[derive(Serialize)]
pub struct RecordingView {
    pub id: String,
    pub filename: String,
    pub format: String,
    pub size_bytes: u64,
    pub uploaded_at: String,
}

/// Always 200: the session view reports failed phases as data, not as an
/// error response.
pub async fn session_handler<C, T, Q>(
    State(state): State<AppState<C, T, Q>>,
) -> impl IntoResponse
where
    C: AudioConverter + 'static,
    T: Transcriber + 'static + ?Sized,
    Q: QaModel + 'static,
{
    let snapshot = state.pipeline.snapshot().await;

    let (error, failure_kind) = match &snapshot.phase {
        SessionPhase::ConversionFailed { message } => (Some(message.clone()), None),
        SessionPhase::TranscriptionFailed { kind, message } => {
            (Some(message.clone()), Some(kind.as_str().to_string()))
        }
        _ => (None, None),
    };

    let recording = snapshot.recording.map(|r| RecordingView {
        id: r.id.to_string(),
        filename: r.filename,
        format: r.format.to_string(),
        size_bytes: r.size_bytes,
        uploaded_at: r.uploaded_at.to_rfc3339(),
    });

    (
        StatusCode::OK,
        Json(SessionResponse {
            phase: snapshot.phase.as_str().to_string(),
            recording,
            transcript: snapshot.transcript.map(|t| t.text),
            error,
            failure_kind,
        }),
    )
}
