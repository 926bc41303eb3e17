use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::application::ports::{AudioConverter, QaModel, Transcriber};
use crate::presentation::handlers::error::pipeline_error_response;
use crate::presentation::state::AppState;

/// Serves the staged source audio of the current recording so the client
/// can play back exactly what was uploaded.
pub async fn playback_handler<C, T, Q>(
    State(state): State<AppState<C, T, Q>>,
) -> impl IntoResponse
where
    C: AudioConverter + 'static,
    T: Transcriber + 'static + ?Sized,
    Q: QaModel + 'static,
{
    match state.pipeline.source_audio().await {
        Ok((recording, data)) => {
            let headers = [
                (
                    header::CONTENT_TYPE,
                    recording.format.as_mime().to_string(),
                ),
                (
                    header::CONTENT_DISPOSITION,
                    format!("inline; filename=\"{}\"", recording.filename),
                ),
            ];
            (headers, data).into_response()
        }
        Err(error) => pipeline_error_response(&error),
    }
}
