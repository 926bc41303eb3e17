use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioConverter, QaModel, Transcriber};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, playback_handler, question_handler, session_handler,
    upload_recording_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<C, T, Q>(state: AppState<C, T, Q>) -> Router
where
    C: AudioConverter + 'static,
    T: Transcriber + 'static + ?Sized,
    Q: QaModel + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_upload_bytes = state.settings.upload.max_upload_mb * 1024 * 1024;

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/v1/recording",
            post(upload_recording_handler::<C, T, Q>).get(playback_handler::<C, T, Q>),
        )
        .route("/api/v1/session", get(session_handler::<C, T, Q>))
        .route("/api/v1/question", post(question_handler::<C, T, Q>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
