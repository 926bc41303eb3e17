use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use tokio::sync::oneshot;

use semporna::application::ports::{QaModel, QaModelError};
use semporna::infrastructure::qa::ExtractiveQaClient;

async fn start_mock_qa_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let app = Router::new().route(
        "/models/test-model",
        post(move || async move {
            (
                StatusCode::from_u16(response_status).unwrap(),
                response_body,
            )
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .unwrap();
    });

    (format!("http://{}", addr), shutdown_tx)
}

fn client_for(base_url: &str) -> ExtractiveQaClient {
    ExtractiveQaClient::new(base_url, "test-model", "hf-test-key".to_string())
}

#[tokio::test]
async fn given_answer_response_when_asking_then_fields_are_mapped() {
    let (base_url, shutdown_tx) = start_mock_qa_server(
        200,
        r#"{"answer":"a small otter","score":0.87,"start":21,"end":34}"#,
    )
    .await;
    let client = client_for(&base_url);

    let answer = client
        .answer("what was sighted?", "the survey recorded a small otter today")
        .await
        .unwrap();

    assert_eq!(answer.text, "a small otter");
    assert!((answer.score - 0.87).abs() < 1e-6);
    assert_eq!(answer.start, 21);
    assert_eq!(answer.end, 34);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_same_question_twice_when_asking_then_answers_are_identical() {
    let (base_url, shutdown_tx) = start_mock_qa_server(
        200,
        r#"{"answer":"noon","score":0.92,"start":30,"end":34}"#,
    )
    .await;
    let client = client_for(&base_url);

    let first = client
        .answer("when did it happen?", "the reading was taken around noon")
        .await
        .unwrap();
    let second = client
        .answer("when did it happen?", "the reading was taken around noon")
        .await
        .unwrap();

    assert_eq!(first.text, second.text);
    assert_eq!(first.score, second.score);
    assert_eq!(first.start, second.start);
    assert_eq!(first.end, second.end);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limited_response_when_asking_then_returns_rate_limited() {
    let (base_url, shutdown_tx) =
        start_mock_qa_server(429, r#"{"error":"rate limit exceeded"}"#).await;
    let client = client_for(&base_url);

    let result = client.answer("why?", "because").await;

    assert!(matches!(result, Err(QaModelError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_asking_then_returns_api_request_failed() {
    let (base_url, shutdown_tx) = start_mock_qa_server(500, "model is loading").await;
    let client = client_for(&base_url);

    let result = client.answer("why?", "because").await;

    match result {
        Err(QaModelError::ApiRequestFailed(message)) => {
            assert!(message.contains("500"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_malformed_body_when_asking_then_returns_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_qa_server(200, "not json at all").await;
    let client = client_for(&base_url);

    let result = client.answer("why?", "because").await;

    assert!(matches!(result, Err(QaModelError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_answer_span_when_asking_then_returns_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_qa_server(
        200,
        r#"{"answer":"","score":0.0,"start":0,"end":0}"#,
    )
    .await;
    let client = client_for(&base_url);

    let result = client.answer("why?", "because").await;

    assert!(matches!(result, Err(QaModelError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}
