//! Client tests against an in-process backend speaking the Inference API shape.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use inference_client::{GenerationParameters, InferenceClient, InferenceError, SummarizationRequest};
use serde_json::json;

type StatusQueries = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// In-process backend and the query strings its status route received.
struct Backend {
    addr: SocketAddr,
    status_queries: StatusQueries,
}

impl Backend {
    fn client(&self) -> InferenceClient {
        InferenceClient::new(format!("http://{}", self.addr)).unwrap()
    }

    fn status_queries(&self) -> Vec<HashMap<String, String>> {
        self.status_queries.lock().unwrap().clone()
    }
}

async fn spawn_backend() -> Backend {
    let status_queries: StatusQueries = Arc::new(Mutex::new(Vec::new()));
    let recorded = status_queries.clone();

    let app = Router::new()
        .route(
            "/status/*model",
            get(
                move |Path(model): Path<String>, Query(query): Query<HashMap<String, String>>| {
                    recorded.lock().unwrap().push(query);
                    async move {
                        match model.as_str() {
                            "facebook/bart-large-cnn" => (
                                StatusCode::OK,
                                Json(json!({
                                    "loaded": true,
                                    "state": "Loaded",
                                    "compute_type": "cpu",
                                })),
                            ),
                            _ => (StatusCode::NOT_FOUND, Json(json!({"error": "unknown model"}))),
                        }
                    }
                },
            ),
        )
        .route(
            "/models/*model",
            post(
                |Path(model): Path<String>, Json(body): Json<SummarizationRequest>| async move {
                    match model.as_str() {
                        "empty/model" => (StatusCode::OK, Json(json!([]))),
                        "broken/model" => (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(json!({"error": "CUDA out of memory"})),
                        ),
                        _ => {
                            let summary = format!(
                                "  beams={} min={} max={}  ",
                                body.parameters.num_beams,
                                body.parameters.min_length,
                                body.parameters.max_length
                            );
                            (StatusCode::OK, Json(json!([{ "summary_text": summary }])))
                        }
                    }
                },
            ),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Backend {
        addr,
        status_queries,
    }
}

fn params() -> GenerationParameters {
    GenerationParameters {
        min_length: 40,
        max_length: 160,
        num_beams: 4,
        do_sample: false,
        length_penalty: 0.8,
        no_repeat_ngram_size: 3,
        early_stopping: true,
    }
}

#[tokio::test]
async fn summarize_returns_trimmed_summary_text() {
    let backend = spawn_backend().await;
    let client = backend.client();

    let summary = client
        .summarize("facebook/bart-large-cnn", "Some long text.", params())
        .await
        .unwrap();

    assert_eq!(summary, "beams=4 min=40 max=160");
}

#[tokio::test]
async fn summarize_empty_output_is_an_error() {
    let backend = spawn_backend().await;
    let client = backend.client();

    let result = client.summarize("empty/model", "Text.", params()).await;

    assert!(matches!(result, Err(InferenceError::EmptyOutput { .. })));
}

#[tokio::test]
async fn summarize_backend_failure_surfaces_status() {
    let backend = spawn_backend().await;
    let client = backend.client();

    let result = client.summarize("broken/model", "Text.", params()).await;

    match result {
        Err(InferenceError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("out of memory"));
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn model_status_forwards_cache_dir() {
    let backend = spawn_backend().await;
    let client = backend.client();

    let status = client
        .model_status("facebook/bart-large-cnn", Some("/tmp/model_cache"))
        .await
        .unwrap();

    assert!(status.is_servable());
    assert_eq!(status.compute_type.as_deref(), Some("cpu"));

    let queries = backend.status_queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].get("cache_dir").map(String::as_str), Some("/tmp/model_cache"));
}

#[tokio::test]
async fn model_status_without_cache_dir_sends_no_query() {
    let backend = spawn_backend().await;
    let client = backend.client();

    client.model_status("facebook/bart-large-cnn", None).await.unwrap();

    assert_eq!(backend.status_queries(), vec![HashMap::new()]);
}

#[tokio::test]
async fn model_status_unknown_model_is_api_error() {
    let backend = spawn_backend().await;
    let client = backend.client();

    let result = client.model_status("nope/missing", None).await;

    assert!(matches!(result, Err(InferenceError::Api { status: 404, .. })));
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = InferenceClient::new(format!("http://{}", addr)).unwrap();
    let err = client.model_status("facebook/bart-large-cnn", None).await.unwrap_err();

    assert!(err.is_network());
}
