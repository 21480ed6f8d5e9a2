//! Test harness driving the router in-process.
//!
//! Requests go through `tower::ServiceExt::oneshot`, so no port is bound and
//! every layer (CORS, tracing, extractors) runs exactly as in production.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use server_core::kernel::{BaseSummarizer, TestDependencies};
use server_core::server::build_app;
use tower::ServiceExt;

pub struct TestHarness {
    router: Router,
}

impl TestHarness {
    /// Server whose model failed to load at startup.
    pub fn without_model() -> Self {
        Self::from_deps(TestDependencies::new())
    }

    /// Server with `summarizer` as the generation capability.
    pub fn with_summarizer(summarizer: Arc<dyn BaseSummarizer>) -> Self {
        Self::from_deps(TestDependencies::new().with_summarizer(summarizer))
    }

    pub fn from_deps(deps: TestDependencies) -> Self {
        Self::with_origins(deps, &[])
    }

    pub fn with_origins(deps: TestDependencies, allowed_origins: &[String]) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            router: build_app(deps.into_server_deps(), allowed_origins),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, headers, body)
    }

    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(path, &body.to_string()).await
    }

    pub async fn post_raw(&self, path: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, _, body) = self.send(request).await;
        (status, body)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let (status, _, body) = self.send(request).await;
        (status, body)
    }
}
