//! Integration tests for GET /health.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use server_core::kernel::test_dependencies::MockSummarizer;
use server_core::kernel::test_dependencies::TEST_MODEL;

use crate::common::TestHarness;

#[tokio::test]
async fn healthy_when_model_loaded() {
    let harness = TestHarness::with_summarizer(Arc::new(MockSummarizer::new("ok")));

    let (status, body) = harness.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model"]["loaded"], true);
    assert_eq!(body["model"]["name"], TEST_MODEL);
    assert_eq!(body["model"]["device"], "cpu");
}

#[tokio::test]
async fn degraded_but_ok_without_model() {
    let harness = TestHarness::without_model();

    let (status, body) = harness.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["model"]["loaded"], false);
}
