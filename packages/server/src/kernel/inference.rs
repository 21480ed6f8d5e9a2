//! Inference-backend implementations of the summarizer and model loader traits.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use inference_client::{GenerationParameters, InferenceClient};
use tracing::{info, warn};

use super::{BaseModelLoader, BaseSummarizer, ModelSpec};
use crate::domains::summarization::params::{
    GenerationParams, DO_SAMPLE, EARLY_STOPPING, LENGTH_PENALTY, NO_REPEAT_NGRAM_SIZE,
};

/// Attach the fixed decoding policy to the sanitized per-request values.
pub fn to_backend_parameters(params: &GenerationParams) -> GenerationParameters {
    GenerationParameters {
        min_length: params.min_length,
        max_length: params.max_length,
        num_beams: params.num_beams,
        do_sample: DO_SAMPLE,
        length_penalty: LENGTH_PENALTY,
        no_repeat_ngram_size: NO_REPEAT_NGRAM_SIZE,
        early_stopping: EARLY_STOPPING,
    }
}

// =============================================================================
// HttpSummarizer
// =============================================================================

/// Summarizer backed by a remote inference server.
pub struct HttpSummarizer {
    client: Arc<InferenceClient>,
    model: String,
}

impl HttpSummarizer {
    pub fn new(client: Arc<InferenceClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl BaseSummarizer for HttpSummarizer {
    async fn summarize(&self, text: &str, params: &GenerationParams) -> Result<String> {
        self.client
            .summarize(&self.model, text, to_backend_parameters(params))
            .await
            .map_err(|e| {
                if e.is_network() {
                    warn!(error = %e, model = %self.model, "Inference backend unreachable");
                }
                anyhow::anyhow!(e)
            })
    }
}

// =============================================================================
// HttpModelLoader
// =============================================================================

/// Loads models by asking the inference server whether it can serve them.
pub struct HttpModelLoader {
    client: Arc<InferenceClient>,
}

impl HttpModelLoader {
    pub fn new(client: Arc<InferenceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BaseModelLoader for HttpModelLoader {
    async fn load(&self, spec: &ModelSpec) -> Result<Arc<dyn BaseSummarizer>> {
        let cache_dir = spec.cache_dir.as_ref().map(|p| p.to_string_lossy().into_owned());

        let status = self
            .client
            .model_status(&spec.model_id, cache_dir.as_deref())
            .await
            .with_context(|| {
                format!(
                    "Failed to query model status for {} at {}",
                    spec.model_id,
                    self.client.base_url()
                )
            })?;

        if !status.is_servable() {
            anyhow::bail!(
                "Model {} is not servable (state: {})",
                spec.model_id,
                status.state
            );
        }

        if let Some(compute) = &status.compute_type {
            if compute != spec.device.as_str() {
                warn!(
                    requested = %spec.device,
                    backend = %compute,
                    "Backend compute type differs from detected device"
                );
            }
        }

        info!(
            model = %spec.model_id,
            state = %status.state,
            loaded = status.loaded,
            "Model available on inference backend"
        );

        Ok(Arc::new(HttpSummarizer::new(
            self.client.clone(),
            spec.model_id.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{initialize_summarizer, Device};
    use axum::{
        extract::Path,
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::json;
    use std::net::SocketAddr;

    async fn spawn_backend() -> SocketAddr {
        let app = Router::new()
            .route(
                "/status/*model",
                get(|Path(model): Path<String>| async move {
                    match model.as_str() {
                        "test/loaded" => Json(json!({
                            "loaded": true,
                            "state": "Loaded",
                            "compute_type": "cpu",
                        })),
                        "test/broken" => Json(json!({ "loaded": true, "state": "Loaded" })),
                        _ => Json(json!({ "loaded": false, "state": "TooBig" })),
                    }
                }),
            )
            .route(
                "/models/*model",
                post(|Path(model): Path<String>| async move {
                    match model.as_str() {
                        "test/broken" => (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(json!({ "error": "generation crashed" })),
                        ),
                        _ => (
                            StatusCode::OK,
                            Json(json!([{ "summary_text": " Generated summary. " }])),
                        ),
                    }
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn loader_for(addr: SocketAddr) -> HttpModelLoader {
        let client = InferenceClient::new(format!("http://{}", addr)).unwrap();
        HttpModelLoader::new(Arc::new(client))
    }

    fn spec(model_id: &str) -> ModelSpec {
        ModelSpec {
            model_id: model_id.into(),
            cache_dir: None,
            device: Device::Cpu,
        }
    }

    #[test]
    fn test_backend_parameters_carry_fixed_policy() {
        let params = GenerationParams {
            min_length: 12,
            max_length: 48,
            num_beams: 2,
        };
        let backend = to_backend_parameters(&params);

        assert_eq!(backend.min_length, 12);
        assert_eq!(backend.max_length, 48);
        assert_eq!(backend.num_beams, 2);
        assert!(!backend.do_sample);
        assert_eq!(backend.length_penalty, 0.8);
        assert_eq!(backend.no_repeat_ngram_size, 3);
        assert!(backend.early_stopping);
    }

    #[tokio::test]
    async fn test_loaded_model_yields_working_summarizer() {
        let addr = spawn_backend().await;
        let loader = loader_for(addr);

        let summarizer = loader.load(&spec("test/loaded")).await.unwrap();
        let summary = summarizer
            .summarize("Long text.", &GenerationParams::default())
            .await
            .unwrap();

        assert_eq!(summary, "Generated summary.");
    }

    #[tokio::test]
    async fn test_unservable_model_fails_to_load() {
        let addr = spawn_backend().await;
        let loader = loader_for(addr);

        let err = loader.load(&spec("test/huge")).await.err().unwrap();
        assert!(err.to_string().contains("not servable"));

        let summarizer = initialize_summarizer(&loader, &spec("test/huge"), 1).await;
        assert!(summarizer.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_backend_fails_to_load() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let loader = loader_for(addr);

        let err = loader.load(&spec("test/loaded")).await.err().unwrap();
        assert!(err.to_string().contains("Failed to query model status"));

        assert!(initialize_summarizer(&loader, &spec("test/loaded"), 1)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_generation_error_is_propagated() {
        let addr = spawn_backend().await;
        let loader = loader_for(addr);

        let summarizer = loader.load(&spec("test/broken")).await.unwrap();
        let err = summarizer
            .summarize("Text.", &GenerationParams::default())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("500"));
    }
}
