//! Startup initialization and concurrency bounding for the generation capability.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Semaphore;
use tracing::{debug, error, info};

use super::{BaseModelLoader, BaseSummarizer, ModelSpec};
use crate::domains::summarization::GenerationParams;

/// Caps the number of in-flight generation calls.
///
/// With one permit every call is serialized, which is required for backends
/// that are not safe to invoke concurrently.
pub struct BoundedSummarizer {
    inner: Arc<dyn BaseSummarizer>,
    permits: Arc<Semaphore>,
}

impl BoundedSummarizer {
    pub fn new(inner: Arc<dyn BaseSummarizer>, max_concurrent: usize) -> Self {
        Self {
            inner,
            permits: Arc::new(Semaphore::new(max_concurrent.max(1))),
        }
    }
}

#[async_trait]
impl BaseSummarizer for BoundedSummarizer {
    async fn summarize(&self, text: &str, params: &GenerationParams) -> Result<String> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| anyhow::anyhow!("Generation semaphore closed: {}", e))?;
        debug!(
            available = self.permits.available_permits(),
            "Acquired generation permit"
        );
        self.inner.summarize(text, params).await
    }
}

/// Load the generation capability once at startup.
///
/// Failure is logged here and recorded as `None`; callers never retry.
pub async fn initialize_summarizer(
    loader: &dyn BaseModelLoader,
    spec: &ModelSpec,
    max_concurrent: usize,
) -> Option<Arc<dyn BaseSummarizer>> {
    info!(
        model = %spec.model_id,
        device = %spec.device,
        cache_dir = ?spec.cache_dir,
        "Loading summarizer model"
    );

    match loader.load(spec).await {
        Ok(summarizer) => {
            info!(model = %spec.model_id, max_concurrent, "Summarizer loaded successfully");
            Some(Arc::new(BoundedSummarizer::new(summarizer, max_concurrent)))
        }
        Err(e) => {
            error!(
                model = %spec.model_id,
                error = ?e,
                "Failed to load summarizer model on startup; serving extractive summaries only"
            );
            None
        }
    }
}
