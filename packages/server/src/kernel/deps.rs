//! Server dependencies for request handlers (using traits for testability)
//!
//! This module provides the central dependency container shared by all requests.
//! The generation capability is injected here once at startup; `None` records
//! that it failed to initialize.

use std::sync::Arc;

use crate::kernel::{BaseSummarizer, Device};

/// Server dependencies accessible to activities
#[derive(Clone)]
pub struct ServerDeps {
    /// Abstractive summarizer, absent when startup loading failed
    pub summarizer: Option<Arc<dyn BaseSummarizer>>,
    /// Model identifier reported to callers
    pub model_name: String,
    /// Device the model runs on
    pub device: Device,
}

impl ServerDeps {
    pub fn new(
        summarizer: Option<Arc<dyn BaseSummarizer>>,
        model_name: impl Into<String>,
        device: Device,
    ) -> Self {
        Self {
            summarizer,
            model_name: model_name.into(),
            device,
        }
    }

    /// Whether abstractive summaries can be produced
    pub fn abstractive_available(&self) -> bool {
        self.summarizer.is_some()
    }
}
