// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "summarize a request") lives in domain activities that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseSummarizer, BaseModelLoader)

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::domains::summarization::GenerationParams;

// =============================================================================
// Device
// =============================================================================

/// Hardware the generation model runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Cuda,
    Cpu,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Cuda => "cuda",
            Device::Cpu => "cpu",
        }
    }

    /// Parse an override value ("cuda", "gpu", "cpu"), case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cuda" | "gpu" => Some(Device::Cuda),
            "cpu" => Some(Device::Cpu),
            _ => None,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Summarizer Trait (Infrastructure - abstractive generation)
// =============================================================================

#[async_trait]
pub trait BaseSummarizer: Send + Sync {
    /// Generate an abstractive summary of `text` with deterministic decoding.
    async fn summarize(&self, text: &str, params: &GenerationParams) -> Result<String>;
}

// =============================================================================
// Model Loader Trait (Infrastructure)
// =============================================================================

/// What to load and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpec {
    pub model_id: String,
    pub cache_dir: Option<PathBuf>,
    pub device: Device,
}

#[async_trait]
pub trait BaseModelLoader: Send + Sync {
    /// Resolve a model identifier to a callable summarizer.
    async fn load(&self, spec: &ModelSpec) -> Result<Arc<dyn BaseSummarizer>>;
}

// =============================================================================
// Device Probe Trait (Infrastructure)
// =============================================================================

pub trait BaseDeviceProbe: Send + Sync {
    /// Report whether accelerated hardware is available.
    fn detect(&self) -> Device;
}
