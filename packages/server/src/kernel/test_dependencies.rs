// TestDependencies - mock implementations for testing
//
// Provides mock capabilities that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseDeviceProbe, BaseModelLoader, BaseSummarizer, Device, ModelSpec, ServerDeps};
use crate::domains::summarization::GenerationParams;

// =============================================================================
// Mock Summarizer
// =============================================================================

/// Arguments captured from a summarize call
#[derive(Debug, Clone)]
pub struct SummarizeCallArgs {
    pub text: String,
    pub params: GenerationParams,
}

pub struct MockSummarizer {
    response: String,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<SummarizeCallArgs>>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockSummarizer {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Hold each call open for `delay` (for concurrency tests)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get all calls made to the summarizer
    pub fn calls(&self) -> Vec<SummarizeCallArgs> {
        self.calls.lock().unwrap().clone()
    }

    /// Highest number of calls observed running at once
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BaseSummarizer for MockSummarizer {
    async fn summarize(&self, text: &str, params: &GenerationParams) -> Result<String> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        self.calls.lock().unwrap().push(SummarizeCallArgs {
            text: text.to_string(),
            params: *params,
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Summarizer whose every call fails
pub struct FailingSummarizer {
    message: String,
    calls: AtomicUsize,
}

impl FailingSummarizer {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BaseSummarizer for FailingSummarizer {
    async fn summarize(&self, _text: &str, _params: &GenerationParams) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(anyhow::anyhow!("{}", self.message))
    }
}

// =============================================================================
// Mock Model Loader
// =============================================================================

pub struct MockModelLoader {
    summarizer: Option<Arc<dyn BaseSummarizer>>,
    error: String,
    load_calls: Arc<Mutex<Vec<String>>>,
}

impl MockModelLoader {
    /// Loader that hands out `summarizer`
    pub fn succeeding(summarizer: Arc<dyn BaseSummarizer>) -> Self {
        Self {
            summarizer: Some(summarizer),
            error: String::new(),
            load_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Loader that always fails with `error`
    pub fn failing(error: &str) -> Self {
        Self {
            summarizer: None,
            error: error.to_string(),
            load_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Model identifiers requested so far
    pub fn load_calls(&self) -> Vec<String> {
        self.load_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseModelLoader for MockModelLoader {
    async fn load(&self, spec: &ModelSpec) -> Result<Arc<dyn BaseSummarizer>> {
        self.load_calls.lock().unwrap().push(spec.model_id.clone());
        match &self.summarizer {
            Some(summarizer) => Ok(summarizer.clone()),
            None => Err(anyhow::anyhow!("{}", self.error)),
        }
    }
}

// =============================================================================
// Fixed Device Probe
// =============================================================================

pub struct FixedDeviceProbe(pub Device);

impl BaseDeviceProbe for FixedDeviceProbe {
    fn detect(&self) -> Device {
        self.0
    }
}

// =============================================================================
// TestDependencies builder
// =============================================================================

pub const TEST_MODEL: &str = "test/summarizer";

/// Builder for ServerDeps wired with mocks
pub struct TestDependencies {
    summarizer: Option<Arc<dyn BaseSummarizer>>,
    device: Device,
    model_name: String,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            summarizer: None,
            device: Device::Cpu,
            model_name: TEST_MODEL.to_string(),
        }
    }

    pub fn with_summarizer(mut self, summarizer: Arc<dyn BaseSummarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    pub fn with_model_name(mut self, model_name: &str) -> Self {
        self.model_name = model_name.to_string();
        self
    }

    pub fn into_server_deps(self) -> ServerDeps {
        ServerDeps::new(self.summarizer, self.model_name, self.device)
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
