//! Pure REST client for Hugging Face compatible inference backends
//!
//! A minimal client for the summarization surface of the Inference API
//! (or a self-hosted server speaking the same wire format). No
//! domain-specific logic lives here.
//!
//! # Example
//!
//! ```rust,ignore
//! use inference_client::{GenerationParameters, InferenceClient};
//!
//! let client = InferenceClient::new("http://localhost:8080")?;
//!
//! let status = client.model_status("facebook/bart-large-cnn", None).await?;
//! if status.is_servable() {
//!     let summary = client
//!         .summarize("facebook/bart-large-cnn", text, params)
//!         .await?;
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{InferenceError, Result};
pub use types::*;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretBox};
use std::time::Duration;
use tracing::{debug, warn};

/// Generation can take minutes on CPU for long inputs.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// Inference backend client.
pub struct InferenceClient {
    http_client: Client,
    base_url: String,
    api_token: Option<SecretBox<str>>,
    timeout: Duration,
}

impl InferenceClient {
    /// Create a client for the backend at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(InferenceError::Config("base URL must not be empty".into()));
        }

        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InferenceError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url,
            api_token: None,
            timeout,
        })
    }

    /// Attach a bearer token sent with every request.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(SecretBox::new(Box::from(token.into().as_str())));
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    fn network_error(&self, e: reqwest::Error) -> InferenceError {
        if e.is_timeout() {
            InferenceError::Network(format!("request timed out after {:?}", self.timeout))
        } else {
            InferenceError::Network(e.to_string())
        }
    }

    /// Query the backend for the status of `model`.
    ///
    /// `cache_dir` is forwarded so self-hosted backends can resolve weights
    /// from a local cache.
    pub async fn model_status(&self, model: &str, cache_dir: Option<&str>) -> Result<ModelStatus> {
        let mut request = self
            .http_client
            .get(format!("{}/status/{}", self.base_url, model));
        if let Some(dir) = cache_dir {
            request = request.query(&[("cache_dir", dir)]);
        }

        let response = self.authorize(request).send().await.map_err(|e| {
            warn!(error = %e, model, "Model status request failed");
            self.network_error(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, model, "Model status error");
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json()
            .await
            .map_err(|e| InferenceError::Parse(e.to_string()))
    }

    /// Summarize `text` with `model`.
    ///
    /// Returns the trimmed `summary_text` of the first output element.
    pub async fn summarize(
        &self,
        model: &str,
        text: &str,
        parameters: GenerationParameters,
    ) -> Result<String> {
        let start = std::time::Instant::now();
        let request = SummarizationRequest::new(text, parameters);

        let response = self
            .authorize(
                self.http_client
                    .post(format!("{}/models/{}", self.base_url, model))
                    .json(&request),
            )
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, model, "Summarization request failed");
                self.network_error(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, model, "Summarization API error");
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let outputs: Vec<SummarizationOutput> = response
            .json()
            .await
            .map_err(|e| InferenceError::Parse(e.to_string()))?;

        let summary = outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text.trim().to_string())
            .ok_or_else(|| InferenceError::EmptyOutput {
                model: model.to_string(),
            })?;

        debug!(
            model,
            duration_ms = start.elapsed().as_millis(),
            summary_chars = summary.len(),
            "Summarization complete"
        );

        Ok(summary)
    }
}
