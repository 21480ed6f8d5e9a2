//! Error types for the inference client.

use thiserror::Error;

/// Result type for inference client operations.
pub type Result<T> = std::result::Result<T, InferenceError>;

/// Inference backend errors.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Configuration error (invalid base URL, bad timeout)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, model not loadable)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),

    /// The backend answered without any generated output
    #[error("Backend returned no summary for model {model}")]
    EmptyOutput { model: String },
}

impl InferenceError {
    /// Whether the error came from the transport rather than the backend.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
