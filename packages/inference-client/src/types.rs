//! Inference API request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Summarization
// =============================================================================

/// Generation parameters forwarded to the backend's summarization pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// Minimum length of the generated summary (in tokens)
    pub min_length: i64,

    /// Maximum length of the generated summary (in tokens)
    pub max_length: i64,

    /// Beam width for beam search
    pub num_beams: i64,

    /// Whether to sample instead of decoding deterministically
    pub do_sample: bool,

    /// Exponential length penalty applied to beam scores
    pub length_penalty: f32,

    /// Forbid repeating n-grams of this size
    pub no_repeat_ngram_size: i64,

    /// Stop beam search when `num_beams` candidates are finished
    pub early_stopping: bool,
}

/// Request options understood by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceOptions {
    /// Block until the model is loaded instead of returning 503
    pub wait_for_model: bool,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            wait_for_model: true,
        }
    }
}

/// Summarization request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizationRequest {
    /// Text to summarize
    pub inputs: String,

    pub parameters: GenerationParameters,

    #[serde(default)]
    pub options: InferenceOptions,
}

impl SummarizationRequest {
    pub fn new(inputs: impl Into<String>, parameters: GenerationParameters) -> Self {
        Self {
            inputs: inputs.into(),
            parameters,
            options: InferenceOptions::default(),
        }
    }
}

/// One element of the backend's summarization output array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizationOutput {
    #[serde(default)]
    pub summary_text: String,
}

// =============================================================================
// Model status
// =============================================================================

/// Model status as reported by `GET /status/{model}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    /// Whether the weights are resident on the backend
    #[serde(default)]
    pub loaded: bool,

    /// Backend state ("Loadable", "Loaded", "TooBig", ...)
    #[serde(default)]
    pub state: String,

    /// Hardware the backend runs the model on, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute_type: Option<String>,
}

impl ModelStatus {
    /// Whether the backend can serve generation requests for this model.
    pub fn is_servable(&self) -> bool {
        self.loaded || self.state.eq_ignore_ascii_case("loadable")
    }
}
