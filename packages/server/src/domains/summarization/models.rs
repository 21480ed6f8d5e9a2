use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::params::GenerationParams;
use crate::kernel::Device;

/// Body of `POST /summarize`.
///
/// `text` is optional at the type level so a missing field surfaces as a
/// validation error (400) instead of a deserialization failure.
/// `extractive_k` is kept raw: values that are not positive integers fall
/// back to the default instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub min_length: Option<i64>,
    #[serde(default)]
    pub max_length: Option<i64>,
    #[serde(default)]
    pub num_beams: Option<i64>,
    #[serde(default)]
    pub extractive_k: Option<Value>,
}

impl SummarizeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

/// Generation parameters echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsedGenerationParams {
    pub min_length: i64,
    pub max_length: i64,
    pub num_beams: i64,
    pub device: Device,
    pub model: String,
}

impl UsedGenerationParams {
    pub fn new(params: GenerationParams, device: Device, model: impl Into<String>) -> Self {
        Self {
            min_length: params.min_length,
            max_length: params.max_length,
            num_beams: params.num_beams,
            device,
            model: model.into(),
        }
    }
}

/// Response of `POST /summarize`.
///
/// Exactly one of `used_generation_params` (model available) and `note`
/// (model unavailable) is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarizeResponse {
    pub abstractive_summary: Option<String>,
    pub extractive_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_generation_params: Option<UsedGenerationParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
