//! Summarize action - extractive summary plus an optional abstractive summary

use thiserror::Error;
use tracing::{debug, error, info};

use super::{abstractive_summary, extractive_fallback, extractive_summary};
use crate::domains::summarization::models::{
    SummarizeRequest, SummarizeResponse, UsedGenerationParams,
};
use crate::domains::summarization::params::{ExtractiveK, GenerationParams};
use crate::kernel::ServerDeps;

/// Note returned when the generation model failed to load at startup.
pub const MODEL_UNAVAILABLE_NOTE: &str =
    "Abstractive summarizer not loaded (server startup failure).";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummarizeError {
    #[error("`text` is required in the request body.")]
    MissingText,
}

/// Summarize a request.
///
/// Only a missing or blank `text` fails the request. Ranking and generation
/// failures degrade the response instead.
pub async fn summarize(
    request: SummarizeRequest,
    deps: &ServerDeps,
) -> Result<SummarizeResponse, SummarizeError> {
    let text = request
        .text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(SummarizeError::MissingText)?;

    let k = ExtractiveK::parse(request.extractive_k.as_ref());
    let top_k = k.value();
    // Ranking is CPU-bound; keep it off the async workers
    let owned = text.to_string();
    let ranked = tokio::task::spawn_blocking(move || extractive_summary(&owned, top_k)).await;
    let extractive = match ranked {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, top_k, "Extractive ranking task failed");
            extractive_fallback(text, top_k, e.to_string())
        }
    };
    debug!(
        top_k,
        k_defaulted = k.is_default(),
        fallback = extractive.is_fallback(),
        summary_chars = extractive.summary().len(),
        "Extractive summary computed"
    );

    let Some(summarizer) = deps.summarizer.as_deref() else {
        info!("Abstractive summarizer unavailable, returning extractive summary only");
        return Ok(SummarizeResponse {
            abstractive_summary: None,
            extractive_summary: extractive.into_summary(),
            used_generation_params: None,
            note: Some(MODEL_UNAVAILABLE_NOTE.to_string()),
        });
    };

    let params =
        GenerationParams::sanitize(request.min_length, request.max_length, request.num_beams);
    let abstractive = abstractive_summary(summarizer, text, &params, &deps.model_name).await;

    Ok(SummarizeResponse {
        abstractive_summary: abstractive,
        extractive_summary: extractive.into_summary(),
        used_generation_params: Some(UsedGenerationParams::new(
            params,
            deps.device,
            deps.model_name.clone(),
        )),
        note: None,
    })
}
