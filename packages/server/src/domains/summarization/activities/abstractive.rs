//! Abstractive summarization - delegates to the injected generation capability

use tracing::{error, info};

use crate::domains::summarization::GenerationParams;
use crate::kernel::BaseSummarizer;

/// Generate an abstractive summary, swallowing failures.
///
/// Returns `None` when generation fails; the error is logged with context.
pub async fn abstractive_summary(
    summarizer: &dyn BaseSummarizer,
    text: &str,
    params: &GenerationParams,
    model: &str,
) -> Option<String> {
    let start = std::time::Instant::now();

    match summarizer.summarize(text, params).await {
        Ok(summary) => {
            info!(
                model,
                duration_ms = start.elapsed().as_millis(),
                input_chars = text.len(),
                "Abstractive summary generated"
            );
            Some(summary.trim().to_string())
        }
        Err(e) => {
            error!(
                model,
                error = ?e,
                min_length = params.min_length,
                max_length = params.max_length,
                num_beams = params.num_beams,
                input_chars = text.len(),
                "Abstractive summarization failed"
            );
            None
        }
    }
}
