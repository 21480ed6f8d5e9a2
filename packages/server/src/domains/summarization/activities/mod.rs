pub mod abstractive;
pub mod extractive;
pub mod summarize;

pub use abstractive::abstractive_summary;
pub use extractive::{extractive_fallback, extractive_summary, rank_sentences, ExtractiveOutcome};
pub use summarize::{summarize, SummarizeError, MODEL_UNAVAILABLE_NOTE};
