//! Summarization domain - extractive and abstractive summaries of request text
//!
//! Architecture:
//!   POST /summarize → activities::summarize → extractive ranking + injected generation capability

pub mod activities;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use activities::{summarize, ExtractiveOutcome, SummarizeError};
pub use models::{SummarizeRequest, SummarizeResponse, UsedGenerationParams};
pub use params::{ExtractiveK, GenerationParams};
