// Summarizer API - Core
//
// This crate provides the backend API for summarizing text two ways:
// extractive (sentence centrality ranking) and abstractive (a pretrained
// generation model served by an inference backend).

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
