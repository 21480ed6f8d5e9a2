pub mod sentences;
pub mod tfidf;

pub use sentences::*;
pub use tfidf::*;
