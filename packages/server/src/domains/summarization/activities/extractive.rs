//! Extractive summarization - centrality ranking over a TF-IDF similarity graph

use tracing::{debug, warn};

use crate::common::utils::{split_sentences, TfidfMatrix};

/// Result of extractive summarization, tagged by the path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractiveOutcome {
    /// No more sentences than requested; all of them were kept
    Complete { summary: String },
    /// Sentences were ranked by centrality
    Ranked {
        summary: String,
        centrality: Vec<f64>,
        selected: Vec<usize>,
    },
    /// Ranking could not run; the leading sentences were kept
    Fallback { summary: String, reason: String },
}

impl ExtractiveOutcome {
    pub fn summary(&self) -> &str {
        match self {
            Self::Complete { summary }
            | Self::Ranked { summary, .. }
            | Self::Fallback { summary, .. } => summary,
        }
    }

    pub fn into_summary(self) -> String {
        match self {
            Self::Complete { summary }
            | Self::Ranked { summary, .. }
            | Self::Fallback { summary, .. } => summary,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Split `text` into sentences and keep the `top_k` most central ones.
pub fn extractive_summary(text: &str, top_k: usize) -> ExtractiveOutcome {
    let sentences = split_sentences(text);
    rank_sentences(&sentences, top_k)
}

/// Keep the `top_k` most central sentences, joined in source order.
///
/// Centrality is a sentence's summed cosine similarity to every sentence,
/// itself included. Equal scores go to the earlier sentence. If the sentences
/// share no vocabulary at all, the first `top_k` sentences are returned.
pub fn rank_sentences(sentences: &[&str], top_k: usize) -> ExtractiveOutcome {
    if sentences.len() <= top_k {
        return ExtractiveOutcome::Complete {
            summary: sentences.join(" "),
        };
    }

    let matrix = match TfidfMatrix::fit_transform(sentences) {
        Ok(matrix) => matrix,
        Err(e) => {
            warn!(
                error = %e,
                sentences = sentences.len(),
                top_k,
                "Extractive ranking failed, falling back to leading sentences"
            );
            return leading_sentences(sentences, top_k, e.to_string());
        }
    };

    let centrality = matrix.centrality();
    let mut selected = select_top_k(&centrality, top_k);
    selected.sort_unstable();

    debug!(
        sentences = sentences.len(),
        vocabulary = matrix.vocabulary_size(),
        ?selected,
        "Ranked sentences by centrality"
    );

    let summary = selected
        .iter()
        .map(|&i| sentences[i])
        .collect::<Vec<_>>()
        .join(" ");

    ExtractiveOutcome::Ranked {
        summary,
        centrality,
        selected,
    }
}

/// Keep the first `top_k` sentences of `text` unranked.
pub fn extractive_fallback(
    text: &str,
    top_k: usize,
    reason: impl Into<String>,
) -> ExtractiveOutcome {
    leading_sentences(&split_sentences(text), top_k, reason)
}

fn leading_sentences(
    sentences: &[&str],
    top_k: usize,
    reason: impl Into<String>,
) -> ExtractiveOutcome {
    ExtractiveOutcome::Fallback {
        summary: sentences[..top_k.min(sentences.len())].join(" "),
        reason: reason.into(),
    }
}

/// Indices of the `k` highest scores, best first. Ties keep the lower index.
fn select_top_k(scores: &[f64], k: usize) -> Vec<usize> {
    let mut indexed: Vec<usize> = (0..scores.len()).collect();
    indexed.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    indexed.truncate(k);
    indexed
}
