//! TF-IDF vectorization and cosine centrality over a document set.
//!
//! Weighting follows the common smoothed scheme:
//! - tokens are lowercased words of two or more word characters
//! - tf is the raw count of a term in a document
//! - idf = ln((1 + n) / (1 + df)) + 1
//! - each document vector is L2-normalized
//!
//! The vocabulary is built only from the documents passed in, so results
//! depend on nothing but the input.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

#[derive(Debug, Error, PartialEq)]
pub enum VectorizeError {
    #[error("no documents to vectorize")]
    NoDocuments,

    #[error("empty vocabulary: documents contain no terms of two or more word characters")]
    EmptyVocabulary,
}

/// Lowercase and split text into terms.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Sparse TF-IDF entry: (column, weight).
pub type Entry = (usize, f64);

/// Row-normalized TF-IDF matrix (one row per document).
///
/// Rows hold only nonzero entries, sorted by column.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    rows: Vec<Vec<Entry>>,
    vocabulary: BTreeMap<String, usize>,
}

impl TfidfMatrix {
    /// Build the vocabulary from `documents` and vectorize them.
    pub fn fit_transform(documents: &[&str]) -> Result<Self, VectorizeError> {
        if documents.is_empty() {
            return Err(VectorizeError::NoDocuments);
        }

        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        // Sorted vocabulary keeps column order stable across runs
        let mut vocabulary: BTreeMap<String, usize> = BTreeMap::new();
        for term in tokenized.iter().flatten() {
            vocabulary.entry(term.clone()).or_insert(0);
        }
        if vocabulary.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }
        for (column, index) in vocabulary.values_mut().enumerate() {
            *index = column;
        }

        let mut document_freq = vec![0usize; vocabulary.len()];
        let counts: Vec<Vec<Entry>> = tokenized
            .iter()
            .map(|terms| {
                let mut columns: Vec<usize> = terms.iter().map(|t| vocabulary[t]).collect();
                columns.sort_unstable();

                let mut row: Vec<Entry> = Vec::new();
                for column in columns {
                    if let Some((last, count)) = row.last_mut() {
                        if *last == column {
                            *count += 1.0;
                            continue;
                        }
                    }
                    row.push((column, 1.0));
                }
                for (column, _) in &row {
                    document_freq[*column] += 1;
                }
                row
            })
            .collect();

        let n = documents.len() as f64;
        let idf: Vec<f64> = document_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = counts
            .into_iter()
            .map(|mut row| {
                for (column, value) in row.iter_mut() {
                    *value *= idf[*column];
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        Ok(Self { rows, vocabulary })
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Summed cosine similarity of each row to every row, itself included.
    ///
    /// Rows are unit length, so the sum over j of cos(i, j) equals the dot
    /// product of row i with the column totals of the whole matrix. This is
    /// linear in the number of nonzero entries. A document without any terms
    /// scores 0.
    pub fn centrality(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.vocabulary.len()];
        for row in &self.rows {
            for &(column, value) in row {
                totals[column] += value;
            }
        }

        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&(column, value)| value * totals[column])
                    .sum::<f64>()
            })
            .collect()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    fn weight(&self, row: usize, term: &str) -> f64 {
        let column = self.vocabulary[term];
        self.rows[row]
            .iter()
            .find(|(c, _)| *c == column)
            .map_or(0.0, |(_, v)| *v)
    }

    /// Cosine similarity of two rows by merging their sorted entries.
    #[cfg(test)]
    fn similarity(&self, i: usize, j: usize) -> f64 {
        let (a, b) = (&self.rows[i], &self.rows[j]);
        let (mut x, mut y, mut sum) = (0, 0, 0.0);
        while x < a.len() && y < b.len() {
            match a[x].0.cmp(&b[y].0) {
                std::cmp::Ordering::Less => x += 1,
                std::cmp::Ordering::Greater => y += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[x].1 * b[y].1;
                    x += 1;
                    y += 1;
                }
            }
        }
        sum
    }
}

fn l2_normalize(row: &mut [Entry]) {
    let norm = row.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, value) in row.iter_mut() {
            *value /= norm;
        }
    }
}
