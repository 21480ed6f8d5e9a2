use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Sentence-ending punctuation followed by a whitespace run
    static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

/// Split text into sentences.
///
/// A boundary is a `.`, `!` or `?` followed by whitespace. The punctuation
/// stays with its sentence and the whitespace is dropped. Fragments are
/// trimmed and empty ones discarded.
///
/// Never returns an empty list: when nothing survives splitting, the whole
/// trimmed text comes back as a single sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // Punctuation marks are single-byte, keep them with the sentence
        let end = boundary.start() + 1;
        push_fragment(&mut sentences, &text[start..end]);
        start = boundary.end();
    }
    push_fragment(&mut sentences, &text[start..]);

    if sentences.is_empty() {
        return vec![text.trim()];
    }
    sentences
}

fn push_fragment<'a>(sentences: &mut Vec<&'a str>, fragment: &'a str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        sentences.push(fragment);
    }
}
