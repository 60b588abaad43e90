//! The per-sentence record threaded through dedup and scoring (§3 "Sentence").

use crate::anchor::is_anchor;
use crate::span::Span;
use crate::tokenizer::{tokenize, TermFreq};

/// A sentence span plus the derived state the later pipeline stages need.
///
/// Invariant: once `drop` is `true`, the sentence never re-enters a later
/// stage — dedup and scoring both skip already-dropped sentences.
#[derive(Debug, Clone)]
pub struct Sentence {
    pub span: Span,
    pub term_freq: TermFreq,
    pub unique_tokens: Vec<String>,
    pub anchor: bool,
    pub score: f64,
    pub drop: bool,
}

impl Sentence {
    /// Build a sentence record from its span, tokenizing and classifying
    /// against the original buffer the span indexes into.
    pub fn new(span: Span, buf: &[u8]) -> Self {
        let bytes = span.slice(buf);
        let (term_freq, unique_tokens) = tokenize(bytes);
        let anchor = is_anchor(bytes);
        Self { span, term_freq, unique_tokens, anchor, score: 0.0, drop: false }
    }

    #[inline]
    pub fn is_empty_of_terms(&self) -> bool {
        self.term_freq.is_empty()
    }
}
