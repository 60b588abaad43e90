//! Deterministic, lossy text context compression for token-budgeted LLM
//! prompts.
//!
//! The pipeline is a fixed sequence of stages, each consuming the previous
//! stage's output: whole-paragraph-block deduplication ([`dedup::block`]),
//! sentence segmentation ([`segmenter`]), per-sentence near-duplicate
//! detection ([`dedup::sentence`]), TF-IDF importance scoring and drop
//! selection ([`scorer`]), and final emission ([`emitter`]). Anchor
//! sentences ([`anchor`]) are exempt from every drop decision.
//!
//! The core ([`squeeze`]/[`squeeze_ex`]) is a pure, infallible transform: it
//! takes a byte slice and returns an owned `Vec<u8>`. [`ffi`] wraps it for
//! C callers, where null pointers and allocation failure are real
//! possibilities and must surface as a status code.

pub mod anchor;
pub mod config;
pub mod dedup;
pub mod emitter;
pub mod error;
pub mod ffi;
pub mod hash;
pub mod metrics;
pub mod registry;
pub mod scorer;
pub mod segmenter;
pub mod sentence;
pub mod span;
pub mod tokenizer;

use config::Aggressiveness;
use sentence::Sentence;

/// Static, non-empty ASCII version string (§6).
pub const VERSION: &str = "1.0.0";

/// Equivalent to `squeeze_ex(input, 0)`: copies `input` to the output verbatim.
pub fn squeeze(input: &[u8]) -> Vec<u8> {
    squeeze_ex(input, 0)
}

/// Compress `input` at the given `aggressiveness` (clamped to `[0, 9]`).
///
/// `aggressiveness == 0` or an empty input both short-circuit to a verbatim
/// copy: there is no dedup/scoring work to do, and running the stages
/// anyway would just waste cycles reproducing the identity transform.
pub fn squeeze_ex(input: &[u8], aggressiveness: i32) -> Vec<u8> {
    let aggressiveness = Aggressiveness::clamp(aggressiveness);
    if aggressiveness.is_zero() || input.is_empty() {
        return input.to_vec();
    }

    metrics::reset();
    tracing::debug!(input_len = input.len(), aggressiveness = aggressiveness.get(), "squeeze_ex: start");

    let (filtered, _blocks) = dedup::block::dedup_blocks(input, aggressiveness);

    let spans = segmenter::split_sentences(&filtered);
    if spans.is_empty() {
        tracing::debug!("squeeze_ex: no sentences after block dedup");
        return filtered;
    }

    let mut sentences: Vec<Sentence> = spans.into_iter().map(|span| Sentence::new(span, &filtered)).collect();
    metrics::add_sentences(sentences.len() as u64);
    for s in &sentences {
        metrics::add_tokens(s.term_freq.values().map(|&c| u64::from(c)).sum());
    }

    dedup::sentence::dedup_sentences(&mut sentences, aggressiveness);
    scorer::score_and_select(&mut sentences, aggressiveness);

    let out = emitter::emit(&sentences, &filtered);
    let counters = metrics::snapshot();
    tracing::debug!(
        output_len = out.len(),
        tokens_parsed = counters.tokens_parsed,
        sentences_total = counters.sentences_total,
        similarity_candidates_checked = counters.similarity_candidates_checked,
        similarity_pairs_compared = counters.similarity_pairs_compared,
        "squeeze_ex: done"
    );
    out
}
