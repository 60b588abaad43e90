//! Deduplication: whole-paragraph-block repeats (§4.4) and per-sentence
//! near-duplicates (§4.5).

pub mod block;
pub mod sentence;

use itertools::Itertools;

use crate::config::{BUCKET_KEY_TOP_TOKENS, BUCKET_LENGTH_DIVISOR};
use crate::tokenizer::TermFreq;

/// Build the §3 `BucketKey` for a sentence: the length bucket followed by its
/// top-3 terms by count (desc), ties broken lexicographically (asc).
pub(crate) fn bucket_key(span_len: usize, term_freq: &TermFreq) -> String {
    let by_rank = term_freq
        .iter()
        .map(|(t, &c)| (t.as_str(), c))
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut key = (span_len / BUCKET_LENGTH_DIVISOR).to_string();
    for (term, _) in by_rank.take(BUCKET_KEY_TOP_TOKENS) {
        key.push('|');
        key.push_str(term);
    }
    key
}
