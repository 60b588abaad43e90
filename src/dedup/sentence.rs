//! Bucket-indexed near-duplicate sentence detection (§4.5).
//!
//! Cosine similarity over raw term-frequency vectors (not TF-IDF) is
//! intentional: it matches surface-level repetition without corpus
//! statistics, which keeps this pass single-pass and streaming-friendly.
//! The length-bucket + top-3-token key is a cheap locality-sensitive
//! prefilter: sentences that differ meaningfully in length or dominant
//! vocabulary never pay the cosine cost at all.

use hashbrown::HashMap;

use crate::config::{duplicate_threshold, Aggressiveness, BUCKET_COMPARISON_WINDOW};
use crate::dedup::bucket_key;
use crate::metrics;
use crate::sentence::Sentence;
use crate::tokenizer::TermFreq;

/// Cosine similarity of two term-frequency vectors. Zero norms (including
/// empty maps) yield similarity `0.0` rather than `NaN` (§7 "Numerical edge
/// cases").
pub(crate) fn cosine_similarity(a: &TermFreq, b: &TermFreq) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = smaller.iter().filter_map(|(t, &c)| larger.get(t).map(|&c2| f64::from(c) * f64::from(c2))).sum();

    let norm_a: f64 = a.values().map(|&c| f64::from(c) * f64::from(c)).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|&c| f64::from(c) * f64::from(c)).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Walk `sentences` in document order, marking near-duplicates `drop = true`
/// in place. Anchors and sentences with no terms are skipped entirely: they
/// are neither compared against nor added to any bucket.
pub fn dedup_sentences(sentences: &mut [Sentence], aggressiveness: Aggressiveness) {
    let threshold = duplicate_threshold(aggressiveness);
    let mut buckets: HashMap<String, Vec<usize>> = HashMap::new();

    for i in 0..sentences.len() {
        if sentences[i].anchor || sentences[i].is_empty_of_terms() {
            continue;
        }

        let key = bucket_key(sentences[i].span.len(), &sentences[i].term_freq);
        let candidates = buckets.entry(key.clone()).or_default();

        let window_start = candidates.len().saturating_sub(BUCKET_COMPARISON_WINDOW);
        let window = &candidates[window_start..];
        metrics::add_candidates(window.len() as u64);

        let mut duplicate = false;
        for &j in window {
            metrics::add_pairs(1);
            let similarity = cosine_similarity(&sentences[j].term_freq, &sentences[i].term_freq);
            if similarity >= threshold {
                tracing::trace!(bucket = %key, i, j, similarity, "dedup_sentences: bucket collision");
                duplicate = true;
                break;
            }
        }

        if duplicate {
            sentences[i].drop = true;
        } else {
            buckets.get_mut(&key).unwrap().push(i);
        }
    }
}
