//! Process-global observability counters (§5).
//!
//! A thin collaborator, not a core concern — this crate's compression
//! output never depends on these values. Counters are best-effort under
//! concurrency: callers sharing this process across threads may observe
//! interleaved increments.

use std::sync::atomic::{AtomicU64, Ordering};

/// A snapshot of the four counters at some point in time.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct MetricsSnapshot {
    pub tokens_parsed: u64,
    pub sentences_total: u64,
    pub similarity_candidates_checked: u64,
    pub similarity_pairs_compared: u64,
}

static TOKENS_PARSED: AtomicU64 = AtomicU64::new(0);
static SENTENCES_TOTAL: AtomicU64 = AtomicU64::new(0);
static SIMILARITY_CANDIDATES_CHECKED: AtomicU64 = AtomicU64::new(0);
static SIMILARITY_PAIRS_COMPARED: AtomicU64 = AtomicU64::new(0);

/// Zero all counters. Called at the start of every `squeeze_ex` call.
pub fn reset() {
    TOKENS_PARSED.store(0, Ordering::Relaxed);
    SENTENCES_TOTAL.store(0, Ordering::Relaxed);
    SIMILARITY_CANDIDATES_CHECKED.store(0, Ordering::Relaxed);
    SIMILARITY_PAIRS_COMPARED.store(0, Ordering::Relaxed);
}

pub fn add_tokens(n: u64) {
    TOKENS_PARSED.fetch_add(n, Ordering::Relaxed);
}

pub fn add_sentences(n: u64) {
    SENTENCES_TOTAL.fetch_add(n, Ordering::Relaxed);
}

pub fn add_candidates(n: u64) {
    SIMILARITY_CANDIDATES_CHECKED.fetch_add(n, Ordering::Relaxed);
}

pub fn add_pairs(n: u64) {
    SIMILARITY_PAIRS_COMPARED.fetch_add(n, Ordering::Relaxed);
}

/// Read all four counters as a single consistent-enough snapshot.
pub fn snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        tokens_parsed: TOKENS_PARSED.load(Ordering::Relaxed),
        sentences_total: SENTENCES_TOTAL.load(Ordering::Relaxed),
        similarity_candidates_checked: SIMILARITY_CANDIDATES_CHECKED.load(Ordering::Relaxed),
        similarity_pairs_compared: SIMILARITY_PAIRS_COMPARED.load(Ordering::Relaxed),
    }
}
