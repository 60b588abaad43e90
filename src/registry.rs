//! Cross-chunk signature registry (§4.8): a bounded-capacity LRU set of
//! block signatures for streaming callers. The single-shot compression path
//! never consults this; it exists for callers that compress a document in
//! successive chunks and want repeat blocks suppressed across chunk
//! boundaries.

use indexmap::IndexSet;

use crate::config::RegistryConfig;

/// An ordered set of opaque string signatures (§3 "SignatureRegistry") with
/// a fixed capacity, evicting least-recently-used on overflow.
///
/// `IndexSet` gives O(1) amortized membership plus stable insertion order;
/// "touch" is implemented as shift-to-back (`shift_remove` + re-`insert`),
/// keeping the front of the set as the LRU end.
///
/// Not safe for concurrent mutation (§5 "Scheduling model") — callers that
/// share a registry across threads must synchronize externally.
pub struct SignatureRegistry {
    capacity: usize,
    order: IndexSet<String>,
}

impl SignatureRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self { capacity, order: IndexSet::with_capacity(capacity) }
    }

    /// Returns whether `sig` is present and, if so, marks it most-recently-used.
    pub fn contains_and_touch(&mut self, sig: &str) -> bool {
        if self.order.shift_remove(sig) {
            self.order.insert(sig.to_string());
            true
        } else {
            false
        }
    }

    /// Insert `sig`, or refresh it to most-recently-used if already present.
    /// Evicts the least-recently-used entry if this would exceed capacity.
    pub fn insert(&mut self, sig: &str) {
        self.order.shift_remove(sig);
        self.order.insert(sig.to_string());
        if self.order.len() > self.capacity {
            self.order.shift_remove_index(0);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
