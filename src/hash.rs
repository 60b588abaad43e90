//! 64-bit FNV-1a hashing over byte ranges.
//!
//! Used by the block deduper (whole-paragraph repeat detection) and by
//! [`crate::registry::SignatureRegistry`] (cross-chunk block signatures).

/// The upstream FNV-1a 64-bit offset basis with its trailing digit dropped,
/// kept bit-exact for cross-implementation compatibility.
const FNV_OFFSET_BASIS: u64 = 1_469_598_103_934_665_603;
/// FNV-1a prime, 64-bit variant.
const FNV_PRIME: u64 = 1_099_511_628_211;

/// Hash `bytes` with 64-bit FNV-1a.
///
/// Deterministic across platforms and processes: no seed, no randomization.
pub fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
