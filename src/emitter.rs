//! Final emission (§4.7): concatenate surviving sentences in document order.

use crate::sentence::Sentence;

/// Concatenate every sentence with `drop == false`, in the order they appear
/// in `buf`. Dropped sentences contribute nothing, including their trailing
/// whitespace — the surviving text reads as a normal (if shorter) document,
/// not a sequence of spans with gaps.
pub fn emit(sentences: &[Sentence], buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    for s in sentences {
        if !s.drop {
            out.extend_from_slice(s.span.slice(buf));
        }
    }
    out
}
