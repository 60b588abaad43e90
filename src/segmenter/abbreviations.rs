use std::sync::LazyLock;

use hashbrown::HashSet;

/// Abbreviation set that suppresses a `.` as a sentence terminator (§4.1).
///
/// Matched against the lowercased word the `.` sits in (with one trailing
/// dot stripped), e.g. `"Dr."` → `"dr"`, `"e.g."` → `"e.g"`.
static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["e.g", "i.e", "mr", "mrs", "ms", "dr", "vs", "etc", "prof", "sr", "jr"].into_iter().collect()
});

/// Upper bound on the word length considered when looking for an
/// abbreviation around a `.`. Keeps the scan O(1); "prof" (4) and "e.g" (3)
/// are the longest entries, so this comfortably covers the whole set.
const MAX_ABBREV_WORD_LEN: usize = 6;

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'.'
}

/// Whether the word containing the `.` at `dot_index` is a known abbreviation,
/// making that `.` not a sentence terminator.
///
/// `e.g` and `i.e` have an internal `.`, so the word is found by scanning
/// both backward and forward from `dot_index` over letters and dots — this
/// lets either embedded dot in `"e.g."` resolve to the same word, `"e.g"`.
pub(crate) fn is_abbreviation_before(bytes: &[u8], dot_index: usize) -> bool {
    debug_assert_eq!(bytes[dot_index], b'.');

    let mut start = dot_index;
    while start > 0 && is_word_byte(bytes[start - 1]) && dot_index - start < MAX_ABBREV_WORD_LEN {
        start -= 1;
    }
    let mut end = dot_index + 1;
    while end < bytes.len() && is_word_byte(bytes[end]) && end - dot_index < MAX_ABBREV_WORD_LEN {
        end += 1;
    }

    let mut word = &bytes[start..end];
    if word.len() > MAX_ABBREV_WORD_LEN || !word.iter().any(u8::is_ascii_alphabetic) {
        return false;
    }
    if word.last() == Some(&b'.') {
        word = &word[..word.len() - 1];
    }
    if word.is_empty() {
        return false;
    }

    let lowered: String = word.iter().map(|&b| b.to_ascii_lowercase() as char).collect();
    ABBREVIATIONS.contains(lowered.as_str())
}
