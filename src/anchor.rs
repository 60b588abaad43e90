//! Anchor classifier (§4.3): sentences matching any of these predicates are
//! never dropped by block dedup, sentence dedup, or the TF-IDF selector.

const FENCE: &[u8] = b"```";
const HTTP: &[u8] = b"http://";
const HTTPS: &[u8] = b"https://";

/// Minimum total digit count that makes a sentence an anchor.
const MIN_DIGITS: usize = 4;
/// Minimum ASCII-letter count required before the uppercase-fraction rule applies.
const MIN_LETTERS_FOR_HEADING: usize = 4;
/// Uppercase-fraction floor for the heading-like rule.
const HEADING_UPPERCASE_FRACTION: f64 = 0.8;

/// Whether `bytes` (a sentence span) must never be dropped.
pub fn is_anchor(bytes: &[u8]) -> bool {
    contains(bytes, FENCE) || contains(bytes, HTTP) || contains(bytes, HTTPS) || starts_with_hash(bytes)
        || has_enough_digits(bytes)
        || is_heading_like(bytes)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn starts_with_hash(bytes: &[u8]) -> bool {
    bytes.iter().find(|b| !b.is_ascii_whitespace()).is_some_and(|&b| b == b'#')
}

fn has_enough_digits(bytes: &[u8]) -> bool {
    bytes.iter().filter(|b| b.is_ascii_digit()).count() >= MIN_DIGITS
}

fn is_heading_like(bytes: &[u8]) -> bool {
    let letters = bytes.iter().filter(|b| b.is_ascii_alphabetic()).count();
    if letters < MIN_LETTERS_FOR_HEADING {
        return false;
    }
    let uppercase = bytes.iter().filter(|b| b.is_ascii_uppercase()).count();
    (uppercase as f64 / letters as f64) >= HEADING_UPPERCASE_FRACTION
}
