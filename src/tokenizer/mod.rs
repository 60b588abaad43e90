//! ASCII-alphanumeric tokenizer (§4.2).
//!
//! Non-ASCII bytes are separators, same as any other non-alphanumeric byte;
//! this is a known limitation on multilingual text, not an oversight.

mod stopwords;

pub use self::stopwords::is_stopword;

use hashbrown::HashMap;

/// Term-frequency map: term string to positive occurrence count.
pub type TermFreq = HashMap<String, u32>;

/// Tokenize a sentence's bytes into a term-frequency map and its sorted key list.
///
/// Walks the bytes accumulating ASCII-alphanumeric runs, lowercasing
/// `A-Z` as it goes, and flushing the accumulated term on any other byte.
/// Stopwords (per [`is_stopword`]) are discarded. Returns the term-frequency
/// map and, separately, its keys in sorted order (callers need both: the
/// map for cosine/TF-IDF math, the sorted keys for the bucket signature).
pub fn tokenize(bytes: &[u8]) -> (TermFreq, Vec<String>) {
    let mut freq: TermFreq = HashMap::new();
    let mut current = String::new();

    for &byte in bytes {
        if byte.is_ascii_alphanumeric() {
            current.push(byte.to_ascii_lowercase() as char);
        } else {
            flush_term(&mut current, &mut freq);
        }
    }
    flush_term(&mut current, &mut freq);

    let mut keys: Vec<String> = freq.keys().cloned().collect();
    keys.sort_unstable();
    (freq, keys)
}

fn flush_term(current: &mut String, freq: &mut TermFreq) {
    if current.is_empty() {
        return;
    }
    if !is_stopword(current) {
        *freq.entry(std::mem::take(current)).or_insert(0) += 1;
    } else {
        current.clear();
    }
}
