use std::sync::LazyLock;

use hashbrown::HashSet;

/// The fixed ASCII stopword set (GLOSSARY "Stopwords").
static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it", "its", "of",
        "on", "or", "that", "the", "to", "was", "were", "will", "with", "this", "they", "we", "you", "i", "but",
    ]
    .into_iter()
    .collect()
});

/// Whether `term` (already lowercased) is in the fixed stopword set.
#[inline]
pub fn is_stopword(term: &str) -> bool {
    STOPWORDS.contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_all_glossary_stopwords() {
        for w in
            ["a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it", "its",
             "of", "on", "or", "that", "the", "to", "was", "were", "will", "with", "this", "they", "we", "you", "i",
             "but"]
        {
            assert!(is_stopword(w), "{w} should be a stopword");
        }
    }

    #[test]
    fn rejects_content_words() {
        for w in ["cache", "latency", "disclaimer", "xyz123"] {
            assert!(!is_stopword(w));
        }
    }
}
