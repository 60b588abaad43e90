//! TF-IDF importance scoring and the aggressiveness-driven drop selector (§4.6).

use hashbrown::HashMap;

use crate::config::{
    drop_ratio, Aggressiveness, RARE_TERM_IDF_FLOOR, SHORT_SENTENCE_MAX_LEN, SHORT_SENTENCE_PENALTY,
};
use crate::sentence::Sentence;

fn idf(n: usize, df: u32) -> f64 {
    (1.0 + n as f64 / (1.0 + f64::from(df))).ln()
}

/// Score every surviving sentence and mark the lowest-scoring non-anchor
/// ones `drop = true` up to the aggressiveness-dependent drop fraction.
///
/// `N` and document frequency are computed over *all* surviving sentences
/// (anchors included) — anchors shape the corpus statistics even though
/// they can never themselves be selected for removal.
pub fn score_and_select(sentences: &mut [Sentence], aggressiveness: Aggressiveness) {
    let mut df: HashMap<&str, u32> = HashMap::new();
    let mut n = 0usize;
    for s in sentences.iter() {
        if s.drop {
            continue;
        }
        n += 1;
        for term in &s.unique_tokens {
            *df.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    for s in sentences.iter_mut() {
        if s.drop {
            continue;
        }

        let mut score = 0.0;
        let mut has_rare_term = false;
        for (term, &count) in s.term_freq.iter() {
            let term_idf = idf(n, df[term.as_str()]);
            score += f64::from(count) * term_idf;
            if term_idf > RARE_TERM_IDF_FLOOR {
                has_rare_term = true;
            }
        }

        if s.span.len() < SHORT_SENTENCE_MAX_LEN && !has_rare_term {
            score *= SHORT_SENTENCE_PENALTY;
        }
        s.score = score;
    }

    let mut removable: Vec<(f64, usize)> = sentences
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.drop && !s.anchor)
        .map(|(i, s)| (s.score, i))
        .collect();

    let drop_target = (drop_ratio(aggressiveness) * removable.len() as f64).floor() as usize;
    let drop_target = drop_target.min(removable.len());

    // Stable sort (ascending score, then original index) is required for
    // determinism across runs: a non-stable sort could reorder equal-score
    // ties differently on different invocations.
    removable.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap().then_with(|| a.1.cmp(&b.1)));

    for &(_, idx) in removable.iter().take(drop_target) {
        sentences[idx].drop = true;
    }
}
