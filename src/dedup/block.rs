//! Whole-paragraph-block dedup (§4.4): repeat-hash first-copy-survives, plus
//! an optional low-entropy filler filter at high aggressiveness.

use hashbrown::HashMap;

use crate::config::{Aggressiveness, BLOCK_DEDUP_MIN_LEN, LOW_ENTROPY_MAX_RATIO, LOW_ENTROPY_MIN_AGGRESSIVENESS};
use crate::hash::fnv1a;
use crate::segmenter::split_paragraph_blocks;
use crate::span::Span;

/// A paragraph-level span plus the drop decision and hash recorded for it.
///
/// Separator blocks (the literal `"\n\n"`) and blocks shorter than
/// [`BLOCK_DEDUP_MIN_LEN`] are never considered for dedup and always carry
/// `hash: None`.
#[derive(Debug, Clone)]
pub struct ParagraphBlock {
    pub span: Span,
    pub drop: bool,
    pub hash: Option<u64>,
}

fn unique_byte_ratio(bytes: &[u8]) -> f64 {
    let mut seen = [false; 256];
    let mut unique = 0usize;
    for &b in bytes {
        if !seen[b as usize] {
            seen[b as usize] = true;
            unique += 1;
        }
    }
    unique as f64 / bytes.len() as f64
}

/// Split `input` into paragraph blocks and mark repeats / low-entropy filler
/// for removal, returning the concatenation of surviving blocks alongside
/// the full block list (including dropped ones, for inspection/testing).
pub fn dedup_blocks(input: &[u8], aggressiveness: Aggressiveness) -> (Vec<u8>, Vec<ParagraphBlock>) {
    let spans = split_paragraph_blocks(input);
    let mut blocks: Vec<ParagraphBlock> = spans.into_iter().map(|span| ParagraphBlock { span, drop: false, hash: None }).collect();

    let mut first_seen: HashMap<u64, usize> = HashMap::new();
    let low_entropy_enabled = aggressiveness.get() >= LOW_ENTROPY_MIN_AGGRESSIVENESS;

    for i in 0..blocks.len() {
        let bytes = blocks[i].span.slice(input);
        if bytes == b"\n\n" {
            continue;
        }

        if bytes.len() >= BLOCK_DEDUP_MIN_LEN {
            let h = fnv1a(bytes);
            blocks[i].hash = Some(h);
            match first_seen.get(&h) {
                None => {
                    first_seen.insert(h, i);
                }
                Some(_) => {
                    blocks[i].drop = true;
                }
            }

            if low_entropy_enabled && !blocks[i].drop && unique_byte_ratio(bytes) < LOW_ENTROPY_MAX_RATIO {
                blocks[i].drop = true;
            }
        }
    }

    let mut filtered = Vec::with_capacity(input.len());
    for block in &blocks {
        if !block.drop {
            filtered.extend_from_slice(block.span.slice(input));
        }
    }

    (filtered, blocks)
}
