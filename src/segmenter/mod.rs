//! Paragraph block and sentence segmentation (§4.1).
//!
//! Deliberately a simple single left-to-right byte scan rather than a
//! grammar-aware or Unicode-aware splitter: no regex engine, only byte
//! predicates and a small abbreviation list.

mod abbreviations;

use crate::span::Span;

/// Whether `bytes[i..i+2]` is the literal paragraph separator `"\n\n"`.
#[inline]
fn has_double_newline(bytes: &[u8], i: usize) -> bool {
    i + 1 < bytes.len() && bytes[i] == b'\n' && bytes[i + 1] == b'\n'
}

/// Split `input` into paragraph blocks, separated by the literal `"\n\n"`
/// sequence. The separator itself is emitted as its own length-2 block so
/// that concatenating all (surviving) blocks in order is concatenation-correct.
pub fn split_paragraph_blocks(input: &[u8]) -> Vec<Span> {
    let mut blocks = Vec::new();
    let mut block_start = 0;
    let mut i = 0;
    while i < input.len() {
        if has_double_newline(input, i) {
            blocks.push(Span::new(block_start, i));
            blocks.push(Span::new(i, i + 2));
            i += 2;
            block_start = i;
        } else {
            i += 1;
        }
    }
    if block_start <= input.len() {
        blocks.push(Span::new(block_start, input.len()));
    }
    blocks
}

const TERMINATORS: [u8; 3] = [b'.', b'?', b'!'];

#[inline]
fn is_terminator(b: u8) -> bool {
    TERMINATORS.contains(&b)
}

#[inline]
fn is_inline_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r')
}

/// Split `input` into sentence spans (§4.1 "Sentence splitting").
///
/// A `.` terminates unless [`abbreviations::is_abbreviation_before`] says the
/// preceding word is a known abbreviation; `?` and `!` always terminate; a
/// `"\n\n"` always terminates. Trailing inline whitespace (and a single `\n`
/// that isn't itself the start of a `"\n\n"` run) is absorbed into the
/// sentence to its left so paragraph structure survives emission untouched.
pub fn split_sentences(input: &[u8]) -> Vec<Span> {
    let mut spans = Vec::new();
    if input.is_empty() {
        return spans;
    }

    let mut start = 0;
    let mut i = 0;
    while i < input.len() {
        if has_double_newline(input, i) {
            spans.push(Span::new(start, i + 2));
            i += 2;
            start = i;
            continue;
        }

        let b = input[i];
        if is_terminator(b) && !(b == b'.' && abbreviations::is_abbreviation_before(input, i)) {
            let mut end = i + 1;
            while end < input.len()
                && (is_inline_whitespace(input[end]) || (input[end] == b'\n' && !has_double_newline(input, end)))
            {
                end += 1;
            }
            spans.push(Span::new(start, end));
            start = end;
            i = end;
            continue;
        }

        i += 1;
    }

    if start < input.len() {
        spans.push(Span::new(start, input.len()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str, spans: &[Span]) -> Vec<&str> {
        spans.iter().map(|s| std::str::from_utf8(s.slice(input.as_bytes())).unwrap()).collect()
    }

    #[test]
    fn paragraph_blocks_preserve_concatenation() {
        let input = b"first para\n\nsecond para";
        let blocks = split_paragraph_blocks(input);
        let rebuilt: Vec<u8> = blocks.iter().flat_map(|s| s.slice(input).to_vec()).collect();
        assert_eq!(rebuilt, input);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1].slice(input), b"\n\n");
    }

    #[test]
    fn single_block_without_separator() {
        let input = b"no separator here";
        let blocks = split_paragraph_blocks(input);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].slice(input), input);
    }

    #[test]
    fn simple_sentence_split() {
        let input = "One sentence. Two sentence! Three sentence?";
        let spans = split_sentences(input.as_bytes());
        assert_eq!(texts(input, &spans), vec!["One sentence. ", "Two sentence! ", "Three sentence?"]);
    }

    #[test]
    fn abbreviations_do_not_split() {
        let input = "Dr. A met Mr. B.\nStill same paragraph.";
        let spans = split_sentences(input.as_bytes());
        let rendered = texts(input, &spans);
        assert_eq!(rendered, vec!["Dr. A met Mr. B.\n", "Still same paragraph."]);
    }

    #[test]
    fn double_newline_always_terminates() {
        let input = "End of paragraph.\n\nNext paragraph starts";
        let spans = split_sentences(input.as_bytes());
        let rendered = texts(input, &spans);
        assert_eq!(rendered, vec!["End of paragraph.", "\n\n", "Next paragraph starts"]);
    }

    #[test]
    fn concatenation_is_lossless() {
        let input = "Dr. A met Mr. B.\nStill same paragraph.\n\nNew section! i.e. keep this.";
        let spans = split_sentences(input.as_bytes());
        let rebuilt: String = spans.iter().map(|s| std::str::from_utf8(s.slice(input.as_bytes())).unwrap()).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn empty_input_has_no_sentences() {
        assert!(split_sentences(b"").is_empty());
    }

    #[test]
    fn unterminated_tail_is_its_own_sentence() {
        let input = "Complete sentence. trailing fragment without terminator";
        let spans = split_sentences(input.as_bytes());
        assert_eq!(texts(input, &spans), vec!["Complete sentence. ", "trailing fragment without terminator"]);
    }
}
