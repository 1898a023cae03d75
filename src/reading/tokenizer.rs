use super::Token;
use crate::engine::config::MergeStrategy;
use crate::vocabulary::Vocabulary;
use tracing::{debug, trace};

/// Split a description into raw words.
///
/// Splits on the single space character only: no trimming, no punctuation
/// handling, consecutive spaces yield empty words.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}

/// Index of the last raw word swallowed by the compound merge loop that
/// starts at `start`.
///
/// The loop keeps extending while the accumulation is a compound prefix and
/// stops at the end of the input when the compound is left unterminated.
fn merge_end(words: &[&str], start: usize, vocabulary: &Vocabulary) -> usize {
    let mut forged = words[start].to_string();
    let mut inner = start;

    while vocabulary.is_compound_prefix(&forged) {
        if inner + 1 >= words.len() {
            debug!(forged = %forged, "unterminated compound at end of input");
            break;
        }
        inner += 1;
        forged.push(' ');
        forged.push_str(words[inner]);
    }

    inner
}

/// Shrink an accumulation that did not end on a registered compound back to
/// the longest one it starts with, or to its first word.
fn backtrack_end(words: &[&str], start: usize, end: usize, vocabulary: &Vocabulary) -> usize {
    if end == start {
        return end;
    }

    let settled = (start + 1..=end)
        .rev()
        .find(|&last| vocabulary.is_compound(&words[start..=last].join(" ")))
        .unwrap_or(start);

    if settled != end {
        trace!(
            given_back = end - settled,
            "compound accumulation backtracked"
        );
    }
    settled
}

/// Tokenize a description, fusing recognized compound phrases into single
/// tokens.
///
/// The result is a partition of the raw words: joining token texts with
/// single spaces reproduces `text`.
pub fn tokenize_text(text: &str, vocabulary: &Vocabulary, strategy: MergeStrategy) -> Vec<Token> {
    let words = split_words(text);
    let mut tokens = Vec::with_capacity(words.len());
    let mut i = 0;

    while i < words.len() {
        let greedy_end = merge_end(&words, i, vocabulary);
        let end = match strategy {
            MergeStrategy::Greedy => greedy_end,
            MergeStrategy::Backtrack => backtrack_end(&words, i, greedy_end, vocabulary),
        };

        tokens.push(Token::new(words[i..=end].join(" "), i, end - i + 1));
        i = end + 1;
    }

    debug!(words = words.len(), tokens = tokens.len(), "tokenized description");
    tokens
}
