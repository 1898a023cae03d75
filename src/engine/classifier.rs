use crate::reading::Token;
use crate::vocabulary::{VerbType, Vocabulary};

/// Widest verb window, in tokens
pub const MAX_WINDOW: usize = 3;

/// A classified verb window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbMatch {
    pub verb_type: VerbType,
    /// Token index the verb starts at
    pub start: usize,
    /// Extra tokens the verb occupies beyond the first (0, 1 or 2)
    pub chain_offset: usize,
}

impl VerbMatch {
    /// Index of the last token belonging to the verb
    pub fn end(&self) -> usize {
        self.start + self.chain_offset
    }
}

/// Candidate windows starting at `start`, shortest first.
///
/// Windows that would run past the last token are not built.
pub fn windows(tokens: &[Token], start: usize) -> Vec<String> {
    let available = tokens.len().saturating_sub(start).min(MAX_WINDOW);

    (1..=available)
        .map(|width| {
            tokens[start..start + width]
                .iter()
                .map(Token::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Classify the verb starting at `start`, preferring the shortest window.
pub fn classify_at(vocabulary: &Vocabulary, tokens: &[Token], start: usize) -> Option<VerbMatch> {
    windows(tokens, start)
        .iter()
        .enumerate()
        .find_map(|(chain_offset, window)| {
            vocabulary
                .classify_verb(window)
                .map(|verb_type| VerbMatch {
                    verb_type,
                    start,
                    chain_offset,
                })
        })
}
