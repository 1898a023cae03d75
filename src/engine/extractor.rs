use super::classifier::{classify_at, VerbMatch};
use super::config::SymbolicMode;
use crate::reading::Token;
use crate::vocabulary::{VerbType, Vocabulary};
use serde::Serialize;
use tracing::trace;

/// A (subject, object) pair extracted from one verb occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuple {
    pub subject: String,
    pub object: String,
    pub verb: VerbMatch,
}

impl Tuple {
    pub fn pair(&self) -> (&str, &str) {
        (self.subject.as_str(), self.object.as_str())
    }
}

impl Serialize for Tuple {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [&self.subject, &self.object].serialize(serializer)
    }
}

/// Bounds-checked token lookup; out-of-range positions read as empty.
fn token_at(tokens: &[Token], index: Option<usize>) -> String {
    match index.and_then(|i| tokens.get(i)) {
        Some(token) => token.text.clone(),
        None => {
            trace!(?index, "token index out of range, substituting empty token");
            String::new()
        }
    }
}

/// Build the tuple for a verb match, or `None` when the verb type emits
/// nothing under `symbolic_mode`.
pub fn synthesize(tokens: &[Token], verb: VerbMatch, symbolic_mode: SymbolicMode) -> Option<Tuple> {
    let before = verb.start.checked_sub(1);
    let after = verb.end() + 1;

    let (subject, object) = match (verb.verb_type, symbolic_mode) {
        (VerbType::Centric, _) | (VerbType::Symbolic, SymbolicMode::Centric) => {
            (token_at(tokens, before), token_at(tokens, Some(after)))
        }
        (VerbType::Leading, _) => (
            token_at(tokens, Some(after)),
            token_at(tokens, Some(after + 1)),
        ),
        (VerbType::Symbolic, SymbolicMode::Skip) => return None,
    };

    Some(Tuple {
        subject,
        object,
        verb,
    })
}

/// Scan tokens left to right and extract one tuple per verb occurrence.
///
/// Every position is tried independently, so windows overlapping an earlier
/// match are still classified.
pub fn extract_tuples(
    vocabulary: &Vocabulary,
    tokens: &[Token],
    symbolic_mode: SymbolicMode,
) -> Vec<Tuple> {
    (0..tokens.len())
        .filter_map(|i| classify_at(vocabulary, tokens, i))
        .filter_map(|verb| {
            trace!(
                verb_type = %verb.verb_type,
                start = verb.start,
                chain_offset = verb.chain_offset,
                "verb matched"
            );
            synthesize(tokens, verb, symbolic_mode)
        })
        .collect()
}
