//! Vocabulary store
//!
//! Read-only registry of verb phrases (grouped by [`VerbType`]) and compound
//! phrases the rest of the pipeline is driven by.
//!
//! ## Module Structure
//!
//! - **mod.rs**: `Vocabulary`, `VerbType` and the builder
//! - **builtin.rs**: the process-wide default vocabulary

pub mod builtin;

use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Classification of a verb phrase by where it sits relative to its subject
/// and object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VerbType {
    /// Verb precedes both subject and object ("would have X Y")
    Leading,
    /// Verb sits between subject and object ("X is Y")
    Centric,
    /// Punctuation-like connective ("X = Y")
    Symbolic,
}

impl VerbType {
    /// Lookup order used when a phrase is registered under several types.
    pub const ALL: [VerbType; 3] = [VerbType::Leading, VerbType::Centric, VerbType::Symbolic];

    pub fn as_str(&self) -> &'static str {
        match self {
            VerbType::Leading => "leading",
            VerbType::Centric => "centric",
            VerbType::Symbolic => "symbolic",
        }
    }
}

impl fmt::Display for VerbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VocabularyError {
    #[error("Empty {0} verb phrase")]
    EmptyVerb(VerbType),

    #[error("Compound phrase must contain at least two words: '{0}'")]
    NotACompound(String),
}

/// Verb and compound phrases a parser is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    leading: BTreeSet<String>,
    centric: BTreeSet<String>,
    symbolic: BTreeSet<String>,
    /// Lowercased compound phrases
    compounds: BTreeSet<String>,
}

impl Vocabulary {
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::default()
    }

    /// The shared default vocabulary.
    pub fn builtin() -> &'static Vocabulary {
        builtin::get_vocabulary()
    }

    pub fn verbs(&self, verb_type: VerbType) -> &BTreeSet<String> {
        match verb_type {
            VerbType::Leading => &self.leading,
            VerbType::Centric => &self.centric,
            VerbType::Symbolic => &self.symbolic,
        }
    }

    pub fn compounds(&self) -> &BTreeSet<String> {
        &self.compounds
    }

    /// True if some compound contains `candidate` (case-insensitively) without
    /// being equal to it.
    ///
    /// Containment is checked anywhere in the compound, not only at its start:
    /// "network" counts as a prefix of "neural network" and "is" as a prefix
    /// of "visual property".
    pub fn is_compound_prefix(&self, candidate: &str) -> bool {
        let candidate = candidate.to_lowercase();
        self.compounds
            .iter()
            .any(|compound| compound.contains(&candidate) && *compound != candidate)
    }

    /// Case-insensitive equality with a registered compound.
    pub fn is_compound(&self, candidate: &str) -> bool {
        self.compounds.contains(&candidate.to_lowercase())
    }

    /// Exact, case-sensitive verb lookup over [`VerbType::ALL`].
    pub fn classify_verb(&self, window: &str) -> Option<VerbType> {
        VerbType::ALL
            .into_iter()
            .find(|verb_type| self.verbs(*verb_type).contains(window))
    }
}

/// Incremental construction of a [`Vocabulary`].
#[derive(Debug, Clone, Default)]
pub struct VocabularyBuilder {
    vocabulary: Vocabulary,
    error: Option<VocabularyError>,
}

impl VocabularyBuilder {
    pub fn verb(mut self, verb_type: VerbType, phrase: &str) -> Self {
        if phrase.is_empty() {
            self.error.get_or_insert(VocabularyError::EmptyVerb(verb_type));
            return self;
        }

        let set = match verb_type {
            VerbType::Leading => &mut self.vocabulary.leading,
            VerbType::Centric => &mut self.vocabulary.centric,
            VerbType::Symbolic => &mut self.vocabulary.symbolic,
        };
        set.insert(phrase.to_string());
        self
    }

    pub fn verbs(self, verb_type: VerbType, phrases: &[&str]) -> Self {
        phrases
            .iter()
            .fold(self, |builder, phrase| builder.verb(verb_type, phrase))
    }

    pub fn compound(mut self, phrase: &str) -> Self {
        if !phrase.trim().contains(' ') {
            self.error
                .get_or_insert(VocabularyError::NotACompound(phrase.to_string()));
            return self;
        }

        self.vocabulary.compounds.insert(phrase.to_lowercase());
        self
    }

    pub fn compounds(self, phrases: &[&str]) -> Self {
        phrases
            .iter()
            .fold(self, |builder, phrase| builder.compound(phrase))
    }

    /// Finish the vocabulary, reporting the first invalid phrase if any.
    pub fn build(self) -> Result<Vocabulary, VocabularyError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.vocabulary),
        }
    }
}
