use super::{VerbType, Vocabulary};
use lazy_static::lazy_static;

const LEADING_VERBS: &[&str] = &[
    "will have",
    "could have",
    "would have",
    "could use",
    "would use",
    "could be using",
];

const CENTRIC_VERBS: &[&str] = &["is", "will be", "would be", "could be", "is named", "to"];

const SYMBOLIC_VERBS: &[&str] = &["=", ":", "<>"];

const COMPOUNDS: &[&str] = &[
    // System names
    "activation function",
    "neural network",
    "system configuration",
    // Property names
    "visual property",
    "params property",
    "csvpath property",
    // Misc
    "as follows",
];

lazy_static! {
    static ref BUILTIN_VOCABULARY: Vocabulary = Vocabulary {
        leading: LEADING_VERBS.iter().map(|s| s.to_string()).collect(),
        centric: CENTRIC_VERBS.iter().map(|s| s.to_string()).collect(),
        symbolic: SYMBOLIC_VERBS.iter().map(|s| s.to_string()).collect(),
        compounds: COMPOUNDS.iter().map(|s| s.to_string()).collect(),
    };
}

pub fn get_vocabulary() -> &'static Vocabulary {
    &BUILTIN_VOCABULARY
}
