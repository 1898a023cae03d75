use crate::engine::config::{MergeStrategy, SymbolicMode};

/// A parser or display setting changed from the REPL
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Setting {
    Symbolic(SymbolicMode),
    Inject(bool),
    Merge(MergeStrategy),
}

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Describe(String),
    LoadFile(String),
    ShowVocabulary,
    Change(Setting),
    Quit,
    Help,
    InvalidCommand(String),
}

impl std::fmt::Display for Setting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Setting::Symbolic(SymbolicMode::Centric) => write!(f, "symbolic = centric"),
            Setting::Symbolic(SymbolicMode::Skip) => write!(f, "symbolic = skip"),
            Setting::Inject(true) => write!(f, "inject = on"),
            Setting::Inject(false) => write!(f, "inject = off"),
            Setting::Merge(MergeStrategy::Greedy) => write!(f, "merge = greedy"),
            Setting::Merge(MergeStrategy::Backtrack) => write!(f, "merge = backtrack"),
        }
    }
}
