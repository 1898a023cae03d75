//! # LPU - Language Processing Unit
//!
//! A small rule-based compiler turning descriptions such as
//! `"visual property is true"` into configuration trees.
//!
//! ## Pipeline
//!
//! - **vocabulary**: verb phrases by type, compound phrases
//! - **reading**: space splitting and compound merging into tokens
//! - **engine**: verb classification, tuple extraction, configuration crafting
//! - **input**, **repl**, **app**, **ui**: the interactive front end
//!
//! ## Example
//!
//! ```rust
//! use lpu::Lpu;
//!
//! let lpu = Lpu::default();
//!
//! let tuples = lpu.parse("visual property is true");
//! assert_eq!(tuples[0].pair(), ("visual property", "true"));
//!
//! let configuration = lpu.use_words("visual property is true");
//! assert_eq!(configuration.to_json().unwrap(), r#"{"system":{"visual":"true"}}"#);
//! ```

pub mod app;
pub mod engine;
pub mod input;
pub mod reading;
pub mod repl;
pub mod ui;
pub mod vocabulary;

pub use engine::{
    Configuration, ConfigValue, CraftingError, Lpu, MergeStrategy, ParseReport, ParserConfig,
    SymbolicMode, Tuple, VerbMatch,
};
pub use input::{load_description, LoadError};
pub use reading::Token;
pub use vocabulary::{VerbType, Vocabulary, VocabularyError};
