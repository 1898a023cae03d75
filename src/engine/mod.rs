pub mod assembler;
pub mod classifier;
pub mod config;
pub mod error;
pub mod extractor;
pub mod lpu;

pub use assembler::{craft, ConfigTree, ConfigValue, Configuration};
pub use classifier::{classify_at, VerbMatch};
pub use config::{Config, MergeStrategy, ParserConfig, SymbolicMode};
pub use error::CraftingError;
pub use extractor::{extract_tuples, Tuple};
pub use lpu::{Lpu, ParseReport};
