// Settings for the LPU pipeline and the REPL built on top of it

/// What the extractor does with a symbolic verb ("=", ":", "<>")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolicMode {
    /// Subject before the verb, object after it (same as centric verbs)
    #[default]
    Centric,
    /// Emit no tuple for symbolic matches
    Skip,
}

/// How the tokenizer settles a compound accumulation that ended without
/// matching a registered compound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Emit the accumulation exactly as the merge loop left it
    Greedy,
    /// Fall back to the longest registered compound, or the first word
    ///
    /// This undoes merges started by the substring prefix test, so a lone
    /// "network" stays one token; use `Greedy` for the unmodified stream.
    #[default]
    Backtrack,
}

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub symbolic_mode: SymbolicMode,

    pub merge_strategy: MergeStrategy,

    /// Record malformed property tuples as `lpu::craftingexception::<idx>`
    /// entries (default true)
    pub inject_on_failure: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            symbolic_mode: SymbolicMode::default(),
            merge_strategy: MergeStrategy::default(),
            inject_on_failure: true,
        }
    }
}

impl ParserConfig {
    pub fn with_symbolic_mode(mut self, symbolic_mode: SymbolicMode) -> Self {
        self.symbolic_mode = symbolic_mode;
        self
    }

    pub fn with_merge_strategy(mut self, merge_strategy: MergeStrategy) -> Self {
        self.merge_strategy = merge_strategy;
        self
    }

    pub fn with_inject_on_failure(mut self, inject_on_failure: bool) -> Self {
        self.inject_on_failure = inject_on_failure;
        self
    }
}

/// REPL display settings
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Print the token sequence before the configuration
    pub show_tokens: bool,

    /// Print extracted tuples before the configuration
    pub show_tuples: bool,

    /// Pretty-print the JSON configuration
    pub pretty_json: bool,

    pub prompt: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_tokens: true,
            show_tuples: true,
            pretty_json: true,
            prompt: "lpu> ".to_string(),
        }
    }
}

/// Master configuration combining all LPU settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub parser: ParserConfig,
    pub display: DisplayConfig,
}
