use super::assembler::{craft, Configuration};
use super::config::ParserConfig;
use super::extractor::{extract_tuples, Tuple};
use crate::reading::{tokenize_text, Token};
use crate::vocabulary::Vocabulary;
use tracing::info_span;

/// Language Processing Unit: turns descriptions into configurations.
///
/// Borrows its vocabulary; a parser holds no state between calls, so one
/// instance can serve any number of descriptions, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Lpu<'v> {
    vocabulary: &'v Vocabulary,
    config: ParserConfig,
}

/// Every intermediate product of one description.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport {
    pub tokens: Vec<Token>,
    pub tuples: Vec<Tuple>,
    pub configuration: Configuration,
}

impl Default for Lpu<'static> {
    fn default() -> Self {
        Self::new(Vocabulary::builtin(), ParserConfig::default())
    }
}

impl<'v> Lpu<'v> {
    pub fn new(vocabulary: &'v Vocabulary, config: ParserConfig) -> Self {
        Self { vocabulary, config }
    }

    pub fn new_with_default_config(vocabulary: &'v Vocabulary) -> Self {
        Self::new(vocabulary, ParserConfig::default())
    }

    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    pub fn tokenize(&self, description: &str) -> Vec<Token> {
        tokenize_text(description, self.vocabulary, self.config.merge_strategy)
    }

    /// Tuples of one left-to-right pass over `description`.
    pub fn parse(&self, description: &str) -> Vec<Tuple> {
        let tokens = self.tokenize(description);
        extract_tuples(self.vocabulary, &tokens, self.config.symbolic_mode)
    }

    /// Configuration crafted from `description`.
    pub fn use_words(&self, description: &str) -> Configuration {
        self.report(description).configuration
    }

    /// Craft `description` and hand the configuration to `consumer`.
    pub fn use_words_with<T, F>(&self, description: &str, consumer: F) -> T
    where
        F: FnOnce(Configuration) -> T,
    {
        consumer(self.use_words(description))
    }

    /// Craft `description` straight into any type built from a configuration.
    pub fn use_words_into<T: From<Configuration>>(&self, description: &str) -> T {
        self.use_words_with(description, T::from)
    }

    pub fn report(&self, description: &str) -> ParseReport {
        let _span = info_span!("use_words", len = description.len()).entered();
        let tokens = self.tokenize(description);
        let tuples = extract_tuples(self.vocabulary, &tokens, self.config.symbolic_mode);
        let configuration = craft(&tuples, self.config.inject_on_failure);

        ParseReport {
            tokens,
            tuples,
            configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{MergeStrategy, SymbolicMode};
    use crate::vocabulary::VerbType;

    #[test]
    fn test_default_uses_builtin_vocabulary() {
        let lpu = Lpu::default();
        assert!(std::ptr::eq(lpu.vocabulary(), Vocabulary::builtin()));
        assert_eq!(lpu.config(), ParserConfig::default());
    }

    #[test]
    fn test_use_words_visual_property() {
        let configuration = Lpu::default().use_words("visual property is true");
        assert_eq!(configuration.system_value("visual"), Some("true"));
        assert!(!configuration.has_diagnostics());
    }

    #[test]
    fn test_report_keeps_intermediate_products() {
        let report = Lpu::default().report("the neural network would have epochs 10");
        let texts: Vec<&str> = report.tokens.iter().map(Token::as_str).collect();
        assert_eq!(
            texts,
            vec!["the", "neural network", "would", "have", "epochs", "10"]
        );
        assert_eq!(report.tuples.len(), 1);
        assert_eq!(report.tuples[0].pair(), ("epochs", "10"));
        // "epochs" is not a property assertion
        assert!(report.configuration.system().is_empty());
    }

    #[test]
    fn test_greedy_legacy_mode() {
        let lpu = Lpu::new(
            Vocabulary::builtin(),
            ParserConfig::default().with_merge_strategy(MergeStrategy::Greedy),
        );
        assert!(lpu.parse("visual property is true").is_empty());
    }

    #[test]
    fn test_symbolic_property() {
        let skip = Lpu::new(
            Vocabulary::builtin(),
            ParserConfig::default().with_symbolic_mode(SymbolicMode::Skip),
        );
        assert!(skip.use_words("visual property = false").system().is_empty());
        assert_eq!(
            Lpu::default()
                .use_words("visual property = false")
                .system_value("visual"),
            Some("false")
        );
    }

    #[test]
    fn test_use_words_with_sees_empty_value() {
        let keys = Lpu::default().use_words_with(
            "visual property is true and params property is",
            |configuration| {
                assert!(!configuration.has_diagnostics());
                configuration
                    .system()
                    .iter()
                    .map(|(key, value)| format!("{}={}", key, value.as_text().unwrap_or("?")))
                    .collect::<Vec<_>>()
            },
        );
        assert_eq!(keys, vec!["visual=true", "params="]);
    }

    #[test]
    fn test_use_words_into_consumer() {
        struct Model {
            visual: bool,
        }

        impl From<Configuration> for Model {
            fn from(configuration: Configuration) -> Self {
                Self {
                    visual: configuration.system_value("visual") == Some("true"),
                }
            }
        }

        let model: Model = Lpu::default().use_words_into("visual property is true");
        assert!(model.visual);
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocabulary = Vocabulary::builder()
            .verb(VerbType::Centric, "equals")
            .compound("learning rate property")
            .build()
            .unwrap();
        let lpu = Lpu::new_with_default_config(&vocabulary);
        let configuration = lpu.use_words("learning rate property equals 0.01");
        assert_eq!(configuration.system_value("learning"), Some("0.01"));
    }
}
