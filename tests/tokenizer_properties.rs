use lpu::engine::config::{MergeStrategy, ParserConfig, SymbolicMode};
use lpu::{Lpu, Vocabulary};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    let vocabulary_words = prop::sample::select(vec![
        "is", "would", "have", "=", "neural", "network", "visual", "property", "",
    ])
    .prop_map(str::to_string);

    prop_oneof![vocabulary_words, "[a-z0-9,.]{1,8}"]
}

fn description() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..24).prop_map(|words| words.join(" "))
}

fn strategy() -> impl Strategy<Value = MergeStrategy> {
    prop_oneof![Just(MergeStrategy::Greedy), Just(MergeStrategy::Backtrack)]
}

proptest! {
    #[test]
    fn tokens_partition_the_description(text in description(), merge in strategy()) {
        let lpu = Lpu::new(
            Vocabulary::builtin(),
            ParserConfig::default().with_merge_strategy(merge),
        );
        let tokens = lpu.tokenize(&text);

        let rejoined: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(rejoined.join(" "), text.clone());

        let mut next = 0;
        for token in &tokens {
            prop_assert_eq!(token.start, next);
            prop_assert!(token.words >= 1);
            next += token.words;
        }
        prop_assert_eq!(next, text.split(' ').count());
    }

    #[test]
    fn parsing_never_panics(text in description(), skip in any::<bool>(), inject in any::<bool>()) {
        let symbolic = if skip { SymbolicMode::Skip } else { SymbolicMode::Centric };
        let lpu = Lpu::new(
            Vocabulary::builtin(),
            ParserConfig::default()
                .with_symbolic_mode(symbolic)
                .with_inject_on_failure(inject),
        );
        let report = lpu.report(&text);

        prop_assert!(report.tuples.len() <= report.tokens.len());
        if !inject {
            prop_assert!(!report.configuration.has_diagnostics());
        }
    }
}
