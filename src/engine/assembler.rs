//! Configuration assembler
//!
//! Turns extracted tuples into a configuration tree rooted at `system`.
//! Tuples whose subject mentions `property` become `system` entries keyed by
//! the subject's first word; subjects without a first word are kept as
//! `lpu::craftingexception::<index>` diagnostics next to `system`.

use super::error::CraftingError;
use super::extractor::Tuple;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

pub const SYSTEM_KEY: &str = "system";
pub const DIAGNOSTIC_PREFIX: &str = "lpu::craftingexception::";

/// Marker a subject must contain to be read as a property assertion
const PROPERTY_MARKER: &str = "property";

/// Ordered string-keyed tree; re-inserting a key overwrites it in place.
pub type ConfigTree = IndexMap<String, ConfigValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Text(String),
    /// Offending (subject, object) pair of a diagnostic entry
    Tuple([String; 2]),
    Tree(ConfigTree),
}

impl ConfigValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Configuration crafted from a description.
///
/// Serializes as `{"system": {..}, "lpu::craftingexception::<idx>": [..], ..}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    system: ConfigTree,
    diagnostics: IndexMap<String, [String; 2]>,
}

impl Serialize for Configuration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1 + self.diagnostics.len()))?;
        map.serialize_entry(SYSTEM_KEY, &self.system)?;
        for (key, pair) in &self.diagnostics {
            map.serialize_entry(key, pair)?;
        }
        map.end()
    }
}

impl Configuration {
    /// An empty `{ system: {} }` configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn system(&self) -> &ConfigTree {
        &self.system
    }

    pub fn system_value(&self, key: &str) -> Option<&str> {
        self.system.get(key).and_then(ConfigValue::as_text)
    }

    /// Set `system[key]`; the last write for a key wins.
    pub fn set_system(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.system.insert(key.into(), ConfigValue::Text(value.into()));
    }

    pub fn record_diagnostic(&mut self, index: usize, tuple: &Tuple) {
        self.diagnostics.insert(
            format!("{}{}", DIAGNOSTIC_PREFIX, index),
            [tuple.subject.clone(), tuple.object.clone()],
        );
    }

    /// Diagnostic entries as (key, offending pair), in insertion order.
    pub fn diagnostics(&self) -> Vec<(&str, &[String; 2])> {
        self.diagnostics
            .iter()
            .map(|(key, pair)| (key.as_str(), pair))
            .collect()
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// The whole configuration as one tree, `system` first.
    pub fn to_tree(&self) -> ConfigTree {
        let mut root = ConfigTree::new();
        root.insert(SYSTEM_KEY.to_string(), ConfigValue::Tree(self.system.clone()));
        for (key, pair) in &self.diagnostics {
            root.insert(key.clone(), ConfigValue::Tuple(pair.clone()));
        }
        root
    }

    /// Leaf keys of the tree, depth first in insertion order.
    ///
    /// Nested trees contribute their own leaf keys instead of their key, and
    /// a diagnostic pair is walked like an array, contributing `"0"` and `"1"`.
    pub fn semantic_poi(&self) -> Vec<String> {
        fn collect(tree: &ConfigTree, keys: &mut Vec<String>) {
            for (key, value) in tree {
                match value {
                    ConfigValue::Text(_) => keys.push(key.clone()),
                    ConfigValue::Tuple(pair) => {
                        keys.extend((0..pair.len()).map(|i| i.to_string()))
                    }
                    ConfigValue::Tree(inner) => collect(inner, keys),
                }
            }
        }

        let mut keys = Vec::new();
        collect(&self.to_tree(), &mut keys);
        keys
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Read a tuple as a property assertion.
///
/// `Ok(None)` means the tuple is not a property assertion at all. An empty
/// object is a valid value.
pub fn extract_property(tuple: &Tuple) -> Result<Option<(String, String)>, CraftingError> {
    if !tuple.subject.contains(PROPERTY_MARKER) {
        return Ok(None);
    }

    let key = tuple.subject.split(' ').next().unwrap_or_default();
    if key.is_empty() {
        return Err(CraftingError::MissingKey(tuple.subject.clone()));
    }

    Ok(Some((key.to_string(), tuple.object.clone())))
}

/// Build a configuration from tuples.
///
/// A property tuple without a key never stops the scan: with `inject_on_failure`
/// it is recorded as a diagnostic entry, otherwise it is dropped.
pub fn craft(tuples: &[Tuple], inject_on_failure: bool) -> Configuration {
    let mut configuration = Configuration::new();

    for (index, tuple) in tuples.iter().enumerate() {
        match extract_property(tuple) {
            Ok(Some((key, value))) => {
                debug!(key = %key, value = %value, "property assertion");
                configuration.set_system(key, value);
            }
            Ok(None) => {}
            Err(err) => {
                warn!(index, error = %err, "malformed property tuple");
                if inject_on_failure {
                    configuration.record_diagnostic(index, tuple);
                }
            }
        }
    }

    configuration
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::classifier::VerbMatch;
    use crate::vocabulary::VerbType;

    fn tuple(subject: &str, object: &str) -> Tuple {
        Tuple {
            subject: subject.to_string(),
            object: object.to_string(),
            verb: VerbMatch {
                verb_type: VerbType::Centric,
                start: 1,
                chain_offset: 0,
            },
        }
    }

    #[test]
    fn test_empty_tuples_give_empty_system() {
        let configuration = craft(&[], true);
        assert_eq!(configuration, Configuration::new());
        assert_eq!(configuration.to_json().unwrap(), r#"{"system":{}}"#);
    }

    #[test]
    fn test_property_assertion() {
        let configuration = craft(&[tuple("visual property", "true")], true);
        assert_eq!(configuration.system_value("visual"), Some("true"));
        assert_eq!(
            configuration.to_json().unwrap(),
            r#"{"system":{"visual":"true"}}"#
        );
    }

    #[test]
    fn test_non_property_tuple_ignored() {
        let configuration = craft(&[tuple("model", "good")], true);
        assert!(configuration.system().is_empty());
        assert!(!configuration.has_diagnostics());
    }

    #[test]
    fn test_value_kept_verbatim() {
        let configuration = craft(&[tuple("params property", "[1, 2]")], true);
        assert_eq!(configuration.system_value("params"), Some("[1, 2]"));
    }

    #[test]
    fn test_last_write_wins_in_place() {
        let configuration = craft(
            &[
                tuple("visual property", "true"),
                tuple("csvpath property", "data.csv"),
                tuple("visual property", "false"),
            ],
            true,
        );
        let keys: Vec<&String> = configuration.system().keys().collect();
        assert_eq!(keys, vec!["visual", "csvpath"]);
        assert_eq!(configuration.system_value("visual"), Some("false"));
    }

    #[test]
    fn test_missing_value_stored_as_empty() {
        let configuration = craft(
            &[tuple("visual property", "true"), tuple("params property", "")],
            true,
        );
        assert_eq!(configuration.system_value("params"), Some(""));
        assert!(!configuration.has_diagnostics());
        assert_eq!(
            configuration.to_json().unwrap(),
            r#"{"system":{"visual":"true","params":""}}"#
        );
    }

    #[test]
    fn test_missing_key_recorded_and_scan_continues() {
        let configuration = craft(
            &[tuple(" property", "x"), tuple("visual property", "true")],
            true,
        );
        assert_eq!(configuration.system_value("visual"), Some("true"));
        assert_eq!(
            configuration.to_json().unwrap(),
            r#"{"system":{"visual":"true"},"lpu::craftingexception::0":[" property","x"]}"#
        );
    }

    #[test]
    fn test_failures_dropped_without_injection() {
        let configuration = craft(&[tuple(" property", "x")], false);
        assert_eq!(configuration, Configuration::new());
    }

    #[test]
    fn test_extract_property_results() {
        assert_eq!(extract_property(&tuple("model", "good")), Ok(None));
        assert_eq!(
            extract_property(&tuple("visual property", "true")),
            Ok(Some(("visual".to_string(), "true".to_string())))
        );
        assert_eq!(
            extract_property(&tuple("visual property", "")),
            Ok(Some(("visual".to_string(), String::new())))
        );
        assert_eq!(
            extract_property(&tuple(" property", "x")),
            Err(CraftingError::MissingKey(" property".to_string()))
        );
    }

    #[test]
    fn test_semantic_poi() {
        let configuration = craft(
            &[
                tuple("visual property", "true"),
                tuple("params property", "a,b"),
                tuple(" property", "x"),
                tuple("csvpath property", ""),
            ],
            true,
        );
        assert_eq!(
            configuration.semantic_poi(),
            vec!["visual", "params", "csvpath", "0", "1"]
        );
    }
}
