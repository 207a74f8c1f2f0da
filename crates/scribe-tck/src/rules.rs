//! Structural rule document loading
//!
//! The rule document is JSON or TOML with the keys `required_fields`,
//! `id_pattern`, `topic_pattern`, `max_aliases`, `max_len` and the optional
//! `forbid_alias_equals_canonical`. Key presence is checked on the raw
//! document first so a missing key is reported by name.

use crate::error::{Result, TckError};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Top-level keys every rule document must carry
pub const REQUIRED_KEYS: &[&str] = &[
    "required_fields",
    "id_pattern",
    "topic_pattern",
    "max_aliases",
    "max_len",
];

/// Fields that must have an entry under `max_len`
pub const LENGTH_LIMITED_FIELDS: &[&str] = &["id", "canonical_zh", "canonical_en"];

#[derive(Debug, Deserialize)]
struct RuleDocument {
    required_fields: Vec<String>,
    id_pattern: String,
    topic_pattern: String,
    max_aliases: usize,
    max_len: BTreeMap<String, usize>,
    #[serde(default)]
    forbid_alias_equals_canonical: bool,
}

/// Maximum lengths, in characters, of the scalar record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    /// Limit for `id`
    pub id: usize,
    /// Limit for `canonical_zh`
    pub canonical_zh: usize,
    /// Limit for `canonical_en`
    pub canonical_en: usize,
}

/// A compiled pattern applied as a full match
#[derive(Debug, Clone)]
pub struct FullMatch {
    source: String,
    regex: Regex,
}

impl FullMatch {
    /// Compile `pattern` so it must match the entire input
    pub fn new(pattern: &str) -> std::result::Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Whether `value` matches in full
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// Pattern as written in the rule document
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Structural rules loaded once per conformance run
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Field names every record must carry
    pub required_fields: Vec<String>,
    /// Identifier format
    pub id_pattern: FullMatch,
    /// Topic format
    pub topic_pattern: FullMatch,
    /// Maximum alias count per record
    pub max_aliases: usize,
    /// Per-field length limits
    pub max_len: FieldLimits,
    /// Reject records whose aliases include a canonical name
    pub forbid_alias_equals_canonical: bool,
}

impl RuleSet {
    /// Load a rule document, choosing TOML or JSON by file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TckError::Config(format!("cannot read rule document {}: {}", path.display(), e))
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::from_toml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
    }

    /// Parse a JSON rule document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| TckError::Config(format!("rule document is not valid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Parse a TOML rule document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let value: Value = toml::from_str(toml_str)
            .map_err(|e| TckError::Config(format!("rule document is not valid TOML: {}", e)))?;
        Self::from_value(value)
    }

    /// Build rules from an already parsed document
    pub fn from_value(value: Value) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| TckError::Config("rule document must be a mapping".to_string()))?;

        for key in REQUIRED_KEYS {
            if !map.contains_key(*key) {
                return Err(TckError::Config(format!("L0 rule missing key: {}", key)));
            }
        }
        if let Some(limits) = map.get("max_len").and_then(Value::as_object) {
            for field in LENGTH_LIMITED_FIELDS {
                if !limits.contains_key(*field) {
                    return Err(TckError::Config(format!(
                        "L0 rule missing key: max_len.{}",
                        field
                    )));
                }
            }
        }

        let doc: RuleDocument = serde_json::from_value(value)
            .map_err(|e| TckError::Config(format!("malformed rule document: {}", e)))?;

        let compile = |name: &str, pattern: &str| {
            FullMatch::new(pattern)
                .map_err(|e| TckError::Config(format!("invalid {}: {}", name, e)))
        };
        let id_pattern = compile("id_pattern", &doc.id_pattern)?;
        let topic_pattern = compile("topic_pattern", &doc.topic_pattern)?;

        let limit = |field: &str| doc.max_len.get(field).copied().unwrap_or(usize::MAX);
        let max_len = FieldLimits {
            id: limit("id"),
            canonical_zh: limit("canonical_zh"),
            canonical_en: limit("canonical_en"),
        };

        Ok(Self {
            required_fields: doc.required_fields,
            id_pattern,
            topic_pattern,
            max_aliases: doc.max_aliases,
            max_len,
            forbid_alias_equals_canonical: doc.forbid_alias_equals_canonical,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RULES_JSON: &str = r#"{
        "required_fields": ["id", "canonical_zh", "canonical_en", "engineering_bindings"],
        "id_pattern": "^[a-z][a-z0-9_]*$",
        "topic_pattern": "^[a-z]+\\.[a-z0-9_]+\\.[vV][0-9]+(\\.[0-9]+)?$",
        "max_aliases": 10,
        "max_len": {"id": 64, "canonical_zh": 64, "canonical_en": 128},
        "forbid_alias_equals_canonical": true
    }"#;

    #[test]
    fn test_load_json_rules() {
        let rules = RuleSet::from_json_str(RULES_JSON).unwrap();
        assert_eq!(rules.required_fields.len(), 4);
        assert_eq!(rules.max_aliases, 10);
        assert_eq!(rules.max_len.canonical_en, 128);
        assert!(rules.forbid_alias_equals_canonical);
        assert!(rules.id_pattern.is_match("persona_state"));
        assert!(!rules.id_pattern.is_match("Persona"));
        assert!(rules.topic_pattern.is_match("ps.persona_state.V2.0"));
    }

    #[test]
    fn test_collision_flag_defaults_off() {
        let json = RULES_JSON.replace("\"forbid_alias_equals_canonical\"", "\"unrelated_flag\"");
        let rules = RuleSet::from_json_str(&json).unwrap();
        assert!(!rules.forbid_alias_equals_canonical);
    }

    #[test]
    fn test_missing_key_is_named() {
        let json = RULES_JSON.replace("\"max_aliases\": 10,", "");
        let err = RuleSet::from_json_str(&json).unwrap_err();
        assert_eq!(err.kind(), "ConfigError");
        assert!(err.to_string().contains("max_aliases"));
    }

    #[test]
    fn test_missing_length_limit_is_named() {
        let json = RULES_JSON.replace("\"canonical_zh\": 64, ", "");
        let err = RuleSet::from_json_str(&json).unwrap_err();
        assert!(err.to_string().contains("max_len.canonical_zh"));
    }

    #[test]
    fn test_invalid_pattern() {
        let json = RULES_JSON.replace("^[a-z][a-z0-9_]*$", "^[a-z");
        let err = RuleSet::from_json_str(&json).unwrap_err();
        assert!(err.to_string().contains("id_pattern"));
    }

    #[test]
    fn test_non_mapping_document() {
        assert!(RuleSet::from_json_str("[1, 2]").is_err());
    }

    #[test]
    fn test_patterns_are_full_match() {
        let pattern = FullMatch::new("[a-z]+").unwrap();
        assert!(pattern.is_match("abc"));
        assert!(!pattern.is_match("abc1"));
        assert_eq!(pattern.as_str(), "[a-z]+");
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
required_fields = ["id"]
id_pattern = '^[a-z][a-z0-9_]*$'
topic_pattern = '^[a-z]+\.[a-z0-9_]+\.[vV][0-9]+(\.[0-9]+)?$'
max_aliases = 5

[max_len]
id = 32
canonical_zh = 32
canonical_en = 32
"#
        )
        .unwrap();

        let rules = RuleSet::from_path(file.path()).unwrap();
        assert_eq!(rules.max_aliases, 5);
        assert_eq!(rules.max_len.id, 32);
        assert!(rules.topic_pattern.is_match("mm.memory_slot.v1"));
    }

    #[test]
    fn test_missing_file() {
        let err = RuleSet::from_path("/nonexistent/rules.json").unwrap_err();
        assert_eq!(err.kind(), "ConfigError");
    }
}
