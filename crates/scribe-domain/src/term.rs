//! Term record - the single entity produced by one extraction

use serde::{Deserialize, Serialize};

/// Field names a rule document may list as required
///
/// Nested fields use dotted access (`engineering_bindings.topics`).
pub const FIELD_NAMES: &[&str] = &[
    "id",
    "canonical_zh",
    "canonical_en",
    "aliases",
    "engineering_bindings",
    "engineering_bindings.topics",
    "engineering_bindings.schemas",
    "rationale",
];

/// Linkage from a term to concrete system artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineeringBindings {
    /// Dotted, versioned event topics in first-seen order
    pub topics: Vec<String>,

    /// Schema paths derived from `topics`, same order
    pub schemas: Vec<String>,
}

/// A glossary term extracted from free text
///
/// Records are built fresh by every extraction and never mutated afterwards.
/// Field declaration order is the order used when the record is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermRecord {
    /// Lowercase snake-style identifier
    pub id: String,

    /// Authoritative Chinese name
    pub canonical_zh: String,

    /// Authoritative English name
    pub canonical_en: String,

    /// Alternative names, distinct and disjoint from both canonical names
    pub aliases: Vec<String>,

    /// Topics and schemas bound to this term
    pub engineering_bindings: EngineeringBindings,

    /// Free-text explanation, never empty
    pub rationale: String,
}

impl TermRecord {
    /// Whether the named field is present on this record
    ///
    /// Scalar text fields count as present only when non-empty. Unknown field
    /// names are never present.
    pub fn has_field(&self, name: &str) -> bool {
        match name {
            "id" => !self.id.is_empty(),
            "canonical_zh" => !self.canonical_zh.is_empty(),
            "canonical_en" => !self.canonical_en.is_empty(),
            "rationale" => !self.rationale.is_empty(),
            "aliases"
            | "engineering_bindings"
            | "engineering_bindings.topics"
            | "engineering_bindings.schemas" => true,
            _ => false,
        }
    }

    /// Whether `value` equals either canonical name
    pub fn is_canonical(&self, value: &str) -> bool {
        value == self.canonical_zh || value == self.canonical_en
    }

    /// Copy of this record with `aliases`, `topics` and `schemas` sorted
    ///
    /// Two records that differ only in the order of those three sequences
    /// normalize to equal values. Every other field is left untouched.
    pub fn normalized(&self) -> TermRecord {
        let mut record = self.clone();
        record.aliases.sort();
        record.engineering_bindings.topics.sort();
        record.engineering_bindings.schemas.sort();
        record
    }
}

/// Serialize records to the compact JSON form used for byte-level comparison
pub fn canonical_json(records: &[TermRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string(records)
}
