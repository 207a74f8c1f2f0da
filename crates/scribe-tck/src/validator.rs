//! L0 structural validation of produced records

use crate::error::{Result, TckError};
use crate::rules::RuleSet;
use scribe_domain::TermRecord;
use thiserror::Error;

/// A single structural rule a record breaks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    /// Required field absent or empty
    #[error("missing field: {0}")]
    MissingField(String),

    /// Identifier does not match `id_pattern`
    #[error("id '{id}' does not match {pattern}")]
    IdFormat {
        /// Offending identifier
        id: String,
        /// Pattern from the rule document
        pattern: String,
    },

    /// Field exceeds its configured length
    #[error("{field} is {len} characters long (max: {max})")]
    TooLong {
        /// Field name
        field: &'static str,
        /// Actual length in characters
        len: usize,
        /// Configured maximum
        max: usize,
    },

    /// No topic bound to the record
    #[error("topics required")]
    NoTopics,

    /// Topic does not match `topic_pattern`
    #[error("topic format invalid: {topic} (expected {pattern})")]
    TopicFormat {
        /// Offending topic
        topic: String,
        /// Pattern from the rule document
        pattern: String,
    },

    /// More aliases than `max_aliases`
    #[error("too many aliases: {count} (max: {max})")]
    TooManyAliases {
        /// Alias count
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// Alias repeats a canonical name
    #[error("alias '{alias}' equals {field}")]
    AliasEqualsCanonical {
        /// Canonical field that collides
        field: &'static str,
        /// Offending alias
        alias: String,
    },
}

/// The Validator checks produced records against a loaded [`RuleSet`]
pub struct Validator {
    rules: RuleSet,
}

impl Validator {
    /// Create a new Validator with the given rules
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Rules in use
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate a produced record list
    ///
    /// Fails with [`TckError::Validation`] on an empty list or on the first
    /// violation found in any record.
    pub fn validate(&self, records: &[TermRecord]) -> Result<()> {
        if records.is_empty() {
            return Err(TckError::Validation(
                "output must be a non-empty list".to_string(),
            ));
        }

        for (idx, record) in records.iter().enumerate() {
            if let Some(violation) = self.violations(record).into_iter().next() {
                return Err(TckError::Validation(format!(
                    "record {} ('{}'): {}",
                    idx, record.id, violation
                )));
            }
        }
        Ok(())
    }

    /// Every rule a single record breaks, in rule order
    pub fn violations(&self, record: &TermRecord) -> Vec<RuleViolation> {
        let rules = &self.rules;
        let mut violations = Vec::new();

        // 1. Required fields
        for field in &rules.required_fields {
            if !record.has_field(field) {
                violations.push(RuleViolation::MissingField(field.clone()));
            }
        }

        // 2. Identifier format
        if !rules.id_pattern.is_match(&record.id) {
            violations.push(RuleViolation::IdFormat {
                id: record.id.clone(),
                pattern: rules.id_pattern.as_str().to_string(),
            });
        }

        // 3. Lengths
        let lengths = [
            ("id", &record.id, rules.max_len.id),
            ("canonical_zh", &record.canonical_zh, rules.max_len.canonical_zh),
            ("canonical_en", &record.canonical_en, rules.max_len.canonical_en),
        ];
        for (field, value, max) in lengths {
            let len = value.chars().count();
            if len > max {
                violations.push(RuleViolation::TooLong { field, len, max });
            }
        }

        // 4. Topics
        let topics = &record.engineering_bindings.topics;
        if topics.is_empty() {
            violations.push(RuleViolation::NoTopics);
        }
        for topic in topics {
            if !rules.topic_pattern.is_match(topic) {
                violations.push(RuleViolation::TopicFormat {
                    topic: topic.clone(),
                    pattern: rules.topic_pattern.as_str().to_string(),
                });
            }
        }

        // 5. Alias count
        if record.aliases.len() > rules.max_aliases {
            violations.push(RuleViolation::TooManyAliases {
                count: record.aliases.len(),
                max: rules.max_aliases,
            });
        }

        // 6. Alias/canonical collision
        if rules.forbid_alias_equals_canonical {
            for alias in &record.aliases {
                if *alias == record.canonical_zh {
                    violations.push(RuleViolation::AliasEqualsCanonical {
                        field: "canonical_zh",
                        alias: alias.clone(),
                    });
                } else if *alias == record.canonical_en {
                    violations.push(RuleViolation::AliasEqualsCanonical {
                        field: "canonical_en",
                        alias: alias.clone(),
                    });
                }
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_domain::EngineeringBindings;

    fn rules(forbid_collision: bool) -> RuleSet {
        let json = format!(
            r#"{{
                "required_fields": ["id", "canonical_zh", "canonical_en", "aliases", "engineering_bindings", "rationale"],
                "id_pattern": "^[a-z][a-z0-9_]*$",
                "topic_pattern": "^[a-z]+\\.[a-z0-9_]+\\.[vV][0-9]+(\\.[0-9]+)?$",
                "max_aliases": 3,
                "max_len": {{"id": 20, "canonical_zh": 8, "canonical_en": 32}},
                "forbid_alias_equals_canonical": {}
            }}"#,
            forbid_collision
        );
        RuleSet::from_json_str(&json).unwrap()
    }

    fn record() -> TermRecord {
        TermRecord {
            id: "persona_state".to_string(),
            canonical_zh: "人格状态".to_string(),
            canonical_en: "Persona State".to_string(),
            aliases: vec!["人格快照".to_string()],
            engineering_bindings: EngineeringBindings {
                topics: vec!["ps.persona_state.v2.0".to_string()],
                schemas: vec!["schemas/ps/events/ps.persona_state.v2.0.schema.json".to_string()],
            },
            rationale: "r".to_string(),
        }
    }

    #[test]
    fn test_valid_record_passes() {
        let validator = Validator::new(rules(true));
        assert!(validator.violations(&record()).is_empty());
        assert!(validator.validate(&[record()]).is_ok());
    }

    #[test]
    fn test_empty_output_rejected() {
        let validator = Validator::new(rules(true));
        let err = validator.validate(&[]).unwrap_err();
        assert_eq!(err.kind(), "ValidationError");
    }

    #[test]
    fn test_bad_id() {
        let mut bad = record();
        bad.id = "Persona_State".to_string();
        let violations = Validator::new(rules(true)).violations(&bad);
        assert!(matches!(violations[0], RuleViolation::IdFormat { .. }));
    }

    #[test]
    fn test_length_counts_characters() {
        let mut bad = record();
        // 8 CJK characters fit, 9 do not
        bad.canonical_zh = "一二三四五六七八".to_string();
        assert!(Validator::new(rules(true)).violations(&bad).is_empty());

        bad.canonical_zh.push('九');
        let violations = Validator::new(rules(true)).violations(&bad);
        assert_eq!(
            violations,
            vec![RuleViolation::TooLong { field: "canonical_zh", len: 9, max: 8 }]
        );
    }

    #[test]
    fn test_missing_topics() {
        let mut bad = record();
        bad.engineering_bindings.topics.clear();
        let err = Validator::new(rules(true)).validate(&[bad]).unwrap_err();
        assert!(err.to_string().contains("topics required"));
    }

    #[test]
    fn test_bad_topic() {
        let mut bad = record();
        bad.engineering_bindings.topics.push("ps.persona_state".to_string());
        let violations = Validator::new(rules(true)).violations(&bad);
        assert!(matches!(
            &violations[0],
            RuleViolation::TopicFormat { topic, .. } if topic == "ps.persona_state"
        ));
    }

    #[test]
    fn test_too_many_aliases() {
        let mut bad = record();
        bad.aliases = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        let violations = Validator::new(rules(true)).violations(&bad);
        assert_eq!(violations, vec![RuleViolation::TooManyAliases { count: 4, max: 3 }]);
    }

    #[test]
    fn test_collision_only_when_forbidden() {
        let mut bad = record();
        bad.aliases.push("Persona State".to_string());

        assert!(Validator::new(rules(false)).violations(&bad).is_empty());

        let violations = Validator::new(rules(true)).violations(&bad);
        assert_eq!(
            violations,
            vec![RuleViolation::AliasEqualsCanonical {
                field: "canonical_en",
                alias: "Persona State".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_required_field() {
        let mut bad = record();
        bad.rationale.clear();
        let err = Validator::new(rules(true)).validate(&[bad]).unwrap_err();
        assert!(err.to_string().contains("missing field: rationale"));
    }
}
