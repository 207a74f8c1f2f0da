//! L2 property checks: determinism and cross-record invariants

use crate::engine::TermEngine;
use crate::error::{Result, TckError};
use crate::rules::FullMatch;
use scribe_domain::{canonical_json, TermRecord, ID_PATTERN, TOPIC_PATTERN};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// L2 properties document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropertiesDoc {
    /// How many times the anchor input is extracted
    #[serde(default = "default_runs")]
    pub deterministic_runs: usize,
}

fn default_runs() -> usize {
    3
}

impl Default for PropertiesDoc {
    fn default() -> Self {
        Self {
            deterministic_runs: default_runs(),
        }
    }
}

impl PropertiesDoc {
    /// Load a properties document (JSON)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            TckError::Config(format!("cannot read properties {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw)
            .map_err(|e| TckError::Config(format!("malformed properties document: {}", e)))
    }
}

/// The Property Checker re-runs the engine and checks record invariants
pub struct PropertyChecker {
    runs: usize,
    id_pattern: FullMatch,
    topic_pattern: FullMatch,
}

impl PropertyChecker {
    /// Create a checker from a properties document
    pub fn new(props: &PropertiesDoc) -> Result<Self> {
        if props.deterministic_runs == 0 {
            return Err(TckError::Config(
                "deterministic_runs must be at least 1".to_string(),
            ));
        }

        let compile = |pattern: &str| {
            FullMatch::new(pattern).map_err(|e| TckError::Config(e.to_string()))
        };
        Ok(Self {
            runs: props.deterministic_runs,
            id_pattern: compile(ID_PATTERN)?,
            topic_pattern: compile(TOPIC_PATTERN)?,
        })
    }

    /// Number of runs per check
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Extract `text` repeatedly, require byte-identical output, then check
    /// the invariants on it
    ///
    /// Returns the output of the first run.
    pub fn check<E: TermEngine>(&self, engine: &E, text: &str) -> Result<Vec<TermRecord>> {
        let (records, reference) = self.run_once(engine, text, 1)?;

        for run in 2..=self.runs {
            let (_, serialized) = self.run_once(engine, text, run)?;
            if serialized != reference {
                return Err(TckError::PropertyViolation(format!(
                    "non-deterministic output at run {}",
                    run
                )));
            }
            debug!("L2 determinism run {} matched", run);
        }

        self.check_invariants(&records)?;
        Ok(records)
    }

    fn run_once<E: TermEngine>(
        &self,
        engine: &E,
        text: &str,
        run: usize,
    ) -> Result<(Vec<TermRecord>, String)> {
        let records = engine.invoke(text).map_err(|e| {
            TckError::PropertyViolation(format!("anchor input rejected at run {}: {}", run, e))
        })?;
        let serialized = canonical_json(&records).map_err(|e| {
            TckError::PropertyViolation(format!("output not serializable at run {}: {}", run, e))
        })?;
        Ok((records, serialized))
    }

    /// Check alias uniqueness, alias/canonical disjointness and id/topic format
    pub fn check_invariants(&self, records: &[TermRecord]) -> Result<()> {
        for record in records {
            let violation = |detail: String| {
                TckError::PropertyViolation(format!("record '{}': {}", record.id, detail))
            };

            let mut seen = HashSet::new();
            for alias in &record.aliases {
                if !seen.insert(alias.as_str()) {
                    return Err(violation(format!("aliases must be unique ('{}' repeats)", alias)));
                }
            }
            if record.aliases.contains(&record.canonical_zh) {
                return Err(violation("alias duplicates canonical_zh".to_string()));
            }
            if record.aliases.contains(&record.canonical_en) {
                return Err(violation("alias duplicates canonical_en".to_string()));
            }
            if !self.id_pattern.is_match(&record.id) {
                return Err(violation("id must be snake_case".to_string()));
            }
            for topic in &record.engineering_bindings.topics {
                if !self.topic_pattern.is_match(topic) {
                    return Err(violation(format!("bad topic {}", topic)));
                }
            }
        }
        Ok(())
    }
}
