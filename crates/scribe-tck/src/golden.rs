//! L1 golden-output comparison
//!
//! A golden case is a pair of files in one directory: `<case>_input.txt`
//! holding the passage and `<case>_expected.json` holding either the
//! expected record list or `{"expect_error": "<kind>", "message_contains": "..."}`.

use crate::engine::TermEngine;
use crate::error::{Result, TckError};
use scribe_domain::{canonical_json, TermRecord};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

const INPUT_SUFFIX: &str = "_input.txt";
const EXPECTED_SUFFIX: &str = "_expected.json";

/// Expected error outcome of a golden case
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectedError {
    /// Error kind name the engine must raise
    pub expect_error: String,

    /// Substring the error message must contain
    #[serde(default)]
    pub message_contains: Option<String>,
}

/// What a golden case expects from the engine
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ExpectedOutcome {
    /// The engine must fail
    Error(ExpectedError),
    /// The engine must produce these records (order-insensitive on
    /// aliases, topics and schemas)
    Records(Vec<TermRecord>),
}

/// One input/expected pair
#[derive(Debug, Clone)]
pub struct GoldenCase {
    /// Case name, the shared file-name prefix
    pub name: String,
    /// Passage fed to the engine
    pub input: String,
    /// Expected outcome
    pub expected: ExpectedOutcome,
}

/// Discover golden cases in `dir`, sorted by case name
pub fn discover_cases<P: AsRef<Path>>(dir: P) -> Result<Vec<GoldenCase>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| TckError::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TckError::io(dir, e))?;
        let file_name = entry.file_name();
        if let Some(name) = file_name.to_str().and_then(|n| n.strip_suffix(INPUT_SUFFIX)) {
            names.push(name.to_string());
        }
    }
    names.sort();

    if names.is_empty() {
        return Err(TckError::Config(format!(
            "no L1 inputs found in {}",
            dir.display()
        )));
    }

    names
        .into_iter()
        .map(|name| {
            let input_path = dir.join(format!("{}{}", name, INPUT_SUFFIX));
            let expected_path = dir.join(format!("{}{}", name, EXPECTED_SUFFIX));
            if !expected_path.exists() {
                return Err(TckError::Config(format!("expected not found for {}", name)));
            }

            let input = fs::read_to_string(&input_path).map_err(|e| TckError::io(&input_path, e))?;
            let raw = fs::read_to_string(&expected_path)
                .map_err(|e| TckError::io(&expected_path, e))?;
            let expected: ExpectedOutcome = serde_json::from_str(&raw).map_err(|e| {
                TckError::Config(format!("malformed expected document for {}: {}", name, e))
            })?;

            Ok(GoldenCase {
                name,
                input,
                expected,
            })
        })
        .collect()
}

fn render(records: &[TermRecord]) -> String {
    canonical_json(records).unwrap_or_else(|e| format!("<unserializable: {}>", e))
}

/// The Golden Comparator checks engine output against golden cases
pub struct GoldenComparator {
    cases: Vec<GoldenCase>,
}

impl GoldenComparator {
    /// Create a comparator over the given cases
    pub fn new(cases: Vec<GoldenCase>) -> Self {
        Self { cases }
    }

    /// Create a comparator over the cases found in `dir`
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Ok(Self::new(discover_cases(dir)?))
    }

    /// Cases in run order
    pub fn cases(&self) -> &[GoldenCase] {
        &self.cases
    }

    /// Check every case in order, stopping at the first mismatch
    ///
    /// Returns the number of cases checked.
    pub fn check_all<E: TermEngine>(&self, engine: &E) -> Result<usize> {
        for case in &self.cases {
            self.check_case(engine, case)?;
            debug!("L1 case '{}' passed", case.name);
        }
        Ok(self.cases.len())
    }

    /// Check a single case
    pub fn check_case<E: TermEngine>(&self, engine: &E, case: &GoldenCase) -> Result<()> {
        let outcome = engine.invoke(&case.input);
        let mismatch = |detail: String, actual: String, expected: String| {
            TckError::ComparatorMismatch {
                fixture: case.name.clone(),
                detail,
                actual,
                expected,
            }
        };

        match &case.expected {
            ExpectedOutcome::Error(expected) => {
                let wanted = format!(
                    "{} containing {:?}",
                    expected.expect_error,
                    expected.message_contains.as_deref().unwrap_or("")
                );
                let err = match outcome {
                    Ok(records) => {
                        return Err(mismatch(
                            format!("expected to raise {}", expected.expect_error),
                            render(&records),
                            wanted,
                        ))
                    }
                    Err(err) => err,
                };

                if err.kind() != expected.expect_error {
                    return Err(mismatch(
                        format!("expected {} but got {}", expected.expect_error, err.kind()),
                        format!("{}: {}", err.kind(), err),
                        wanted,
                    ));
                }
                if let Some(needle) = &expected.message_contains {
                    if !err.message().contains(needle.as_str()) {
                        return Err(mismatch(
                            format!("expected error message containing '{}'", needle),
                            format!("{}: {}", err.kind(), err),
                            wanted,
                        ));
                    }
                }
                Ok(())
            }
            ExpectedOutcome::Records(expected) => {
                let expected_norm: Vec<TermRecord> =
                    expected.iter().map(TermRecord::normalized).collect();
                let actual = outcome.map_err(|err| {
                    mismatch(
                        "unexpected error".to_string(),
                        format!("{}: {}", err.kind(), err),
                        render(&expected_norm),
                    )
                })?;
                let actual_norm: Vec<TermRecord> =
                    actual.iter().map(TermRecord::normalized).collect();

                if actual_norm.len() != expected_norm.len() {
                    return Err(mismatch(
                        format!(
                            "length mismatch: {} != {}",
                            actual_norm.len(),
                            expected_norm.len()
                        ),
                        render(&actual_norm),
                        render(&expected_norm),
                    ));
                }
                for (idx, (a, b)) in actual_norm.iter().zip(&expected_norm).enumerate() {
                    if a != b {
                        return Err(mismatch(
                            format!("record {} differs", idx),
                            render(std::slice::from_ref(a)),
                            render(std::slice::from_ref(b)),
                        ));
                    }
                }
                Ok(())
            }
        }
    }
}
