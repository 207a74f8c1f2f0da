//! Glossary Scribe conformance kit
//!
//! Checks a term extraction engine in three tiers:
//!
//! - **L0**: the structural rule document loads and names every required key
//!   ([`RuleSet`]); produced records can be checked against it with
//!   [`Validator`].
//! - **L1**: engine output matches golden fixtures ([`GoldenComparator`]).
//! - **L2**: repeated runs are byte-identical and records hold their
//!   invariants ([`PropertyChecker`]).
//!
//! [`Harness`] runs the tiers in that order and stops at the first failure.
//!
//! ```no_run
//! use scribe_extractor::Extractor;
//! use scribe_tck::{Harness, TckConfig};
//!
//! let config = TckConfig::from_file("tck.toml")?;
//! let report = Harness::new(config, Extractor::default()).run()?;
//! println!("{} golden cases passed", report.golden_cases);
//! # Ok::<(), scribe_tck::TckError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod golden;
pub mod harness;
pub mod properties;
pub mod rules;
pub mod validator;

pub use config::TckConfig;
pub use engine::TermEngine;
pub use error::{Result, TckError};
pub use golden::{discover_cases, ExpectedError, ExpectedOutcome, GoldenCase, GoldenComparator};
pub use harness::{Harness, TckReport};
pub use properties::{PropertiesDoc, PropertyChecker};
pub use rules::{FieldLimits, FullMatch, RuleSet};
pub use validator::{RuleViolation, Validator};
