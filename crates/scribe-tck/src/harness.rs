//! Conformance run driver: L0, then L1, then L2

use crate::config::TckConfig;
use crate::engine::TermEngine;
use crate::error::{Result, TckError};
use crate::golden::GoldenComparator;
use crate::properties::{PropertiesDoc, PropertyChecker};
use crate::rules::RuleSet;
use tracing::{info, warn};

/// Summary of a green conformance run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TckReport {
    /// Required fields declared by the L0 rules
    pub required_fields: usize,
    /// L1 cases checked
    pub golden_cases: usize,
    /// L2 determinism runs
    pub deterministic_runs: usize,
    /// L1 case used as the L2 input
    pub anchor: String,
}

/// Runs the three conformance tiers against one engine
///
/// The first failure in any tier ends the run and is returned as-is.
pub struct Harness<E> {
    config: TckConfig,
    engine: E,
}

impl<E: TermEngine> Harness<E> {
    /// Create a harness for `engine` over the given suite layout
    pub fn new(config: TckConfig, engine: E) -> Self {
        Self { config, engine }
    }

    /// Suite layout in use
    pub fn config(&self) -> &TckConfig {
        &self.config
    }

    /// Execute L0, L1 and L2 in order
    pub fn run(&self) -> Result<TckReport> {
        // L0: rule presence only
        info!("L0: loading rules from {}", self.config.rules.display());
        let rules = RuleSet::from_path(&self.config.rules)?;
        if let Some(cap) = self.engine.alias_cap() {
            if cap != rules.max_aliases {
                warn!(
                    "extractor alias cap {} differs from rule max_aliases {}",
                    cap, rules.max_aliases
                );
            }
        }
        info!("L0: {} required fields declared", rules.required_fields.len());

        // L1: golden comparison
        info!("L1: checking cases in {}", self.config.golden_dir.display());
        let comparator = GoldenComparator::from_dir(&self.config.golden_dir)?;
        let golden_cases = comparator.check_all(&self.engine)?;
        info!("L1: {} cases passed", golden_cases);

        // L2: determinism and invariants on the anchor input
        let props = PropertiesDoc::from_path(&self.config.properties)?;
        let checker = PropertyChecker::new(&props)?;
        let anchor = match &self.config.anchor {
            Some(name) => comparator
                .cases()
                .iter()
                .find(|case| case.name == *name)
                .ok_or_else(|| TckError::Config(format!("unknown L2 anchor case: {}", name)))?,
            None => comparator
                .cases()
                .first()
                .ok_or_else(|| TckError::Config("no L1 inputs found".to_string()))?,
        };
        info!("L2: {} runs on '{}'", checker.runs(), anchor.name);
        checker.check(&self.engine, &anchor.input)?;
        info!("L2: passed");

        Ok(TckReport {
            required_fields: rules.required_fields.len(),
            golden_cases,
            deterministic_runs: checker.runs(),
            anchor: anchor.name.clone(),
        })
    }
}
