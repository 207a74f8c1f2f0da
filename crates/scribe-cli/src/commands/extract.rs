//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use scribe_extractor::{Extractor, ExtractorConfig};
use scribe_tck::{RuleSet, Validator};
use std::fs;
use tracing::debug;

/// Execute the extract command over `text`, returning the rendered output.
pub fn execute_extract(args: &ExtractArgs, text: &str) -> Result<String> {
    let config = match &args.config {
        Some(path) => {
            debug!("Loading extractor config from {}", path.display());
            ExtractorConfig::from_toml(&fs::read_to_string(path)?).map_err(CliError::Config)?
        }
        None => ExtractorConfig::default(),
    };
    let extractor = Extractor::new(config)?;

    let records = extractor.extract(text)?;

    // Post-validation only applies to a non-empty result
    if let Some(rules_path) = &args.rules {
        if !records.is_empty() {
            let validator = Validator::new(RuleSet::from_path(rules_path)?);
            validator.validate(&records)?;
            debug!("Output passed rules in {}", rules_path.display());
        }
    }

    Formatter::new(args.format).format_records(&records)
}
