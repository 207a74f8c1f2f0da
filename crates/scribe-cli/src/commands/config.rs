//! Config command implementation.

use crate::error::{CliError, Result};
use scribe_extractor::ExtractorConfig;

/// Render the default extractor configuration as TOML.
pub fn execute_config() -> Result<String> {
    ExtractorConfig::default().to_toml().map_err(CliError::Config)
}
