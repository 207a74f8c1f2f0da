//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Rationale used when the text carries no explanation cue
pub const DEFAULT_RATIONALE: &str =
    "Auto-extracted from free text; canonical names and bindings derived heuristically.";

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Aliases kept after filtering; extras are dropped silently
    pub max_aliases: usize,

    /// Alias candidates longer than this (in characters) are discarded
    pub max_alias_len: usize,

    /// Rationale used when no explanation cue is found
    pub fallback_rationale: String,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_alias_len == 0 {
            return Err("max_alias_len must be greater than 0".to_string());
        }
        if self.fallback_rationale.trim().is_empty() {
            return Err("fallback_rationale must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_aliases: 10,
            max_alias_len: 64,
            fallback_rationale: DEFAULT_RATIONALE.to_string(),
        }
    }
}
