//! Suite layout for a conformance run.
//!
//! Loaded from a TOML file such as:
//!
//! ```toml
//! rules = "tck/l0/rules.json"
//! golden_dir = "tck/l1"
//! properties = "tck/l2/properties.json"
//! anchor = "persona_state"
//! ```
//!
//! Relative paths resolve against the directory holding the file.

use crate::error::{Result, TckError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where the three tiers find their inputs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TckConfig {
    /// L0 rule document (JSON or TOML)
    pub rules: PathBuf,

    /// Directory of L1 golden cases
    pub golden_dir: PathBuf,

    /// L2 properties document
    pub properties: PathBuf,

    /// L1 case whose input drives the L2 determinism check
    /// (default: first case in sorted order)
    #[serde(default)]
    pub anchor: Option<String>,
}

impl TckConfig {
    /// Conventional `tck/` layout under `root`
    pub fn from_root<P: AsRef<Path>>(root: P) -> Self {
        let tck = root.as_ref().join("tck");
        Self {
            rules: tck.join("l0").join("rules.json"),
            golden_dir: tck.join("l1"),
            properties: tck.join("l2").join("properties.json"),
            anchor: None,
        }
    }

    /// Load a suite layout from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| TckError::io(path, e))?;
        let config = Self::from_toml(&contents)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Parse a suite layout without resolving paths
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| TckError::Config(format!("malformed suite config: {}", e)))
    }

    /// Resolve relative paths against `base`
    pub fn relative_to<P: AsRef<Path>>(self, base: P) -> Self {
        let base = base.as_ref();
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };
        Self {
            rules: resolve(self.rules),
            golden_dir: resolve(self.golden_dir),
            properties: resolve(self.properties),
            anchor: self.anchor,
        }
    }
}
