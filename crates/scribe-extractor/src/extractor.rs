//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::pipeline::{
    extract_quotes, find_aliases, find_canonical_en, find_canonical_zh, find_rationale,
    find_topics, guess_id,
};
use scribe_domain::{derive_schemas, EngineeringBindings, TermRecord};
use tracing::debug;

/// Identifier used when the text offers no snake-style candidate
const DEFAULT_ID: &str = "term";

/// Message carried by [`ExtractorError::InvalidInput`] when no topic is found
pub const NO_TOPICS_MESSAGE: &str =
    "No topics found in input text; cannot satisfy L0 topic requirement";

/// The Extractor turns a free-text passage into at most one term record
///
/// Extraction is a pure function of the text and the configuration: no
/// state is kept between calls, so the same input always yields the same
/// output.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract term records from text
    ///
    /// Returns an empty list for empty or whitespace-only text, otherwise
    /// exactly one record.
    ///
    /// # Errors
    ///
    /// [`ExtractorError::InvalidInput`] when the text contains no topic
    /// identifier.
    pub fn extract(&self, text: &str) -> Result<Vec<TermRecord>, ExtractorError> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Empty input, nothing to extract");
            return Ok(Vec::new());
        }

        let quotes = extract_quotes(text);
        debug!("Found {} quoted candidates", quotes.len());

        let id = guess_id(text).unwrap_or_else(|| DEFAULT_ID.to_string());
        let canonical_zh = find_canonical_zh(text, &quotes).unwrap_or_else(|| id.clone());
        let canonical_en = find_canonical_en(&quotes, &id);
        debug!(
            "Resolved id '{}', canonical names '{}' / '{}'",
            id, canonical_zh, canonical_en
        );

        let aliases = find_aliases(text, &quotes, &canonical_zh, &canonical_en, &self.config);

        let topics = find_topics(text);
        if topics.is_empty() {
            return Err(ExtractorError::InvalidInput(NO_TOPICS_MESSAGE.to_string()));
        }
        let schemas = derive_schemas(&topics);
        debug!(
            "Bound {} topics, {} schemas, {} aliases",
            topics.len(),
            schemas.len(),
            aliases.len()
        );

        let rationale =
            find_rationale(text).unwrap_or_else(|| self.config.fallback_rationale.clone());

        Ok(vec![TermRecord {
            id,
            canonical_zh,
            canonical_en,
            aliases,
            engineering_bindings: EngineeringBindings { topics, schemas },
            rationale,
        }])
    }
}

/// Extract with the default configuration
pub fn extract(text: &str) -> Result<Vec<TermRecord>, ExtractorError> {
    Extractor::default().extract(text)
}
