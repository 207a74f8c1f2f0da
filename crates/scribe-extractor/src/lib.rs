//! Glossary Scribe Extractor
//!
//! Converts a bilingual (Chinese/English) free-text passage describing an
//! engineering concept into a single structured term record.
//!
//! # Overview
//!
//! Extraction is heuristic pattern matching, not language understanding. The
//! text runs through a fixed sequence of steps, each a pure function that can
//! be tested on its own:
//!
//! ```text
//! quotes → id guess → canonical zh → canonical en → aliases → topics → schemas → rationale
//! ```
//!
//! A passage without any `namespace.name.vN[.M]` topic is rejected with
//! [`ExtractorError::InvalidInput`]; an empty passage yields no record.
//!
//! # Example Usage
//!
//! ```
//! use scribe_extractor::Extractor;
//!
//! let extractor = Extractor::default();
//! let records = extractor
//!     .extract("中文名叫“人格状态”，事件 ps.persona_state.v2.0")
//!     .unwrap();
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].id, "persona_state");
//! assert_eq!(records[0].canonical_zh, "人格状态");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
pub mod pipeline;

#[cfg(test)]
mod tests;

pub use config::{ExtractorConfig, DEFAULT_RATIONALE};
pub use error::ExtractorError;
pub use extractor::{extract, Extractor, NO_TOPICS_MESSAGE};
