//! Glossary Scribe Domain Layer
//!
//! This crate holds the term record model shared by the extractor, the
//! conformance kit and the CLI. It carries no behavior beyond the pure
//! helpers every consumer needs to agree on.
//!
//! ## Key Concepts
//!
//! - **Term record**: one extracted glossary entry with canonical names, aliases
//!   and engineering bindings
//! - **Topic**: a dotted, versioned event identifier such as `ps.persona_state.v2.0`
//! - **Schema path**: the file path derived from a topic's namespace, name and version
//!
//! ## Architecture
//!
//! - Only `serde`/`serde_json` as external dependencies, because records are
//!   exchanged as JSON everywhere (golden fixtures, determinism checks, output)
//! - Pure functions only; no I/O

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod term;
pub mod topic;

// Re-exports for convenience
pub use term::{canonical_json, EngineeringBindings, TermRecord, FIELD_NAMES};
pub use topic::{derive_schema, derive_schemas, ID_PATTERN, TOPIC_PATTERN};
