//! Seam between the conformance kit and the extraction engine under test

use scribe_domain::TermRecord;
use scribe_extractor::{Extractor, ExtractorError};

/// An engine the conformance tiers can invoke
///
/// Implemented by [`Extractor`]; tests substitute their own engines to
/// exercise failure paths.
pub trait TermEngine {
    /// Run one extraction
    fn invoke(&self, text: &str) -> Result<Vec<TermRecord>, ExtractorError>;

    /// Alias cap the engine applies on its own, if any
    fn alias_cap(&self) -> Option<usize> {
        None
    }
}

impl TermEngine for Extractor {
    fn invoke(&self, text: &str) -> Result<Vec<TermRecord>, ExtractorError> {
        self.extract(text)
    }

    fn alias_cap(&self) -> Option<usize> {
        Some(self.config().max_aliases)
    }
}

impl<E: TermEngine + ?Sized> TermEngine for &E {
    fn invoke(&self, text: &str) -> Result<Vec<TermRecord>, ExtractorError> {
        (**self).invoke(text)
    }

    fn alias_cap(&self) -> Option<usize> {
        (**self).alias_cap()
    }
}
