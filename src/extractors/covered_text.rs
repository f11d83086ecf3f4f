use crate::core::document::{Document, Span};
use crate::core::feature::Feature;
use crate::error::ExtractError;
use crate::extractors::extractor::FeatureExtractor;

/// The span's own text as a single feature, named `word` by default.
#[derive(Debug, Clone)]
pub struct CoveredTextExtractor {
    name: String,
}

impl CoveredTextExtractor {
    pub fn new() -> Self {
        Self::named("word")
    }

    pub fn named<N: Into<String>>(name: N) -> Self {
        Self { name: name.into() }
    }
}

impl Default for CoveredTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor for CoveredTextExtractor {
    fn extract(&self, document: &Document, span: &Span) -> Result<Vec<Feature>, ExtractError> {
        Ok(vec![Feature::new(
            self.name.clone(),
            document.covered_text(span),
        )])
    }
}
