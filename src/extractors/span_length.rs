use crate::core::document::{Document, Span};
use crate::core::feature::Feature;
use crate::error::ExtractError;
use crate::extractors::extractor::FeatureExtractor;

/// The covered text's length in characters, as a numeric `length` feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanLengthExtractor;

impl FeatureExtractor for SpanLengthExtractor {
    fn extract(&self, document: &Document, span: &Span) -> Result<Vec<Feature>, ExtractError> {
        let length = document.covered_text(span).chars().count();
        Ok(vec![Feature::new("length", length)])
    }
}
