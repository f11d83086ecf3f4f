use crate::core::document::{Document, Span};
use crate::core::feature::Feature;
use crate::error::ExtractError;
use crate::extractors::extractor::FeatureExtractor;

/// Texts of the nearest spans of a given kind that end before the target
/// span begins. Features are named `preceding-1` (nearest) through
/// `preceding-N`; fewer are emitted when the document has fewer.
#[derive(Debug, Clone)]
pub struct PrecedingTextExtractor {
    kind: String,
    count: usize,
}

impl PrecedingTextExtractor {
    pub fn new<K: Into<String>>(kind: K, count: usize) -> Self {
        Self {
            kind: kind.into(),
            count,
        }
    }
}

impl FeatureExtractor for PrecedingTextExtractor {
    fn extract(&self, document: &Document, span: &Span) -> Result<Vec<Feature>, ExtractError> {
        let preceding: Vec<&Span> = document
            .spans_of_kind(&self.kind)
            .filter(|s| s.end <= span.begin)
            .collect();

        let features = preceding
            .iter()
            .rev()
            .take(self.count)
            .enumerate()
            .map(|(i, s)| {
                Feature::new(format!("preceding-{}", i + 1), document.covered_text(s))
            })
            .collect();
        Ok(features)
    }
}
