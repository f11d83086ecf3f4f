use crate::core::document::{Document, Span};
use crate::core::feature::Feature;
use crate::error::ExtractError;

/// Turns one span into zero or more features. Extractors are stateless and
/// run in the order the annotator was configured with.
pub trait FeatureExtractor {
    fn extract(&self, document: &Document, span: &Span) -> Result<Vec<Feature>, ExtractError>;
}
