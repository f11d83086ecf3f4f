use crate::annotators::access::{AttributeAccess, LabelAccess, OutcomeAccess};
use crate::core::outcome::OutcomeType;
use crate::extractors::FeatureExtractor;

/// The static half of an annotator: the outcome type it expects, the span
/// kind it targets, its feature extractors, and how outcomes attach to
/// spans. The dynamic half (classify or write training data) comes from
/// configuration at initialization.
pub struct AnnotatorDeclaration {
    outcome_type: &'static OutcomeType,
    span_kind: String,
    extractors: Vec<Box<dyn FeatureExtractor>>,
    access: Box<dyn OutcomeAccess>,
}

impl AnnotatorDeclaration {
    /// Targets `span_kind` with gold/predicted labels on the span itself.
    pub fn new<K: Into<String>>(outcome_type: &'static OutcomeType, span_kind: K) -> Self {
        Self {
            outcome_type,
            span_kind: span_kind.into(),
            extractors: Vec::new(),
            access: Box::new(LabelAccess),
        }
    }

    /// Attribute-annotator wiring: outcomes live in the named span
    /// attribute, with a default gold value for unannotated spans.
    pub fn for_attribute<K, N, D>(
        outcome_type: &'static OutcomeType,
        span_kind: K,
        attribute: N,
        default: D,
    ) -> Self
    where
        K: Into<String>,
        N: Into<String>,
        D: Into<String>,
    {
        Self::new(outcome_type, span_kind)
            .with_access(Box::new(AttributeAccess::new(attribute).with_default(default)))
    }

    pub fn with_extractor(mut self, extractor: Box<dyn FeatureExtractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    pub fn with_access(mut self, access: Box<dyn OutcomeAccess>) -> Self {
        self.access = access;
        self
    }

    pub fn outcome_type(&self) -> &'static OutcomeType {
        self.outcome_type
    }

    pub fn span_kind(&self) -> &str {
        &self.span_kind
    }

    pub(crate) fn extractors(&self) -> &[Box<dyn FeatureExtractor>] {
        &self.extractors
    }

    pub(crate) fn access(&self) -> &dyn OutcomeAccess {
        self.access.as_ref()
    }
}
