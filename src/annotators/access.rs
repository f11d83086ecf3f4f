use crate::core::document::Span;

/// How an annotator reads gold labels from spans and writes predictions
/// back. Pairing the getter and setter keeps training and classification
/// addressing the same slot.
pub trait OutcomeAccess {
    fn gold(&self, span: &Span) -> Option<String>;

    fn set_predicted(&self, span: &mut Span, outcome: &str);
}

/// Uses the span's dedicated gold/predicted fields. Classification writes
/// only the predicted field; the gold label is never touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelAccess;

impl OutcomeAccess for LabelAccess {
    fn gold(&self, span: &Span) -> Option<String> {
        span.gold.clone()
    }

    fn set_predicted(&self, span: &mut Span, outcome: &str) {
        span.predicted = Some(outcome.to_string());
    }
}

/// Reads and writes a named span attribute. A default gold value, when
/// set, stands in for spans the corpus left unannotated.
#[derive(Debug, Clone)]
pub struct AttributeAccess {
    name: String,
    default: Option<String>,
}

impl AttributeAccess {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    pub fn with_default<D: Into<String>>(mut self, value: D) -> Self {
        self.default = Some(value.into());
        self
    }
}

impl OutcomeAccess for AttributeAccess {
    fn gold(&self, span: &Span) -> Option<String> {
        span.attribute(&self.name)
            .map(str::to_string)
            .or_else(|| self.default.clone())
    }

    fn set_predicted(&self, span: &mut Span, outcome: &str) {
        span.set_attribute(self.name.clone(), outcome);
    }
}
