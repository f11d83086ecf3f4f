use crate::core::feature::Feature;

/// A single training or classification example: the features extracted from
/// one span, plus the gold outcome when one is known.
///
/// Instances are immutable once built. Training-data writers receive labeled
/// instances; classifiers receive only the feature slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    outcome: Option<String>,
    features: Vec<Feature>,
}

impl Instance {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            outcome: None,
            features,
        }
    }

    pub fn labeled<O: Into<String>>(outcome: O, features: Vec<Feature>) -> Self {
        Self {
            outcome: Some(outcome.into()),
            features,
        }
    }

    pub fn outcome(&self) -> Option<&str> {
        self.outcome.as_deref()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }
}
