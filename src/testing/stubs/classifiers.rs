use crate::classifiers::classifier::Classifier;
use crate::core::feature::Feature;
use crate::core::outcome::{self, OutcomeType, ScoredOutcome};
use crate::error::ClassifyError;

/// Answers every call with the same outcome.
pub struct ConstClassifier {
    outcome: String,
    outcome_type: &'static OutcomeType,
}

impl ConstClassifier {
    pub fn new(outcome: impl Into<String>) -> Self {
        Self::typed(outcome, &outcome::STRING)
    }

    pub fn typed(outcome: impl Into<String>, outcome_type: &'static OutcomeType) -> Self {
        Self {
            outcome: outcome.into(),
            outcome_type,
        }
    }
}

impl Classifier for ConstClassifier {
    fn outcome_type(&self) -> &'static OutcomeType {
        self.outcome_type
    }

    fn classify(&self, _features: &[Feature]) -> Result<String, ClassifyError> {
        Ok(self.outcome.clone())
    }

    fn score(
        &self,
        _features: &[Feature],
        max_results: usize,
    ) -> Result<Vec<ScoredOutcome>, ClassifyError> {
        let mut scored = vec![ScoredOutcome::new(&self.outcome, 1.0)];
        scored.truncate(max_results);
        Ok(scored)
    }
}

/// Answers with the value of the one feature it was handed. Rejects any
/// other feature count, which makes extraction mistakes visible.
pub struct EchoClassifier;

impl Classifier for EchoClassifier {
    fn outcome_type(&self) -> &'static OutcomeType {
        &outcome::STRING
    }

    fn classify(&self, features: &[Feature]) -> Result<String, ClassifyError> {
        match features {
            [only] => Ok(only.value().to_string()),
            _ => Err(ClassifyError::MalformedFeatures(format!(
                "expected exactly one feature, got {}",
                features.len()
            ))),
        }
    }

    fn score(
        &self,
        features: &[Feature],
        max_results: usize,
    ) -> Result<Vec<ScoredOutcome>, ClassifyError> {
        let outcome = self.classify(features)?;
        let mut scored = vec![ScoredOutcome::new(outcome, 1.0)];
        scored.truncate(max_results);
        Ok(scored)
    }
}

/// Fails every call.
pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn outcome_type(&self) -> &'static OutcomeType {
        &outcome::STRING
    }

    fn classify(&self, _features: &[Feature]) -> Result<String, ClassifyError> {
        Err(ClassifyError::Backend("stub failure".into()))
    }

    fn score(
        &self,
        _features: &[Feature],
        _max_results: usize,
    ) -> Result<Vec<ScoredOutcome>, ClassifyError> {
        Err(ClassifyError::Backend("stub failure".into()))
    }
}
