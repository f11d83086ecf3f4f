use crate::core::feature::Feature;
use crate::core::outcome::{OutcomeType, ScoredOutcome};
use crate::error::ClassifyError;

/// A trained model. Read-only after construction; `classify` is
/// deterministic for a fixed model and feature sequence.
pub trait Classifier {
    fn outcome_type(&self) -> &'static OutcomeType;

    fn classify(&self, features: &[Feature]) -> Result<String, ClassifyError>;

    /// Ranked outcomes, best first, at most `max_results` of them.
    fn score(
        &self,
        features: &[Feature],
        max_results: usize,
    ) -> Result<Vec<ScoredOutcome>, ClassifyError>;
}
