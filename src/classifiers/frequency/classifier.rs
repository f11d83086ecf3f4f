use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classifiers::classifier::Classifier;
use crate::core::feature::Feature;
use crate::core::outcome::{self, OutcomeType, ScoredOutcome};
use crate::error::ClassifyError;

/// Outcome counts aggregated from a training-data file. Serialized as JSON
/// into the archive's model entry.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyModel {
    pub counts: BTreeMap<String, u64>,
}

impl FrequencyModel {
    pub fn record<O: Into<String>>(&mut self, outcome: O) {
        *self.counts.entry(outcome.into()).or_insert(0) += 1;
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Predicts the most frequent training outcome, ignoring features. Ties go
/// to the lexicographically smallest outcome so predictions are stable
/// across runs.
pub struct FrequencyClassifier {
    model: FrequencyModel,
}

impl FrequencyClassifier {
    pub fn new(model: FrequencyModel) -> Self {
        Self { model }
    }

    fn best(&self) -> Option<&str> {
        let mut best: Option<(&str, u64)> = None;
        // counts iterates name-ascending, so on equal counts the earlier
        // (smaller) name is kept.
        for (outcome, &count) in &self.model.counts {
            match best {
                Some((_, c)) if count <= c => {}
                _ => best = Some((outcome, count)),
            }
        }
        best.map(|(outcome, _)| outcome)
    }
}

impl Classifier for FrequencyClassifier {
    fn outcome_type(&self) -> &'static OutcomeType {
        &outcome::STRING
    }

    fn classify(&self, _features: &[Feature]) -> Result<String, ClassifyError> {
        self.best()
            .map(str::to_string)
            .ok_or_else(|| ClassifyError::Backend("model contains no outcomes".to_string()))
    }

    fn score(
        &self,
        _features: &[Feature],
        max_results: usize,
    ) -> Result<Vec<ScoredOutcome>, ClassifyError> {
        let total = self.model.total();
        if total == 0 {
            return Err(ClassifyError::Backend(
                "model contains no outcomes".to_string(),
            ));
        }

        let mut scores: Vec<ScoredOutcome> = self
            .model
            .counts
            .iter()
            .map(|(outcome, &count)| {
                ScoredOutcome::new(outcome.clone(), count as f64 / total as f64)
            })
            .collect();
        scores.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.outcome.cmp(&b.outcome))
        });
        scores.truncate(max_results);
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(entries: &[(&str, u64)]) -> FrequencyModel {
        let mut model = FrequencyModel::default();
        for (outcome, count) in entries {
            model.counts.insert(outcome.to_string(), *count);
        }
        model
    }

    #[test]
    fn classify_picks_the_majority_outcome() {
        let classifier = FrequencyClassifier::new(model(&[("NONE", 7), ("PAST", 3)]));
        assert_eq!(classifier.classify(&[]).unwrap(), "NONE");
    }

    #[test]
    fn ties_break_lexicographically() {
        let classifier = FrequencyClassifier::new(model(&[("PAST", 4), ("FUTURE", 4)]));
        assert_eq!(classifier.classify(&[]).unwrap(), "FUTURE");
    }

    #[test]
    fn scores_descend_and_respect_max_results() {
        let classifier =
            FrequencyClassifier::new(model(&[("NONE", 5), ("PAST", 3), ("FUTURE", 2)]));

        let scores = classifier.score(&[], 10).unwrap();
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0].outcome, "NONE");
        assert!((scores[0].score - 0.5).abs() < 1e-9);
        assert!(scores[0].score >= scores[1].score);
        assert!(scores[1].score >= scores[2].score);

        let top = classifier.score(&[], 1).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].outcome, "NONE");
    }

    #[test]
    fn empty_model_cannot_classify() {
        let classifier = FrequencyClassifier::new(FrequencyModel::default());
        assert!(matches!(
            classifier.classify(&[]),
            Err(ClassifyError::Backend(_))
        ));
        assert!(classifier.score(&[], 5).is_err());
    }

    #[test]
    fn model_round_trips_through_json() {
        let original = model(&[("PAST", 2), ("NONE", 1)]);
        let json = serde_json::to_vec(&original).unwrap();
        let loaded: FrequencyModel = serde_json::from_slice(&json).unwrap();
        assert_eq!(loaded, original);
        assert_eq!(loaded.total(), 3);
    }
}
