use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;

use crate::archive::builder::{
    ClassifierBuilder, LOOKUP_ENTRY_NAME, MODEL_ENTRY_NAME, package_standard_entries,
};
use crate::archive::container::{ArchiveError, ArchiveWriter, ModelArchive};
use crate::classifiers::classifier::Classifier;
use crate::classifiers::encoding::FeatureLookup;
use crate::classifiers::frequency::classifier::{FrequencyClassifier, FrequencyModel};
use crate::classifiers::frequency::{FREQUENCY_BACKEND, TRAINING_DATA_NAME};
use crate::core::outcome::{self, OutcomeType};
use crate::error::InitError;

pub struct FrequencyBuilder;

/// Registry constructor for [`FrequencyBuilder`].
pub fn frequency_builder() -> Box<dyn ClassifierBuilder> {
    Box::new(FrequencyBuilder)
}

impl ClassifierBuilder for FrequencyBuilder {
    fn key(&self) -> &'static str {
        FREQUENCY_BACKEND
    }

    fn outcome_type(&self) -> &'static OutcomeType {
        &outcome::STRING
    }

    /// Aggregates the training-data lines into outcome counts and writes
    /// the model file next to them. Extra arguments are accepted and
    /// ignored; counting has nothing to tune.
    fn train(&self, dir: &Path, _args: &[String]) -> anyhow::Result<()> {
        let data_path = dir.join(TRAINING_DATA_NAME);
        let file =
            File::open(&data_path).with_context(|| format!("opening {}", data_path.display()))?;

        let mut model = FrequencyModel::default();
        for line in BufReader::new(file).lines() {
            let line = line.context("reading training data")?;
            let Some(head) = line.split_whitespace().next() else {
                continue;
            };
            model.record(head);
        }

        let json = serde_json::to_vec(&model).context("serializing outcome counts")?;
        std::fs::write(dir.join(MODEL_ENTRY_NAME), json)
            .with_context(|| format!("writing {MODEL_ENTRY_NAME}"))?;
        Ok(())
    }

    fn package(&self, dir: &Path, archive: &mut ArchiveWriter) -> Result<(), ArchiveError> {
        package_standard_entries(dir, archive)
    }

    fn load_classifier(&self, archive: &ModelArchive) -> Result<Box<dyn Classifier>, InitError> {
        let data = archive.require_entry(MODEL_ENTRY_NAME)?;
        let model: FrequencyModel =
            serde_json::from_slice(data).map_err(|e| InitError::InvalidModel(e.to_string()))?;

        // An ill-formed lookup means the archive was packaged wrong, even
        // though counting never consults it.
        if let Some(bytes) = archive.entry(LOOKUP_ENTRY_NAME) {
            let text = std::str::from_utf8(bytes)
                .map_err(|_| InitError::InvalidModel("lookup entry is not UTF-8".to_string()))?;
            FeatureLookup::parse(text).map_err(|e| InitError::InvalidModel(e.to_string()))?;
        }

        Ok(Box::new(FrequencyClassifier::new(model)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::container::Manifest;
    use tempfile::tempdir;

    #[test]
    fn train_counts_the_leading_outcome_of_each_line() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(TRAINING_DATA_NAME),
            "PAST word=walked\nNONE word=walks\nPAST word=ran\n\n",
        )
        .unwrap();

        FrequencyBuilder.train(dir.path(), &[]).unwrap();

        let json = std::fs::read(dir.path().join(MODEL_ENTRY_NAME)).unwrap();
        let model: FrequencyModel = serde_json::from_slice(&json).unwrap();
        assert_eq!(model.counts.get("PAST"), Some(&2));
        assert_eq!(model.counts.get("NONE"), Some(&1));
        assert_eq!(model.total(), 3);
    }

    #[test]
    fn train_fails_without_training_data() {
        let dir = tempdir().unwrap();
        assert!(FrequencyBuilder.train(dir.path(), &[]).is_err());
    }

    #[test]
    fn load_rejects_garbage_models() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.stag");
        let mut writer =
            ArchiveWriter::create(&path, &Manifest::new(FREQUENCY_BACKEND, "string")).unwrap();
        writer.add_entry(MODEL_ENTRY_NAME, b"not json").unwrap();
        writer.finish().unwrap();

        let archive = ModelArchive::open(&path).unwrap();
        match FrequencyBuilder.load_classifier(&archive).err() {
            Some(InitError::InvalidModel(_)) => {}
            other => panic!("expected InvalidModel, got {other:?}"),
        }
    }

    #[test]
    fn load_rejects_ill_formed_lookups() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.stag");
        let mut writer =
            ArchiveWriter::create(&path, &Manifest::new(FREQUENCY_BACKEND, "string")).unwrap();
        writer
            .add_entry(MODEL_ENTRY_NAME, br#"{"counts":{"PAST":1}}"#)
            .unwrap();
        writer.add_entry(LOOKUP_ENTRY_NAME, b"word\t7\n").unwrap();
        writer.finish().unwrap();

        let archive = ModelArchive::open(&path).unwrap();
        assert!(matches!(
            FrequencyBuilder.load_classifier(&archive).err(),
            Some(InitError::InvalidModel(_))
        ));
    }

    #[test]
    fn trained_model_classifies_by_majority() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(TRAINING_DATA_NAME),
            "NONE word=is\nNONE word=was\nPAST word=ran\n",
        )
        .unwrap();
        FrequencyBuilder.train(dir.path(), &[]).unwrap();

        let path = dir.path().join("model.stag");
        let mut writer =
            ArchiveWriter::create(&path, &Manifest::new(FREQUENCY_BACKEND, "string")).unwrap();
        FrequencyBuilder.package(dir.path(), &mut writer).unwrap();
        writer.finish().unwrap();

        let archive = ModelArchive::open(&path).unwrap();
        let classifier = FrequencyBuilder.load_classifier(&archive).unwrap();
        assert_eq!(classifier.classify(&[]).unwrap(), "NONE");
        assert_eq!(classifier.outcome_type().name(), "string");
    }
}
