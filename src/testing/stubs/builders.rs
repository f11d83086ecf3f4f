use std::path::Path;

use crate::archive::builder::{ClassifierBuilder, LOOKUP_ENTRY_NAME};
use crate::archive::container::{ArchiveError, ArchiveWriter, ModelArchive};
use crate::classifiers::classifier::Classifier;
use crate::core::outcome::{self, OutcomeType};
use crate::error::InitError;
use crate::testing::stubs::classifiers::EchoClassifier;

pub const TEST_TRAINING_DATA_NAME: &str = "training-data.test";

/// Skips training, packages its training data untouched, and loads an
/// [`EchoClassifier`] from any archive that carries it.
pub struct NoTrainBuilder;

pub fn no_train_builder() -> Box<dyn ClassifierBuilder> {
    Box::new(NoTrainBuilder)
}

impl ClassifierBuilder for NoTrainBuilder {
    fn key(&self) -> &'static str {
        "test"
    }

    fn outcome_type(&self) -> &'static OutcomeType {
        &outcome::STRING
    }

    fn train(&self, _dir: &Path, _args: &[String]) -> anyhow::Result<()> {
        Ok(())
    }

    fn package(&self, dir: &Path, archive: &mut ArchiveWriter) -> Result<(), ArchiveError> {
        archive.add_file(TEST_TRAINING_DATA_NAME, &dir.join(TEST_TRAINING_DATA_NAME))?;
        let lookup = dir.join(LOOKUP_ENTRY_NAME);
        if lookup.is_file() {
            archive.add_file(LOOKUP_ENTRY_NAME, &lookup)?;
        }
        Ok(())
    }

    fn load_classifier(&self, archive: &ModelArchive) -> Result<Box<dyn Classifier>, InitError> {
        archive.require_entry(TEST_TRAINING_DATA_NAME)?;
        Ok(Box::new(EchoClassifier))
    }
}
