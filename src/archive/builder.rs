use std::path::Path;

use crate::archive::container::{ArchiveError, ArchiveWriter, ModelArchive};
use crate::classifiers::Classifier;
use crate::core::OutcomeType;
use crate::error::InitError;

pub const MODEL_ENTRY_NAME: &str = "model.bin";
pub const LOOKUP_ENTRY_NAME: &str = "name-lookup.txt";
pub const MODEL_ARCHIVE_NAME: &str = "model.stag";

/// One backend's train/package/load triple. `key()` is the manifest backend
/// name that ties an archive back to the builder that understands it.
pub trait ClassifierBuilder {
    fn key(&self) -> &'static str;

    fn outcome_type(&self) -> &'static OutcomeType;

    fn train(&self, dir: &Path, args: &[String]) -> anyhow::Result<()>;

    fn package(&self, dir: &Path, archive: &mut ArchiveWriter) -> Result<(), ArchiveError>;

    fn load_classifier(&self, archive: &ModelArchive) -> Result<Box<dyn Classifier>, InitError>;
}

/// Standard packaging: the primary model file always, the feature-name
/// lookup only when the training step produced one. A missing lookup file
/// is not an error; a missing model file is.
pub fn package_standard_entries(
    dir: &Path,
    archive: &mut ArchiveWriter,
) -> Result<(), ArchiveError> {
    archive.add_file(MODEL_ENTRY_NAME, &dir.join(MODEL_ENTRY_NAME))?;
    let lookup = dir.join(LOOKUP_ENTRY_NAME);
    if lookup.is_file() {
        archive.add_file(LOOKUP_ENTRY_NAME, &lookup)?;
    }
    Ok(())
}
