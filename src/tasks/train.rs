use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::archive::builder::{ClassifierBuilder, MODEL_ARCHIVE_NAME};
use crate::archive::container::{ArchiveWriter, Manifest};

/// Trains a model in `dir` and packages it as `model.stag` next to its
/// intermediate files. Returns the archive path.
pub fn train_model(
    builder: &dyn ClassifierBuilder,
    dir: &Path,
    args: &[String],
) -> anyhow::Result<PathBuf> {
    builder
        .train(dir, args)
        .with_context(|| format!("training a {} model in {}", builder.key(), dir.display()))?;

    let path = dir.join(MODEL_ARCHIVE_NAME);
    let manifest = Manifest::new(builder.key(), builder.outcome_type().name());
    let mut archive = ArchiveWriter::create(&path, &manifest)
        .with_context(|| format!("creating {}", path.display()))?;
    builder
        .package(dir, &mut archive)
        .context("packaging model files")?;
    archive.finish().context("finishing the model archive")?;

    Ok(path)
}
