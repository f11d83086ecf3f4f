use std::path::PathBuf;

use thiserror::Error;

use crate::archive::ArchiveError;

/// Initialization failures. All of these are detected before any document is
/// processed; an annotator that failed to initialize never exists.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("both a classifier factory and a data-writer factory are configured")]
    ConflictingFactories,

    #[error("neither a classifier factory nor a data-writer factory is configured")]
    MissingFactory,

    #[error("span kind `{0}` is not declared by the type system")]
    UndeclaredSpanKind(String),

    #[error("no classifier factory registered under `{0}`")]
    UnknownClassifierFactory(String),

    #[error("no data-writer factory registered under `{0}`")]
    UnknownDataWriterFactory(String),

    #[error("classifier configuration requires the model-archive parameter")]
    MissingClassifierArchive,

    #[error("data-writer configuration requires the output-directory parameter")]
    MissingOutputDirectory,

    #[error("model archive not found: {}", .0.display())]
    ArchiveNotFound(PathBuf),

    #[error("no classifier builder registered for backend `{0}`")]
    UnknownBackend(String),

    #[error("invalid model: {0}")]
    InvalidModel(String),

    #[error("outcome type `{produced}` is not assignable to `{expected}`")]
    IncompatibleOutcomeTypes {
        produced: &'static str,
        expected: &'static str,
    },

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Per-document processing failures. These abort the current run; nothing is
/// swallowed or retried.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("span `{kind}` at {begin}..{end} has no gold outcome")]
    MissingGoldLabel {
        kind: String,
        begin: usize,
        end: usize,
    },

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error(transparent)]
    Classification(#[from] ClassifyError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("malformed features: {0}")]
    MalformedFeatures(String),

    #[error("backend failure: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("slice {slice} lies outside text of {len} characters")]
    SliceOutOfRange { slice: String, len: usize },

    #[error("invalid slice {slice}: begin past end")]
    InvertedSlice { slice: String },
}
