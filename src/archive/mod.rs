pub mod builder;
pub mod container;

pub use builder::{
    ClassifierBuilder, LOOKUP_ENTRY_NAME, MODEL_ARCHIVE_NAME, MODEL_ENTRY_NAME,
    package_standard_entries,
};
pub use container::{ArchiveError, ArchiveWriter, Manifest, ModelArchive};
