pub mod builder;
pub mod classifier;
pub mod data_writer;

pub use builder::{FrequencyBuilder, frequency_builder};
pub use classifier::{FrequencyClassifier, FrequencyModel};
pub use data_writer::{FrequencyDataWriter, FrequencyDataWriterFactory, frequency_writer_factory};

/// Backend key carried in archive manifests and used for registration.
pub const FREQUENCY_BACKEND: &str = "frequency";

/// Training-data file the writer produces and `train` consumes.
pub const TRAINING_DATA_NAME: &str = "training-data.frequency";
