pub mod classifier;
pub mod data_writer;
pub mod encoding;
pub mod factory;
pub mod frequency;
pub mod registry;

pub use classifier::Classifier;
pub use data_writer::DataWriter;
pub use factory::{ClassifierFactory, DataWriterFactory};
pub use registry::BackendRegistry;
