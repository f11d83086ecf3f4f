pub mod annotators;
pub mod archive;
pub mod classifiers;
pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod extractors;
pub mod tasks;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
