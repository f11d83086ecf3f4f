use std::collections::HashMap;

use crate::archive::builder::ClassifierBuilder;
use crate::classifiers::factory::{
    ClassifierFactory, DataWriterFactory, archive_classifier_factory,
};
use crate::classifiers::frequency;
use crate::config::AnnotatorConfig;
use crate::error::InitError;

pub type ClassifierFactoryCtor =
    fn(&BackendRegistry, &AnnotatorConfig) -> Result<Box<dyn ClassifierFactory>, InitError>;

pub type DataWriterFactoryCtor =
    fn(&BackendRegistry, &AnnotatorConfig) -> Result<Box<dyn DataWriterFactory>, InitError>;

pub type BuilderCtor = fn() -> Box<dyn ClassifierBuilder>;

/// Name-to-constructor tables for everything an annotator can be configured
/// with. Configuration refers to components by name only; resolution happens
/// here, at initialization, so an unknown name is an error before any
/// document is touched.
///
/// Builders are keyed by the backend name their archives carry in the
/// manifest. Factories are keyed by the names used in [`AnnotatorConfig`].
pub struct BackendRegistry {
    classifier_factories: HashMap<String, ClassifierFactoryCtor>,
    data_writer_factories: HashMap<String, DataWriterFactoryCtor>,
    builders: HashMap<String, BuilderCtor>,
}

impl BackendRegistry {
    /// An empty registry. Most callers want [`with_builtins`].
    ///
    /// [`with_builtins`]: BackendRegistry::with_builtins
    pub fn new() -> Self {
        Self {
            classifier_factories: HashMap::new(),
            data_writer_factories: HashMap::new(),
            builders: HashMap::new(),
        }
    }

    /// A registry with the built-in components: the `archive` classifier
    /// factory and the `frequency` data-writer factory and builder.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_classifier_factory("archive", archive_classifier_factory);
        registry.register_data_writer_factory("frequency", frequency::frequency_writer_factory);
        registry.register_builder(frequency::frequency_builder);
        registry
    }

    pub fn register_classifier_factory<N: Into<String>>(
        &mut self,
        name: N,
        ctor: ClassifierFactoryCtor,
    ) {
        self.classifier_factories.insert(name.into(), ctor);
    }

    pub fn register_data_writer_factory<N: Into<String>>(
        &mut self,
        name: N,
        ctor: DataWriterFactoryCtor,
    ) {
        self.data_writer_factories.insert(name.into(), ctor);
    }

    /// Registers a builder under the key its instances report.
    pub fn register_builder(&mut self, ctor: BuilderCtor) {
        let key = ctor().key();
        self.builders.insert(key.to_string(), ctor);
    }

    pub fn classifier_factory(
        &self,
        name: &str,
        config: &AnnotatorConfig,
    ) -> Result<Box<dyn ClassifierFactory>, InitError> {
        match self.classifier_factories.get(name) {
            Some(ctor) => ctor(self, config),
            None => Err(InitError::UnknownClassifierFactory(name.to_string())),
        }
    }

    pub fn data_writer_factory(
        &self,
        name: &str,
        config: &AnnotatorConfig,
    ) -> Result<Box<dyn DataWriterFactory>, InitError> {
        match self.data_writer_factories.get(name) {
            Some(ctor) => ctor(self, config),
            None => Err(InitError::UnknownDataWriterFactory(name.to_string())),
        }
    }

    pub fn builder(&self, key: &str) -> Result<Box<dyn ClassifierBuilder>, InitError> {
        match self.builders.get(key) {
            Some(ctor) => Ok(ctor()),
            None => Err(InitError::UnknownBackend(key.to_string())),
        }
    }

    /// Registered builder keys in sorted order.
    pub fn builder_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
