use std::io;

use crate::classifiers::classifier::Classifier;
use crate::classifiers::data_writer::DataWriter;
use crate::classifiers::factory::{ClassifierFactory, DataWriterFactory};
use crate::classifiers::registry::BackendRegistry;
use crate::config::AnnotatorConfig;
use crate::core::instance::Instance;
use crate::core::outcome::{self, OutcomeType};
use crate::error::InitError;
use crate::testing::stubs::classifiers::{ConstClassifier, EchoClassifier, FailingClassifier};

pub static ENTITY: OutcomeType = OutcomeType::root("entity");
pub static PERSON: OutcomeType = OutcomeType::extending("person", &ENTITY);

struct ConstClassifierFactory {
    outcome_type: &'static OutcomeType,
}

impl ClassifierFactory for ConstClassifierFactory {
    fn create_classifier(&self) -> Result<Box<dyn Classifier>, InitError> {
        Ok(Box::new(ConstClassifier::typed("stub", self.outcome_type)))
    }
}

fn const_factory(
    outcome_type: &'static OutcomeType,
) -> Result<Box<dyn ClassifierFactory>, InitError> {
    Ok(Box::new(ConstClassifierFactory { outcome_type }))
}

pub fn string_classifier_factory(
    _registry: &BackendRegistry,
    _config: &AnnotatorConfig,
) -> Result<Box<dyn ClassifierFactory>, InitError> {
    const_factory(&outcome::STRING)
}

pub fn integer_classifier_factory(
    _registry: &BackendRegistry,
    _config: &AnnotatorConfig,
) -> Result<Box<dyn ClassifierFactory>, InitError> {
    const_factory(&outcome::INTEGER)
}

pub fn entity_classifier_factory(
    _registry: &BackendRegistry,
    _config: &AnnotatorConfig,
) -> Result<Box<dyn ClassifierFactory>, InitError> {
    const_factory(&ENTITY)
}

pub fn person_classifier_factory(
    _registry: &BackendRegistry,
    _config: &AnnotatorConfig,
) -> Result<Box<dyn ClassifierFactory>, InitError> {
    const_factory(&PERSON)
}

struct EchoClassifierFactory;

impl ClassifierFactory for EchoClassifierFactory {
    fn create_classifier(&self) -> Result<Box<dyn Classifier>, InitError> {
        Ok(Box::new(EchoClassifier))
    }
}

pub fn echo_classifier_factory(
    _registry: &BackendRegistry,
    _config: &AnnotatorConfig,
) -> Result<Box<dyn ClassifierFactory>, InitError> {
    Ok(Box::new(EchoClassifierFactory))
}

struct FailingClassifierFactory;

impl ClassifierFactory for FailingClassifierFactory {
    fn create_classifier(&self) -> Result<Box<dyn Classifier>, InitError> {
        Ok(Box::new(FailingClassifier))
    }
}

pub fn failing_classifier_factory(
    _registry: &BackendRegistry,
    _config: &AnnotatorConfig,
) -> Result<Box<dyn ClassifierFactory>, InitError> {
    Ok(Box::new(FailingClassifierFactory))
}

/// Accepts and discards every instance, with an integer outcome type.
struct NullDataWriter;

impl DataWriter for NullDataWriter {
    fn outcome_type(&self) -> &'static OutcomeType {
        &outcome::INTEGER
    }

    fn write(&mut self, _instance: &Instance) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct NullDataWriterFactory;

impl DataWriterFactory for NullDataWriterFactory {
    fn create_data_writer(&self) -> Result<Box<dyn DataWriter>, InitError> {
        Ok(Box::new(NullDataWriter))
    }
}

pub fn integer_writer_factory(
    _registry: &BackendRegistry,
    _config: &AnnotatorConfig,
) -> Result<Box<dyn DataWriterFactory>, InitError> {
    Ok(Box::new(NullDataWriterFactory))
}
