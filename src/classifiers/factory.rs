use crate::archive::ModelArchive;
use crate::archive::builder::ClassifierBuilder;
use crate::classifiers::classifier::Classifier;
use crate::classifiers::data_writer::DataWriter;
use crate::classifiers::registry::BackendRegistry;
use crate::config::AnnotatorConfig;
use crate::error::InitError;

pub trait ClassifierFactory {
    fn create_classifier(&self) -> Result<Box<dyn Classifier>, InitError>;
}

pub trait DataWriterFactory {
    fn create_data_writer(&self) -> Result<Box<dyn DataWriter>, InitError>;
}

/// The standard classifier factory: loads whatever backend a model archive's
/// manifest names. Opening the archive and resolving the builder happen in
/// the constructor, so a bad path or an unknown backend fails initialization
/// rather than the first document.
pub struct ArchiveClassifierFactory {
    archive: ModelArchive,
    builder: Box<dyn ClassifierBuilder>,
}

impl ArchiveClassifierFactory {
    pub fn from_config(
        registry: &BackendRegistry,
        config: &AnnotatorConfig,
    ) -> Result<Self, InitError> {
        let path = config
            .model_archive()
            .ok_or(InitError::MissingClassifierArchive)?;
        if !path.is_file() {
            return Err(InitError::ArchiveNotFound(path.to_path_buf()));
        }
        let archive = ModelArchive::open(path)?;
        let builder = registry.builder(&archive.manifest().backend)?;
        Ok(Self { archive, builder })
    }

    pub fn archive(&self) -> &ModelArchive {
        &self.archive
    }
}

impl ClassifierFactory for ArchiveClassifierFactory {
    fn create_classifier(&self) -> Result<Box<dyn Classifier>, InitError> {
        self.builder.load_classifier(&self.archive)
    }
}

/// Registry constructor for [`ArchiveClassifierFactory`].
pub fn archive_classifier_factory(
    registry: &BackendRegistry,
    config: &AnnotatorConfig,
) -> Result<Box<dyn ClassifierFactory>, InitError> {
    Ok(Box::new(ArchiveClassifierFactory::from_config(
        registry, config,
    )?))
}
