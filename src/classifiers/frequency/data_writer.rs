use std::fs::File;
use std::io::{self, BufWriter, Error, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::archive::builder::LOOKUP_ENTRY_NAME;
use crate::classifiers::data_writer::DataWriter;
use crate::classifiers::encoding::FeatureLookup;
use crate::classifiers::factory::DataWriterFactory;
use crate::classifiers::frequency::TRAINING_DATA_NAME;
use crate::classifiers::registry::BackendRegistry;
use crate::config::{AnnotatorConfig, FeatureEncoding};
use crate::core::feature::Feature;
use crate::core::instance::Instance;
use crate::core::outcome::{self, OutcomeType};
use crate::error::InitError;

pub struct FrequencyDataWriterFactory {
    dir: PathBuf,
    encoding: FeatureEncoding,
}

impl FrequencyDataWriterFactory {
    pub fn new<P: Into<PathBuf>>(dir: P, encoding: FeatureEncoding) -> Self {
        Self {
            dir: dir.into(),
            encoding,
        }
    }
}

impl DataWriterFactory for FrequencyDataWriterFactory {
    fn create_data_writer(&self) -> Result<Box<dyn DataWriter>, InitError> {
        std::fs::create_dir_all(&self.dir)?;
        let writer = FrequencyDataWriter::create(&self.dir, self.encoding)?;
        Ok(Box::new(writer))
    }
}

/// Registry constructor for [`FrequencyDataWriterFactory`].
pub fn frequency_writer_factory(
    _registry: &BackendRegistry,
    config: &AnnotatorConfig,
) -> Result<Box<dyn DataWriterFactory>, InitError> {
    let dir = config
        .output_directory()
        .ok_or(InitError::MissingOutputDirectory)?;
    Ok(Box::new(FrequencyDataWriterFactory::new(
        dir,
        config.feature_encoding(),
    )))
}

/// Writes one line per instance: the outcome, then the encoded features,
/// space-separated. A fresh file is started per run; the previous run's
/// training data is overwritten.
///
/// The outcome and every encoded feature must each serialize to a single
/// whitespace-free token; anything else is rejected rather than written,
/// since a stray newline or space would be parsed back as extra instances
/// or fields.
pub struct FrequencyDataWriter {
    out: BufWriter<File>,
    dir: PathBuf,
    lookup: Option<FeatureLookup>,
}

impl FrequencyDataWriter {
    pub fn create(dir: &Path, encoding: FeatureEncoding) -> io::Result<Self> {
        let file = File::create(dir.join(TRAINING_DATA_NAME))?;
        Ok(Self {
            out: BufWriter::new(file),
            dir: dir.to_path_buf(),
            lookup: match encoding {
                FeatureEncoding::Plain => None,
                FeatureEncoding::NameNumber => Some(FeatureLookup::new()),
            },
        })
    }

    fn encode(&mut self, feature: &Feature) -> String {
        match &mut self.lookup {
            None => feature.encode(),
            Some(lookup) => format!("{}={}", lookup.intern(feature.name()), feature.value()),
        }
    }
}

impl DataWriter for FrequencyDataWriter {
    fn outcome_type(&self) -> &'static OutcomeType {
        &outcome::STRING
    }

    fn write(&mut self, instance: &Instance) -> io::Result<()> {
        let Some(label) = instance.outcome() else {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "instance has no outcome",
            ));
        };
        if label.is_empty() || label.chars().any(char::is_whitespace) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("outcome `{label}` cannot be a line-format token"),
            ));
        }

        let mut line = label.to_string();
        for feature in instance.features() {
            let encoded = self.encode(feature);
            if encoded.chars().any(char::is_whitespace) {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!("feature `{}` cannot be a line-format token", feature.name()),
                ));
            }
            line.push(' ');
            line.push_str(&encoded);
        }
        writeln!(self.out, "{line}")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()?;
        if let Some(lookup) = &self.lookup {
            if !lookup.is_empty() {
                lookup.save(&self.dir.join(LOOKUP_ENTRY_NAME))?;
            }
        }
        Ok(())
    }
}
