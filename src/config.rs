use std::path::{Path, PathBuf};

use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::InitError;

/// How feature names are written into training data: full names, or dense
/// numeric ids backed by a persisted lookup file.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FeatureEncoding {
    #[default]
    Plain,
    NameNumber,
}

/// Which of the two factory configurations is present, with the factory
/// name to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfiguredMode<'a> {
    Classification(&'a str),
    Training(&'a str),
}

/// Configuration for one annotator. Exactly one of the classifier-factory
/// and data-writer-factory keys must be set; which one decides whether the
/// annotator classifies or writes training data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub struct AnnotatorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        title = "Classifier Factory",
        description = "Registry name of the classifier factory; selects classification mode"
    )]
    classifier_factory: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        with = "Option<String>",
        title = "Model Archive",
        description = "Path to the packaged model archive",
        extend("format" = "path", "x-file" = true, "x-must-exist" = true)
    )]
    model_archive: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        title = "Data Writer Factory",
        description = "Registry name of the data-writer factory; selects training mode"
    )]
    data_writer_factory: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        with = "Option<String>",
        title = "Output Directory",
        description = "Directory the training-data file is written into",
        extend("format" = "path", "x-directory" = true)
    )]
    output_directory: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        title = "Feature Encoding",
        description = "Feature-name encoding for training data; defaults to plain"
    )]
    feature_encoding: Option<FeatureEncoding>,
}

impl AnnotatorConfig {
    pub fn classification<K: Into<String>, P: Into<PathBuf>>(factory: K, archive: P) -> Self {
        Self {
            classifier_factory: Some(factory.into()),
            model_archive: Some(archive.into()),
            ..Self::default()
        }
    }

    pub fn training<K: Into<String>, P: Into<PathBuf>>(factory: K, output_dir: P) -> Self {
        Self {
            data_writer_factory: Some(factory.into()),
            output_directory: Some(output_dir.into()),
            ..Self::default()
        }
    }

    pub fn with_feature_encoding(mut self, encoding: FeatureEncoding) -> Self {
        self.feature_encoding = Some(encoding);
        self
    }

    /// Enforces the exactly-one-factory rule. Both set and neither set are
    /// configuration errors, regardless of the other keys.
    pub fn resolve(&self) -> Result<ConfiguredMode<'_>, InitError> {
        match (&self.classifier_factory, &self.data_writer_factory) {
            (Some(_), Some(_)) => Err(InitError::ConflictingFactories),
            (None, None) => Err(InitError::MissingFactory),
            (Some(name), None) => Ok(ConfiguredMode::Classification(name)),
            (None, Some(name)) => Ok(ConfiguredMode::Training(name)),
        }
    }

    pub fn classifier_factory(&self) -> Option<&str> {
        self.classifier_factory.as_deref()
    }

    pub fn data_writer_factory(&self) -> Option<&str> {
        self.data_writer_factory.as_deref()
    }

    pub fn model_archive(&self) -> Option<&Path> {
        self.model_archive.as_deref()
    }

    pub fn output_directory(&self) -> Option<&Path> {
        self.output_directory.as_deref()
    }

    pub fn feature_encoding(&self) -> FeatureEncoding {
        self.feature_encoding.unwrap_or_default()
    }

    pub fn schema() -> Schema {
        schema_for!(AnnotatorConfig)
    }
}
