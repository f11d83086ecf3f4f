use crate::annotators::declaration::AnnotatorDeclaration;
use crate::classifiers::classifier::Classifier;
use crate::classifiers::data_writer::DataWriter;
use crate::classifiers::registry::BackendRegistry;
use crate::config::{AnnotatorConfig, ConfiguredMode};
use crate::core::document::{Document, TypeSystem};
use crate::core::instance::Instance;
use crate::core::outcome::OutcomeType;
use crate::error::{InitError, ProcessError};

enum Mode {
    Training(Box<dyn DataWriter>),
    Classification(Box<dyn Classifier>),
}

/// Drives one classification problem over documents: select spans of the
/// declared kind, extract features, then either write training instances or
/// attach predicted outcomes, depending on configuration.
///
/// Construction is all-or-nothing. Every configuration, registry, and
/// compatibility problem is caught in [`initialize`]; an annotator that
/// exists can process documents.
///
/// [`initialize`]: ClassifierAnnotator::initialize
pub struct ClassifierAnnotator {
    declaration: AnnotatorDeclaration,
    mode: Mode,

    spans_seen: u64,
    instances_written: u64,
    outcomes_assigned: u64,
}

impl ClassifierAnnotator {
    pub fn initialize(
        declaration: AnnotatorDeclaration,
        config: &AnnotatorConfig,
        registry: &BackendRegistry,
        type_system: &TypeSystem,
    ) -> Result<Self, InitError> {
        let configured = config.resolve()?;

        if !type_system.declares(declaration.span_kind()) {
            return Err(InitError::UndeclaredSpanKind(
                declaration.span_kind().to_string(),
            ));
        }

        let mode = match configured {
            ConfiguredMode::Classification(factory_name) => {
                let factory = registry.classifier_factory(factory_name, config)?;
                let classifier = factory.create_classifier()?;
                check_outcome_type(classifier.outcome_type(), declaration.outcome_type())?;
                Mode::Classification(classifier)
            }
            ConfiguredMode::Training(factory_name) => {
                let factory = registry.data_writer_factory(factory_name, config)?;
                let writer = factory.create_data_writer()?;
                check_outcome_type(writer.outcome_type(), declaration.outcome_type())?;
                Mode::Training(writer)
            }
        };

        Ok(Self {
            declaration,
            mode,
            spans_seen: 0,
            instances_written: 0,
            outcomes_assigned: 0,
        })
    }

    /// True iff a data-writer factory was the resolved configuration.
    pub fn is_training(&self) -> bool {
        matches!(self.mode, Mode::Training(_))
    }

    pub fn span_kind(&self) -> &str {
        self.declaration.span_kind()
    }

    pub fn spans_seen(&self) -> u64 {
        self.spans_seen
    }

    pub fn instances_written(&self) -> u64 {
        self.instances_written
    }

    pub fn outcomes_assigned(&self) -> u64 {
        self.outcomes_assigned
    }

    /// Processes every span of the declared kind, in document order. Any
    /// extractor, writer, or classifier failure aborts the document.
    pub fn process(&mut self, document: &mut Document) -> Result<(), ProcessError> {
        let indices = document.span_indices_of_kind(self.declaration.span_kind());
        for index in indices {
            self.spans_seen += 1;

            let features = {
                let span = &document.spans()[index];
                let mut features = Vec::new();
                for extractor in self.declaration.extractors() {
                    features.extend(extractor.extract(document, span)?);
                }
                features
            };

            match &mut self.mode {
                Mode::Training(writer) => {
                    let span = &document.spans()[index];
                    let Some(gold) = self.declaration.access().gold(span) else {
                        return Err(ProcessError::MissingGoldLabel {
                            kind: span.kind.clone(),
                            begin: span.begin,
                            end: span.end,
                        });
                    };
                    writer.write(&Instance::labeled(gold, features))?;
                    self.instances_written += 1;
                }
                Mode::Classification(classifier) => {
                    let outcome = classifier.classify(&features)?;
                    let span = &mut document.spans_mut()[index];
                    self.declaration.access().set_predicted(span, &outcome);
                    self.outcomes_assigned += 1;
                }
            }
        }
        Ok(())
    }

    /// Finishes the data writer after the last document. A no-op in
    /// classification mode.
    pub fn collection_process_complete(&mut self) -> Result<(), ProcessError> {
        if let Mode::Training(writer) = &mut self.mode {
            writer.finish()?;
        }
        Ok(())
    }
}

fn check_outcome_type(
    produced: &'static OutcomeType,
    expected: &'static OutcomeType,
) -> Result<(), InitError> {
    if produced.is_assignable_to(expected) {
        Ok(())
    } else {
        Err(InitError::IncompatibleOutcomeTypes {
            produced: produced.name(),
            expected: expected.name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::frequency::TRAINING_DATA_NAME;
    use crate::core::outcome;
    use crate::extractors::{CoveredTextExtractor, SpanLengthExtractor};
    use crate::testing::dummies::{labeled_sentence, token_type_system, unlabeled_sentence};
    use crate::testing::stubs::factories::{
        ENTITY, PERSON, echo_classifier_factory, entity_classifier_factory,
        failing_classifier_factory, integer_classifier_factory, integer_writer_factory,
        person_classifier_factory, string_classifier_factory,
    };
    use tempfile::tempdir;

    fn test_registry() -> BackendRegistry {
        let mut registry = BackendRegistry::with_builtins();
        registry.register_classifier_factory("const-string", string_classifier_factory);
        registry.register_classifier_factory("const-integer", integer_classifier_factory);
        registry.register_classifier_factory("const-entity", entity_classifier_factory);
        registry.register_classifier_factory("const-person", person_classifier_factory);
        registry.register_classifier_factory("echo", echo_classifier_factory);
        registry.register_classifier_factory("failing", failing_classifier_factory);
        registry.register_data_writer_factory("null-integer", integer_writer_factory);
        registry
    }

    fn word_declaration() -> AnnotatorDeclaration {
        AnnotatorDeclaration::new(&outcome::STRING, "token")
            .with_extractor(Box::new(CoveredTextExtractor::new()))
    }

    fn classification_config(factory: &str) -> AnnotatorConfig {
        AnnotatorConfig::classification(factory, "unused.stag")
    }

    #[test]
    fn is_training_reflects_the_configured_factory() {
        let registry = test_registry();
        let ts = token_type_system();
        let dir = tempdir().unwrap();

        let training = ClassifierAnnotator::initialize(
            word_declaration(),
            &AnnotatorConfig::training("frequency", dir.path()),
            &registry,
            &ts,
        )
        .unwrap();
        assert!(training.is_training());

        let classification = ClassifierAnnotator::initialize(
            word_declaration(),
            &classification_config("const-string"),
            &registry,
            &ts,
        )
        .unwrap();
        assert!(!classification.is_training());
    }

    #[test]
    fn string_classifier_works_for_a_string_annotator() {
        let registry = test_registry();
        let mut annotator = ClassifierAnnotator::initialize(
            word_declaration(),
            &classification_config("const-string"),
            &registry,
            &token_type_system(),
        )
        .unwrap();

        let mut doc = unlabeled_sentence();
        annotator.process(&mut doc).unwrap();
        for span in doc.spans_of_kind("token") {
            assert_eq!(span.predicted.as_deref(), Some("stub"));
        }
    }

    #[test]
    fn integer_classifier_fails_for_a_string_annotator() {
        let registry = test_registry();
        let err = ClassifierAnnotator::initialize(
            word_declaration(),
            &classification_config("const-integer"),
            &registry,
            &token_type_system(),
        )
        .err();
        match err {
            Some(InitError::IncompatibleOutcomeTypes { produced, expected }) => {
                assert_eq!(produced, "integer");
                assert_eq!(expected, "string");
            }
            other => panic!("expected IncompatibleOutcomeTypes, got {other:?}"),
        }
    }

    #[test]
    fn subtype_classifier_works_for_a_supertype_annotator() {
        let registry = test_registry();
        let declaration = AnnotatorDeclaration::new(&ENTITY, "token")
            .with_extractor(Box::new(CoveredTextExtractor::new()));
        assert!(
            ClassifierAnnotator::initialize(
                declaration,
                &classification_config("const-person"),
                &registry,
                &token_type_system(),
            )
            .is_ok()
        );
    }

    #[test]
    fn supertype_classifier_fails_for_a_subtype_annotator() {
        let registry = test_registry();
        let declaration = AnnotatorDeclaration::new(&PERSON, "token")
            .with_extractor(Box::new(CoveredTextExtractor::new()));
        assert!(matches!(
            ClassifierAnnotator::initialize(
                declaration,
                &classification_config("const-entity"),
                &registry,
                &token_type_system(),
            )
            .err(),
            Some(InitError::IncompatibleOutcomeTypes { .. })
        ));
    }

    #[test]
    fn data_writer_outcome_types_are_checked_too() {
        let registry = test_registry();
        let config: AnnotatorConfig =
            serde_json::from_str(r#"{"data-writer-factory":"null-integer"}"#).unwrap();
        assert!(matches!(
            ClassifierAnnotator::initialize(
                word_declaration(),
                &config,
                &registry,
                &token_type_system(),
            )
            .err(),
            Some(InitError::IncompatibleOutcomeTypes { .. })
        ));
    }

    #[test]
    fn nonexistent_archive_paths_fail_initialization() {
        let registry = test_registry();
        let dir = tempdir().unwrap();
        let missing = dir.path().join("asdf.stag");
        let err = ClassifierAnnotator::initialize(
            word_declaration(),
            &AnnotatorConfig::classification("archive", &missing),
            &registry,
            &token_type_system(),
        )
        .err();
        match err {
            Some(InitError::ArchiveNotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected ArchiveNotFound, got {other:?}"),
        }
    }

    #[test]
    fn training_without_an_output_directory_fails() {
        let registry = test_registry();
        let config: AnnotatorConfig =
            serde_json::from_str(r#"{"data-writer-factory":"frequency"}"#).unwrap();
        assert!(matches!(
            ClassifierAnnotator::initialize(
                word_declaration(),
                &config,
                &registry,
                &token_type_system(),
            )
            .err(),
            Some(InitError::MissingOutputDirectory)
        ));
    }

    #[test]
    fn undeclared_span_kinds_fail_initialization() {
        let registry = test_registry();
        let ts = TypeSystem::with_kinds(["document"]);
        match ClassifierAnnotator::initialize(
            word_declaration(),
            &classification_config("const-string"),
            &registry,
            &ts,
        )
        .err()
        {
            Some(InitError::UndeclaredSpanKind(kind)) => assert_eq!(kind, "token"),
            other => panic!("expected UndeclaredSpanKind, got {other:?}"),
        }
    }

    #[test]
    fn unknown_factory_names_fail_initialization() {
        let registry = test_registry();
        let ts = token_type_system();

        assert!(matches!(
            ClassifierAnnotator::initialize(
                word_declaration(),
                &classification_config("no-such-factory"),
                &registry,
                &ts,
            )
            .err(),
            Some(InitError::UnknownClassifierFactory(_))
        ));
        assert!(matches!(
            ClassifierAnnotator::initialize(
                word_declaration(),
                &AnnotatorConfig::training("no-such-writer", "/tmp/out"),
                &registry,
                &ts,
            )
            .err(),
            Some(InitError::UnknownDataWriterFactory(_))
        ));
    }

    #[test]
    fn classification_never_mutates_gold_labels() {
        let registry = test_registry();
        let mut annotator = ClassifierAnnotator::initialize(
            word_declaration(),
            &classification_config("const-string"),
            &registry,
            &token_type_system(),
        )
        .unwrap();

        let mut doc = labeled_sentence();
        let golds_before: Vec<Option<String>> =
            doc.spans().iter().map(|s| s.gold.clone()).collect();
        annotator.process(&mut doc).unwrap();

        let golds_after: Vec<Option<String>> = doc.spans().iter().map(|s| s.gold.clone()).collect();
        assert_eq!(golds_before, golds_after);
        assert_eq!(annotator.spans_seen(), 3);
        assert_eq!(annotator.outcomes_assigned(), 3);
        assert_eq!(annotator.instances_written(), 0);
    }

    #[test]
    fn classify_receives_exactly_the_extracted_features() {
        let registry = test_registry();
        let mut annotator = ClassifierAnnotator::initialize(
            word_declaration(),
            &classification_config("echo"),
            &registry,
            &token_type_system(),
        )
        .unwrap();

        // The echo stub rejects anything but a single feature, so this
        // passing means each span contributed exactly its word feature.
        let mut doc = unlabeled_sentence();
        annotator.process(&mut doc).unwrap();
        let predicted: Vec<&str> = doc
            .spans_of_kind("token")
            .map(|s| s.predicted.as_deref().unwrap())
            .collect();
        assert_eq!(predicted, vec!["she", "walked", "home"]);

        let two_extractors = AnnotatorDeclaration::new(&outcome::STRING, "token")
            .with_extractor(Box::new(CoveredTextExtractor::new()))
            .with_extractor(Box::new(SpanLengthExtractor));
        let mut annotator = ClassifierAnnotator::initialize(
            two_extractors,
            &classification_config("echo"),
            &registry,
            &token_type_system(),
        )
        .unwrap();
        assert!(matches!(
            annotator.process(&mut unlabeled_sentence()),
            Err(ProcessError::Classification(_))
        ));
    }

    #[test]
    fn training_writes_one_instance_per_span() {
        let registry = test_registry();
        let dir = tempdir().unwrap();
        let mut annotator = ClassifierAnnotator::initialize(
            word_declaration(),
            &AnnotatorConfig::training("frequency", dir.path()),
            &registry,
            &token_type_system(),
        )
        .unwrap();

        let mut doc = labeled_sentence();
        annotator.process(&mut doc).unwrap();
        annotator.collection_process_complete().unwrap();

        assert_eq!(annotator.instances_written(), 3);
        assert!(doc.spans().iter().all(|s| s.predicted.is_none()));

        let text = std::fs::read_to_string(dir.path().join(TRAINING_DATA_NAME)).unwrap();
        assert_eq!(
            text,
            "NONE word=she\nPAST word=walked\nNONE word=home\n"
        );
    }

    #[test]
    fn training_requires_gold_labels() {
        let registry = test_registry();
        let dir = tempdir().unwrap();
        let mut annotator = ClassifierAnnotator::initialize(
            word_declaration(),
            &AnnotatorConfig::training("frequency", dir.path()),
            &registry,
            &token_type_system(),
        )
        .unwrap();

        match annotator.process(&mut unlabeled_sentence()) {
            Err(ProcessError::MissingGoldLabel { kind, begin, end }) => {
                assert_eq!(kind, "token");
                assert_eq!((begin, end), (0, 3));
            }
            other => panic!("expected MissingGoldLabel, got {other:?}"),
        }
    }

    #[test]
    fn attribute_annotators_train_with_the_default_value() {
        let registry = test_registry();
        let dir = tempdir().unwrap();
        let declaration =
            AnnotatorDeclaration::for_attribute(&outcome::STRING, "token", "aspect", "NONE")
                .with_extractor(Box::new(CoveredTextExtractor::new()));
        let mut annotator = ClassifierAnnotator::initialize(
            declaration,
            &AnnotatorConfig::training("frequency", dir.path()),
            &registry,
            &token_type_system(),
        )
        .unwrap();

        let mut doc = unlabeled_sentence();
        doc.spans_mut()[1].set_attribute("aspect", "PROGRESSIVE");
        annotator.process(&mut doc).unwrap();
        annotator.collection_process_complete().unwrap();

        let text = std::fs::read_to_string(dir.path().join(TRAINING_DATA_NAME)).unwrap();
        assert_eq!(
            text,
            "NONE word=she\nPROGRESSIVE word=walked\nNONE word=home\n"
        );
    }

    #[test]
    fn classifier_failures_abort_the_document() {
        let registry = test_registry();
        let mut annotator = ClassifierAnnotator::initialize(
            word_declaration(),
            &classification_config("failing"),
            &registry,
            &token_type_system(),
        )
        .unwrap();

        let mut doc = unlabeled_sentence();
        assert!(matches!(
            annotator.process(&mut doc),
            Err(ProcessError::Classification(_))
        ));
        assert!(doc.spans().iter().all(|s| s.predicted.is_none()));
    }

    #[test]
    fn completing_a_classification_run_is_a_no_op() {
        let registry = test_registry();
        let mut annotator = ClassifierAnnotator::initialize(
            word_declaration(),
            &classification_config("const-string"),
            &registry,
            &token_type_system(),
        )
        .unwrap();
        annotator.collection_process_complete().unwrap();
    }
}
