use std::io::{Error, ErrorKind};
use std::sync::mpsc::Sender;
use std::time::Instant;

use crate::annotators::ClassifierAnnotator;
use crate::corpus::DocumentReader;
use crate::error::{InitError, ProcessError};

/// Totals of one pipeline run, also sent as periodic progress snapshots.
#[derive(Debug, Clone, Default)]
pub struct PipelineSummary {
    pub documents: u64,
    pub spans: u64,
    pub instances_written: u64,
    pub outcomes_assigned: u64,
    pub seconds: f64,
}

/// Drives a document reader through a sequence of annotators, one document
/// fully processed before the next.
pub struct Pipeline {
    reader: Box<dyn DocumentReader>,
    annotators: Vec<ClassifierAnnotator>,

    max_documents: Option<u64>,
    progress_frequency: u64,

    documents: u64,
    start_time: Instant,

    progress_tx: Option<Sender<PipelineSummary>>,
}

impl Pipeline {
    pub fn new(
        reader: Box<dyn DocumentReader>,
        annotators: Vec<ClassifierAnnotator>,
        max_documents: Option<u64>,
        progress_frequency: u64,
    ) -> Result<Self, InitError> {
        if annotators.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "at least one annotator is required",
            )
            .into());
        }
        if progress_frequency == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "progress_frequency must be > 0",
            )
            .into());
        }
        for annotator in &annotators {
            if !reader.type_system().declares(annotator.span_kind()) {
                return Err(InitError::UndeclaredSpanKind(
                    annotator.span_kind().to_string(),
                ));
            }
        }

        Ok(Self {
            reader,
            annotators,
            max_documents,
            progress_frequency,
            documents: 0,
            start_time: Instant::now(),
            progress_tx: None,
        })
    }
}

impl Pipeline {
    pub fn with_progress(mut self, tx: Sender<PipelineSummary>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    /// Runs until the reader is exhausted or `max_documents` is reached.
    ///
    /// Any per-document failure aborts the run; a partially written training
    /// file is left in place.
    pub fn run(&mut self) -> Result<PipelineSummary, ProcessError> {
        self.start_time = Instant::now();

        while self.reader.has_more_documents() {
            if let Some(max) = self.max_documents {
                if self.documents >= max {
                    break;
                }
            }
            let Some(mut document) = self.reader.next_document() else {
                break;
            };
            for annotator in &mut self.annotators {
                annotator.process(&mut document)?;
            }
            self.documents += 1;

            if self.documents % self.progress_frequency == 0 {
                self.push_progress();
            }
        }

        for annotator in &mut self.annotators {
            annotator.collection_process_complete()?;
        }
        self.push_progress();
        Ok(self.summary())
    }

    pub fn summary(&self) -> PipelineSummary {
        let mut summary = PipelineSummary {
            documents: self.documents,
            seconds: self.start_time.elapsed().as_secs_f64(),
            ..PipelineSummary::default()
        };
        for annotator in &self.annotators {
            summary.spans += annotator.spans_seen();
            summary.instances_written += annotator.instances_written();
            summary.outcomes_assigned += annotator.outcomes_assigned();
        }
        summary
    }

    fn push_progress(&self) {
        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(self.summary());
        }
    }
}
