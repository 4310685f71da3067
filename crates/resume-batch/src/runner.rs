//! Core BatchRunner implementation

use std::time::Instant;

use resume_domain::{Document, DocumentSource, ResumeRecord, RowSink, TextExtractor};
use resume_extractor::ResumeExtractor;
use tracing::{debug, info, warn};

use crate::{BatchConfig, BatchError, BatchReport, CsvRowSink, DirectorySource};

/// Progress notification for one processed document
#[derive(Debug)]
pub struct DocumentProgress<'a> {
    /// Zero-based position in the batch
    pub index: usize,

    /// Number of documents in the batch
    pub total: usize,

    /// Record that was written
    pub record: &'a ResumeRecord,

    /// Why the text could not be extracted, if it could not
    pub text_error: Option<&'a str>,
}

/// Record produced for a single document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOutcome {
    /// The record to write
    pub record: ResumeRecord,

    /// Extraction failure message; the record then holds sentinels only
    pub text_error: Option<String>,
}

/// Drives one pass over a batch of documents
///
/// Documents are processed one at a time in enumeration order. Each row is
/// flushed as soon as it is written, so the report survives a later failure.
/// A document whose text cannot be extracted is processed as empty text.
pub struct BatchRunner<E> {
    extractor: ResumeExtractor,
    text_extractor: E,
}

impl<E> BatchRunner<E>
where
    E: TextExtractor,
    E::Error: std::fmt::Display,
{
    /// Create a runner
    pub fn new(extractor: ResumeExtractor, text_extractor: E) -> Self {
        Self {
            extractor,
            text_extractor,
        }
    }

    /// Process every matching document in `config.input_dir` into a CSV report
    ///
    /// When the directory holds no matching documents, nothing is written
    /// and the returned report is empty.
    pub fn run<F>(&self, config: &BatchConfig, progress: F) -> Result<BatchReport, BatchError>
    where
        F: FnMut(&DocumentProgress<'_>),
    {
        let source = DirectorySource::new(&config.input_dir, &config.extension);
        self.run_source(&source, config, progress)
    }

    /// Like [`BatchRunner::run`], with documents from any source
    pub fn run_source<D, F>(
        &self,
        source: &D,
        config: &BatchConfig,
        progress: F,
    ) -> Result<BatchReport, BatchError>
    where
        D: DocumentSource,
        D::Error: Into<BatchError>,
        F: FnMut(&DocumentProgress<'_>),
    {
        config.validate().map_err(BatchError::Config)?;
        let start = Instant::now();

        let documents = source.documents().map_err(Into::into)?;
        if documents.is_empty() {
            info!(
                input = %config.input_dir.display(),
                extension = %config.extension,
                "no documents found"
            );
            return Ok(BatchReport::new());
        }

        info!(
            input = %config.input_dir.display(),
            output = %config.output_path.display(),
            documents = documents.len(),
            "starting batch"
        );

        let mut sink = CsvRowSink::create(&config.output_path, config.create_output_dir)?;
        let mut report = self.process(&documents, &mut sink, progress)?;
        sink.into_inner()?;
        report.output_path = Some(config.output_path.clone());
        report.elapsed_ms = start.elapsed().as_millis() as u64;

        info!(
            processed = report.processed,
            unreadable = report.extraction_failures.len(),
            elapsed_ms = report.elapsed_ms,
            "batch complete"
        );

        Ok(report)
    }

    /// Write the header and one row per document to `sink`
    pub fn process<S, F>(
        &self,
        documents: &[Document],
        sink: &mut S,
        mut progress: F,
    ) -> Result<BatchReport, BatchError>
    where
        S: RowSink,
        S::Error: std::fmt::Display,
        F: FnMut(&DocumentProgress<'_>),
    {
        let sink_error = |e: S::Error| BatchError::Sink(e.to_string());

        let mut report = BatchReport::new();
        report.documents_found = documents.len();

        sink.write_header(&ResumeRecord::HEADER).map_err(sink_error)?;
        sink.flush().map_err(sink_error)?;

        for (index, document) in documents.iter().enumerate() {
            let outcome = self.process_document(document);

            sink.write_row(&outcome.record.fields()).map_err(sink_error)?;
            sink.flush().map_err(sink_error)?;

            if outcome.text_error.is_some() {
                report.record_extraction_failure(&document.file_name);
            }
            report.record_processed(outcome.record.skill_category);

            progress(&DocumentProgress {
                index,
                total: documents.len(),
                record: &outcome.record,
                text_error: outcome.text_error.as_deref(),
            });
        }

        sink.flush().map_err(sink_error)?;
        Ok(report)
    }

    /// Extract the record for one document, never failing
    pub fn process_document(&self, document: &Document) -> DocumentOutcome {
        let (text, text_error) = match self.text_extractor.extract_text(&document.path) {
            Ok(text) => (text, None),
            Err(e) => {
                warn!(
                    file = %document.file_name,
                    error = %e,
                    "text extraction failed, treating document as empty"
                );
                (String::new(), Some(e.to_string()))
            }
        };

        let record = self.extractor.extract(&document.file_name, &text);
        debug!(
            file = %document.file_name,
            category = %record.skill_category,
            "processed document"
        );

        DocumentOutcome { record, text_error }
    }
}
