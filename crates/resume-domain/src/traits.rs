//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the extraction pipeline and
//! the outside world. Implementations live in `resume-batch`.

use std::path::Path;

use crate::{Document, FIELD_COUNT};

/// Trait for turning a document into plain text
///
/// Implementations must not panic on damaged input; failures are reported
/// through `Err` so the caller can fall back to empty text.
pub trait TextExtractor {
    /// Error type for extraction failures
    type Error;

    /// Return the full plain-text content of the document at `path`
    fn extract_text(&self, path: &Path) -> Result<String, Self::Error>;
}

/// Trait for the tabular report writer
///
/// The header is written once before any data row. Rows are fixed-width
/// tuples in [`crate::ResumeRecord::HEADER`] order.
pub trait RowSink {
    /// Error type for write failures
    type Error;

    /// Write the header row
    fn write_header(&mut self, header: &[&str; FIELD_COUNT]) -> Result<(), Self::Error>;

    /// Write one data row
    fn write_row(&mut self, fields: &[&str; FIELD_COUNT]) -> Result<(), Self::Error>;

    /// Push buffered rows to the underlying storage
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Trait for enumerating the documents of a batch
pub trait DocumentSource {
    /// Error type for enumeration failures
    type Error;

    /// List documents in processing order
    fn documents(&self) -> Result<Vec<Document>, Self::Error>;
}
