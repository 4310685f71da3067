//! Error types for batch operations

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a batch
///
/// A single document that cannot be read is not an error at this level; it
/// is recorded in the [`crate::BatchReport`] and processing continues.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The input directory could not be listed
    #[error("Cannot read input directory {path}: {reason}")]
    InputDir {
        /// Directory that was requested
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// The output file or its directory could not be created
    #[error("Cannot create output file {path}: {source}")]
    Output {
        /// File that was requested
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// Writing a row to the report failed
    #[error("Report write error: {0}")]
    Sink(String),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Reasons a single document produced no text
#[derive(Error, Debug)]
pub enum TextError {
    /// The file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The PDF decoder reported an error
    #[error("PDF decode error: {0}")]
    Pdf(String),

    /// The PDF decoder panicked on malformed input
    #[error("PDF decoder aborted: {0}")]
    DecoderPanic(String),
}
