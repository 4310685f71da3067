//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while building an extractor
///
/// Extraction itself never fails: a pattern that does not match resolves to
/// the field's fallback or sentinel.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A field pattern failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
