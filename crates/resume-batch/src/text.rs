//! Text extractors for supported document formats

use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use resume_domain::TextExtractor;

use crate::config::normalize_extension;
use crate::error::TextError;

/// Extracts text from PDF files with `pdf-extract`
///
/// Decoder errors and decoder panics on malformed files both come back as
/// `Err`, so one damaged PDF cannot take down a batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create a PDF extractor
    pub fn new() -> Self {
        Self
    }

    /// Decode an in-memory PDF
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Result<String, TextError> {
        let decoded = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }));

        match decoded {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(TextError::Pdf(e.to_string())),
            Err(payload) => Err(TextError::DecoderPanic(panic_message(payload.as_ref()))),
        }
    }
}

impl TextExtractor for PdfTextExtractor {
    type Error = TextError;

    fn extract_text(&self, path: &Path) -> Result<String, TextError> {
        let bytes = fs::read(path)?;
        self.extract_from_bytes(&bytes)
    }
}

/// Reads plain-text documents, replacing invalid UTF-8 sequences
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Create a plain-text extractor
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PlainTextExtractor {
    type Error = TextError;

    fn extract_text(&self, path: &Path) -> Result<String, TextError> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Extractor chosen from the configured document extension
#[derive(Debug, Clone, Copy)]
pub enum FormatExtractor {
    /// `pdf` documents
    Pdf(PdfTextExtractor),
    /// Any other extension is read as text
    Plain(PlainTextExtractor),
}

impl FormatExtractor {
    /// Pick the extractor for `extension` (case-insensitive, leading dot allowed)
    pub fn for_extension(extension: &str) -> Self {
        if normalize_extension(extension) == "pdf" {
            FormatExtractor::Pdf(PdfTextExtractor::new())
        } else {
            FormatExtractor::Plain(PlainTextExtractor::new())
        }
    }
}

impl TextExtractor for FormatExtractor {
    type Error = TextError;

    fn extract_text(&self, path: &Path) -> Result<String, TextError> {
        match self {
            FormatExtractor::Pdf(pdf) => pdf.extract_text(path),
            FormatExtractor::Plain(plain) => plain.extract_text(path),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
