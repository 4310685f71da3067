//! Resume Batch
//!
//! Runs the extraction pipeline over a directory of resumes and writes one
//! CSV row per document.
//!
//! # Overview
//!
//! The batch layer owns everything around the extractor:
//! - **Enumeration**: matching files directly inside the input directory,
//!   in file-name order
//! - **Text extraction**: PDF decoding via `pdf-extract`, or plain text
//! - **Isolation**: a document that cannot be decoded is processed as empty
//!   text and still gets a row
//! - **Reporting**: a header row, then one flushed row per document
//!
//! Only failures to list the input directory or to create and write the
//! report abort a run.
//!
//! # Usage
//!
//! ```no_run
//! use resume_batch::{BatchConfig, BatchRunner, FormatExtractor};
//! use resume_extractor::{ExtractorConfig, ResumeExtractor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BatchConfig::new("resumes", "resumes/output/ResumeData.csv");
//! let extractor = ResumeExtractor::new(ExtractorConfig::default())?;
//! let runner = BatchRunner::new(extractor, FormatExtractor::for_extension(&config.extension));
//!
//! let report = runner.run(&config, |progress| {
//!     println!("Processed: {}", progress.record.file_name);
//! })?;
//!
//! if report.is_empty() {
//!     println!("No documents found in {}", config.input_dir.display());
//! } else {
//!     println!("{}", report.summary());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! input_dir = "resumes"
//! output_path = "resumes/output/ResumeData.csv"
//! extension = "pdf"
//! create_output_dir = true
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod report;
mod source;
mod text;
mod sink;
mod runner;

pub use error::{BatchError, TextError};
pub use config::BatchConfig;
pub use report::BatchReport;
pub use source::DirectorySource;
pub use text::{FormatExtractor, PdfTextExtractor, PlainTextExtractor};
pub use sink::CsvRowSink;
pub use runner::{BatchRunner, DocumentOutcome, DocumentProgress};
