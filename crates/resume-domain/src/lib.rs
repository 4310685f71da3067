//! Resume Domain Layer
//!
//! This crate contains the domain model shared by every other crate in the
//! workspace. It has no external dependencies and defines the record emitted
//! per document, the closed set of skill categories, and the trait interfaces
//! for the collaborators the pipeline talks to.
//!
//! ## Key Concepts
//!
//! - **Document**: One input file, identified by its original file name
//! - **ResumeRecord**: The five-field output row built once per document
//! - **SkillCategory**: The bucket a document is classified into
//! - **Sentinels**: `"Unknown"` and `"Unclassified"` stand in for values that
//!   could not be determined
//!
//! ## Architecture
//!
//! ```text
//! DocumentSource → TextExtractor → (field extraction + classification) → RowSink
//! ```
//!
//! The traits in [`traits`] are the seams: concrete directory listing, PDF
//! decoding and CSV writing live in `resume-batch`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod document;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use category::SkillCategory;
pub use document::Document;
pub use record::{ResumeRecord, FIELD_COUNT, UNKNOWN};
pub use traits::{DocumentSource, RowSink, TextExtractor};
