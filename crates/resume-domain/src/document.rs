//! Input documents

use std::path::{Path, PathBuf};

/// A single input document
///
/// `file_name` is the identifier written to the report; `path` is the handle
/// handed to the text extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Original file name, as listed in the input directory
    pub file_name: String,

    /// Full path used to read the document
    pub path: PathBuf,
}

impl Document {
    /// Create a document from a path, deriving the file name from its last component
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { file_name, path }
    }

    /// Lower-cased file extension, if any
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }

    /// Borrow the path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
