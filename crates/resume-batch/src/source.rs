//! Directory listing

use std::path::{Path, PathBuf};

use resume_domain::{Document, DocumentSource};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::normalize_extension;
use crate::BatchError;

/// Lists the documents directly inside one directory
///
/// Only regular files whose extension matches (case-insensitively) are
/// returned, sorted by file name. Subdirectories are not descended into.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    extension: String,
}

impl DirectorySource {
    /// Create a source for `dir` accepting files ending in `extension`
    pub fn new(dir: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            dir: dir.into(),
            extension: normalize_extension(extension),
        }
    }
}

/// Whether `path` ends in `extension` (lower-case, no dot), ignoring case
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase() == extension)
        .unwrap_or(false)
}

impl DocumentSource for DirectorySource {
    type Error = BatchError;

    fn documents(&self) -> Result<Vec<Document>, BatchError> {
        let input_error = |reason: String| BatchError::InputDir {
            path: self.dir.clone(),
            reason,
        };

        if !self.dir.is_dir() {
            return Err(input_error("not a directory".to_string()));
        }

        let mut documents = Vec::new();
        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(input_error(e.to_string())),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();

            if !entry.file_type().is_file() {
                continue;
            }
            if !has_extension(path, &self.extension) {
                debug!(path = %path.display(), "skipping non-matching file");
                continue;
            }
            documents.push(Document::from_path(path));
        }

        Ok(documents)
    }
}
