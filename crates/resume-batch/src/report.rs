//! Batch run report

use std::collections::BTreeMap;
use std::path::PathBuf;

use resume_domain::SkillCategory;

/// Outcome of a batch run
///
/// Tracks documents seen, documents whose text could not be extracted,
/// and how many documents landed in each category.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Documents found in the input directory
    pub documents_found: usize,

    /// Documents written to the report
    pub processed: usize,

    /// Documents whose text could not be extracted (written with sentinels)
    pub extraction_failures: Vec<String>,

    /// Documents per category
    pub categories: BTreeMap<SkillCategory, usize>,

    /// Report location; `None` when no document was found
    pub output_path: Option<PathBuf>,

    /// Wall time of the run in milliseconds
    pub elapsed_ms: u64,
}

impl BatchReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a processed document
    pub fn record_processed(&mut self, category: SkillCategory) {
        self.processed += 1;
        *self.categories.entry(category).or_insert(0) += 1;
    }

    /// Record a document whose text could not be extracted
    pub fn record_extraction_failure(&mut self, file_name: impl Into<String>) {
        self.extraction_failures.push(file_name.into());
    }

    /// Whether the input held no documents
    pub fn is_empty(&self) -> bool {
        self.documents_found == 0
    }

    /// Documents in `category`
    pub fn count(&self, category: SkillCategory) -> usize {
        self.categories.get(&category).copied().unwrap_or(0)
    }

    /// Documents that matched a rule
    pub fn classified(&self) -> usize {
        self.processed - self.count(SkillCategory::Unclassified)
    }

    /// Generate a summary of the run
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Batch Summary".to_string(),
            "=============".to_string(),
            format!("Documents found: {}", self.documents_found),
            format!("Processed: {}", self.processed),
            format!("Classified: {}", self.classified()),
            format!("Unreadable: {}", self.extraction_failures.len()),
            format!("Elapsed: {}ms", self.elapsed_ms),
        ];

        if !self.categories.is_empty() {
            lines.push(String::new());
            lines.push("By category:".to_string());
            for (category, count) in &self.categories {
                lines.push(format!("  {}: {}", category, count));
            }
        }

        if !self.extraction_failures.is_empty() {
            lines.push(String::new());
            lines.push("Unreadable documents:".to_string());
            for name in &self.extraction_failures {
                lines.push(format!("  {}", name));
            }
        }

        lines.join("\n")
    }
}
