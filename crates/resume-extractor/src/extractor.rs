//! Core ResumeExtractor implementation

use resume_domain::{ResumeRecord, SkillCategory};
use tracing::debug;

use crate::{ExtractorConfig, ExtractorError, FieldExtractor, SkillClassifier, TokenSet};

/// Builds a [`ResumeRecord`] from the plain text of one document
///
/// Extraction is a pure function of the text: the same input always yields
/// the same record.
#[derive(Debug, Clone)]
pub struct ResumeExtractor {
    fields: FieldExtractor,
    classifier: SkillClassifier,
}

/// Record plus the classification trail for a single document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    /// The record as it would be written to the report
    pub record: ResumeRecord,

    /// Every rule that held, in priority order
    pub matched_rules: Vec<SkillCategory>,

    /// Number of distinct tokens in the text
    pub token_count: usize,
}

impl ResumeExtractor {
    /// Create an extractor with the built-in rules
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            fields: FieldExtractor::new(&config)?,
            classifier: SkillClassifier::default(),
        })
    }

    /// The classifier in use
    pub fn classifier(&self) -> &SkillClassifier {
        &self.classifier
    }

    /// Extract the record for a document named `file_name`
    pub fn extract(&self, file_name: &str, text: &str) -> ResumeRecord {
        let tokens = TokenSet::from_text(text);
        self.build_record(file_name, text, &tokens)
    }

    /// Extract the record and report which rules held
    pub fn inspect(&self, file_name: &str, text: &str) -> Inspection {
        let tokens = TokenSet::from_text(text);
        Inspection {
            record: self.build_record(file_name, text, &tokens),
            matched_rules: self.classifier.matching_rules(&tokens),
            token_count: tokens.len(),
        }
    }

    fn build_record(&self, file_name: &str, text: &str, tokens: &TokenSet) -> ResumeRecord {
        let record = ResumeRecord::new(
            file_name,
            self.fields.extract_name(text),
            self.fields.extract_college(text),
            self.fields.extract_role(text),
            self.classifier.classify_tokens(tokens),
        );

        debug!(
            file = file_name,
            chars = text.len(),
            tokens = tokens.len(),
            category = %record.skill_category,
            "extracted record"
        );

        record
    }
}
