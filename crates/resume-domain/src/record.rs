//! The output record built for each document

use crate::SkillCategory;

/// Sentinel for a text field that could not be extracted
pub const UNKNOWN: &str = "Unknown";

/// Number of columns in a report row
pub const FIELD_COUNT: usize = 5;

/// One row of the report
///
/// Every field is always populated. Text fields that could not be resolved
/// hold [`UNKNOWN`]; a document that satisfied no rule is
/// [`SkillCategory::Unclassified`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeRecord {
    /// Original document identifier
    pub file_name: String,

    /// Candidate name
    pub name: String,

    /// College, university or institute
    pub college: String,

    /// Current or desired role
    pub role: String,

    /// Skill bucket
    pub skill_category: SkillCategory,
}

impl ResumeRecord {
    /// Column headers, in the order of [`ResumeRecord::fields`]
    pub const HEADER: [&'static str; FIELD_COUNT] =
        ["FileName", "Name", "College", "Role", "SkillCategory"];

    /// Build a record, substituting [`UNKNOWN`] for unresolved fields
    pub fn new(
        file_name: impl Into<String>,
        name: Option<String>,
        college: Option<String>,
        role: Option<String>,
        skill_category: SkillCategory,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            name: name.unwrap_or_else(|| UNKNOWN.to_string()),
            college: college.unwrap_or_else(|| UNKNOWN.to_string()),
            role: role.unwrap_or_else(|| UNKNOWN.to_string()),
            skill_category,
        }
    }

    /// A record with every field set to its sentinel
    pub fn unresolved(file_name: impl Into<String>) -> Self {
        Self::new(file_name, None, None, None, SkillCategory::Unclassified)
    }

    /// Field values in header order
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.file_name,
            &self.name,
            &self.college,
            &self.role,
            self.skill_category.label(),
        ]
    }

    /// Whether no field besides the file name was resolved
    pub fn is_unresolved(&self) -> bool {
        self.name == UNKNOWN
            && self.college == UNKNOWN
            && self.role == UNKNOWN
            && self.skill_category.is_unclassified()
    }
}
