//! Resume Extractor
//!
//! Derives structured fields from the plain text of a resume and assigns the
//! document to a skill category.
//!
//! # Overview
//!
//! Two independent pieces run against the same text:
//!
//! - **Field extraction**: labelled patterns recover the candidate's name,
//!   college and role. Each field is a pure `text -> Option<String>` function;
//!   the name falls back to a short first line.
//! - **Skill classification**: the text is reduced to a set of lower-cased
//!   tokens and checked against an ordered list of rules. The first rule that
//!   holds decides the category.
//!
//! # Architecture
//!
//! ```text
//! Text ─┬→ FieldExtractor ──→ name / college / role ─┐
//!       └→ TokenSet → SkillClassifier → category ────┴→ ResumeRecord
//! ```
//!
//! # Example Usage
//!
//! ```
//! use resume_extractor::{ExtractorConfig, ResumeExtractor};
//! use resume_domain::SkillCategory;
//!
//! # fn example() -> Result<(), resume_extractor::ExtractorError> {
//! let extractor = ResumeExtractor::new(ExtractorConfig::default())?;
//!
//! let text = "Name: Asha Rao\nCollege: ABC Institute\nRole: QA Engineer\nSkills: selenium";
//! let record = extractor.extract("asha.pdf", text);
//!
//! assert_eq!(record.name, "Asha Rao");
//! assert_eq!(record.college, "ABC Institute");
//! assert_eq!(record.skill_category, SkillCategory::Qa);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod tokens;
mod rules;
mod fields;
mod classifier;
mod extractor;


pub use error::ExtractorError;
pub use config::ExtractorConfig;
pub use tokens::TokenSet;
pub use rules::{ClassificationRule, DEFAULT_RULES};
pub use fields::{FieldExtractor, COLLEGE_PATTERN, NAME_PATTERN, ROLE_PATTERN};
pub use classifier::SkillClassifier;
pub use extractor::{Inspection, ResumeExtractor};
