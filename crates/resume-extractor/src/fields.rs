//! Labelled field extraction
//!
//! Each field is located by the first match of a case-insensitive label
//! followed by a delimiter and a value. Labels are not anchored to line or
//! word boundaries, so `"Company Name: Acme"` or `"the position of"` match
//! too.

use regex::Regex;

use crate::{ExtractorConfig, ExtractorError};

/// `name` label, then `:`/whitespace, then a run of letters and spaces
///
/// The whole pattern ignores case, so `name: asha rao` is a match.
pub const NAME_PATTERN: &str = r"(?i)name[:\s]+([A-Z][a-zA-Z ]+)";

/// `college`/`university`/`institute` label, then `:`/whitespace/`-`, then an
/// institution name
pub const COLLEGE_PATTERN: &str =
    r"(?i)(?:college|university|institute)[:\s\-]+([A-Za-z0-9 &.,\-]+)";

/// `role`/`designation`/`position` label, then `:`/whitespace/`-`, then a run
/// of letters and spaces
pub const ROLE_PATTERN: &str = r"(?i)(?:role|designation|position)[:\s\-]+([A-Za-z ]+)";

/// Extracts name, college and role from resume text
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    name_re: Regex,
    college_re: Regex,
    role_re: Regex,
    name_fallback_max_tokens: usize,
}

impl FieldExtractor {
    /// Compile the field patterns
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        Ok(Self {
            name_re: Regex::new(NAME_PATTERN)?,
            college_re: Regex::new(COLLEGE_PATTERN)?,
            role_re: Regex::new(ROLE_PATTERN)?,
            name_fallback_max_tokens: config.name_fallback_max_tokens,
        })
    }

    /// Candidate name
    ///
    /// Uses the first `Name:` label match. Without one, a first line of at
    /// most `name_fallback_max_tokens` tokens is taken as the name.
    pub fn extract_name(&self, text: &str) -> Option<String> {
        first_capture(&self.name_re, text)
            .or_else(|| first_line_name(text, self.name_fallback_max_tokens))
    }

    /// College, university or institute
    pub fn extract_college(&self, text: &str) -> Option<String> {
        first_capture(&self.college_re, text)
    }

    /// Role, designation or position
    pub fn extract_role(&self, text: &str) -> Option<String> {
        first_capture(&self.role_re, text)
    }
}

/// Trimmed value of the first match; a blank value counts as no value
fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn first_line_name(text: &str, max_tokens: usize) -> Option<String> {
    let first_line = text.split('\n').next().unwrap_or_default().trim();
    if first_line.is_empty() {
        return None;
    }
    if first_line.split_whitespace().count() <= max_tokens {
        Some(first_line.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FieldExtractor {
        FieldExtractor::new(&ExtractorConfig::default()).unwrap()
    }

    #[test]
    fn test_labelled_name() {
        let text = "CURRICULUM VITAE OF THE CANDIDATE\nName: Asha Rao\nEmail: asha@example.com";
        assert_eq!(extractor().extract_name(text).as_deref(), Some("Asha Rao"));
    }

    #[test]
    fn test_name_label_is_case_insensitive() {
        let text = "Summary of experience in four areas\nNAME - ignored\nFULL NAME:  Ravi Kumar  \n";
        assert_eq!(extractor().extract_name(text).as_deref(), Some("Ravi Kumar"));
    }

    #[test]
    fn test_lowercase_labelled_name() {
        let text = "Curriculum vitae of the applicant for the post\nname: asha rao\n";
        assert_eq!(extractor().extract_name(text).as_deref(), Some("asha rao"));
    }

    #[test]
    fn test_label_beats_short_first_line() {
        // Labels are unanchored, so "username" counts as a name label
        let text = "Asha Rao\nusername: admin";
        assert_eq!(extractor().extract_name(text).as_deref(), Some("admin"));
    }

    #[test]
    fn test_name_falls_back_to_short_first_line() {
        let text = "  John Ronald Reuel Tolkien  \nOxford";
        assert_eq!(
            extractor().extract_name(text).as_deref(),
            Some("John Ronald Reuel Tolkien")
        );
    }

    #[test]
    fn test_name_long_first_line_is_unknown() {
        let text = "Experienced engineer with a passion for testing\nOxford";
        assert!(extractor().extract_name(text).is_none());
    }

    #[test]
    fn test_name_empty_first_line_is_unknown() {
        assert!(extractor().extract_name("").is_none());
        assert!(extractor().extract_name("\n\nAsha Rao").is_none());
    }

    #[test]
    fn test_name_fallback_limit_is_configurable() {
        let config = ExtractorConfig {
            name_fallback_max_tokens: 2,
        };
        let extractor = FieldExtractor::new(&config).unwrap();
        assert_eq!(extractor.extract_name("Asha Rao").as_deref(), Some("Asha Rao"));
        assert!(extractor.extract_name("Asha K Rao").is_none());
    }

    #[test]
    fn test_name_fallback_handles_crlf() {
        let text = "Asha Rao\r\nBangalore";
        assert_eq!(extractor().extract_name(text).as_deref(), Some("Asha Rao"));
    }

    #[test]
    fn test_college_labels() {
        let e = extractor();
        assert_eq!(
            e.extract_college("College: St. Xavier's").as_deref(),
            Some("St. Xavier")
        );
        assert_eq!(
            e.extract_college("UNIVERSITY - Anna University, Chennai\nCGPA 8.1").as_deref(),
            Some("Anna University, Chennai")
        );
        assert_eq!(
            e.extract_college("institute: R&D Labs 2019").as_deref(),
            Some("R&D Labs 2019")
        );
    }

    #[test]
    fn test_college_first_match_wins() {
        let text = "College: First College\nUniversity: Second University";
        assert_eq!(
            extractor().extract_college(text).as_deref(),
            Some("First College")
        );
    }

    #[test]
    fn test_college_missing_label() {
        assert!(extractor().extract_college("B.Tech, 2019, CGPA 8.0").is_none());
        assert!(extractor().extract_college("").is_none());
    }

    #[test]
    fn test_college_label_inside_sentence() {
        // Unanchored labels are an accepted source of false positives
        let text = "I went to college in Pune";
        assert_eq!(
            extractor().extract_college(text).as_deref(),
            Some("in Pune")
        );
    }

    #[test]
    fn test_role_labels() {
        let e = extractor();
        assert_eq!(
            e.extract_role("Role: QA Engineer\nSkills").as_deref(),
            Some("QA Engineer")
        );
        assert_eq!(
            e.extract_role("Designation - Senior Developer 2").as_deref(),
            Some("Senior Developer")
        );
        assert_eq!(
            e.extract_role("POSITION:Team Lead").as_deref(),
            Some("Team Lead")
        );
    }

    #[test]
    fn test_role_blank_value_is_unknown() {
        assert!(extractor().extract_role("Role: 42").is_none());
        assert!(extractor().extract_role("no label here").is_none());
    }
}
