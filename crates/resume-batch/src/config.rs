//! Configuration for batch runs
//!
//! Input and output locations are passed in explicitly so a run can be
//! pointed at any directory, including a temporary one in tests.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a batch run
///
/// # Examples
///
/// ```
/// use resume_batch::BatchConfig;
///
/// let config = BatchConfig::new("/data/resumes", "/data/out/ResumeData.csv");
/// assert_eq!(config.extension, "pdf");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Directory scanned for documents (not recursive)
    pub input_dir: PathBuf,

    /// CSV report path
    pub output_path: PathBuf,

    /// Document extension, compared case-insensitively
    /// Default: "pdf"
    pub extension: String,

    /// Create the report's parent directory when missing
    /// Default: true
    pub create_output_dir: bool,
}

fn default_extension() -> String {
    "pdf".to_string()
}

fn default_create_output_dir() -> bool {
    true
}

impl BatchConfig {
    /// Configuration for the given locations with default options
    pub fn new(input_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            extension: default_extension(),
            create_output_dir: default_create_output_dir(),
        }
    }

    /// Set the document extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Extension without a leading dot, lower-cased
    pub fn normalized_extension(&self) -> String {
        normalize_extension(&self.extension)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.input_dir.as_os_str().is_empty() {
            return Err("input_dir must not be empty".to_string());
        }
        if self.output_path.as_os_str().is_empty() {
            return Err("output_path must not be empty".to_string());
        }
        if self.output_path.file_name().is_none() {
            return Err(format!(
                "output_path {} does not name a file",
                self.output_path.display()
            ));
        }
        if self.normalized_extension().is_empty() {
            return Err("extension must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

/// Strip surrounding whitespace and a leading dot, then lower-case
pub(crate) fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_lowercase()
}

impl Default for BatchConfig {
    /// `./resumes` in, `./resumes/output/ResumeData.csv` out
    fn default() -> Self {
        Self::new("resumes", Path::new("resumes").join("output").join("ResumeData.csv"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.normalized_extension(), "pdf");
        assert!(config.create_output_dir);
    }

    #[test]
    fn test_extension_leading_dot() {
        let config = BatchConfig::default().with_extension(" .TXT ");
        assert_eq!(config.normalized_extension(), "txt");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = BatchConfig::from_toml("extension = \"txt\"").unwrap();
        let defaults = BatchConfig::default();
        assert_eq!(config.extension, "txt");
        assert_eq!(config.input_dir, defaults.input_dir);
        assert_eq!(config.output_path, defaults.output_path);
        assert!(config.create_output_dir);
    }

    #[test]
    fn test_invalid_configs() {
        let config = BatchConfig::new("", "out.csv");
        assert!(config.validate().is_err());

        let config = BatchConfig::new("in", "");
        assert!(config.validate().is_err());

        let config = BatchConfig::new("in", "out.csv").with_extension(" . ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_defaults() {
        let config = BatchConfig::from_toml(
            r#"
            input_dir = "/srv/resumes"
            output_path = "/srv/report.csv"
            "#,
        )
        .unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/srv/resumes"));
        assert_eq!(config.extension, "pdf");
        assert!(config.create_output_dir);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = BatchConfig::new("a", "b/c.csv").with_extension("txt");
        let toml_str = config.to_toml().unwrap();
        let parsed = BatchConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
