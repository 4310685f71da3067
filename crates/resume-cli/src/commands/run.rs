//! Run command implementation.

use crate::cli::RunArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use resume_batch::{BatchConfig, BatchReport, BatchRunner, FormatExtractor};
use resume_extractor::ResumeExtractor;

/// Execute the run command.
pub fn execute_run(args: RunArgs, config: &Config, formatter: &Formatter) -> Result<BatchReport> {
    let batch = batch_config(args, &config.batch);
    let extractor = ResumeExtractor::new(config.extractor.clone())?;
    let runner = BatchRunner::new(extractor, FormatExtractor::for_extension(&batch.extension));

    let report = runner.run(&batch, |progress| {
        if let Some(line) = formatter.progress(progress) {
            println!("{}", line);
        }
    })?;

    if report.is_empty() && formatter.format() != OutputFormat::Json {
        println!(
            "{}",
            formatter.info(&format!("No documents found in {}", batch.input_dir.display()))
        );
    } else {
        println!("{}", formatter.format_report(&report)?);
    }

    Ok(report)
}

/// Apply command-line overrides to the configured batch.
fn batch_config(args: RunArgs, base: &BatchConfig) -> BatchConfig {
    let mut batch = base.clone();
    if let Some(input) = args.input {
        batch.input_dir = input;
    }
    if let Some(output) = args.output {
        batch.output_path = output;
    }
    if let Some(extension) = args.extension {
        batch.extension = extension;
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let base = BatchConfig::new("resumes", "resumes/output/ResumeData.csv");
        let args = RunArgs {
            input: Some(PathBuf::from("/srv/cvs")),
            output: None,
            extension: Some("txt".to_string()),
        };

        let batch = batch_config(args, &base);
        assert_eq!(batch.input_dir, PathBuf::from("/srv/cvs"));
        assert_eq!(batch.output_path, base.output_path);
        assert_eq!(batch.extension, "txt");
    }

    #[test]
    fn test_run_writes_report() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("a.txt"), "Name: Asha Rao\nSkills: selenium").unwrap();

        let output = dir.path().join("out").join("ResumeData.csv");
        let args = RunArgs {
            input: Some(input),
            output: Some(output.clone()),
            extension: Some("txt".to_string()),
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let report = execute_run(args, &Config::default(), &formatter).unwrap();
        assert_eq!(report.processed, 1);

        let csv = fs::read_to_string(&output).unwrap();
        assert!(csv.contains("a.txt,Asha Rao,Unknown,Unknown,QA"));
    }

    #[test]
    fn test_run_on_empty_directory_succeeds() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("ResumeData.csv");
        let args = RunArgs {
            input: Some(dir.path().to_path_buf()),
            output: Some(output.clone()),
            extension: None,
        };
        let formatter = Formatter::new(OutputFormat::Table, false);

        let report = execute_run(args, &Config::default(), &formatter).unwrap();
        assert!(report.is_empty());
        assert!(!output.exists());
    }
}
