//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use resume_batch::{BatchReport, DocumentProgress};
use resume_domain::{ResumeRecord, SkillCategory};
use resume_extractor::{ClassificationRule, Inspection};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Line printed as each document is written, if any.
    ///
    /// JSON output is a single document, so nothing is printed per file.
    pub fn progress(&self, progress: &DocumentProgress<'_>) -> Option<String> {
        match self.format {
            OutputFormat::Json => None,
            OutputFormat::Quiet => Some(progress.record.file_name.clone()),
            OutputFormat::Table => {
                let mut line = format!("Processed: {}", progress.record.file_name);
                if let Some(reason) = progress.text_error {
                    line.push('\n');
                    line.push_str(&self.warning(&format!(
                        "{} could not be read ({}); written as Unknown",
                        progress.record.file_name, reason
                    )));
                }
                Some(line)
            }
        }
    }

    /// Format the outcome of a batch run.
    pub fn format_report(&self, report: &BatchReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(report
                .output_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
        }
    }

    fn format_report_json(&self, report: &BatchReport) -> Result<String> {
        let categories: serde_json::Map<String, serde_json::Value> = report
            .categories
            .iter()
            .map(|(category, count)| (category.label().to_string(), (*count).into()))
            .collect();

        let json = serde_json::json!({
            "documents_found": report.documents_found,
            "processed": report.processed,
            "classified": report.classified(),
            "extraction_failures": report.extraction_failures,
            "categories": categories,
            "output_path": report.output_path.as_ref().map(|p| p.display().to_string()),
            "elapsed_ms": report.elapsed_ms,
        });

        Ok(serde_json::to_string_pretty(&json)?)
    }

    fn format_report_table(&self, report: &BatchReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Category", "Resumes"]);
        for category in SkillCategory::ALL {
            builder.push_record([
                category.label().to_string(),
                report.count(category).to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut lines = vec![
            table.to_string(),
            format!(
                "{} processed, {} classified, {} unreadable in {}ms",
                report.processed,
                report.classified(),
                report.extraction_failures.len(),
                report.elapsed_ms
            ),
        ];
        if let Some(path) = &report.output_path {
            lines.push(self.success(&format!("CSV generated at: {}", path.display())));
        }
        lines.join("\n")
    }

    /// Format a single record with its rule trail.
    pub fn format_inspection(&self, inspection: &Inspection) -> Result<String> {
        let record = &inspection.record;
        match self.format {
            OutputFormat::Json => {
                let mut json = record_json(record);
                json["matched_rules"] = inspection
                    .matched_rules
                    .iter()
                    .map(|c| c.label())
                    .collect::<Vec<_>>()
                    .into();
                json["token_count"] = inspection.token_count.into();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(format!(
                "{}\t{}",
                record.file_name, record.skill_category
            )),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                for (field, value) in ResumeRecord::HEADER.iter().zip(record.fields()) {
                    builder.push_record([*field, value]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());

                let matched = if inspection.matched_rules.is_empty() {
                    self.colorize("Matched rules: none", "yellow")
                } else {
                    let labels: Vec<_> =
                        inspection.matched_rules.iter().map(|c| c.label()).collect();
                    format!("Matched rules: {}", labels.join(", "))
                };

                Ok(format!(
                    "{}\n{}\nDistinct tokens: {}",
                    table, matched, inspection.token_count
                ))
            }
        }
    }

    /// Format the classification rules in priority order.
    pub fn format_rules(&self, rules: &[ClassificationRule]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = rules
                    .iter()
                    .enumerate()
                    .map(|(i, rule)| {
                        serde_json::json!({
                            "priority": i + 1,
                            "category": rule.label.label(),
                            "any_of": rule.any_of,
                            "all_of": rule.all_of,
                            "none_of": rule.none_of,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(rules
                .iter()
                .map(|r| r.label.label())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["#", "Category", "Condition"]);
                for (i, rule) in rules.iter().enumerate() {
                    builder.push_record([
                        (i + 1).to_string(),
                        rule.label.label().to_string(),
                        rule.describe(),
                    ]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn record_json(record: &ResumeRecord) -> serde_json::Value {
    serde_json::json!({
        "file_name": record.file_name,
        "name": record.name,
        "college": record.college,
        "role": record.role,
        "skill_category": record.skill_category.label(),
    })
}
