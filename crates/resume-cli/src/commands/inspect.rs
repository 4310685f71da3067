//! Inspect command implementation.

use crate::cli::InspectArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use resume_batch::FormatExtractor;
use resume_domain::{Document, TextExtractor};
use resume_extractor::{Inspection, ResumeExtractor};

/// Execute the inspect command.
pub fn execute_inspect(args: InspectArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let inspection = inspect_document(&Document::from_path(args.file), config, formatter)?;
    println!("{}", formatter.format_inspection(&inspection)?);
    Ok(())
}

/// Extract one document the way a batch would.
///
/// Unreadable text is reported on stderr and inspected as empty text.
fn inspect_document(
    document: &Document,
    config: &Config,
    formatter: &Formatter,
) -> Result<Inspection> {
    if !document.path.is_file() {
        return Err(CliError::InvalidInput(format!(
            "{} is not a file",
            document.path.display()
        )));
    }

    let extension = document.extension().unwrap_or_default();
    let text = match FormatExtractor::for_extension(&extension).extract_text(document.path()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!(
                "{}",
                formatter.warning(&format!("{} could not be read: {}", document.file_name, e))
            );
            String::new()
        }
    };

    let extractor = ResumeExtractor::new(config.extractor.clone())?;
    Ok(extractor.inspect(&document.file_name, &text))
}
