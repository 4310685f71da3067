//! Rules command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use resume_extractor::ResumeExtractor;

/// Execute the rules command.
///
/// Lists the rules of the extractor a batch run would build.
pub fn execute_rules(config: &Config, formatter: &Formatter) -> Result<()> {
    let extractor = ResumeExtractor::new(config.extractor.clone())?;
    println!("{}", formatter.format_rules(extractor.classifier().rules())?);
    Ok(())
}
