//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Resume classifier - Extract fields from resumes and sort them by skill set.
#[derive(Debug, Parser)]
#[command(name = "resume-classifier")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Run arguments used when no subcommand is given
    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Log filter directive implied by `-v`
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (file names and categories only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify every resume in a directory into a CSV report (default)
    Run(RunArgs),

    /// Show the record and matching rules for a single resume
    Inspect(InspectArgs),

    /// List the classification rules in priority order
    Rules,

    /// Show or initialize the configuration file
    Config(ConfigArgs),
}

/// Arguments for the run command.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Directory containing the resumes
    #[arg(short, long, env = "RESUME_INPUT_DIR")]
    pub input: Option<PathBuf>,

    /// CSV report path
    #[arg(short, long, env = "RESUME_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Document extension (pdf reads PDFs, anything else plain text)
    #[arg(short, long, env = "RESUME_EXTENSION")]
    pub extension: Option<String>,
}

/// Arguments for the inspect command.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Resume to inspect
    pub file: PathBuf,
}

/// Arguments for configuration management.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
