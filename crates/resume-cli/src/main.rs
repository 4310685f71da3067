//! Resume classifier - batch field extraction and skill classification for resumes.

use clap::Parser;
use resume_cli::cli::CliFormat;
use resume_cli::commands;
use resume_cli::config::Settings;
use resume_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(cli: &Cli) {
    let filter = if cli.verbose > 0 {
        EnvFilter::new(cli.log_level())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> resume_cli::Result<()> {
    let Cli {
        format,
        no_color,
        config: config_path,
        run,
        command,
        ..
    } = cli;
    let config_path = config_path.as_deref();

    let load = || -> resume_cli::Result<(Config, Formatter)> {
        let config = Config::load(config_path)?;
        let formatter = formatter_for(format, no_color, &config.settings);
        Ok((config, formatter))
    };

    match command.unwrap_or(Command::Run(run)) {
        Command::Run(args) => {
            let (config, formatter) = load()?;
            commands::execute_run(args, &config, &formatter)?;
        }
        Command::Inspect(args) => {
            let (config, formatter) = load()?;
            commands::execute_inspect(args, &config, &formatter)?;
        }
        Command::Rules => {
            let (config, formatter) = load()?;
            commands::execute_rules(&config, &formatter)?;
        }
        // Does not read the file, so `init --force` can replace a broken one
        Command::Config(args) => {
            let formatter = formatter_for(format, no_color, &Settings::default());
            commands::execute_config(args, config_path, &formatter)?;
        }
    }

    Ok(())
}

/// Flags win over the configured settings.
fn formatter_for(format: Option<CliFormat>, no_color: bool, settings: &Settings) -> Formatter {
    let format = format.map(Into::into).unwrap_or(settings.format);
    Formatter::new(format, !no_color && settings.color)
}
