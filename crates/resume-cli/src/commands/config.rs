//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Execute the config command.
///
/// `path` is the `--config` flag, if given.
pub fn execute_config(
    args: ConfigArgs,
    path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let config = Config::load(path)?;
            match formatter.format() {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
                _ => print!("{}", config.to_toml()?),
            }
        }
        ConfigAction::Init { force } => {
            let target = init_config(path, force)?;
            println!(
                "{}",
                formatter.success(&format!("Configuration written to {}", target.display()))
            );
        }
    }

    Ok(())
}

/// Write the default configuration, refusing to overwrite unless `force`.
fn init_config(path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => Config::default_path()?,
    };

    if target.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            target.display()
        )));
    }

    Config::default().save(&target)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let written = init_config(Some(path.as_path()), false).unwrap();
        assert_eq!(written, path);
        assert_eq!(Config::load(Some(path.as_path())).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\ncolor = false\n").unwrap();

        assert!(matches!(
            init_config(Some(path.as_path()), false),
            Err(CliError::InvalidInput(_))
        ));
        assert!(fs::read_to_string(&path).unwrap().contains("color = false"));

        init_config(Some(path.as_path()), true).unwrap();
        assert!(Config::load(Some(path.as_path())).unwrap().settings.color);
    }
}
