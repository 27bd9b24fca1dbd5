//! Config command implementation.

use crate::cli::ConfigAction;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute a config action against the file at `path`.
pub fn execute_config(action: ConfigAction, config: &Config, path: &Path, formatter: &Formatter) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", formatter.info(&format!("Configuration file: {}", path.display())));
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save_to(path)?;
            println!("{}", formatter.success(&format!("Wrote {}", path.display())));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let formatter = Formatter::new(OutputFormat::Text, false);

        execute_config(ConfigAction::Init { force: false }, &Config::default(), &path, &formatter).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.summarizer.budget, 100);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[summarizer]\nbudget = 9\n").unwrap();
        let formatter = Formatter::new(OutputFormat::Text, false);

        let result = execute_config(ConfigAction::Init { force: false }, &Config::default(), &path, &formatter);
        assert!(matches!(result, Err(CliError::Config(_))));

        execute_config(ConfigAction::Init { force: true }, &Config::default(), &path, &formatter).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().summarizer.budget, 100);
    }
}
