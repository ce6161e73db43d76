//! Configuration module
//!
//! Handles loading and saving of daily-tip.toml configuration files.

mod types;

pub use types::Config;

use crate::error::{Result, TipError};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the current directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "daily-tip.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        TipError::Settings(format!(
            "Cannot read config from '{}': {}. Run 'daily-tip config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve the configuration: an explicit path must exist, the default file is optional
pub fn resolve(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load(path),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load(&default_path)
            } else {
                log::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| TipError::Settings(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("daily-tip.toml");

        let config = Config::default();
        save(&config, &config_path).unwrap();

        let loaded = load(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let result = load(Path::new("/nonexistent/daily-tip.toml"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Run 'daily-tip config init'"));
    }

    #[test]
    fn test_load_invalid_format_value() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("daily-tip.toml");
        fs::write(&config_path, "format = \"pdf\"").unwrap();

        assert!(matches!(load(&config_path), Err(TipError::TomlParse(_))));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("custom.toml");
        fs::write(&config_path, "format = \"markdown\"").unwrap();

        let config = resolve(Some(&config_path)).unwrap();
        assert_eq!(config.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_resolve_missing_explicit_path_fails() {
        let result = resolve(Some(Path::new("/nonexistent/custom.toml")));
        assert!(matches!(result, Err(TipError::Settings(_))));
    }

    #[test]
    fn test_save_creates_directories() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested/dir/daily-tip.toml");

        save(&Config::default(), &config_path).unwrap();

        assert!(config_path.exists());
    }
}
