//! Configuration for planheader

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How `render` and `check` print their results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Currency used when a props file does not name one
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Default output format
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_currency_code() -> String {
    crate::DEFAULT_CURRENCY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_code: default_currency_code(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(config_path)
                .context(format!("Failed to load config from {}", config_path.display()));
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("planheader").join("config.yml")),
            Some(PathBuf::from("planheader.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                return Self::load_from_file(path);
            }
        }

        Ok(Config::default())
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("output_format: json\n").unwrap();
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        let config = Config {
            currency_code: "EUR".to_string(),
            output_format: OutputFormat::Json,
        };
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.currency_code, "EUR");
        assert_eq!(loaded.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");
        assert!(Config::load(Some(&path)).is_err());
    }
}
