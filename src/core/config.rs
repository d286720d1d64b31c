//! Application configuration management
//!
//! Handles loading and saving application settings including:
//! - The PR template
//! - Completion model, temperature and API endpoint

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{PrDraftError, Result};

/// Overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "PRDRAFT_CONFIG_DIR";

/// Default chat completion model
pub const DEFAULT_MODEL: &str = "gpt-4-turbo";

/// Default completion API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// PR template with `{placeholder}` tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Chat completion model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature for the completion request
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Base URL of the chat completion API
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: None,
            model: default_model(),
            temperature: default_temperature(),
            api_base: default_api_base(),
        }
    }
}

impl Config {
    /// Load configuration from file, or create default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;
            Self::from_toml(&contents)
        } else {
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir).join("config.toml"));
        }

        let project_dirs = ProjectDirs::from("com", "prdraft", "prdraft")
            .ok_or_else(|| PrDraftError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// The configured template, if one is set and non-blank
    pub fn template(&self) -> Option<&str> {
        self.template
            .as_deref()
            .filter(|template| !template.trim().is_empty())
    }

    /// Get the template, returning an error if none is configured
    pub fn require_template(&self) -> Result<&str> {
        self.template().ok_or(PrDraftError::MissingTemplate)
    }

    /// Set the template; a blank template clears it
    pub fn set_template(&mut self, template: String) {
        self.template = if template.trim().is_empty() {
            None
        } else {
            Some(template)
        };
    }

    /// Set the sampling temperature (0.0 to 2.0)
    pub fn set_temperature(&mut self, value: &str) -> Result<()> {
        let temperature: f32 = value.parse().map_err(|_| {
            PrDraftError::InvalidInput(format!("Invalid temperature '{}'", value))
        })?;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(PrDraftError::InvalidInput(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                temperature
            )));
        }
        self.temperature = temperature;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model, "gpt-4-turbo");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.api_base, "https://api.openai.com/v1");
        assert!(config.template.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::from_toml("template = \"## {currentBranch}\"\n").unwrap();
        assert_eq!(config.template(), Some("## {currentBranch}"));
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_invalid_file_is_toml_error() {
        assert!(matches!(
            Config::from_toml("temperature = \"hot\""),
            Err(PrDraftError::Toml(_))
        ));
    }

    #[test]
    fn test_require_template() {
        let mut config = Config::default();
        assert!(matches!(
            config.require_template(),
            Err(PrDraftError::MissingTemplate)
        ));

        config.set_template("   ".to_string());
        assert!(config.template.is_none());

        config.set_template("{diff}".to_string());
        assert_eq!(config.require_template().unwrap(), "{diff}");
    }

    #[test]
    fn test_set_temperature() {
        let mut config = Config::default();
        config.set_temperature("0.2").unwrap();
        assert_eq!(config.temperature, 0.2);
        assert!(config.set_temperature("3").is_err());
        assert!(config.set_temperature("warm").is_err());
    }

    #[test]
    fn test_round_trip_keeps_multiline_template() {
        let mut config = Config::default();
        config.set_template("## Ticket\n{jiraTicket}\n\n## Changes\n{commitMessages}\n".to_string());
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }
}
