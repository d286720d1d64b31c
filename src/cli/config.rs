//! Configuration CLI command handlers

use crate::cli::commands::{ConfigCommand, ConfigKey};
use crate::core::config::{Config, DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::core::credentials::{CredentialStore, API_KEY_ENV};
use crate::error::{PrDraftError, Result};

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Set { key, value } => handle_set(key, value),
        ConfigCommand::Get { key } => handle_get(key),
        ConfigCommand::Remove { key } => handle_remove(key),
        ConfigCommand::Path => {
            println!("{}", Config::config_path()?.display());
            Ok(())
        }
    }
}

/// Handle setting a configuration value
fn handle_set(key: ConfigKey, value: String) -> Result<()> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(PrDraftError::InvalidInput(
            "Configuration value cannot be empty".to_string(),
        ));
    }

    match key {
        ConfigKey::ApiKey => {
            CredentialStore::store_api_key(&value)?;
            println!("API key has been stored securely.");
            if std::env::var(API_KEY_ENV).is_ok() {
                println!("Note: {} is set and takes precedence.", API_KEY_ENV);
            }
        }
        ConfigKey::Model => {
            let mut config = Config::load()?;
            config.model = value;
            config.save()?;
            println!("Model set to: {}", config.model);
        }
        ConfigKey::Temperature => {
            let mut config = Config::load()?;
            config.set_temperature(&value)?;
            config.save()?;
            println!("Temperature set to: {}", config.temperature);
        }
        ConfigKey::ApiBase => {
            let mut config = Config::load()?;
            config.api_base = value;
            config.save()?;
            println!("API base set to: {}", config.api_base);
        }
    }
    Ok(())
}

/// Handle getting a configuration value
fn handle_get(key: ConfigKey) -> Result<()> {
    match key {
        ConfigKey::ApiKey => match CredentialStore::lookup_api_key()? {
            Some((key, source)) => println!(
                "API key: {} (from {})",
                CredentialStore::mask_token(&key),
                source.describe()
            ),
            None => println!("API key: Not configured"),
        },
        ConfigKey::Model => println!("Model: {}", Config::load()?.model),
        ConfigKey::Temperature => println!("Temperature: {}", Config::load()?.temperature),
        ConfigKey::ApiBase => println!("API base: {}", Config::load()?.api_base),
    }
    Ok(())
}

/// Handle removing a configuration value
fn handle_remove(key: ConfigKey) -> Result<()> {
    match key {
        ConfigKey::ApiKey => {
            CredentialStore::delete_api_key()?;
            println!("API key has been removed.");
        }
        ConfigKey::Model => {
            let mut config = Config::load()?;
            config.model = DEFAULT_MODEL.to_string();
            config.save()?;
            println!("Model reset to default: {}", DEFAULT_MODEL);
        }
        ConfigKey::Temperature => {
            let mut config = Config::load()?;
            config.temperature = Config::default().temperature;
            config.save()?;
            println!("Temperature reset to default: {}", config.temperature);
        }
        ConfigKey::ApiBase => {
            let mut config = Config::load()?;
            config.api_base = DEFAULT_API_BASE.to_string();
            config.save()?;
            println!("API base reset to default: {}", DEFAULT_API_BASE);
        }
    }
    Ok(())
}
