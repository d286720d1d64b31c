//! Secure credential storage using the system keyring
//!
//! The completion API key lives in the system keyring (macOS Keychain,
//! Linux Secret Service). `OPENAI_API_KEY` overrides it, which is what CI
//! and one-off runs use.

use keyring::Entry;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{PrDraftError, Result};

const SERVICE_NAME: &str = "prdraft";
const API_KEY_NAME: &str = "openai_api_key";

/// Environment variable checked before the keyring
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Where a resolved API key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Environment,
    Keyring,
}

impl KeySource {
    pub fn describe(&self) -> &'static str {
        match self {
            KeySource::Environment => API_KEY_ENV,
            KeySource::Keyring => "system keyring",
        }
    }
}

/// Credential store for the completion API key
pub struct CredentialStore;

impl CredentialStore {
    fn entry() -> Result<Entry> {
        Ok(Entry::new(SERVICE_NAME, API_KEY_NAME)?)
    }

    /// Store the API key in the keyring
    pub fn store_api_key(key: &str) -> Result<()> {
        if key.trim().is_empty() {
            return Err(PrDraftError::InvalidInput("API key cannot be empty".to_string()));
        }
        Self::entry()?.set_password(key)?;
        Ok(())
    }

    /// Resolve the API key and its source; environment wins over keyring
    pub fn lookup_api_key() -> Result<Option<(SecretString, KeySource)>> {
        if let Some(key) = key_from_env(std::env::var(API_KEY_ENV).ok()) {
            return Ok(Some((key, KeySource::Environment)));
        }

        match Self::entry()?.get_password() {
            Ok(password) => Ok(Some((SecretString::from(password), KeySource::Keyring))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(PrDraftError::Credential(format!(
                "Cannot access system keychain. Make sure your keyring is unlocked. ({})",
                e
            ))),
        }
    }

    /// Remove the key from the keyring; a missing entry is not an error
    pub fn delete_api_key() -> Result<()> {
        match Self::entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(PrDraftError::Credential(e.to_string())),
        }
    }

    /// Get the API key, returning an error if not configured
    pub fn require_api_key() -> Result<SecretString> {
        Self::lookup_api_key()?
            .map(|(key, _)| key)
            .ok_or(PrDraftError::MissingApiKey)
    }

    /// Get a masked version of a key for display (shows first 4 and last 4 chars)
    pub fn mask_token(token: &SecretString) -> String {
        let chars: Vec<char> = token.expose_secret().chars().collect();
        if chars.len() <= 8 {
            "*".repeat(chars.len())
        } else {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{}...{}", head, tail)
        }
    }
}

/// A set but blank variable counts as unset
fn key_from_env(value: Option<String>) -> Option<SecretString> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(SecretString::from)
}
