//! Configuration for AyurWellness.
//!
//! Values are gathered into a [`ConfigManager`] from files (JSON, TOML or
//! `.env` syntax), a `.env` file and the process environment, then read out
//! as typed settings such as [`RegistrationSettings`].
//!
//! ```
//! use ayurwell_config::{ConfigManager, RegistrationSettings};
//!
//! let manager = ConfigManager::new();
//! manager.set("submit_delay_ms", "1500").unwrap();
//!
//! let settings = RegistrationSettings::from_manager(&manager).unwrap();
//! assert_eq!(settings.submit_delay_ms, 1500);
//! ```

pub mod env;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use settings::{ENV_PREFIX, MAX_SUBMIT_DELAY_MS, RegistrationSettings};
pub use validation::{ConfigValidator, Validate};

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Shared key/value configuration store.
///
/// Later loads overwrite earlier ones, so load sources from lowest to
/// highest precedence.
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: Arc<RwLock<HashMap<String, serde_json::Value>>>,
    env_prefix: Option<String>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only environment variables starting with `{prefix}_` are loaded
    pub fn with_prefix(prefix: String) -> Self {
        Self {
            config: Arc::default(),
            env_prefix: Some(prefix),
        }
    }

    /// Load configuration from environment variables
    pub fn load_env(&self) -> Result<()> {
        let env_vars = EnvLoader::new(self.env_prefix.clone()).load()?;

        let mut config = self.config.write();
        for (key, value) in env_vars {
            config.insert(key, serde_json::Value::String(value));
        }

        Ok(())
    }

    /// Load a `.env` file into the process environment, then the environment.
    ///
    /// Without a path a missing `.env` in the working directory is ignored.
    pub fn load_dotenv(&self, path: Option<&str>) -> Result<()> {
        if let Some(path) = path {
            dotenvy::from_path(path)?;
        } else {
            dotenvy::dotenv().ok();
        }
        self.load_env()
    }

    /// Load configuration from a file in the given format
    pub fn load_file(&self, path: impl AsRef<Path>, format: FileFormat) -> Result<()> {
        let data = ConfigLoader::new(format).load_file(path)?;
        self.extend_with(data);
        Ok(())
    }

    /// Load configuration from a file, picking the format from its extension
    pub fn load_file_auto(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = ConfigLoader::auto(path)?.load_file(path)?;
        self.extend_with(data);
        Ok(())
    }

    fn extend_with(&self, data: serde_json::Value) {
        if let serde_json::Value::Object(map) = data {
            self.config.write().extend(map);
        }
    }

    /// Set a configuration value
    pub fn set<T: serde::Serialize>(&self, key: &str, value: T) -> Result<()> {
        let json_value = serde_json::to_value(value)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;

        self.config.write().insert(key.to_string(), json_value);
        Ok(())
    }

    /// Get a configuration value
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let config = self.config.read();

        let value = config
            .get(key)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;

        serde_json::from_value(value.clone()).map_err(|e| ConfigError::invalid_value(key, e))
    }

    /// Get a configuration value with default
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Get a string value
    pub fn get_string(&self, key: &str) -> Result<String> {
        self.get(key)
    }

    /// Get a value that may have been stored as text.
    ///
    /// Strings are parsed with `FromStr`; other JSON values are deserialized.
    /// Returns `Ok(None)` when the key is absent.
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned + FromStr,
        T::Err: Display,
    {
        let config = self.config.read();

        match config.get(key) {
            None => Ok(None),
            Some(serde_json::Value::String(raw)) => raw
                .parse()
                .map(Some)
                .map_err(|e| ConfigError::invalid_value(key, e)),
            Some(other) => serde_json::from_value(other.clone())
                .map(Some)
                .map_err(|e| ConfigError::invalid_value(key, e)),
        }
    }

    /// Check if a key exists
    pub fn has(&self, key: &str) -> bool {
        self.config.read().contains_key(key)
    }

    /// Get all configuration keys
    pub fn keys(&self) -> Vec<String> {
        self.config.read().keys().cloned().collect()
    }

    /// Copy every value from `other`, overwriting existing keys
    pub fn merge(&self, other: &ConfigManager) -> Result<()> {
        if Arc::ptr_eq(&self.config, &other.config) {
            return Ok(());
        }

        let other_config = other.config.read();
        let mut config = self.config.write();

        for (key, value) in other_config.iter() {
            config.insert(key.clone(), value.clone());
        }

        Ok(())
    }

    /// Deserialize the whole store into `T` and validate it.
    ///
    /// Values must already have their target types, so this suits file
    /// sources. Use [`RegistrationSettings::from_manager`] for env strings.
    pub fn load_validated<T: DeserializeOwned + Validate>(&self) -> Result<T> {
        let json_value = {
            let config = self.config.read();
            serde_json::Value::Object(
                config.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            )
        };

        let validated: T = serde_json::from_value(json_value)
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;

        validated.validate()?;

        Ok(validated)
    }
}
