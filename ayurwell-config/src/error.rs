// Configuration errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("setting `{0}` is not set")]
    KeyNotFound(String),

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot tell the format of {}; expected .json, .toml or .env", .0.display())]
    UnknownFormat(PathBuf),

    #[error("failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("malformed {format} configuration: {reason}")]
    ParseError { format: &'static str, reason: String },

    /// A setting is present but cannot become the requested type.
    #[error("setting `{key}` is invalid: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("settings do not match their schema: {0}")]
    DeserializationError(String),

    #[error("cannot store setting: {0}")]
    SerializationError(String),

    #[error("invalid settings: {0}")]
    ValidationError(String),

    #[error(transparent)]
    EnvError(#[from] std::env::VarError),
}

impl ConfigError {
    pub(crate) fn invalid_value(key: &str, reason: impl std::fmt::Display) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
