// Error types for the registration form

use crate::SubmissionError;
use ayurwell_config::ConfigError;
use ayurwell_validation::UnknownField;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("Submission failed: {0}")]
    Submission(#[from] SubmissionError),

    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, RegisterError>;
