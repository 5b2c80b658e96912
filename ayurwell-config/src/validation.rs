// Configuration validation

use crate::{ConfigError, Result};

/// Implemented by settings structs that check themselves after loading
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Reusable checks for configuration values
pub struct ConfigValidator;

impl ConfigValidator {
    /// Value must not be empty or whitespace
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    /// Value must lie within `min..=max`
    pub fn in_range<T>(value: T, min: T, max: T, field: &str) -> Result<()>
    where
        T: PartialOrd + std::fmt::Display,
    {
        if value < min || value > max {
            return Err(ConfigError::ValidationError(format!(
                "{} must be between {} and {} (got {})",
                field, min, max, value
            )));
        }
        Ok(())
    }

    /// Value must be one of `allowed`
    pub fn one_of<T: PartialEq>(value: &T, allowed: &[T], field: &str) -> Result<()> {
        if !allowed.contains(value) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be one of the allowed values",
                field
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty_validation() {
        assert!(ConfigValidator::not_empty("AyurWellness", "app_name").is_ok());
        assert!(ConfigValidator::not_empty("", "app_name").is_err());
        assert!(ConfigValidator::not_empty("   ", "app_name").is_err());
    }

    #[test]
    fn test_range_validation() {
        assert!(ConfigValidator::in_range(2000, 0, 60_000, "submit_delay_ms").is_ok());
        assert!(ConfigValidator::in_range(0, 0, 60_000, "submit_delay_ms").is_ok());

        let err = ConfigValidator::in_range(60_001, 0, 60_000, "submit_delay_ms").unwrap_err();
        assert!(err.to_string().contains("submit_delay_ms"));
    }

    #[test]
    fn test_one_of() {
        assert!(ConfigValidator::one_of(&"strict", &["basic", "strict"], "password_policy").is_ok());
        assert!(ConfigValidator::one_of(&"lax", &["basic", "strict"], "password_policy").is_err());
    }
}
