// Built-in validators

use crate::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;

// One `@`, no whitespace, and a dot somewhere after the `@`.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static LOWERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]").expect("lowercase pattern is valid"));

static UPPERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern is valid"));

/// Validates minimum length, counted in characters.
pub struct MinLength(pub usize);

impl MinLength {
    pub fn validate(&self, value: &str, field: Field) -> Result<(), ValidationError> {
        if value.chars().count() < self.0 {
            Err(ValidationError::new(
                field,
                format!("{} must be at least {} characters", field.label(), self.0),
            )
            .with_constraint("minLength")
            .with_value(value))
        } else {
            Ok(())
        }
    }
}

/// Validates `local@domain.tld` shaped addresses.
pub struct IsEmail;

impl IsEmail {
    pub fn validate(value: &str, field: Field) -> Result<(), ValidationError> {
        if EMAIL_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(
                ValidationError::new(field, format!("Please enter a valid {} address", field))
                    .with_constraint("isEmail")
                    .with_value(value),
            )
        }
    }
}

/// Requires at least one lowercase and one uppercase ASCII letter.
pub struct HasMixedCase;

impl HasMixedCase {
    pub fn validate(value: &str, field: Field) -> Result<(), ValidationError> {
        if LOWERCASE_REGEX.is_match(value) && UPPERCASE_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::new(
                field,
                format!(
                    "{} must contain uppercase and lowercase letters",
                    field.label()
                ),
            )
            .with_constraint("hasMixedCase"))
        }
    }
}

/// Validates that text parses to a whole number within `min..=max`.
///
/// Surrounding whitespace is ignored; anything else that is not an integer
/// (empty input, `"abc"`, `"12.5"`) fails the same way an out-of-range
/// number does.
pub struct IntInRange {
    pub min: i64,
    pub max: i64,
}

impl IntInRange {
    pub fn validate(&self, value: &str, field: Field) -> Result<(), ValidationError> {
        let in_range = value
            .trim()
            .parse::<i64>()
            .is_ok_and(|n| (self.min..=self.max).contains(&n));

        if in_range {
            Ok(())
        } else {
            Err(ValidationError::new(
                field,
                format!("Please enter a valid {} ({}-{})", field, self.min, self.max),
            )
            .with_constraint("intInRange")
            .with_value(value))
        }
    }
}

/// Validates that a select input has a choice.
pub struct Selected;

impl Selected {
    pub fn validate(value: &str, field: Field) -> Result<(), ValidationError> {
        if value.is_empty() {
            Err(
                ValidationError::new(field, format!("Please select your {}", field))
                    .with_constraint("selected"),
            )
        } else {
            Ok(())
        }
    }
}

/// Validates membership in a fixed set of options.
pub struct OneOf(pub &'static [&'static str]);

impl OneOf {
    pub fn validate(&self, value: &str, field: Field) -> Result<(), ValidationError> {
        if self.0.contains(&value) {
            Ok(())
        } else {
            Err(
                ValidationError::new(field, format!("Please select a valid {} option", field))
                    .with_constraint("oneOf")
                    .with_value(value),
            )
        }
    }
}
