// Registration form field rules

use crate::validators::{HasMixedCase, IntInRange, IsEmail, MinLength, OneOf, Selected};
use crate::{Field, FormErrors, Gender, InvalidOption, ValidationError, ValidationRules};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shortest accepted name.
pub const NAME_MIN_LENGTH: usize = 2;

/// Shortest accepted password.
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Youngest accepted age.
pub const AGE_MIN: i64 = 1;

/// Oldest accepted age.
pub const AGE_MAX: i64 = 120;

/// How much the password rule demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordPolicy {
    /// Length only
    Basic,
    /// Length plus at least one lowercase and one uppercase letter
    #[default]
    Strict,
}

impl PasswordPolicy {
    /// Accepted setting values.
    pub const OPTIONS: [&'static str; 2] = ["basic", "strict"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordPolicy::Basic => "basic",
            PasswordPolicy::Strict => "strict",
        }
    }
}

impl fmt::Display for PasswordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasswordPolicy {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(PasswordPolicy::Basic),
            "strict" => Ok(PasswordPolicy::Strict),
            _ => Err(InvalidOption {
                kind: "password policy",
                value: s.to_string(),
                expected: &PasswordPolicy::OPTIONS,
            }),
        }
    }
}

/// Maps a (field, value) pair to its first failing rule.
///
/// Holds no state besides the rule lists built at construction, so the same
/// input always produces the same answer.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    policy: PasswordPolicy,
    rules: [ValidationRules; 5],
}

impl FieldValidator {
    pub fn new(policy: PasswordPolicy) -> Self {
        let mut password = ValidationRules::for_field(Field::Password)
            .add(|value, field| MinLength(PASSWORD_MIN_LENGTH).validate(value, field));
        if policy == PasswordPolicy::Strict {
            password = password.add(HasMixedCase::validate);
        }

        Self {
            policy,
            rules: [
                ValidationRules::for_field(Field::Name)
                    .add(|value, field| MinLength(NAME_MIN_LENGTH).validate(value, field)),
                ValidationRules::for_field(Field::Email).add(IsEmail::validate),
                password,
                ValidationRules::for_field(Field::Age).add(|value, field| {
                    IntInRange {
                        min: AGE_MIN,
                        max: AGE_MAX,
                    }
                    .validate(value, field)
                }),
                ValidationRules::for_field(Field::Gender)
                    .add(Selected::validate)
                    .add(|value, field| OneOf(&Gender::OPTIONS).validate(value, field)),
            ],
        }
    }

    pub fn policy(&self) -> PasswordPolicy {
        self.policy
    }

    fn rules_for(&self, field: Field) -> &ValidationRules {
        // `Field::ALL` order matches the array built in `new`.
        &self.rules[field as usize]
    }

    /// Validate one field, reporting only its first failing rule.
    pub fn check(&self, field: Field, value: &str) -> Result<(), ValidationError> {
        match self.rules_for(field).first_error(value) {
            None => Ok(()),
            Some(error) if field == Field::Password => Err(error.without_value()),
            Some(error) => Err(error),
        }
    }

    /// Error message for one field, empty when valid.
    pub fn message(&self, field: Field, value: &str) -> String {
        self.check(field, value)
            .err()
            .map(|error| error.message)
            .unwrap_or_default()
    }

    /// Validate every given field. The result has one entry per field.
    pub fn validate_all<'a, I>(&self, values: I) -> FormErrors
    where
        I: IntoIterator<Item = (Field, &'a str)>,
    {
        let mut errors = FormErrors::new();
        for (field, value) in values {
            errors.record(field, self.check(field, value));
        }
        errors
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new(PasswordPolicy::default())
    }
}

/// Validate one field with the default (strict) rules.
///
/// Returns the error message, or an empty string when the value is valid.
pub fn validate_field(field: Field, value: &str) -> String {
    FieldValidator::default().message(field, value)
}
