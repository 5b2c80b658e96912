// Registration field identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the five registration form fields.
///
/// Ordering follows the form layout, so maps keyed by `Field` iterate in
/// the order the fields are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Password,
    Age,
    Gender,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::Age,
        Field::Gender,
    ];

    /// Input name, as submitted by the form (`"email"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::Age => "age",
            Field::Gender => "gender",
        }
    }

    /// Capitalized label used at the start of messages (`"Email"`).
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::Age => "Age",
            Field::Gender => "Gender",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no registration field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

/// Returned when a string is not one of a setting's or select's accepted values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} {value:?}, expected one of: {}", .expected.join(", "))]
pub struct InvalidOption {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Accepted values of the gender select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Select option values, in display order.
    pub const OPTIONS: [&'static str; 3] = ["male", "female", "other"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(InvalidOption {
                kind: "gender",
                value: other.to_string(),
                expected: &Gender::OPTIONS,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_round_trip_through_str() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert!("Email".parse::<Field>().is_err());
        assert!("phone".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_order_matches_form() {
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
    }

    #[test]
    fn test_gender_options_parse() {
        for option in Gender::OPTIONS {
            let gender: Gender = option.parse().unwrap();
            assert_eq!(gender.as_str(), option);
        }
        assert!("".parse::<Gender>().is_err());
        assert!("Male".parse::<Gender>().is_err());
    }

    #[test]
    fn test_bad_gender_names_the_choices() {
        let err = "robot".parse::<Gender>().unwrap_err();
        assert_eq!(err.kind, "gender");
        assert_eq!(
            err.to_string(),
            "invalid gender \"robot\", expected one of: male, female, other"
        );
    }

    #[test]
    fn test_field_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Field::Age).unwrap(), "\"age\"");
    }
}
