// Validation errors

use crate::Field;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single failed rule for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: Field,

    /// Message shown next to the input
    pub message: String,

    /// Rule that failed (`"minLength"`, `"isEmail"`, ...)
    pub constraint: String,

    /// Offending value, when it is safe to echo back
    pub value: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            constraint: "custom".to_string(),
            value: None,
        }
    }

    /// Set the constraint name
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Set the invalid value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Drop the captured value (used for secrets).
    pub fn without_value(mut self) -> Self {
        self.value = None;
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Per-field error messages for the whole form.
///
/// A field mapped to an empty string is valid; a field with no entry has not
/// been validated yet. After [`FieldValidator::validate_all`] every field has
/// an entry.
///
/// [`FieldValidator::validate_all`]: crate::FieldValidator::validate_all
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors {
    entries: BTreeMap<Field, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the message for a field. An empty message marks it valid.
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Store the outcome of validating a field.
    pub fn record(&mut self, field: Field, outcome: Result<(), ValidationError>) {
        match outcome {
            Ok(()) => self.set(field, String::new()),
            Err(error) => self.set(field, error.message),
        }
    }

    /// The error message for a field, if it currently has one.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries
            .get(&field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    /// Whether the field currently has an error.
    pub fn has_error(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Whether the field has been validated at least once.
    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    /// Fields that have an entry, valid or not.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.keys().copied()
    }

    /// Fields that currently have an error, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        self.entries
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, _)| *field)
            .collect()
    }

    /// Number of fields with an error.
    pub fn error_count(&self) -> usize {
        self.entries.values().filter(|m| !m.is_empty()).count()
    }

    /// True when no field has an error.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// JSON object of the fields that have errors.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.entries
                .iter()
                .filter(|(_, message)| !message.is_empty())
                .map(|(field, message)| (field.as_str().to_string(), serde_json::Value::from(message.as_str())))
                .collect::<serde_json::Map<_, _>>()
        })
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in self.invalid_fields() {
            writeln!(f, "{}: {}", field, self.entries[&field])?;
        }
        Ok(())
    }
}
