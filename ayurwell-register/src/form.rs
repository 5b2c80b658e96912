//! Form values and per-field presentation state.

use ayurwell_validation::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current text of every registration input.
///
/// All values are kept as entered; `age` stays text until validation parses
/// it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: String,
    pub gender: String,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Age => &mut self.age,
            Field::Gender => &mut self.gender,
        };
        *slot = value.into();
    }

    /// `(field, value)` pairs in form order.
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Reset every input to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when every input is empty.
    pub fn is_blank(&self) -> bool {
        self.entries().all(|(_, value)| value.is_empty())
    }
}

// Password is redacted so form snapshots can be logged safely.
impl fmt::Debug for FormData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormData")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("age", &self.age)
            .field("gender", &self.gender)
            .finish()
    }
}

/// How an input should be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    /// Empty and without an error: neutral styling
    Untouched,
    /// Has a value and passes: success styling with a short hint
    Valid(&'static str),
    /// Fails validation: error styling with the message
    Invalid(String),
}

impl FieldStatus {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldStatus::Invalid(_))
    }
}

/// Hint shown under a field once it holds a valid value.
pub fn success_hint(field: Field) -> &'static str {
    match field {
        Field::Email => "Valid email format",
        Field::Password => "Strong password",
        Field::Name | Field::Age | Field::Gender => "Looks good!",
    }
}
