// Validation rules builder

use crate::{Field, ValidationError};
use std::sync::Arc;

type ValidatorFn = Arc<dyn Fn(&str, Field) -> Result<(), ValidationError> + Send + Sync>;

/// Ordered list of checks for one field.
#[derive(Clone)]
pub struct ValidationRules {
    validators: Vec<ValidatorFn>,
    field: Field,
}

impl ValidationRules {
    /// Start an empty rule list for a field
    pub fn for_field(field: Field) -> Self {
        Self {
            validators: Vec::new(),
            field,
        }
    }

    /// Append a check
    #[allow(clippy::should_implement_trait)]
    pub fn add<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str, Field) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.validators.push(Arc::new(validator));
        self
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// Number of checks in the list
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Run every check and collect all failures
    pub fn validate(&self, value: &str) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<_> = self
            .validators
            .iter()
            .filter_map(|validator| validator(value, self.field).err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Run checks in order and stop at the first failure
    pub fn first_error(&self, value: &str) -> Option<ValidationError> {
        self.validators
            .iter()
            .find_map(|validator| validator(value, self.field).err())
    }
}

impl std::fmt::Debug for ValidationRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationRules")
            .field("field", &self.field)
            .field("validators", &self.validators.len())
            .finish()
    }
}
