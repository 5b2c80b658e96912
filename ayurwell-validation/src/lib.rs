//! Field validation for the AyurWellness registration form.
//!
//! Each of the five form fields has an ordered rule list. Validation is a
//! pure function of the field and its current text: errors are returned as
//! data and collected into [`FormErrors`], never raised.
//!
//! # Examples
//!
//! ## Validating one field
//!
//! ```
//! use ayurwell_validation::{Field, validate_field};
//!
//! assert_eq!(validate_field(Field::Age, "0"), "Please enter a valid age (1-120)");
//! assert!(validate_field(Field::Age, "45").is_empty());
//! ```
//!
//! ## Validating the whole form
//!
//! ```
//! use ayurwell_validation::{Field, FieldValidator, PasswordPolicy};
//!
//! let validator = FieldValidator::new(PasswordPolicy::Strict);
//! let errors = validator.validate_all([
//!     (Field::Name, "Al"),
//!     (Field::Email, "a@b.com"),
//!     (Field::Password, "abcdef"),
//!     (Field::Age, "30"),
//!     (Field::Gender, "male"),
//! ]);
//!
//! assert_eq!(errors.invalid_fields(), vec![Field::Password]);
//! ```
//!
//! ## Custom rule lists
//!
//! ```
//! use ayurwell_validation::{Field, MinLength, ValidationRules};
//!
//! let rules = ValidationRules::for_field(Field::Name)
//!     .add(|value, field| MinLength(3).validate(value, field));
//!
//! assert!(rules.validate("Ravi").is_ok());
//! assert!(rules.validate("Al").is_err());
//! ```

mod errors;
mod field_validator;
mod fields;
mod rules;
mod validators;

pub use errors::*;
pub use field_validator::*;
pub use fields::*;
pub use rules::*;
pub use validators::*;
