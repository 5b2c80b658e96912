// AyurWellness - registration workflow for a wellness web app
//
// Field validation, the registration form state machine, navigation state,
// configuration and logging, re-exported from the workspace crates.

// Re-export core functionality
pub use ayurwell_register::*;
pub use ayurwell_validation::{
    AGE_MAX, AGE_MIN, Field, FieldValidator, FormErrors, Gender, NAME_MIN_LENGTH,
    PASSWORD_MIN_LENGTH, PasswordPolicy, ValidationError, ValidationRules, validate_field,
};

pub use ayurwell_log as log;
pub use ayurwell_validation as validation;

// Re-export optional crates
#[cfg(feature = "config")]
pub use ayurwell_config;

#[cfg(feature = "navigation")]
pub use ayurwell_navigation;

#[cfg(feature = "testing")]
pub use ayurwell_testing;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Field, FieldStatus, FormController, FormData, FormErrors, FormPhase, LogNotifier,
        Notification, Notifier, PasswordPolicy, RegisterError, SimulatedBackend,
        SubmissionBackend, SubmissionError, SubmitOutcome, ValidatedRegistration,
    };

    #[cfg(feature = "config")]
    pub use ayurwell_config::RegistrationSettings;

    #[cfg(feature = "navigation")]
    pub use ayurwell_navigation::{MemoryRouter, NAV_LINKS, Navigation, Router};

    pub use async_trait::async_trait;
    pub use std::sync::Arc;
}
