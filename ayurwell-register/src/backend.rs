//! The account-creation step behind a valid submit.

use crate::FormData;
use ayurwell_config::RegistrationSettings;
use ayurwell_log::debug;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Form data that passed full validation.
///
/// Only the form controller creates these, so a backend can never be handed
/// data that skipped validation.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedRegistration {
    data: FormData,
}

impl ValidatedRegistration {
    pub(crate) fn new(data: FormData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn email(&self) -> &str {
        &self.data.email
    }

    pub fn into_inner(self) -> FormData {
        self.data
    }
}

impl fmt::Debug for ValidatedRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValidatedRegistration")
            .field(&self.data)
            .finish()
    }
}

/// Why a backend did not create the account.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("registration rejected: {0}")]
    Rejected(String),

    #[error("registration service unavailable: {0}")]
    Unavailable(String),
}

/// Creates the account for a validated registration.
///
/// Called at most once per submit, and never while another call from the
/// same form is still running.
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    async fn submit(&self, registration: &ValidatedRegistration) -> Result<(), SubmissionError>;
}

/// Stand-in backend that waits a fixed delay and then succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_settings(settings: &RegistrationSettings) -> Self {
        Self::new(settings.submit_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::from_settings(&RegistrationSettings::default())
    }
}

#[async_trait]
impl SubmissionBackend for SimulatedBackend {
    async fn submit(&self, registration: &ValidatedRegistration) -> Result<(), SubmissionError> {
        debug!(
            "simulating account creation for {} ({:?})",
            registration.email(),
            self.delay
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ayurwell_validation::Field;

    fn registration() -> ValidatedRegistration {
        let mut data = FormData::new();
        data.set(Field::Name, "Al");
        data.set(Field::Email, "a@b.com");
        data.set(Field::Password, "Abcdef");
        ValidatedRegistration::new(data)
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_backend_waits_then_succeeds() {
        let backend = SimulatedBackend::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();

        assert_eq!(backend.submit(&registration()).await, Ok(()));
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[test]
    fn test_default_delay_comes_from_settings() {
        assert_eq!(SimulatedBackend::default().delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_registration_accessors_and_debug() {
        let registration = registration();
        assert_eq!(registration.name(), "Al");
        assert_eq!(registration.email(), "a@b.com");
        assert!(!format!("{:?}", registration).contains("Abcdef"));
        assert_eq!(registration.into_inner().password, "Abcdef");
    }

    #[test]
    fn test_serializes_as_plain_form() {
        let json = serde_json::to_value(registration()).unwrap();
        assert_eq!(json["name"], "Al");
        assert_eq!(json["age"], "");
    }
}
