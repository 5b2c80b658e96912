//! Registration form state machine.
//!
//! ```text
//! Editing --submit--> Validating --all valid--> Submitting --done--> Editing
//!                         |
//!                         +--any invalid--> Editing (errors shown)
//! ```

use crate::form::{FieldStatus, FormData, success_hint};
use crate::notify::{Notification, Notifier};
use crate::{Result, SimulatedBackend, SubmissionBackend, ValidatedRegistration};
use ayurwell_config::RegistrationSettings;
use ayurwell_log::{debug, error, info, warn};
use ayurwell_validation::{Field, FieldValidator, FormErrors};
use parking_lot::Mutex;
use std::sync::Arc;

/// Submit button text while idle.
pub const SUBMIT_LABEL: &str = "Start My Wellness Journey";

/// Submit button text while a submission is running.
pub const SUBMITTING_LABEL: &str = "Creating Your Profile...";

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Accepting input
    #[default]
    Editing,
    /// Running the full validation pass of a submit
    Validating,
    /// Waiting on the submission backend
    Submitting,
}

/// Result of a submit attempt that did not fail in the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the registration and the form was reset
    Submitted { name: String },
    /// Validation failed; the listed fields now show errors
    Rejected { invalid: Vec<Field> },
    /// Another submission was still running, nothing was done
    AlreadySubmitting,
}

#[derive(Debug, Default)]
struct FormState {
    data: FormData,
    errors: FormErrors,
    phase: FormPhase,
    password_visible: bool,
}

impl FormState {
    fn transition(&mut self, next: FormPhase) {
        debug!("form phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

/// Returns the form to `Editing` when a running submit ends.
///
/// Dropping it unsettled means the submit future was cancelled while the
/// backend call was pending.
struct InFlight<'a> {
    state: &'a Mutex<FormState>,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a Mutex<FormState>) -> Self {
        Self {
            state,
            settled: false,
        }
    }

    fn settle(mut self, apply: impl FnOnce(&mut FormState)) {
        let mut state = self.state.lock();
        apply(&mut state);
        state.transition(FormPhase::Editing);
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("submission cancelled before the backend answered");
            self.state.lock().transition(FormPhase::Editing);
        }
    }
}

/// Drives the registration form.
///
/// Cloning yields another handle to the same form, so a UI event loop and a
/// pending submit can share it. The internal lock is never held across an
/// `.await`.
#[derive(Clone)]
pub struct FormController {
    state: Arc<Mutex<FormState>>,
    validator: Arc<FieldValidator>,
    backend: Arc<dyn SubmissionBackend>,
    notifier: Arc<dyn Notifier>,
    app_name: Arc<str>,
}

impl FormController {
    /// Form with default settings and the given collaborators.
    pub fn new(backend: Arc<dyn SubmissionBackend>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_settings(&RegistrationSettings::default(), backend, notifier)
    }

    pub fn with_settings(
        settings: &RegistrationSettings,
        backend: Arc<dyn SubmissionBackend>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            state: Arc::default(),
            validator: Arc::new(FieldValidator::new(settings.password_policy)),
            backend,
            notifier,
            app_name: Arc::from(settings.app_name.as_str()),
        }
    }

    /// Form backed by [`SimulatedBackend`] using the settings' delay.
    pub fn simulated(settings: &RegistrationSettings, notifier: Arc<dyn Notifier>) -> Self {
        let backend = Arc::new(SimulatedBackend::from_settings(settings));
        Self::with_settings(settings, backend, notifier)
    }

    /// Simulated form configured from `AYURWELL_*` environment variables.
    pub fn from_env(notifier: Arc<dyn Notifier>) -> Result<Self> {
        let settings = RegistrationSettings::load(None)?;
        Ok(Self::simulated(&settings, notifier))
    }

    /// Store a new value and revalidate that field only.
    ///
    /// Returns the field's error message, if any.
    pub fn change(&self, field: Field, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        let outcome = self.validator.check(field, &value);

        let mut state = self.state.lock();
        state.data.set(field, value);
        state.errors.record(field, outcome);
        state.errors.get(field).map(str::to_string)
    }

    /// [`change`](Self::change) addressed by input name (`"email"`).
    pub fn change_named(&self, name: &str, value: impl Into<String>) -> Result<Option<String>> {
        let field: Field = name.parse()?;
        Ok(self.change(field, value))
    }

    /// Validate everything and, if valid, hand the data to the backend.
    ///
    /// Returns `Err` only when the backend fails. In that case the entered
    /// data is kept so the user can resubmit, and an error notification is
    /// sent.
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let registration = {
            let mut state = self.state.lock();
            if state.phase == FormPhase::Submitting {
                debug!("submit ignored: a registration is already in flight");
                return Ok(SubmitOutcome::AlreadySubmitting);
            }

            state.transition(FormPhase::Validating);
            let errors = self.validator.validate_all(state.data.entries());
            state.errors = errors;

            if !state.errors.is_valid() {
                let invalid = state.errors.invalid_fields();
                state.transition(FormPhase::Editing);
                info!("registration blocked, invalid fields: {:?}", invalid);
                return Ok(SubmitOutcome::Rejected { invalid });
            }

            state.transition(FormPhase::Submitting);
            ValidatedRegistration::new(state.data.clone())
        };
        let in_flight = InFlight::new(&self.state);

        let result = self.backend.submit(&registration).await;

        // Lock is released before notifying so a notifier may read the form.
        match result {
            Ok(()) => {
                in_flight.settle(|state| {
                    state.data.clear();
                    state.errors.clear();
                });

                let name = registration.into_inner().name;
                info!("registration completed");
                self.notifier
                    .notify(Notification::welcome(&self.app_name, &name));
                Ok(SubmitOutcome::Submitted { name })
            }
            Err(err) => {
                in_flight.settle(|_| {});

                error!("registration failed: {}", err);
                self.notifier
                    .notify(Notification::registration_failed(&err));
                Err(err.into())
            }
        }
    }

    /// Snapshot of the current values.
    pub fn data(&self) -> FormData {
        self.state.lock().data.clone()
    }

    pub fn value(&self, field: Field) -> String {
        self.state.lock().data.get(field).to_string()
    }

    /// Snapshot of the current errors.
    pub fn errors(&self) -> FormErrors {
        self.state.lock().errors.clone()
    }

    pub fn error(&self, field: Field) -> Option<String> {
        self.state.lock().errors.get(field).map(str::to_string)
    }

    pub fn phase(&self) -> FormPhase {
        self.state.lock().phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase() == FormPhase::Submitting
    }

    /// How a field should currently be rendered.
    pub fn field_status(&self, field: Field) -> FieldStatus {
        let state = self.state.lock();
        match state.errors.get(field) {
            Some(message) => FieldStatus::Invalid(message.to_string()),
            None if state.data.get(field).is_empty() => FieldStatus::Untouched,
            None => FieldStatus::Valid(success_hint(field)),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Flip password masking and return whether it is now shown.
    pub fn toggle_password_visibility(&self) -> bool {
        let mut state = self.state.lock();
        state.password_visible = !state.password_visible;
        state.password_visible
    }

    pub fn password_visible(&self) -> bool {
        self.state.lock().password_visible
    }

    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("state", &*self.state.lock())
            .field("policy", &self.validator.policy())
            .field("app_name", &self.app_name)
            .finish()
    }
}
