//! Registration form for AyurWellness.
//!
//! [`FormController`] keeps the five form values, revalidates a field on
//! every change, and on submit validates everything before handing the data
//! to a [`SubmissionBackend`]. Success and failure are reported through a
//! [`Notifier`]. Both collaborators are injected, so the whole flow runs
//! headless in tests.
//!
//! ## Quick Start
//!
//! ```
//! use ayurwell_register::*;
//! use ayurwell_validation::Field;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # tokio_test::block_on(async {
//! let form = FormController::new(
//!     Arc::new(SimulatedBackend::new(Duration::from_millis(10))),
//!     Arc::new(LogNotifier),
//! );
//!
//! form.change(Field::Name, "Al");
//! form.change(Field::Email, "a@b.com");
//! form.change(Field::Password, "Abcdef");
//! form.change(Field::Age, "30");
//! form.change(Field::Gender, "male");
//!
//! let outcome = form.submit().await.unwrap();
//! assert_eq!(outcome, SubmitOutcome::Submitted { name: "Al".to_string() });
//! assert!(form.data().is_blank());
//! # });
//! ```
//!
//! ## Failed Validation
//!
//! ```
//! use ayurwell_register::*;
//! use ayurwell_validation::Field;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let form = FormController::new(Arc::new(SimulatedBackend::default()), Arc::new(LogNotifier));
//! form.change(Field::Age, "0");
//!
//! match form.submit().await.unwrap() {
//!     SubmitOutcome::Rejected { invalid } => assert!(invalid.contains(&Field::Age)),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! assert!(!form.is_submitting());
//! # });
//! ```

mod backend;
mod controller;
mod error;
mod form;
mod notify;

pub use backend::{SimulatedBackend, SubmissionBackend, SubmissionError, ValidatedRegistration};
pub use controller::{FormController, FormPhase, SUBMIT_LABEL, SUBMITTING_LABEL, SubmitOutcome};
pub use error::{RegisterError, Result};
pub use form::{FieldStatus, FormData, success_hint};
pub use notify::{LogNotifier, Notification, NotificationKind, Notifier};
