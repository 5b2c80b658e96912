//! Testing utilities for AyurWellness.
//!
//! - **MockBackend** - records submissions, can fail or be held open
//! - **RecordingNotifier** - captures notifications
//! - **MockRouter** - router with navigation history
//! - **Assertions** - field and form state checks
//!
//! ## Holding a submission open
//!
//! ```
//! use ayurwell_register::{FormController, SubmitOutcome};
//! use ayurwell_testing::*;
//! use ayurwell_validation::Field;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let (backend, gate) = MockBackend::gated();
//! let notifier = RecordingNotifier::new();
//! let form = FormController::new(Arc::new(backend.clone()), Arc::new(notifier.clone()));
//!
//! form.change(Field::Name, "Al");
//! form.change(Field::Email, "a@b.com");
//! form.change(Field::Password, "Abcdef");
//! form.change(Field::Age, "30");
//! form.change(Field::Gender, "male");
//!
//! let pending = tokio::spawn({
//!     let form = form.clone();
//!     async move { form.submit().await }
//! });
//! gate.wait_started().await;
//! assert!(form.is_submitting());
//!
//! gate.release();
//! assert!(matches!(pending.await.unwrap(), Ok(SubmitOutcome::Submitted { .. })));
//! assert_welcomed(&notifier, "Al");
//! # });
//! ```

mod assertions;
mod mock;

pub use assertions::*;
pub use mock::*;
