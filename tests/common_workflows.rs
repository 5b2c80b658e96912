//! Integration tests for the common registration workflows.
//!
//! These drive the form the way a user would: typing into fields,
//! submitting, double-clicking, and waiting on the backend.

use ayurwell::prelude::*;
use ayurwell::{FieldValidator, validate_field};
use ayurwell_testing::*;

fn form_with(backend: &MockBackend, notifier: &RecordingNotifier) -> FormController {
    FormController::new(Arc::new(backend.clone()), Arc::new(notifier.clone()))
}

fn fill(form: &FormController, name: &str, email: &str, password: &str, age: &str, gender: &str) {
    form.change(Field::Name, name);
    form.change(Field::Email, email);
    form.change(Field::Password, password);
    form.change(Field::Age, age);
    form.change(Field::Gender, gender);
}

// =============================================================================
// Field rules
// =============================================================================

#[test]
fn test_name_length_rule() {
    for short in ["", "x"] {
        assert!(!validate_field(Field::Name, short).is_empty());
    }
    for ok in ["Al", "Priya", "李雷"] {
        assert!(validate_field(Field::Name, ok).is_empty());
    }
}

#[test]
fn test_age_examples() {
    for bad in ["0", "121", "", "abc"] {
        assert!(!validate_field(Field::Age, bad).is_empty(), "{bad:?}");
    }
    for good in ["1", "120", "45"] {
        assert!(validate_field(Field::Age, good).is_empty(), "{good:?}");
    }
}

#[test]
fn test_same_input_same_answer() {
    let validator = FieldValidator::default();
    for field in Field::ALL {
        for value in ["", "Al", "a@b.com", "Abcdef", "30", "male"] {
            assert_eq!(validator.message(field, value), validator.message(field, value));
        }
    }
}

// =============================================================================
// Submission
// =============================================================================

#[tokio::test]
async fn test_valid_submission_notifies_and_resets() {
    let backend = MockBackend::new();
    let notifier = RecordingNotifier::new();
    let form = form_with(&backend, &notifier);
    fill(&form, "Al", "a@b.com", "Abcdef", "30", "male");

    let outcome = form.submit().await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Submitted { name: "Al".to_string() });
    assert_eq!(backend.call_count(), 1);
    assert_eq!(backend.last_submission().unwrap().email, "a@b.com");
    assert_welcomed(&notifier, "Al");
    assert_form_cleared(&form);
}

#[tokio::test]
async fn test_invalid_age_blocks_submission() {
    let backend = MockBackend::new();
    let notifier = RecordingNotifier::new();
    let form = form_with(&backend, &notifier);
    fill(&form, "Al", "a@b.com", "Abcdef", "0", "male");

    let outcome = form.submit().await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Rejected { invalid: vec![Field::Age] });
    assert_field_error_eq(&form, Field::Age, "Please enter a valid age (1-120)");
    assert!(!form.is_submitting());
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(backend.call_count(), 0);
    assert_eq!(notifier.count(), 0);
}

#[tokio::test]
async fn test_empty_form_shows_every_error() {
    let backend = MockBackend::new();
    let notifier = RecordingNotifier::new();
    let form = form_with(&backend, &notifier);

    form.submit().await.unwrap();

    let errors = form.errors();
    assert_eq!(errors.fields().collect::<Vec<_>>(), Field::ALL.to_vec());
    for field in Field::ALL {
        assert_field_error(&form, field);
    }
    assert_field_error_eq(&form, Field::Gender, "Please select your gender");
}

#[test]
fn test_email_change_validates_immediately() {
    let backend = MockBackend::new();
    let notifier = RecordingNotifier::new();
    let form = form_with(&backend, &notifier);
    form.change(Field::Name, "A");
    let name_error = form.error(Field::Name);

    form.change(Field::Email, "not-an-email");

    assert_field_error_eq(&form, Field::Email, "Please enter a valid email address");
    assert_eq!(form.error(Field::Name), name_error);
    assert!(!form.errors().contains(Field::Password));
    assert!(!form.errors().contains(Field::Age));
}

#[tokio::test]
async fn test_double_submit_starts_one_backend_call() {
    let (backend, gate) = MockBackend::gated();
    let notifier = RecordingNotifier::new();
    let form = form_with(&backend, &notifier);
    fill(&form, "Al", "a@b.com", "Abcdef", "30", "male");

    let first = tokio::spawn({
        let form = form.clone();
        async move { form.submit().await }
    });
    gate.wait_started().await;
    assert!(form.is_submitting());

    let second = form.submit().await.unwrap();

    assert_eq!(second, SubmitOutcome::AlreadySubmitting);
    assert!(form.is_submitting());
    assert_eq!(backend.call_count(), 1);
    assert_eq!(notifier.count(), 0);

    gate.release();
    let first = first.await.unwrap().unwrap();

    assert!(matches!(first, SubmitOutcome::Submitted { .. }));
    assert_eq!(backend.call_count(), 1);
    assert_welcomed(&notifier, "Al");
    assert_form_cleared(&form);
}

#[tokio::test]
async fn test_backend_failure_keeps_input_and_allows_retry() {
    let backend = MockBackend::failing(SubmissionError::Unavailable("offline".to_string()));
    let notifier = RecordingNotifier::new();
    let form = form_with(&backend, &notifier);
    fill(&form, "Al", "a@b.com", "Abcdef", "30", "male");

    let err = form.submit().await.unwrap_err();

    assert!(matches!(err, RegisterError::Submission(SubmissionError::Unavailable(_))));
    assert!(!form.is_submitting());
    assert_eq!(form.value(Field::Name), "Al");
    assert!(form.errors().is_valid());

    let last = notifier.last().unwrap();
    assert_eq!(last.kind, ayurwell::NotificationKind::Error);
    assert!(last.description.contains("offline"));

    assert!(form.submit().await.is_err());
    assert_eq!(backend.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_timed_out_submit_can_be_retried() {
    let (backend, gate) = MockBackend::gated();
    let notifier = RecordingNotifier::new();
    let form = form_with(&backend, &notifier);
    fill(&form, "Al", "a@b.com", "Abcdef", "30", "male");

    let timed_out = tokio::time::timeout(std::time::Duration::from_millis(50), form.submit()).await;

    assert!(timed_out.is_err());
    assert!(!form.is_submitting());
    assert_eq!(form.submit_label(), ayurwell::SUBMIT_LABEL);
    assert_eq!(form.value(Field::Email), "a@b.com");
    assert_eq!(notifier.count(), 0);

    gate.release();
    let outcome = form.submit().await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Submitted { name: "Al".to_string() });
    assert_eq!(backend.call_count(), 2);
    assert_welcomed(&notifier, "Al");
}

#[tokio::test(start_paused = true)]
async fn test_default_simulated_backend_waits_two_seconds() {
    let notifier = RecordingNotifier::new();
    let form = FormController::simulated(&RegistrationSettings::default(), Arc::new(notifier.clone()));
    fill(&form, "Al", "a@b.com", "Abcdef", "30", "male");

    let started = tokio::time::Instant::now();
    form.submit().await.unwrap();

    assert!(started.elapsed() >= std::time::Duration::from_secs(2));
    assert_welcomed(&notifier, "Al");
}

// =============================================================================
// Presentation and navigation
// =============================================================================

#[test]
fn test_field_status_hints() {
    let form = form_with(&MockBackend::new(), &RecordingNotifier::new());

    form.change(Field::Email, "a@b.com");
    form.change(Field::Password, "abc");

    assert_eq!(form.field_status(Field::Email), FieldStatus::Valid("Valid email format"));
    assert!(form.field_status(Field::Password).is_invalid());
    assert_eq!(form.field_status(Field::Age), FieldStatus::Untouched);
    assert_field_valid(&form, Field::Email);
}

#[test]
fn test_navigation_highlights_register_page() {
    let router = MockRouter::at("/register");
    let nav = Navigation::new(router.clone());

    let active: Vec<_> = nav.items().into_iter().filter(|item| item.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].link.label, "Register");

    nav.activate(NAV_LINKS[1].path);
    assert!(nav.is_active("/quiz"));
    assert_eq!(router.history(), vec!["/quiz".to_string()]);
}
