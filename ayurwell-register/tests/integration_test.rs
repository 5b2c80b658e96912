//! Integration tests for ayurwell-register

use ayurwell_config::RegistrationSettings;
use ayurwell_register::*;
use ayurwell_validation::{Field, PasswordPolicy};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct Toasts(Mutex<Vec<Notification>>);

impl Notifier for Toasts {
    fn notify(&self, notification: Notification) {
        self.0.lock().unwrap().push(notification);
    }
}

fn fill(form: &FormController, values: [(&str, &str); 5]) {
    for (name, value) in values {
        form.change_named(name, value).unwrap();
    }
}

#[tokio::test(start_paused = true)]
async fn test_simulated_submission_takes_configured_delay() {
    let toasts = Arc::new(Toasts::default());
    let settings = RegistrationSettings {
        submit_delay_ms: 1500,
        ..RegistrationSettings::default()
    };
    let form = FormController::simulated(&settings, toasts.clone());
    fill(
        &form,
        [
            ("name", "Meera"),
            ("email", "meera@example.in"),
            ("password", "Tulsi7"),
            ("age", "42"),
            ("gender", "female"),
        ],
    );

    let started = tokio::time::Instant::now();
    let outcome = form.submit().await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(outcome, SubmitOutcome::Submitted { name: "Meera".to_string() });

    let toasts = toasts.0.lock().unwrap();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Welcome to AyurWellness! 🎉");
    assert_eq!(
        toasts[0].description,
        "Hello Meera! Your wellness journey begins now. Check your email for next steps."
    );
}

#[tokio::test]
async fn test_basic_policy_scenario_with_lowercase_password() {
    let toasts = Arc::new(Toasts::default());
    let settings = RegistrationSettings {
        submit_delay_ms: 0,
        password_policy: PasswordPolicy::Basic,
        ..RegistrationSettings::default()
    };
    let form = FormController::simulated(&settings, toasts.clone());
    fill(
        &form,
        [
            ("name", "Al"),
            ("email", "a@b.com"),
            ("password", "abcdef"),
            ("age", "30"),
            ("gender", "male"),
        ],
    );

    assert!(matches!(form.submit().await.unwrap(), SubmitOutcome::Submitted { .. }));
    assert!(form.data().is_blank());
}

#[tokio::test]
async fn test_strict_policy_blocks_lowercase_password() {
    let toasts = Arc::new(Toasts::default());
    let form = FormController::simulated(&RegistrationSettings::default(), toasts.clone());
    fill(
        &form,
        [
            ("name", "Al"),
            ("email", "a@b.com"),
            ("password", "abcdef"),
            ("age", "30"),
            ("gender", "male"),
        ],
    );

    let outcome = form.submit().await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Rejected { invalid: vec![Field::Password] });
    assert_eq!(
        form.error(Field::Password).as_deref(),
        Some("Password must contain uppercase and lowercase letters")
    );
    assert_eq!(form.value(Field::Password), "abcdef");
    assert!(toasts.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_resubmit_after_fixing_errors() {
    let toasts = Arc::new(Toasts::default());
    let settings = RegistrationSettings {
        submit_delay_ms: 0,
        ..RegistrationSettings::default()
    };
    let form = FormController::simulated(&settings, toasts.clone());
    fill(
        &form,
        [
            ("name", "Al"),
            ("email", "a@b.com"),
            ("password", "Abcdef"),
            ("age", "0"),
            ("gender", "other"),
        ],
    );

    assert!(matches!(form.submit().await.unwrap(), SubmitOutcome::Rejected { .. }));
    assert_eq!(form.change(Field::Age, "31"), None);
    assert!(matches!(form.submit().await.unwrap(), SubmitOutcome::Submitted { .. }));
    assert_eq!(toasts.0.lock().unwrap().len(), 1);
}
