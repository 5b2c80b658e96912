// Test assertions for registration forms

use crate::RecordingNotifier;
use ayurwell_register::{FormController, NotificationKind};
use ayurwell_validation::Field;

/// Assert that a field currently shows an error
pub fn assert_field_error(form: &FormController, field: Field) {
    assert!(
        form.error(field).is_some(),
        "Expected '{}' to have an error, errors: {:?}",
        field,
        form.errors()
    );
}

/// Assert that a field shows exactly `expected`
pub fn assert_field_error_eq(form: &FormController, field: Field, expected: &str) {
    let actual = form.error(field);
    assert_eq!(
        actual.as_deref(),
        Some(expected),
        "Expected '{}' error to be '{}', got {:?}",
        field,
        expected,
        actual
    );
}

/// Assert that a field has no error
pub fn assert_field_valid(form: &FormController, field: Field) {
    let actual = form.error(field);
    assert!(
        actual.is_none(),
        "Expected '{}' to be valid, got error {:?}",
        field,
        actual
    );
}

/// Assert that the form is back to its initial empty state
pub fn assert_form_cleared(form: &FormController) {
    let data = form.data();
    assert!(data.is_blank(), "Expected blank form, got {:?}", data);
    assert!(
        form.errors().fields().next().is_none(),
        "Expected no errors, got {:?}",
        form.errors()
    );
    assert!(!form.is_submitting(), "Expected form not to be submitting");
}

/// Assert that exactly one success notification mentioning `name` was sent
pub fn assert_welcomed(notifier: &RecordingNotifier, name: &str) {
    let sent = notifier.notifications();
    assert_eq!(sent.len(), 1, "Expected one notification, got {:?}", sent);
    assert_eq!(sent[0].kind, NotificationKind::Success);
    assert!(
        sent[0].description.contains(name),
        "Expected notification to mention '{}', got '{}'",
        name,
        sent[0].description
    );
}
