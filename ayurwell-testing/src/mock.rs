// Mock collaborators for testing

use async_trait::async_trait;
use ayurwell_navigation::Router;
use ayurwell_register::{
    FormData, Notification, Notifier, SubmissionBackend, SubmissionError, ValidatedRegistration,
};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::Notify;

/// Backend that records what it was given.
///
/// By default it succeeds immediately. [`MockBackend::failing`] makes every
/// call fail, and [`MockBackend::gated`] holds each call open until the test
/// releases it.
#[derive(Clone, Default)]
pub struct MockBackend {
    calls: Arc<Mutex<Vec<FormData>>>,
    failure: Option<SubmissionError>,
    gate: Option<BackendGate>,
}

impl MockBackend {
    /// Create a backend that always succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that always fails with `error`
    pub fn failing(error: SubmissionError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Create a backend whose calls wait for the returned gate
    pub fn gated() -> (Self, BackendGate) {
        let gate = BackendGate::default();
        let backend = Self {
            gate: Some(gate.clone()),
            ..Self::default()
        };
        (backend, gate)
    }

    /// Number of submissions received
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Every submission received, oldest first
    pub fn submissions(&self) -> Vec<FormData> {
        self.calls.lock().clone()
    }

    /// Most recent submission
    pub fn last_submission(&self) -> Option<FormData> {
        self.calls.lock().last().cloned()
    }
}

#[async_trait]
impl SubmissionBackend for MockBackend {
    async fn submit(&self, registration: &ValidatedRegistration) -> Result<(), SubmissionError> {
        self.calls.lock().push(registration.data().clone());

        if let Some(gate) = &self.gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }

        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// Controls a gated [`MockBackend`].
#[derive(Clone, Default)]
pub struct BackendGate {
    started: Arc<Notify>,
    release: Arc<Notify>,
}

impl BackendGate {
    /// Wait until the backend has been entered
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    /// Let one pending (or the next) call complete
    pub fn release(&self) {
        self.release.notify_one();
    }
}

/// Notifier that keeps every notification.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Create an empty notifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far
    pub fn notifications(&self) -> Vec<Notification> {
        self.sent.lock().clone()
    }

    /// Number of notifications sent
    pub fn count(&self) -> usize {
        self.sent.lock().len()
    }

    /// Most recent notification
    pub fn last(&self) -> Option<Notification> {
        self.sent.lock().last().cloned()
    }

    /// Forget recorded notifications
    pub fn clear(&self) {
        self.sent.lock().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.lock().push(notification);
    }
}

/// Router that records every navigation.
#[derive(Clone, Default)]
pub struct MockRouter {
    current: Arc<Mutex<String>>,
    history: Arc<Mutex<Vec<String>>>,
}

impl MockRouter {
    /// Create a router positioned at `path`
    pub fn at(path: &str) -> Self {
        Self {
            current: Arc::new(Mutex::new(path.to_string())),
            history: Arc::default(),
        }
    }

    /// Paths navigated to, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.lock().clone()
    }
}

impl Router for MockRouter {
    fn current_path(&self) -> String {
        self.current.lock().clone()
    }

    fn navigate(&self, path: &str) {
        *self.current.lock() = path.to_string();
        self.history.lock().push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ayurwell_navigation::Navigation;

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notification::welcome("AyurWellness", "Al"));
        notifier.notify(Notification::registration_failed("down"));

        assert_eq!(notifier.count(), 2);
        assert_eq!(notifier.last().unwrap().title, "Registration failed");

        notifier.clear();
        assert_eq!(notifier.count(), 0);
    }

    #[test]
    fn test_mock_router_tracks_history() {
        let router = MockRouter::at("/");
        let nav = Navigation::new(router.clone());

        nav.activate("/register");
        nav.activate("/quiz");

        assert!(nav.is_active("/quiz"));
        assert_eq!(router.history(), vec!["/register", "/quiz"]);
    }

    #[test]
    fn test_backend_starts_empty() {
        let backend = MockBackend::new();
        assert_eq!(backend.call_count(), 0);
        assert!(backend.last_submission().is_none());
    }
}
