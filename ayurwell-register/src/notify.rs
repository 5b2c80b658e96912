//! User-facing notifications.

use ayurwell_log::{info, warn};
use serde::Serialize;

/// Tone of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message for the user, like a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Error,
        }
    }

    /// Greeting sent after a registration goes through.
    pub fn welcome(app_name: &str, name: &str) -> Self {
        Self::success(
            format!("Welcome to {}! 🎉", app_name),
            format!(
                "Hello {}! Your wellness journey begins now. Check your email for next steps.",
                name
            ),
        )
    }

    /// Sent when the backend refuses or fails a registration.
    pub fn registration_failed(reason: impl std::fmt::Display) -> Self {
        Self::error("Registration failed", reason.to_string())
    }
}

/// Displays notifications to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that only writes to the log. Useful headless and in demos.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                info!("{}: {}", notification.title, notification.description)
            }
            NotificationKind::Error => {
                warn!("{}: {}", notification.title, notification.description)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_mentions_name() {
        let notification = Notification::welcome("AyurWellness", "Al");
        assert_eq!(notification.title, "Welcome to AyurWellness! 🎉");
        assert!(notification.description.starts_with("Hello Al!"));
        assert_eq!(notification.kind, NotificationKind::Success);
    }

    #[test]
    fn test_failure_is_error_kind() {
        let notification = Notification::registration_failed("service down");
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.description, "service down");
    }

    #[test]
    fn test_log_notifier_accepts_both_kinds() {
        LogNotifier.notify(Notification::welcome("AyurWellness", "Al"));
        LogNotifier.notify(Notification::registration_failed("nope"));
    }
}
