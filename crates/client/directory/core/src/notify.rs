//! Notifications emitted by directory mutations.

use std::sync::Mutex;

use crate::traits::NotificationSink;

/// Severity of a user-facing notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            text: text.into(),
        }
    }
}

/// Sink that keeps every notification, for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingSink {
    received: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.received
            .lock()
            .ok()
            .and_then(|entries| entries.last().cloned())
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        if let Ok(mut entries) = self.received.lock() {
            entries.push(notification);
        }
    }
}
