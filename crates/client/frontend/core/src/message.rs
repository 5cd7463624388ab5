//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use client_directory_core::{Notification, NotificationLevel, NotificationSink};

/// Severity level for UI messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

impl From<NotificationLevel> for MessageLevel {
    fn from(level: NotificationLevel) -> Self {
        match level {
            NotificationLevel::Info => Self::Info,
            NotificationLevel::Success => Self::Success,
            NotificationLevel::Error => Self::Error,
        }
    }
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub text: String,
    pub timestamp: Option<u64>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, timestamp: Option<u64>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            timestamp,
            level,
        }
    }
}

/// Circular buffer of messages displayed to the admin.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
    next_seq: u64,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
            next_seq: 0,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Pushes `text` stamped with the next sequence number.
    pub fn push_level(&mut self, text: impl Into<String>, level: MessageLevel) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.push(MessageEntry::new(text, Some(seq), level));
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push_level(message, MessageLevel::Info);
    }

    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Message log shared between the UI and notification producers.
#[derive(Clone, Debug)]
pub struct SharedMessageLog {
    inner: Arc<Mutex<MessageLog>>,
}

impl SharedMessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MessageLog::new(capacity))),
        }
    }

    pub fn push_level(&self, text: impl Into<String>, level: MessageLevel) {
        match self.inner.lock() {
            Ok(mut log) => log.push_level(text, level),
            Err(_) => tracing::warn!("Message log lock poisoned; dropping message"),
        }
    }

    /// Newest-first copy of up to `limit` entries.
    pub fn recent(&self, limit: usize) -> Vec<MessageEntry> {
        self.inner
            .lock()
            .map(|log| log.recent(limit).cloned().collect())
            .unwrap_or_default()
    }
}

impl NotificationSink for SharedMessageLog {
    fn notify(&self, notification: Notification) {
        self.push_level(notification.text, notification.level.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_drops_oldest_when_full() {
        let mut log = MessageLog::new(2);
        log.push_text("one");
        log.push_text("two");
        log.push_text("three");

        let texts: Vec<_> = log.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, vec!["two", "three"]);
        assert_eq!(log.recent(1).next().map(|e| e.timestamp), Some(Some(2)));
    }

    #[test]
    fn zero_capacity_keeps_one() {
        let mut log = MessageLog::new(0);
        log.push_text("a");
        log.push_text("b");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn notifications_land_in_shared_log() {
        let shared = SharedMessageLog::new(8);
        shared.notify(Notification::success("User banned"));
        shared.notify(Notification::error("you cannot ban yourself"));

        let recent = shared.recent(8);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].level, MessageLevel::Error);
        assert_eq!(recent[1].text, "User banned");
        assert_eq!(recent[1].level, MessageLevel::Success);
    }
}
