// ABOUTME: Transient success and error notifications ("toasts") for query and mutation outcomes
// ABOUTME: Broadcasts to every subscriber; a front end decides how long to show each one
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::constants::defaults::{NOTIFICATION_CHANNEL_SIZE, NOTIFICATION_DURATION_MS};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Whether a notification reports success or failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Green toast
    Success,
    /// Red toast
    Error,
}

/// One toast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Unique id so a front end can dismiss it
    pub id: Uuid,
    /// Success or error
    pub kind: NotificationKind,
    /// Text shown to the user
    pub message: String,
    /// How long the toast stays visible
    #[serde(skip)]
    pub duration: Duration,
    /// When it was raised
    pub created_at: DateTime<Utc>,
}

impl Notification {
    fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            duration: Duration::from_millis(NOTIFICATION_DURATION_MS),
            created_at: Utc::now(),
        }
    }

    /// True for error toasts
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Fan-out of notifications to any number of listeners
///
/// Publishing with no subscribers is not an error; the notification is
/// simply dropped.
#[derive(Debug, Clone)]
pub struct Notifier {
    sender: broadcast::Sender<Notification>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    /// Create a notifier with the default buffer size
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(NOTIFICATION_CHANNEL_SIZE);
        Self { sender }
    }

    /// Listen for notifications raised from now on
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    /// Raise a success toast
    pub fn success(&self, message: impl Into<String>) {
        self.publish(Notification::new(NotificationKind::Success, message));
    }

    /// Raise an error toast
    pub fn error(&self, message: impl Into<String>) {
        self.publish(Notification::new(NotificationKind::Error, message));
    }

    fn publish(&self, notification: Notification) {
        tracing::debug!(kind = ?notification.kind, message = %notification.message, "Notification raised");
        // Err only means nobody is listening
        let _ = self.sender.send(notification);
    }
}

/// Drain everything currently buffered in `receiver`
pub fn drain(receiver: &mut broadcast::Receiver<Notification>) -> Vec<Notification> {
    let mut received = Vec::new();
    loop {
        match receiver.try_recv() {
            Ok(notification) => received.push(notification),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Notification receiver lagged");
            }
            Err(broadcast::error::TryRecvError::Empty | broadcast::error::TryRecvError::Closed) => {
                break;
            }
        }
    }
    received
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribers_receive_in_order() {
        let notifier = Notifier::new();
        let mut receiver = notifier.subscribe();

        notifier.success("Recipe created successfully!");
        notifier.error("Failed to create recipe.");

        let received = drain(&mut receiver);
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].kind, NotificationKind::Success);
        assert!(received[1].is_error());
        assert_eq!(received[1].duration, Duration::from_millis(3_000));
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        Notifier::new().error("nobody hears this");
    }
}
