//! Notification center: transient toasts that expire on their own

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use salon_core::prelude::*;
use salon_core::Notification;
use serde::Serialize;

/// Maximum toasts kept on screen; older ones are dropped first
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct ActiveNotification {
    #[serde(flatten)]
    pub notification: Notification,
    #[serde(skip)]
    pub created_at: Instant,
}

/// Process-wide sink for success/error notifications
#[derive(Debug, Clone, Serialize)]
pub struct NotificationCenter {
    entries: VecDeque<ActiveNotification>,
    ttl: Duration,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        if notification.is_error() {
            warn!("Notification: {}", notification.message);
        } else {
            debug!("Notification: {}", notification.message);
        }
        self.entries.push_back(ActiveNotification {
            notification,
            created_at: now,
        });
        while self.entries.len() > MAX_VISIBLE {
            self.entries.pop_front();
        }
    }

    /// Drop notifications older than the TTL
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|entry| now.saturating_duration_since(entry.created_at) < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|e| &e.notification)
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back().map(|e| &e.notification)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_millis(4000))
    }
}
