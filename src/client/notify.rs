//! Transient toast notifications.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Notifications {
    toasts: Vec<Toast>,
    lifetime: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(Duration::seconds(4))
    }
}

impl Notifications {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            lifetime,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        self.toasts.push(Toast {
            kind,
            message,
            created_at: Utc::now(),
        });
    }

    /// Drop toasts older than the lifetime.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        let lifetime = self.lifetime;
        self.toasts.retain(|t| now - t.created_at < lifetime);
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
