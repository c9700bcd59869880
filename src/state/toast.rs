//! Transient toast notifications

use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Visual severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastSeverity {
    #[default]
    Default,
    Destructive,
}

/// A toast notification that auto-dismisses
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: ToastSeverity,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: ToastSeverity,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
            created_at: Instant::now(),
            duration: TOAST_DURATION,
        }
    }

    #[cfg(test)]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}
