//! Toast notifications for the board.
//!
//! Validation failures and operation results surface here as transient
//! messages that dismiss themselves after a fixed duration.

use std::time::{Duration, Instant};

/// Auto-dismiss duration.
const DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Notification level (determines styling)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            ToastLevel::Success => Color::Green,
            ToastLevel::Error => Color::Red,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✗",
        }
    }
}

/// A single toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    created_at: Instant,
}

impl Toast {
    fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    /// Whether this toast has outlived its display window.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= DISMISS_AFTER
    }
}

/// Toast queue; only the most recent toast is displayed.
#[derive(Debug, Default)]
pub struct Toasts {
    current: Option<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.current = Some(Toast::new(ToastLevel::Success, message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.current = Some(Toast::new(ToastLevel::Error, message));
    }

    /// Drop the current toast once expired.
    pub fn prune(&mut self) {
        if self.current.as_ref().is_some_and(|t| t.is_expired()) {
            self.current = None;
        }
    }

    /// The toast to display, if any.
    pub fn visible(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_toast_replaces_previous() {
        let mut toasts = Toasts::new();
        toasts.success("created");
        toasts.error("Task already exists");

        let visible = toasts.visible().unwrap();
        assert_eq!(visible.level, ToastLevel::Error);
        assert_eq!(visible.message, "Task already exists");
    }

    #[test]
    fn fresh_toast_is_not_expired() {
        let mut toasts = Toasts::new();
        toasts.success("created");
        toasts.prune();
        assert!(toasts.visible().is_some());
    }
}
