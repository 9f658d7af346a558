use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_millis(1500);
const WARNING_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration
    }
}

/// Holds at most one notification; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_with(message, NotificationKind::Info, DEFAULT_DURATION);
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_with(message, NotificationKind::Warning, WARNING_DURATION);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_with(message, NotificationKind::Error, WARNING_DURATION);
    }

    pub fn show_with(&mut self, message: &str, kind: NotificationKind, duration: Duration) {
        self.current = Some(Notification {
            message: message.to_string(),
            kind,
            shown_at: Instant::now(),
            duration,
        });
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    /// Drop the notification once it has expired
    ///
    /// Returns true if one was removed.
    pub fn clear_expired(&mut self) -> bool {
        self.clear_expired_at(Instant::now())
    }

    pub fn clear_expired_at(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
