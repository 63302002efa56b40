use std::time::{Duration, Instant};

use ratatui::style::Color;

/// How long a notification stays on screen
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn color(self) -> Color {
        match self {
            NotificationLevel::Info => Color::Cyan,
            NotificationLevel::Success => Color::Green,
            NotificationLevel::Warning => Color::Yellow,
            NotificationLevel::Error => Color::Red,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            NotificationLevel::Info => " Info ",
            NotificationLevel::Success => " Done ",
            NotificationLevel::Warning => " Warning ",
            NotificationLevel::Error => " Error ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub expires_at: Instant,
}

/// At most one notification is shown; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, level: NotificationLevel, message: &str) {
        self.show_at(level, message, Instant::now());
    }

    pub fn show_at(&mut self, level: NotificationLevel, message: &str, now: Instant) {
        log::debug!("notification ({:?}): {}", level, message);
        self.current = Some(Notification {
            level,
            message: message.to_string(),
            expires_at: now + NOTIFICATION_DURATION,
        });
    }

    pub fn info(&mut self, message: &str) {
        self.show(NotificationLevel::Info, message);
    }

    pub fn success(&mut self, message: &str) {
        self.show(NotificationLevel::Success, message);
    }

    pub fn warning(&mut self, message: &str) {
        self.show(NotificationLevel::Warning, message);
    }

    pub fn error(&mut self, message: &str) {
        self.show(NotificationLevel::Error, message);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    /// Drop the notification once its time is up. Returns true if one expired.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(n) if now >= n.expires_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
