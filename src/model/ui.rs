//! UI Model
//!
//! This sub-model contains cross-cutting interface state: the notification
//! surface, keyboard focus and the quit flag.

use std::time::Instant;

use crate::logic::notify::{self, NotificationPhase, Severity};
use crate::FocusPane;

/// The single on-screen notification
#[derive(Clone, Debug)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

#[derive(Clone, Debug)]
pub struct UiModel {
    /// At most one notification at a time, newer ones replace it
    pub notification: Option<Notification>,

    /// Which pane keystrokes go to
    pub focus: FocusPane,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            notification: None,
            focus: FocusPane::Input,
            should_quit: false,
        }
    }

    /// Show a notification, replacing whatever is on screen
    pub fn show_notification(&mut self, severity: Severity, message: impl Into<String>) {
        self.notification = Some(Notification {
            message: message.into(),
            severity,
            shown_at: Instant::now(),
        });
    }

    /// Lifetime phase of the current notification, if any
    pub fn notification_phase(&self) -> Option<NotificationPhase> {
        self.notification
            .as_ref()
            .map(|n| notify::phase_at(n.shown_at.elapsed().as_millis()))
    }

    /// Check if the notification has outlived its display and fade windows
    pub fn should_remove_notification(&self) -> bool {
        self.notification_phase() == Some(NotificationPhase::Expired)
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggled();
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}
