//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models for maintainability:
//!
//! - **SuggestModel**: Title field, debounced search, dropdown list
//! - **ResultsModel**: Submit flag, recommendation cards, poster slots
//! - **UiModel**: Notification surface, focus, quit flag
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the runtime loop
//! - Time is a parameter: Deadline-driven methods take `Instant`s

pub mod results;
pub mod suggest;
pub mod ui;

pub use results::ResultsModel;
pub use suggest::SuggestModel;
pub use ui::UiModel;

use std::time::Instant;

use crate::logic::notify::Severity;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Title field and suggestion dropdown
    pub suggest: SuggestModel,

    /// Recommendation cards and submit state
    pub results: ResultsModel,

    /// Notification, focus and quit flag
    pub ui: UiModel,
}

impl Model {
    /// Create initial model
    pub fn new() -> Self {
        Self {
            suggest: SuggestModel::new(),
            results: ResultsModel::new(),
            ui: UiModel::new(),
        }
    }

    /// Try to submit whatever the title field holds.
    ///
    /// Returns the title the caller should send to the server. An empty
    /// field raises a validation notification instead, and a submit already
    /// in flight swallows the request.
    pub fn submit_current(&mut self, now: Instant) -> Option<String> {
        let title = self.suggest.query().to_string();
        if title.is_empty() {
            self.ui
                .show_notification(Severity::Error, "Please enter a movie name");
            return None;
        }
        if self.results.submitting {
            return None;
        }
        self.results.begin_submit(now);
        Some(title)
    }

    /// Show notification, replacing any current one
    pub fn show_notification(&mut self, severity: Severity, message: impl Into<String>) {
        self.ui.show_notification(severity, message);
    }

    /// Check if the notification should be removed this frame
    pub fn should_remove_notification(&self) -> bool {
        self.ui.should_remove_notification()
    }

    /// Dismiss notification
    pub fn dismiss_notification(&mut self) {
        self.ui.dismiss_notification();
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::notify::Severity;

    #[test]
    fn test_model_creation() {
        let model = Model::new();
        assert!(model.suggest.input.is_empty());
        assert!(model.results.cards.is_empty());
        assert!(model.ui.notification.is_none());
        assert!(!model.ui.should_quit);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new();
        let _cloned = model.clone();
    }

    #[test]
    fn test_submit_empty_field_raises_validation_notification() {
        let mut model = Model::new();
        let sent = model.submit_current(Instant::now());

        assert_eq!(sent, None);
        assert!(!model.results.submitting);
        let notification = model.ui.notification.as_ref().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.message, "Please enter a movie name");
    }

    #[test]
    fn test_submit_whitespace_field_raises_validation_notification() {
        let mut model = Model::new();
        let now = Instant::now();
        model.suggest.push_char(' ', now);
        assert_eq!(model.submit_current(now), None);
        assert!(model.ui.notification.is_some());
    }

    #[test]
    fn test_submit_sends_trimmed_title_and_sets_flag() {
        let mut model = Model::new();
        let now = Instant::now();
        for c in " Alien ".chars() {
            model.suggest.push_char(c, now);
        }

        let sent = model.submit_current(now);
        assert_eq!(sent.as_deref(), Some("Alien"));
        assert!(model.results.submitting);
        assert!(model.ui.notification.is_none());
    }

    #[test]
    fn test_submit_while_in_flight_is_swallowed() {
        let mut model = Model::new();
        let now = Instant::now();
        for c in "Alien".chars() {
            model.suggest.push_char(c, now);
        }

        assert!(model.submit_current(now).is_some());
        assert_eq!(model.submit_current(now), None);
        assert!(model.results.submitting);
    }

    #[test]
    fn test_notification_delegates() {
        let mut model = Model::new();
        model.show_notification(Severity::Info, "hello");
        assert!(!model.should_remove_notification());
        model.dismiss_notification();
        assert!(model.ui.notification.is_none());
    }
}
