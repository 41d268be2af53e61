//! Notification lifetime logic
//!
//! A notification is shown full-strength for a fixed display window, dims
//! for a short fade tail, then is removed. Pure over elapsed milliseconds
//! so the transitions are testable without a clock.

/// How long a notification stays at full strength
pub const DISPLAY_MS: u128 = 3000;

/// Dimmed tail after the display window, before removal
pub const FADE_MS: u128 = 300;

/// How urgent a notification is, drives its color and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Shown,
    FadingOut,
    Expired,
}

/// Phase of a notification that appeared `elapsed_ms` ago
pub fn phase_at(elapsed_ms: u128) -> NotificationPhase {
    if elapsed_ms < DISPLAY_MS {
        NotificationPhase::Shown
    } else if elapsed_ms < DISPLAY_MS + FADE_MS {
        NotificationPhase::FadingOut
    } else {
        NotificationPhase::Expired
    }
}

/// Whether a notification that appeared `elapsed_ms` ago should be removed
pub fn should_remove(elapsed_ms: u128) -> bool {
    phase_at(elapsed_ms) == NotificationPhase::Expired
}
