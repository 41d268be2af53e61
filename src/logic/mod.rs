//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - debounce: Quiet-period scheduling for keystroke-driven work
//! - errors: API failure classification and reporting
//! - navigation: Navigation selection calculations
//! - notify: Notification lifetime transitions
//! - poster: Poster fallback tiers and watchdog state machine
//! - query: Query text normalization

pub mod debounce;
pub mod errors;
pub mod navigation;
pub mod notify;
pub mod poster;
pub mod query;
