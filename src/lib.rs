//! Movie Recommendation TUI Library
//!
//! Exposes modules for testing

pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod services;

// Re-export common types from main.rs that are needed by other modules
// These will be made available at crate:: level

/// Which pane currently owns keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Input,   // The movie title field (suggestions act on this pane)
    Results, // The recommendation cards
}

impl FocusPane {
    pub fn toggled(&self) -> FocusPane {
        match self {
            FocusPane::Input => FocusPane::Results,
            FocusPane::Results => FocusPane::Input,
        }
    }
}
