//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: Search and recommend responses from the background worker
//! - poster: Artwork updates from the poster loader
//! - keyboard: User keyboard input

pub mod api;
pub mod keyboard;
pub mod poster;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
pub use poster::handle_poster_update;
