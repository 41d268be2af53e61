//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: Search and recommend request worker
//! - poster: Poster artwork fetch and decode worker

pub mod api;
pub mod poster;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, ApiResponse};
pub use poster::PosterUpdate;
