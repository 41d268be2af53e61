// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (input, results, legend, overlay)
// - render: Main orchestration function that coordinates all rendering
// - search: Renders the movie title input box with blinking cursor
// - suggestions: Renders the suggestion dropdown overlay under the input
// - results: Renders recommendation cards with poster slots
// - legend: Renders hotkey legend
// - notification: Renders the notification pop-up near the top of the screen

pub mod layout;
pub mod legend;
pub mod notification;
pub mod render;
pub mod results;
pub mod search;
pub mod suggestions;

// Re-export main render function for convenience
pub use render::render;
