use crate::App;
use crate::FocusPane;
use ratatui::Frame;

use super::{layout, legend, notification, results, search, suggestions};

/// Main render function - orchestrates all UI rendering
/// This replaces the large terminal.draw() closure in main.rs
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let layout_info = layout::calculate_layout(size);

    search::render_movie_input(
        f,
        layout_info.input_area,
        &app.model.suggest,
        app.model.ui.focus == FocusPane::Input,
    );

    results::render_results(
        f,
        layout_info.results_area,
        &app.model.results,
        &mut app.poster_art,
        app.model.ui.focus == FocusPane::Results,
    );

    legend::render_legend(f, layout_info.legend_area, app.model.ui.focus, &app.base_url);

    // Suggestion dropdown sits on top of the results pane
    suggestions::render_suggestions(f, size, layout_info.input_area, &app.model.suggest);

    // Notification pop-up renders last so nothing covers it
    if let (Some(notification), Some(phase)) = (
        app.model.ui.notification.as_ref(),
        app.model.ui.notification_phase(),
    ) {
        notification::render_notification(f, size, notification, phase);
    }
}
