use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Movie title input box area
    pub input_area: Rect,
    /// Recommendation cards area
    pub results_area: Rect,
    /// Hotkey legend area (single line)
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box (top border, text, bottom border)
            Constraint::Min(5),    // Recommendation cards
            Constraint::Length(1), // Legend
        ])
        .split(terminal_size);

    LayoutInfo {
        input_area: main_chunks[0],
        results_area: main_chunks[1],
        legend_area: main_chunks[2],
    }
}

/// Area for the suggestion dropdown, anchored under the input box and
/// clamped to the screen. Returns None when there is no room for even a
/// single row.
pub fn suggestion_overlay(input_area: Rect, terminal_size: Rect, rows: u16) -> Option<Rect> {
    let y = input_area.y.saturating_add(input_area.height);
    let room = terminal_size.bottom().saturating_sub(y);
    // Rows plus the top and bottom border
    let height = rows.saturating_add(2).min(room);
    if height < 3 {
        return None;
    }
    Some(Rect {
        x: input_area.x,
        y,
        width: input_area.width,
        height,
    })
}
