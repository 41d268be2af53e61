//! Movie Title Input UI
//!
//! Renders the title input box with a blinking cursor. Long input keeps
//! its tail visible, the part the cursor sits after.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::suggest::SuggestModel;
use crate::utils;

/// Render the movie title input box
pub fn render_movie_input(f: &mut Frame, area: Rect, suggest: &SuggestModel, focused: bool) {
    let title = if focused {
        " Movie title - Enter to recommend ".to_string()
    } else {
        " Movie title ".to_string()
    };

    let border_color = if focused { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    // Room inside the borders, minus one column for the cursor
    let text_width = area.width.saturating_sub(3) as usize;
    let visible = utils::tail_window(&suggest.input, text_width);

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if focused {
        Line::from(vec![
            Span::styled(visible, Style::default().fg(Color::White)),
            Span::styled("█", cursor_style), // Blinking cursor
        ])
    } else {
        Line::from(vec![Span::styled(
            visible,
            Style::default().fg(Color::Gray),
        )])
    };

    let paragraph = Paragraph::new(vec![input_line]).block(block);

    f.render_widget(paragraph, area);
}
