use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::utils;
use crate::FocusPane;

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(focus: FocusPane) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    match focus {
        FocusPane::Input => {
            hotkey_spans.extend(vec![
                Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
                Span::raw(":Pick suggestion  "),
                Span::styled("Enter", Style::default().fg(Color::Yellow)),
                Span::raw(":Recommend  "),
                Span::styled("Tab", Style::default().fg(Color::Yellow)),
                Span::raw(":Results  "),
                Span::styled("Esc", Style::default().fg(Color::Yellow)),
                Span::raw(":Hide suggestions  "),
            ]);
        }
        FocusPane::Results => {
            hotkey_spans.extend(vec![
                Span::styled("←/→", Style::default().fg(Color::Yellow)),
                Span::raw(":Select movie  "),
                Span::styled("Enter", Style::default().fg(Color::Yellow)),
                Span::raw(":Copy title  "),
                Span::styled("Tab", Style::default().fg(Color::Yellow)),
                Span::raw(":Search  "),
            ]);
        }
    }

    // Quit - always available
    hotkey_spans.extend(vec![
        Span::styled("^C", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Render the one-line hotkey legend with the server address on the right
pub fn render_legend(f: &mut Frame, area: Rect, focus: FocusPane, base_url: &str) {
    let server = format!("{} ", base_url);
    let server_width = (utils::display_width(&server) as u16).min(area.width / 2);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(server_width)])
        .split(area);

    let legend = Paragraph::new(Line::from(build_hotkey_spans(focus)))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(legend, chunks[0]);

    let server_widget = Paragraph::new(server)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    f.render_widget(server_widget, chunks[1]);
}
