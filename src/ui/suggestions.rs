//! Suggestion Dropdown UI
//!
//! Renders the dropdown overlay under the input box: the title list when
//! matches are in, or a single status row while searching, after an empty
//! result, or after a failed call.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::layout;
use crate::model::suggest::{SuggestModel, SuggestPhase};
use crate::utils;

const MAX_VISIBLE_ROWS: usize = 8;

/// Render the dropdown overlay. Hidden dropdowns keep their contents in
/// the model but draw nothing; bails out silently when the screen has no
/// room for it.
pub fn render_suggestions(
    f: &mut Frame,
    terminal_size: Rect,
    input_area: Rect,
    suggest: &SuggestModel,
) {
    if !suggest.visible {
        return;
    }

    let rows = match suggest.phase {
        SuggestPhase::Idle => return,
        SuggestPhase::Loaded => suggest.suggestions.len().min(MAX_VISIBLE_ROWS) as u16,
        _ => 1,
    };

    let Some(area) = layout::suggestion_overlay(input_area, terminal_size, rows) else {
        return;
    };

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Suggestions ")
        .border_style(Style::default().fg(Color::Cyan));

    match suggest.phase {
        SuggestPhase::Loaded => {
            let width = area.width.saturating_sub(4) as usize;
            let items: Vec<ListItem> = suggest
                .suggestions
                .iter()
                .map(|title| ListItem::new(utils::truncate_to_width(title, width)))
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("► ");

            // Create temporary ListState for rendering
            let mut temp_state = ListState::default();
            temp_state.select(suggest.selected);
            f.render_stateful_widget(list, area, &mut temp_state);
        }
        SuggestPhase::Searching => {
            let paragraph = Paragraph::new("Searching…")
                .style(
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::ITALIC),
                )
                .block(block);
            f.render_widget(paragraph, area);
        }
        SuggestPhase::NoMatches => {
            let paragraph = Paragraph::new("No movies found")
                .style(Style::default().fg(Color::Gray))
                .block(block);
            f.render_widget(paragraph, area);
        }
        SuggestPhase::Failed => {
            let paragraph = Paragraph::new("Couldn't load suggestions")
                .style(Style::default().fg(Color::Red))
                .block(block);
            f.render_widget(paragraph, area);
        }
        SuggestPhase::Idle => {}
    }
}
