//! Recommendation Cards UI
//!
//! Renders the results pane: an uneventful hint before the first submit,
//! the server's message after a refusal or failure, or one card per
//! recommended movie with its poster slot in whatever state it is in.

use std::collections::HashMap;
use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ratatui_image::{protocol::StatefulProtocol, StatefulImage};

use crate::logic::poster::PosterPhase;
use crate::model::results::{ResultCard, ResultsModel, ResultsPhase};
use crate::utils;

/// Render the recommendations pane
pub fn render_results(
    f: &mut Frame,
    area: Rect,
    results: &ResultsModel,
    poster_art: &mut HashMap<usize, StatefulProtocol>,
    focused: bool,
) {
    let title = if results.submitting {
        let started = results.submit_started_at().unwrap_or_else(Instant::now);
        format!(" Recommendations - {} finding ", spinner_frame(started))
    } else {
        " Recommendations ".to_string()
    };

    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &results.phase {
        ResultsPhase::Idle => {
            let hint = Paragraph::new("Type a movie title and press Enter to get recommendations")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(hint, centered_rows(inner, 2));
        }
        ResultsPhase::Failed(message) => {
            let paragraph = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, centered_rows(inner, 3));
        }
        ResultsPhase::Loaded => {
            if results.cards.is_empty() || inner.width == 0 {
                return;
            }
            let constraints: Vec<Constraint> = results
                .cards
                .iter()
                .map(|_| Constraint::Ratio(1, results.cards.len() as u32))
                .collect();
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(inner);

            for (index, card) in results.cards.iter().enumerate() {
                let Some(column) = columns.get(index) else {
                    break;
                };
                render_card(
                    f,
                    *column,
                    card,
                    results.selected == Some(index),
                    focused,
                    poster_art.get_mut(&index),
                );
            }
        }
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    card: &ResultCard,
    selected: bool,
    focused: bool,
    art: Option<&mut StatefulProtocol>,
) {
    let border_style = if selected && focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    let poster_area = chunks[0];
    let title_area = chunks[1];

    match card.poster.phase {
        PosterPhase::Visible { .. } => match art {
            Some(protocol) => {
                f.render_stateful_widget(StatefulImage::default(), poster_area, protocol);
            }
            None => render_poster_placeholder(f, poster_area, &card.name),
        },
        PosterPhase::Loading { .. } => {
            let line = format!(
                "{} Loading poster",
                spinner_frame(card.poster.attached_at())
            );
            let paragraph = Paragraph::new(line)
                .style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
                .alignment(Alignment::Center);
            f.render_widget(paragraph, centered_line(poster_area));
        }
        // The placeholder card carries the name, like the artwork it stands in for
        PosterPhase::Forced | PosterPhase::Unavailable => {
            render_poster_placeholder(f, poster_area, &card.name);
        }
    }

    let name_style = if selected && focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let name = utils::truncate_to_width(&card.name, title_area.width as usize);
    let title = Paragraph::new(name)
        .style(name_style)
        .alignment(Alignment::Center);
    f.render_widget(title, title_area);
}

fn render_poster_placeholder(f: &mut Frame, area: Rect, name: &str) {
    let label = utils::truncate_to_width(name, area.width.saturating_sub(2) as usize);
    let paragraph = Paragraph::new(label)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, centered_line(area));
}

/// Single line vertically centered within `area`
fn centered_line(area: Rect) -> Rect {
    centered_rows(area, 1)
}

/// Up to `rows` lines vertically centered within `area`
fn centered_rows(area: Rect, rows: u16) -> Rect {
    let height = rows.min(area.height);
    let y = area.y + (area.height - height) / 2;
    Rect {
        x: area.x,
        y,
        width: area.width,
        height,
    }
}

fn spinner_frame(started_at: Instant) -> &'static str {
    const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let elapsed = started_at.elapsed().as_millis() / 80;
    let idx = (elapsed as usize) % FRAMES.len();
    FRAMES[idx]
}
