use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::logic::notify::{NotificationPhase, Severity};
use crate::model::ui::Notification;
use crate::utils;

/// Render the notification pop-up near the top of the screen
pub fn render_notification(
    f: &mut Frame,
    area: Rect,
    notification: &Notification,
    phase: NotificationPhase,
) {
    if phase == NotificationPhase::Expired {
        return;
    }

    let max_width = (area.width as usize).min(80);
    let width = (utils::display_width(&notification.message) + 6).min(max_width) as u16;
    let height = 3;

    let x = (area.width.saturating_sub(width)) / 2;
    let y = 3; // Near the top but not too close

    let toast_area = Rect {
        x: area.x + x,
        y: area.y + y,
        width,
        height,
    };

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let (icon, color) = match notification.severity {
        Severity::Info => ("ℹ ", Color::Cyan),
        Severity::Success => ("✓ ", Color::Green),
        Severity::Error => ("✗ ", Color::Red),
    };

    let mut icon_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    let mut text_style = Style::default();
    let mut border_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if phase == NotificationPhase::FadingOut {
        icon_style = icon_style.add_modifier(Modifier::DIM);
        text_style = text_style.add_modifier(Modifier::DIM);
        border_style = border_style.add_modifier(Modifier::DIM);
    }

    let line = Line::from(vec![
        Span::styled(icon, icon_style),
        Span::styled(notification.message.as_str(), text_style),
    ]);

    let block = Block::default().borders(Borders::ALL).border_style(border_style);

    let paragraph = Paragraph::new(vec![line])
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, toast_area);
}
