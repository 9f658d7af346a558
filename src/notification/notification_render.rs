use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::{NotificationKind, NotificationState};
use crate::widgets::popup;

const MAX_WIDTH: u16 = 60;

/// Render the current notification, dropping it first if it has expired
pub fn render_notification(frame: &mut Frame, state: &mut NotificationState) {
    state.clear_expired();
    let Some(notification) = state.current() else {
        return;
    };

    let color = match notification.kind {
        NotificationKind::Info => Color::Green,
        NotificationKind::Warning => Color::Yellow,
        NotificationKind::Error => Color::Red,
    };

    let text_width = notification.message.width() as u16;
    let width = (text_width + 4).min(MAX_WIDTH);
    let area = popup::top_right_popup(frame.area(), width, 3);
    if area.width < 5 || area.height < 3 {
        return;
    }

    popup::clear_area(frame, area);
    let paragraph = Paragraph::new(Line::styled(
        format!(" {}", notification.message),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(paragraph, area);
}
