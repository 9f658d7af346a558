//! Help popup rendering
//!
//! Centered modal listing the key bindings by section.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::help::{HELP_FOOTER, HELP_SECTIONS};
use crate::widgets::popup;

pub const HELP_POPUP_WIDTH: u16 = 64;

pub fn help_lines() -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();

    for (i, section) in HELP_SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                section.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        for (key, desc) in section.entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<18}", key),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", HELP_FOOTER),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

pub fn render_popup(app: &mut App, frame: &mut Frame) {
    let frame_area = frame.area();
    if frame_area.width < 20 || frame_area.height < 8 {
        return;
    }

    let lines = help_lines();
    let content_height = lines.len() as u16;
    let popup_area = popup::centered_popup(frame_area, HELP_POPUP_WIDTH, content_height + 2);
    popup::clear_area(frame, popup_area);

    let visible_height = popup_area.height.saturating_sub(2);
    app.help
        .scroll
        .update_bounds(content_height as u32, visible_height);

    let popup = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .scroll((app.help.scroll.offset, 0));

    frame.render_widget(popup, popup_area);
}
