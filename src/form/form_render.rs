//! Form rendering
//!
//! Two bordered input fields side by side, with the submit hint or the
//! validation error underneath.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::FormField;
use crate::app::{App, Focus};

/// Height of the form area: bordered inputs plus the hint line
pub const FORM_HEIGHT: u16 = 4;

pub fn render_form(app: &mut App, frame: &mut Frame, area: Rect) {
    let form_focused = app.focus == Focus::Form;
    let loading = app.ai.loading;

    let [fields_area, hint_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);
    let [name_area, interests_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .areas(fields_area);

    app.form.update_cursor_styles(form_focused);
    for (field, field_area) in [
        (FormField::Name, name_area),
        (FormField::Interests, interests_area),
    ] {
        let active = form_focused && app.form.focused == field;
        let border_color = if active { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", field.label()))
            .border_style(Style::default().fg(border_color));

        let textarea = match field {
            FormField::Name => &mut app.form.name,
            FormField::Interests => &mut app.form.interests,
        };
        textarea.set_block(block);
        frame.render_widget(&*textarea, field_area);
    }

    let hint = if let Some(error) = &app.form.error {
        Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if loading {
        Line::from(Span::styled(
            " Generating names... (Esc to cancel)",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(vec![
            Span::styled(" Enter", Style::default().fg(Color::Yellow)),
            Span::styled(": Generate Chinese Names", Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(hint), hint_area);
}
