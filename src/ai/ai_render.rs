//! Suggestion card rendering
//!
//! One bordered card per suggestion, side by side, with any error or
//! loading state above them.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::NameSuggestion;
use crate::app::{App, Focus};
use crate::widgets::text::wrap_text;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(frame_count: u64) -> &'static str {
    SPINNER[(frame_count / 2) as usize % SPINNER.len()]
}

/// Render the suggestions pane
pub fn render_suggestions(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Suggestions;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Name Suggestions ")
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(1) as usize;
    let status = status_lines(app, width);
    let status_height = (status.len() as u16).min(inner.height);
    let [status_area, cards_area] =
        Layout::vertical([Constraint::Length(status_height), Constraint::Min(0)]).areas(inner);

    if !status.is_empty() {
        frame.render_widget(Paragraph::new(status), status_area);
    }
    if !app.ai.suggestions.is_empty() && cards_area.height > 2 {
        render_cards(app, frame, cards_area);
    }
}

/// Error, loading and placeholder text shown above the cards
fn status_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let ai = &app.ai;
    let mut lines = Vec::new();

    if let Some(error) = &ai.error {
        let mut wrapped = wrap_text(error, width.saturating_sub(2)).into_iter();
        let first = wrapped.next().unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled(" ⚠ ", Style::default().fg(Color::Red)),
            Span::styled(first, Style::default().fg(Color::Red)),
        ]));
        for line in wrapped {
            lines.push(Line::styled(
                format!("   {}", line),
                Style::default().fg(Color::Red),
            ));
        }
        return lines;
    }

    if ai.loading {
        let mut text = format!(" {} Generating names...", spinner_frame(app.frame_count));
        if ai.received_chars > 0 {
            text.push_str(&format!(" ({} chars received)", ai.received_chars));
        }
        lines.push(Line::styled(
            text,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        ));
        return lines;
    }

    if !ai.configured {
        lines.push(Line::from(vec![
            Span::styled(" ⚙ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                "Setup Required",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::styled(
            format!(
                "   Set {} or add api_key under [ai] in ~/.config/zhname/config.toml",
                app.api_key_env
            ),
            Style::default().fg(Color::Gray),
        ));
        return lines;
    }

    if !ai.has_result {
        lines.push(Line::styled(
            " Enter your English name and interests, then press Enter.",
            Style::default().fg(Color::DarkGray),
        ));
    } else if ai.suggestions.is_empty() {
        lines.push(Line::styled(
            " The model returned no names. Press r to try again.",
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines
}

fn render_cards(app: &mut App, frame: &mut Frame, area: Rect) {
    let count = app.ai.suggestions.len() as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let columns = Layout::horizontal(constraints).split(area);

    let pane_focused = app.focus == Focus::Suggestions;
    let mut tallest = 0;

    for (i, (suggestion, column)) in app.ai.suggestions.iter().zip(columns.iter()).enumerate() {
        let selected = i == app.selected_card;
        let favorite = app.favorites.is_favorite(&suggestion.chinese_name);
        let speaking = app.speech.is_speaking(&suggestion.chinese_name);

        let border_color = match (selected, pane_focused) {
            (true, true) => Color::Yellow,
            (true, false) => Color::Gray,
            _ => Color::DarkGray,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner_width = column.width.saturating_sub(2) as usize;
        let lines = card_lines(suggestion, favorite, speaking, inner_width);
        tallest = tallest.max(lines.len() as u32);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((app.card_scroll.offset, 0));
        frame.render_widget(paragraph, *column);
    }

    app.card_scroll
        .update_bounds(tallest, area.height.saturating_sub(2));
}

/// Lines of one card, pre-wrapped to `width` columns
pub fn card_lines(
    suggestion: &NameSuggestion,
    favorite: bool,
    speaking: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut title = vec![Span::styled(
        format!(" {}", suggestion.chinese_name),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    if favorite {
        title.push(Span::styled(" ★", Style::default().fg(Color::Yellow)));
    }
    if speaking {
        title.push(Span::styled(" 🔊", Style::default().fg(Color::Green)));
    }
    lines.push(Line::from(title));
    lines.push(Line::styled(
        format!(" {}", suggestion.pinyin),
        Style::default().fg(Color::Cyan),
    ));

    let text_width = width.saturating_sub(2).max(1);

    push_heading(&mut lines, "Character Meanings");
    for (character, meaning) in suggestion.character_meanings() {
        let prefix = match character {
            Some(c) => format!(" {} ", c),
            None => "    ".to_string(),
        };
        let wrapped = wrap_text(meaning, width.saturating_sub(4).max(1));
        for (i, line) in wrapped.into_iter().enumerate() {
            let lead = if i == 0 {
                Span::styled(prefix.clone(), Style::default().fg(Color::Yellow))
            } else {
                Span::raw("    ")
            };
            lines.push(Line::from(vec![
                lead,
                Span::styled(line, Style::default().fg(Color::Gray)),
            ]));
        }
    }

    push_section(&mut lines, "Name Connection", &suggestion.explanation.overall, text_width);
    push_section(
        &mut lines,
        "Cultural Significance",
        &suggestion.explanation.cultural,
        text_width,
    );
    push_section(
        &mut lines,
        "Personality & Traits",
        &suggestion.explanation.personality,
        text_width,
    );
    lines
}

fn push_heading(lines: &mut Vec<Line<'static>>, heading: &str) {
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!(" {}", heading),
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ));
}

fn push_section(lines: &mut Vec<Line<'static>>, heading: &str, text: &str, width: usize) {
    push_heading(lines, heading);
    for line in wrap_text(text, width) {
        lines.push(Line::styled(
            format!(" {}", line),
            Style::default().fg(Color::Gray),
        ));
    }
}

#[cfg(test)]
#[path = "ai_render_tests.rs"]
mod ai_render_tests;
