use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::ai::NameSuggestion;
use crate::app::{App, Focus};
use crate::widgets::text::truncate_to_width;

pub fn render_panel(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Favorites;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Favorites ({}) ", app.favorites.len()))
        .border_style(Style::default().fg(border_color));

    if app.favorites.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " No favorites yet. Press f on a name to save it.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .favorites
        .items()
        .iter()
        .map(|favorite| {
            let speaking = app.speech.is_speaking(&favorite.chinese_name);
            favorite_item(favorite, speaking, inner_width)
        })
        .collect();

    let highlight = if focused {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items).block(block).highlight_style(highlight);

    let mut state = ListState::default().with_selected(Some(app.favorites.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn favorite_item(favorite: &NameSuggestion, speaking: bool, width: usize) -> ListItem<'static> {
    let mut title = vec![
        Span::styled("★ ", Style::default().fg(Color::Yellow)),
        Span::styled(
            favorite.chinese_name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", favorite.pinyin),
            Style::default().fg(Color::Cyan),
        ),
    ];
    if speaking {
        title.push(Span::styled("  🔊", Style::default().fg(Color::Green)));
    }

    let characters: Vec<String> = favorite.chinese_name.chars().map(String::from).collect();
    let detail = format!(
        "  {}  {}",
        characters.join(" · "),
        favorite.explanation.overall
    );

    ListItem::new(vec![
        Line::from(title),
        Line::from(Span::styled(
            truncate_to_width(&detail, width),
            Style::default().fg(Color::Gray),
        )),
    ])
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::app::Focus;
    use crate::test_utils::test_helpers::{app_with_suggestions, key, render_to_string, test_app};

    #[test]
    fn test_empty_panel() {
        let mut app = test_app();
        let output = render_to_string(&mut app, 100, 40);
        assert!(output.contains("Favorites (0)"));
        assert!(output.contains("No favorites yet"));
    }

    #[test]
    fn test_lists_favorites_with_details() {
        let mut app = app_with_suggestions();
        app.focus = Focus::Suggestions;
        app.handle_key_event(key(KeyCode::Char('f')));

        let output = render_to_string(&mut app, 120, 40);
        assert!(output.contains("Favorites (1)"));
        assert!(output.contains("Overall meaning of 艾琳"));
    }
}
