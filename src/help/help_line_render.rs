//! Status line rendering
//!
//! Key hints for the focused pane at the bottom of the screen, or the
//! loading indicator while names are being generated.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ai::ai_render::spinner_frame;
use crate::app::{App, Focus};

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    if app.ai.loading {
        let mut text = format!(" {} Generating names...", spinner_frame(app.frame_count));
        if app.ai.received_chars > 0 {
            text.push_str(&format!(" {} chars", app.ai.received_chars));
        }
        let line = Line::from(vec![
            Span::styled(text, Style::default().fg(Color::Yellow)),
            Span::styled(" | Esc: Cancel", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let help_text = match app.focus {
        Focus::Form => " F1: Help | Tab: Next Field | Enter: Generate | Ctrl+C: Quit",
        Focus::Suggestions => {
            " ?: Help | ←/→: Select | f: Favorite | s: Speak | y: Copy | e: Export | r: Regenerate | q: Quit"
        }
        Focus::Favorites => {
            " ?: Help | ↑/↓: Select | d: Remove | s: Speak | y: Copy All | e: Export | q: Quit"
        }
    };

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
