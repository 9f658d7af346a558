use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use super::app_state::App;
use crate::form::form_render::{FORM_HEIGHT, render_form};
use crate::notification::render_notification;

const HEADER_HEIGHT: u16 = 1;
const MAX_FAVORITES_HEIGHT: u16 = 10;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);

        let favorites_height = (self.favorites.len() as u16)
            .saturating_mul(2)
            .saturating_add(2)
            .clamp(3, MAX_FAVORITES_HEIGHT);
        let [header_area, form_area, suggestions_area, favorites_area, status_area] =
            Layout::vertical([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(FORM_HEIGHT),
                Constraint::Min(6),
                Constraint::Length(favorites_height),
                Constraint::Length(1),
            ])
            .areas(frame.area());

        self.render_header(frame, header_area);
        render_form(self, frame, form_area);
        crate::ai::ai_render::render_suggestions(self, frame, suggestions_area);
        crate::favorites::favorites_render::render_panel(self, frame, favorites_area);
        crate::help::help_line_render::render_line(self, frame, status_area);

        if self.help.visible {
            crate::help::help_popup_render::render_popup(self, frame);
        }

        render_notification(frame, &mut self.notification);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let model = format!("{} · {} ", self.ai.provider_name, self.ai.model_name);
        let [title_area, model_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(model.width() as u16)])
                .areas(area);

        let title = Line::from(vec![
            Span::styled(
                " 中文名字 ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Chinese Name Generator",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), title_area);
        frame.render_widget(
            Paragraph::new(model)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right),
            model_area,
        );
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
