use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use super::state::App;
use crate::help;
use crate::input::input_render;
use crate::notification::render_notification;
use crate::suggest::suggest_render;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (input_area, body_area, help_area) = (layout[0], layout[1], layout[2]);

        input_render::render_field(self, frame, input_area);
        render_body(frame, body_area);
        help::render_line(self, frame, help_area);

        // The dropdown overlays the body, anchored to the search box
        if self.suggest.is_visible() {
            suggest_render::render_dropdown(self, frame, input_area);
        }

        render_notification(frame, &self.notification);
    }
}

fn render_body(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let hint = Paragraph::new(Line::from(
        "Type a search, pick a suggestion, press Enter to print it.",
    ))
    .style(Style::default().fg(Color::DarkGray))
    .centered();
    frame.render_widget(hint, area);
}
