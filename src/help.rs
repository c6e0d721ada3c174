//! Bottom help line with the key bindings for the focused area.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
};

use crate::app::{App, Focus};

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let bindings: &[(&str, &str)] = match app.focus {
        Focus::SearchBox => &[
            ("↑/↓", "select"),
            ("Enter", "search"),
            ("Esc", "hide"),
            ("Tab", "leave box"),
            ("Ctrl+C", "quit"),
        ],
        Focus::Page => &[("Tab or /", "search box"), ("q", "quit")],
    };

    let mut spans = Vec::new();
    for (i, (keys, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*keys, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Line::from(spans), area);
}
