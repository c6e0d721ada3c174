use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

use crate::app::{App, Focus};

/// Render the search box.
///
/// The border is a projection of widget state: cyan while suggestions are
/// showing (the search-box-active flag), white when merely focused, dim
/// otherwise.
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::SearchBox;

    let border_style = if app.suggest.is_active() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    app.input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(border_style),
    );

    frame.render_widget(&app.input.textarea, area);
}
