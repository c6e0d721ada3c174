use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::notification_state::NotificationState;

/// Render the current notification in the top-right corner, if any.
pub fn render_notification(frame: &mut Frame, state: &NotificationState) {
    let Some(notification) = state.current() else {
        return;
    };

    let frame_area = frame.area();
    let width = (notification.message.chars().count() as u16 + 4).min(frame_area.width);
    let area = Rect {
        x: frame_area.width.saturating_sub(width),
        y: 0,
        width,
        height: 3.min(frame_area.height),
    };

    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(notification.message.as_str())
        .style(
            Style::default()
                .fg(notification.style.fg)
                .bg(notification.style.bg),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(notification.style.border)),
        );

    frame.render_widget(paragraph, area);
}
