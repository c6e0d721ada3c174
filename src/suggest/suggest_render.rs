//! Dropdown rendering
//!
//! Projects the suggestion state onto a popup anchored below the search
//! box. The selected row is marked and inverted; long lists scroll so the
//! selection stays visible.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::app::App;
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;
const MIN_POPUP_WIDTH: usize = 20;

pub fn render_dropdown(app: &App, frame: &mut Frame, input_area: Rect) {
    let items = app.suggest.items();
    if items.is_empty() {
        return;
    }

    let max_visible = app.config.max_visible.max(1);
    let selected = app.suggest.selected_index();

    // Scroll the window so the selected row stays inside it
    let offset = match selected {
        Some(idx) if idx >= max_visible => idx + 1 - max_visible,
        _ => 0,
    };

    let visible: Vec<(usize, &str)> = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible)
        .map(|(i, item)| (i, item.text.as_str()))
        .collect();

    let width = visible
        .iter()
        .map(|(_, text)| text.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_POPUP_WIDTH);

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        width as u16 + POPUP_PADDING,
        visible.len() as u16 + POPUP_BORDER_HEIGHT,
        POPUP_OFFSET_X,
    );

    let rows: Vec<ListItem> = visible
        .iter()
        .map(|(i, text)| {
            let line = if Some(*i) == selected {
                Line::from(Span::styled(
                    format!("► {text}"),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {text}"),
                    Style::default().fg(Color::White),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(list, popup_area);
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
