//! Tests for dropdown rendering

use super::*;
use crate::test_utils::test_helpers::{app_with_suggestions, key};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::KeyCode;

fn render_dropdown_to_string(app: &crate::app::App) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    let input_area = Rect::new(0, 0, 80, 3);

    terminal
        .draw(|frame| render_dropdown(app, frame, input_area))
        .unwrap();

    terminal.backend().to_string()
}

#[test]
fn test_items_render_in_order() {
    let app = app_with_suggestions("abc", &["first", "second", "third"]);

    let output = render_dropdown_to_string(&app);

    let first = output.find("first").unwrap();
    let second = output.find("second").unwrap();
    let third = output.find("third").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_selected_row_carries_marker() {
    let mut app = app_with_suggestions("abc", &["alpha", "beta"]);
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Down));

    let output = render_dropdown_to_string(&app);

    assert!(output.contains("► beta"));
    assert!(!output.contains("► alpha"));
}

#[test]
fn test_no_marker_without_selection() {
    let app = app_with_suggestions("abc", &["alpha", "beta"]);

    let output = render_dropdown_to_string(&app);

    assert!(!output.contains('►'));
}

#[test]
fn test_window_follows_selection_past_visible_rows() {
    let texts: Vec<String> = (0..15).map(|i| format!("item-{i:02}")).collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    let mut app = app_with_suggestions("item", &refs);

    // Walk to the 13th item, past the 10-row window
    for _ in 0..13 {
        app.handle_key_event(key(KeyCode::Down));
    }

    let output = render_dropdown_to_string(&app);

    assert!(output.contains("► item-12"));
    assert!(
        !output.contains("item-00"),
        "rows above the window must scroll out"
    );
}

#[test]
fn test_empty_item_list_renders_nothing() {
    let app = app_with_suggestions("abc", &[]);

    let output = render_dropdown_to_string(&app);

    assert!(!output.contains("Suggestions"));
}
