//! UI rendering for the TUI.
//!
//! Defines the layout and renders all UI components.

use super::app::{App, Focus};
use super::widgets::{
    editor::{calculate_scroll_offset, EditorBar},
    preview::QueryPreview,
    selector::SelectorList,
    table,
};
use crate::console::{Outcome, Selection};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: status, content, editor
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status line
            Constraint::Min(3),    // Content (selector + results)
            Constraint::Length(3), // Editor
        ])
        .split(area);

    let status_area = main_layout[0];
    let content_area = main_layout[1];
    let editor_area = main_layout[2];

    // Content layout: selector (30%) and main panel (70%)
    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(content_area);

    render_status(frame, status_area, app);
    render_selector(frame, content_layout[0], app);
    render_main_panel(frame, content_layout[1], app);
    render_editor(frame, editor_area, app);
}

/// Renders the status line: endpoint identifier and submission state.
fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " squint ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.display.endpoint().to_string(),
            Style::default().fg(Color::White),
        ),
    ];

    if app.display.is_in_flight() {
        spans.push(Span::styled(
            "  running…",
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the predefined-query sidebar.
fn render_selector(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Selector;
    let widget = SelectorList::new(
        app.selector.catalog(),
        app.selector.selection(),
        app.highlight,
        focused,
    );
    frame.render_widget(widget, area);
}

/// Renders the main panel: error, result table, preview, or help text.
fn render_main_panel(frame: &mut Frame, area: Rect, app: &App) {
    match app.display.outcome() {
        Outcome::Error(message) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error ");
            let paragraph = Paragraph::new(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            )))
            .block(block);
            frame.render_widget(paragraph, area);
        }
        Outcome::Table(result) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Results ");
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(table::ResultTable::new(result), inner);
        }
        Outcome::None => match app.selector.selection() {
            Selection::Picked(q) => {
                frame.render_widget(QueryPreview::new(q, false), area);
            }
            Selection::Confirmed(q) => {
                frame.render_widget(QueryPreview::new(q, true), area);
            }
            Selection::Empty => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray));
                let paragraph = Paragraph::new(Line::from(Span::styled(
                    "Pick a predefined query or type SQL below.",
                    Style::default().fg(Color::DarkGray),
                )))
                .block(block);
                frame.render_widget(paragraph, area);
            }
        },
    }
}

/// Renders the SQL editor bar.
fn render_editor(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Editor;
    let cursor_column = app.display.cursor_column();
    let widget = EditorBar::new(
        app.display.buffer(),
        cursor_column,
        focused,
        app.display.is_read_only(),
    );
    frame.render_widget(widget, area);

    // Position cursor in the editor when focused and editable
    if focused && !app.display.is_read_only() {
        let available_width = area.width.saturating_sub(5) as usize;
        let scroll_offset = calculate_scroll_offset(cursor_column, available_width);
        // Account for border (1) and prompt "> " (2)
        let cursor_x = area.x + 1 + 2 + (cursor_column - scroll_offset) as u16;
        let cursor_y = area.y + 1;
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
