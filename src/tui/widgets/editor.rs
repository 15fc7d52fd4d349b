//! SQL editor widget for the TUI.
//!
//! Single-line input bar for freehand SQL, with cursor scrolling. When the
//! buffer holds confirmed predefined SQL the bar renders locked.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Calculates the scroll offset needed to keep the cursor visible.
///
/// Both the cursor column and the returned offset count characters, not
/// bytes.
pub fn calculate_scroll_offset(cursor_column: usize, available_width: usize) -> usize {
    if cursor_column <= available_width {
        0
    } else {
        cursor_column.saturating_sub(available_width)
    }
}

/// SQL editor bar widget.
pub struct EditorBar<'a> {
    text: &'a str,
    cursor_column: usize,
    focused: bool,
    read_only: bool,
}

impl<'a> EditorBar<'a> {
    /// Creates a new editor bar widget.
    ///
    /// `cursor_column` is the cursor position in characters.
    pub fn new(text: &'a str, cursor_column: usize, focused: bool, read_only: bool) -> Self {
        Self {
            text,
            cursor_column,
            focused,
            read_only,
        }
    }
}

impl Widget for EditorBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let title = if self.read_only {
            " SQL (predefined, read-only — Esc to clear) "
        } else {
            " SQL (Enter to run) "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);

        let prompt_style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
        let text_style = if self.read_only {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        // Border left (1) + prompt "> " (2) + border right (1) + cursor (1)
        let available_width = area.width.saturating_sub(5) as usize;
        let scroll_offset = calculate_scroll_offset(self.cursor_column, available_width);

        // Multi-line predefined SQL is flattened for the bar; the preview
        // panel shows it with line breaks intact.
        let flat = self.text.replace('\n', " ");
        let visible_text: String = flat.chars().skip(scroll_offset).collect();

        let line = Line::from(vec![
            Span::styled("> ", prompt_style),
            Span::styled(visible_text, text_style),
        ]);

        let paragraph = Paragraph::new(line).block(block);
        paragraph.render(area, buf);
    }
}
