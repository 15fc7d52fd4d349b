//! Query preview widget for the TUI.
//!
//! Shows the picked entry's description and formatted SQL read-only, before
//! the operator confirms use of it.

use crate::api::PredefinedQuery;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Read-only preview of a picked predefined query.
pub struct QueryPreview<'a> {
    query: &'a PredefinedQuery,
    confirmed: bool,
}

impl<'a> QueryPreview<'a> {
    /// Creates a new preview widget.
    pub fn new(query: &'a PredefinedQuery, confirmed: bool) -> Self {
        Self { query, confirmed }
    }

    /// Renders the preview to lines for embedding.
    pub fn render_to_lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        let state = if self.confirmed {
            " (confirmed)"
        } else {
            " (picked — Enter to use)"
        };
        lines.push(Line::from(vec![
            Span::styled(
                &*self.query.name,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(state, Style::default().fg(Color::DarkGray)),
        ]));

        if let Some(description) = &self.query.description {
            lines.push(Line::from(Span::styled(
                &**description,
                Style::default().fg(Color::White),
            )));
        }

        lines.push(Line::default());
        for sql_line in self.query.sql.lines() {
            lines.push(Line::from(Span::styled(
                sql_line,
                Style::default().fg(Color::Yellow),
            )));
        }

        lines
    }
}

impl Widget for QueryPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Preview ");

        let inner = block.inner(area);
        block.render(area, buf);

        let paragraph = Paragraph::new(self.render_to_lines());
        paragraph.render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> PredefinedQuery {
        PredefinedQuery {
            name: "active_users".to_string(),
            sql: "SELECT 1\nFROM x".to_string(),
            description: Some("d".to_string()),
        }
    }

    #[test]
    fn test_preview_lines() {
        let q = query();
        let lines = QueryPreview::new(&q, false).render_to_lines();
        // name line, description, blank, 2 SQL lines
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].spans[0].content, "active_users");
    }

    #[test]
    fn test_preview_marks_confirmed() {
        let q = query();
        let lines = QueryPreview::new(&q, true).render_to_lines();
        assert!(lines[0].spans[1].content.contains("confirmed"));
    }

    #[test]
    fn test_preview_without_description() {
        let q = PredefinedQuery {
            description: None,
            ..query()
        };
        let lines = QueryPreview::new(&q, false).render_to_lines();
        assert_eq!(lines.len(), 4);
    }
}
