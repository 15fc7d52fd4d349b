//! Predefined-query list widget for the TUI.
//!
//! Renders the catalog sidebar with the current highlight and a marker on
//! the confirmed entry. Malformed catalog entries are listed dimmed.

use crate::api::CatalogEntry;
use crate::console::Selection;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

/// Sidebar listing the predefined queries.
pub struct SelectorList<'a> {
    entries: &'a [CatalogEntry],
    selection: &'a Selection,
    highlight: usize,
    focused: bool,
}

impl<'a> SelectorList<'a> {
    /// Creates a new selector list widget.
    pub fn new(
        entries: &'a [CatalogEntry],
        selection: &'a Selection,
        highlight: usize,
        focused: bool,
    ) -> Self {
        Self {
            entries,
            selection,
            highlight,
            focused,
        }
    }
}

impl Widget for SelectorList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Queries (↑↓ pick, Enter use, Esc clear) ");

        let inner = block.inner(area);
        block.render(area, buf);

        if self.entries.is_empty() {
            let msg = "No predefined queries";
            let msg_style = Style::default().fg(Color::DarkGray);
            let x = inner.x + (inner.width.saturating_sub(msg.len() as u16)) / 2;
            let y = inner.y + inner.height / 2;
            buf.set_string(x, y, msg, msg_style);
            return;
        }

        let max_items = inner.height as usize;

        // Keep the highlighted entry visible
        let scroll_offset = if self.highlight >= max_items {
            self.highlight - max_items + 1
        } else {
            0
        };

        let confirmed_name = match self.selection {
            Selection::Confirmed(q) => Some(q.name.as_str()),
            _ => None,
        };

        let mut y = inner.y;
        for (idx, entry) in self
            .entries
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(max_items)
        {
            if y >= inner.y + inner.height {
                break;
            }

            let is_highlighted = idx == self.highlight;
            let is_malformed = entry.as_valid().is_none();

            let style = if is_highlighted {
                Style::default()
                    .bg(Color::DarkGray)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else if is_malformed {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };

            if is_highlighted {
                for x in inner.x..inner.x + inner.width {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_style(style);
                    }
                }
            }

            let marker = if confirmed_name == Some(entry.display_name()) {
                "● "
            } else {
                "  "
            };

            // Width counts characters; catalog names are not ours to assume
            // ASCII.
            let max_width = inner.width.saturating_sub(4) as usize;
            let name = entry.display_name();
            let display_name = if name.chars().count() > max_width {
                let head: String = name.chars().take(max_width.saturating_sub(3)).collect();
                format!("{head}...")
            } else {
                name.to_string()
            };

            buf.set_string(inner.x + 1, y, format!("{marker}{display_name}"), style);
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RawCatalogEntry;
    use ratatui::buffer::Buffer;

    fn entries() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::from_raw(RawCatalogEntry {
                name: Some("active_users".to_string()),
                sql: Some("SELECT 1".to_string()),
                ..Default::default()
            }),
            CatalogEntry::from_raw(RawCatalogEntry {
                name: Some("broken".to_string()),
                ..Default::default()
            }),
        ]
    }

    fn rendered(widget: SelectorList) -> String {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf.cell((x, y)).unwrap().symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_lists_all_entries_including_malformed() {
        let catalog = entries();
        let screen = rendered(SelectorList::new(&catalog, &Selection::Empty, 0, true));
        assert!(screen.contains("active_users"));
        assert!(screen.contains("broken"));
    }

    #[test]
    fn test_confirmed_entry_is_marked() {
        let catalog = entries();
        let selection = Selection::Confirmed(catalog[0].as_valid().unwrap().clone());
        let screen = rendered(SelectorList::new(&catalog, &selection, 0, true));
        assert!(screen.contains("● active_users"));
    }

    #[test]
    fn test_long_multibyte_name_is_truncated() {
        let catalog = vec![CatalogEntry::from_raw(RawCatalogEntry {
            name: Some("métriques_détaillées_par_région".to_string()),
            sql: Some("SELECT 1".to_string()),
            ..Default::default()
        })];
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        SelectorList::new(&catalog, &Selection::Empty, 0, true).render(area, &mut buf);

        let line: String = (0..area.width)
            .map(|x| buf.cell((x, 1)).unwrap().symbol())
            .collect();
        assert!(line.contains("métriques"));
        assert!(line.contains("..."));
    }

    #[test]
    fn test_empty_catalog_placeholder() {
        let screen = rendered(SelectorList::new(&[], &Selection::Empty, 0, false));
        assert!(screen.contains("No predefined queries"));
    }
}
