//! Application state for the TUI.
//!
//! Wraps the console state machines with focus handling and key dispatch.
//! Key handling is synchronous and returns an Action when the host needs to
//! perform async work, keeping this state testable without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::console::{QueryDisplay, QuerySelector, Selection};

/// Which panel currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Selector,
    Editor,
}

impl Focus {
    /// Cycles to the next focus panel.
    pub fn next(self) -> Self {
        match self {
            Self::Selector => Self::Editor,
            Self::Editor => Self::Selector,
        }
    }
}

/// Async work requested by a key press.
#[derive(Debug, PartialEq)]
pub enum Action {
    /// Submit the given SQL to the executor.
    Submit(String),
}

/// Main application state.
pub struct App {
    /// Whether the application is still running.
    pub running: bool,
    /// Current focus panel.
    pub focus: Focus,
    /// Predefined-query selector.
    pub selector: QuerySelector,
    /// Submission/result surface.
    pub display: QueryDisplay,
    /// Highlight index into the selector list.
    pub highlight: usize,
}

impl App {
    /// Creates a new App for the given execution endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            running: true,
            focus: Focus::default(),
            selector: QuerySelector::new(),
            display: QueryDisplay::new(endpoint),
            highlight: 0,
        }
    }

    /// Handles a key event, returning any async work it requests.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Global shortcuts first
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.running = false;
                return None;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Selector => self.handle_selector_key(key),
            Focus::Editor => self.handle_editor_key(key),
        }
    }

    /// Key handling while the selector list has focus.
    fn handle_selector_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Up => {
                self.highlight = self.highlight.saturating_sub(1);
                self.pick_highlighted();
            }
            KeyCode::Down => {
                let last = self.selector.catalog().len().saturating_sub(1);
                self.highlight = (self.highlight + 1).min(last);
                self.pick_highlighted();
            }
            KeyCode::Enter => {
                self.selector.confirm_selection();
                self.sync_display();
            }
            KeyCode::Esc => {
                self.selector.clear_selection();
                self.sync_display();
            }
            _ => {}
        }
        None
    }

    /// Key handling while the SQL editor has focus.
    fn handle_editor_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter => {
                return self.display.begin_submit().map(Action::Submit);
            }
            KeyCode::Esc => {
                self.selector.clear_selection();
                self.sync_display();
            }
            KeyCode::Char(c) => self.display.insert(c),
            KeyCode::Backspace => self.display.backspace(),
            KeyCode::Left => self.display.move_left(),
            KeyCode::Right => self.display.move_right(),
            KeyCode::Home => self.display.move_home(),
            KeyCode::End => self.display.move_end(),
            _ => {}
        }
        None
    }

    /// Picks the highlighted catalog entry (preview only, nothing is
    /// forwarded until confirmed).
    fn pick_highlighted(&mut self) {
        let name = self
            .selector
            .catalog()
            .get(self.highlight)
            .map(|e| e.display_name().to_string());
        match name {
            Some(name) => self.selector.select_by_name(&name),
            None => self.selector.clear_selection(),
        }
    }

    /// Pushes the selection snapshot into the display: confirmed SQL seeds
    /// a read-only buffer, anything else returns the editor to freehand.
    fn sync_display(&mut self) {
        let sql = self
            .selector
            .selection()
            .confirmed_sql()
            .unwrap_or_default()
            .to_string();
        self.display.set_predefined_sql(&sql);
    }

    /// True while the highlighted entry is merely picked, not confirmed.
    pub fn has_preview(&self) -> bool {
        matches!(self.selector.selection(), Selection::Picked(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CatalogEntry, ExecutorClient, MockExecutorClient, RawCatalogEntry};
    use crate::console::Outcome;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn entry(name: &str, sql: &str) -> CatalogEntry {
        CatalogEntry::from_raw(RawCatalogEntry {
            name: Some(name.to_string()),
            sql: Some(sql.to_string()),
            description: None,
            selected: None,
        })
    }

    async fn app_with_catalog(catalog: Vec<CatalogEntry>) -> App {
        let client = MockExecutorClient::with_catalog(catalog);
        let mut app = App::new("test");
        app.selector.load_catalog(&client).await;
        app
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = app_with_catalog(vec![]).await;
        app.handle_key(ctrl('c'));
        assert!(!app.running);
    }

    #[tokio::test]
    async fn test_tab_cycles_focus() {
        let mut app = app_with_catalog(vec![]).await;
        assert_eq!(app.focus, Focus::Selector);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Editor);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Selector);
    }

    #[tokio::test]
    async fn test_pick_confirm_seeds_editor() {
        let mut app = app_with_catalog(vec![
            entry("A", "    SELECT 1\n    FROM x"),
            entry("B", "SELECT 2"),
        ])
        .await;

        app.handle_key(key(KeyCode::Down));
        assert!(app.has_preview());
        // Preview alone must not touch the editor buffer.
        assert_eq!(app.display.buffer(), "");

        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.display.buffer(), "SELECT 1\nFROM x");
        assert!(app.display.is_read_only());
    }

    #[tokio::test]
    async fn test_escape_clears_back_to_freehand() {
        let mut app = app_with_catalog(vec![entry("A", "SELECT 1")]).await;

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.display.is_read_only());

        app.handle_key(key(KeyCode::Esc));
        assert!(app.selector.selection().is_empty());
        assert!(!app.display.is_read_only());
        assert_eq!(app.display.buffer(), "");
    }

    #[tokio::test]
    async fn test_editor_typing_and_submit_action() {
        let mut app = app_with_catalog(vec![]).await;
        app.handle_key(key(KeyCode::Tab));

        for c in "SELECT 1".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        let action = app.handle_key(key(KeyCode::Enter));
        assert_eq!(action, Some(Action::Submit("SELECT 1".to_string())));
        assert!(app.display.is_in_flight());

        // Submit key is ignored while the request is outstanding.
        assert_eq!(app.handle_key(key(KeyCode::Enter)), None);
    }

    #[tokio::test]
    async fn test_submit_outcome_roundtrip() {
        let client = MockExecutorClient::new();
        let mut app = app_with_catalog(vec![]).await;
        app.handle_key(key(KeyCode::Tab));
        for c in "SELECT 1".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        let Some(Action::Submit(sql)) = app.handle_key(key(KeyCode::Enter)) else {
            panic!("expected submit action");
        };

        let response = client
            .execute(app.display.endpoint(), &sql, app.display.is_read_only())
            .await;
        app.display.finish_submit(response);
        assert!(matches!(app.display.outcome(), Outcome::Table(_)));
        assert!(!app.display.is_in_flight());
    }

    #[tokio::test]
    async fn test_highlight_clamps_to_catalog() {
        let mut app = app_with_catalog(vec![entry("A", "SELECT 1")]).await;
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.highlight, 0);
    }
}
