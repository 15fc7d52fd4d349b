//! Query display state machine.
//!
//! Owns the SQL submission buffer and the latest execution outcome. The
//! hosting shell feeds it either a confirmed predefined statement (read-only
//! mode) or operator keystrokes (freehand mode), drives submission against
//! an ExecutorClient, and renders the stored outcome with whatever
//! row-to-table renderer it chooses.

use crate::api::{ExecutorClient, QueryResult};
use crate::error::Result;

/// What the display currently has to show below the editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Outcome {
    /// Nothing submitted yet.
    #[default]
    None,
    /// The latest submission succeeded.
    Table(QueryResult),
    /// The latest submission failed. Any prior table is gone, not stale.
    Error(String),
}

/// Submission and result surface for one execution endpoint.
#[derive(Debug, Default)]
pub struct QueryDisplay {
    /// Identifier of the execution endpoint, forwarded to the status line.
    endpoint: String,
    /// Current SQL buffer contents.
    buffer: String,
    /// Cursor position within the buffer (byte index, always on a char
    /// boundary).
    cursor: usize,
    /// True when the buffer holds confirmed predefined SQL and must not be
    /// edited.
    read_only: bool,
    /// True while a submission is outstanding. Resubmission is refused until
    /// the outcome lands.
    in_flight: bool,
    outcome: Outcome,
}

impl QueryDisplay {
    /// Creates a display for the given execution endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// The execution endpoint identifier.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Current buffer contents.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position within the buffer.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor position as a character column, for rendering.
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }

    /// True when the buffer holds predefined SQL and rejects edits.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// True while a submission is outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// The latest submission outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Seeds the buffer from confirmed predefined SQL.
    ///
    /// A non-empty string switches the display into read-only mode with the
    /// statement pre-filled; the empty string returns it to freehand mode
    /// with an empty, editable buffer.
    pub fn set_predefined_sql(&mut self, sql: &str) {
        if sql.is_empty() {
            if self.read_only {
                self.buffer.clear();
                self.cursor = 0;
            }
            self.read_only = false;
        } else {
            self.buffer = sql.to_string();
            self.cursor = self.buffer.len();
            self.read_only = true;
        }
    }

    /// Inserts a character at the cursor. Ignored in read-only mode.
    pub fn insert(&mut self, c: char) {
        if self.read_only {
            return;
        }
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Deletes the character before the cursor. Ignored in read-only mode.
    pub fn backspace(&mut self) {
        if self.read_only || self.cursor == 0 {
            return;
        }
        let prev = self.buffer[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.buffer.remove(prev);
        self.cursor = prev;
    }

    /// Moves the cursor left one character.
    pub fn move_left(&mut self) {
        self.cursor = self.buffer[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }

    /// Moves the cursor right one character.
    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            let c = self.buffer[self.cursor..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(0);
            self.cursor += c;
        }
    }

    /// Moves the cursor to the start of the buffer.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end of the buffer.
    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Starts a submission, returning the SQL snapshot to send.
    ///
    /// Returns `None` when the buffer is empty or a submission is already
    /// outstanding; the caller must later hand the response to
    /// [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.in_flight || self.buffer.trim().is_empty() {
            return None;
        }
        self.in_flight = true;
        Some(self.buffer.clone())
    }

    /// Records the response of the outstanding submission.
    ///
    /// An error replaces any prior table so stale results are never shown.
    pub fn finish_submit(&mut self, response: Result<QueryResult>) {
        self.in_flight = false;
        self.outcome = match response {
            Ok(result) => Outcome::Table(result),
            Err(e) => Outcome::Error(e.to_string()),
        };
    }

    /// Submits the current buffer inline. Convenience for hosts that do not
    /// need to interleave rendering with the request.
    pub async fn submit(&mut self, client: &dyn ExecutorClient) {
        let Some(sql) = self.begin_submit() else {
            return;
        };
        let response = client.execute(&self.endpoint, &sql, self.read_only).await;
        self.finish_submit(response);
    }
}
