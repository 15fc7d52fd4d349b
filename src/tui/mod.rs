//! Terminal User Interface for Squint.
//!
//! Provides the main TUI application loop using ratatui and crossterm.

pub mod app;
mod ui;
pub mod widgets;

pub use app::App;

use crate::api::{ExecutorClient, QueryResult};
use crate::error::{Result, SquintError};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Messages sent from background tasks to the main loop.
#[derive(Debug)]
enum AsyncMessage {
    /// A query submission completed.
    ExecutionFinished(Result<QueryResult>),
}

/// The main TUI application runner.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    client: Arc<dyn ExecutorClient>,
}

impl Tui {
    /// Creates a new TUI instance, initializing the terminal.
    pub fn new(client: Arc<dyn ExecutorClient>) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        Ok(Self { terminal, client })
    }

    /// Sets up the terminal for TUI rendering.
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()
            .map_err(|e| SquintError::internal(format!("Failed to enable raw mode: {e}")))?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .map_err(|e| SquintError::internal(format!("Failed to enter alternate screen: {e}")))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)
            .map_err(|e| SquintError::internal(format!("Failed to create terminal: {e}")))?;

        Ok(terminal)
    }

    /// Restores the terminal to its original state.
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()
            .map_err(|e| SquintError::internal(format!("Failed to disable raw mode: {e}")))?;

        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .map_err(|e| SquintError::internal(format!("Failed to leave alternate screen: {e}")))?;

        self.terminal
            .show_cursor()
            .map_err(|e| SquintError::internal(format!("Failed to show cursor: {e}")))?;

        Ok(())
    }

    /// Runs the main TUI event loop.
    pub async fn run(&mut self, endpoint: &str) -> Result<()> {
        // Restore the terminal on panic
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        let mut app_state = App::new(endpoint);

        // The catalog fetch completes before the selector becomes
        // interactive; failures leave an empty list and the console usable.
        app_state.selector.load_catalog(self.client.as_ref()).await;
        info!(
            "Console ready with {} predefined queries",
            app_state.selector.catalog().len()
        );

        let (tx, mut rx) = mpsc::channel::<AsyncMessage>(8);

        let result = self.run_event_loop(&mut app_state, tx, &mut rx).await;

        let _ = panic::take_hook();

        result
    }

    /// The main event loop, separated for cleaner error handling.
    async fn run_event_loop(
        &mut self,
        app_state: &mut App,
        tx: mpsc::Sender<AsyncMessage>,
        rx: &mut mpsc::Receiver<AsyncMessage>,
    ) -> Result<()> {
        loop {
            self.terminal
                .draw(|frame| ui::render(frame, app_state))
                .map_err(|e| SquintError::internal(format!("Failed to draw: {e}")))?;

            if !app_state.running {
                break;
            }

            // Handle both terminal events and background task messages
            tokio::select! {
                event_result = tokio::task::spawn_blocking({
                    let tick_rate = std::time::Duration::from_millis(100);
                    move || {
                        if crossterm::event::poll(tick_rate).unwrap_or(false) {
                            crossterm::event::read().ok()
                        } else {
                            None
                        }
                    }
                }) => {
                    if let Ok(Some(crossterm::event::Event::Key(key))) = event_result {
                        if let Some(action) = app_state.handle_key(key) {
                            self.dispatch_action(action, app_state, tx.clone());
                        }
                    }
                }

                Some(msg) = rx.recv() => {
                    Self::handle_async_message(msg, app_state);
                }
            }
        }

        Ok(())
    }

    /// Starts async work requested by a key press.
    fn dispatch_action(
        &self,
        action: app::Action,
        app_state: &App,
        tx: mpsc::Sender<AsyncMessage>,
    ) {
        match action {
            app::Action::Submit(sql) => {
                let client = Arc::clone(&self.client);
                let endpoint = app_state.display.endpoint().to_string();
                let predefined = app_state.display.is_read_only();
                tokio::spawn(async move {
                    let response = client.execute(&endpoint, &sql, predefined).await;
                    let _ = tx.send(AsyncMessage::ExecutionFinished(response)).await;
                });
            }
        }
    }

    /// Applies a background task message to the app state.
    fn handle_async_message(msg: AsyncMessage, app_state: &mut App) {
        match msg {
            AsyncMessage::ExecutionFinished(response) => {
                app_state.display.finish_submit(response);
            }
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

/// Runs the TUI application against the given executor client.
pub async fn run(client: Arc<dyn ExecutorClient>, endpoint: &str) -> Result<()> {
    let mut tui = Tui::new(client)?;
    tui.run(endpoint).await
}
