//! Squint - a terminal query console for remote SQL execution services.
//!
//! This library exposes the core modules for use in integration tests.

pub mod api;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod tui;
