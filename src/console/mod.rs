//! Core console state machines.
//!
//! The selector and display are plain state types with explicit transition
//! functions; they know nothing about the terminal. The TUI host applies
//! transitions in response to events and re-renders from the resulting
//! state snapshots.

pub mod display;
pub mod format;
pub mod selector;

pub use display::{Outcome, QueryDisplay};
pub use format::format_sql;
pub use selector::{QuerySelector, Selection};
