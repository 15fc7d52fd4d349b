//! TUI widgets for Squint.
//!
//! Contains reusable UI components.

pub mod editor;
pub mod preview;
pub mod selector;
pub mod table;
