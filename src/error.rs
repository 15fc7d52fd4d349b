//! Error types for Squint.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for Squint operations.
#[derive(Error, Debug)]
pub enum SquintError {
    /// Catalog fetch errors (endpoint unreachable, bad payload, etc.)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Query execution errors reported by the backend executor.
    #[error("Execution error: {0}")]
    Execution(String),

    /// Configuration errors (invalid config file, bad server URL, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SquintError {
    /// Creates a catalog error with the given message.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Creates an execution error with the given message.
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Catalog(_) => "Catalog Error",
            Self::Execution(_) => "Execution Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using SquintError.
pub type Result<T> = std::result::Result<T, SquintError>;
