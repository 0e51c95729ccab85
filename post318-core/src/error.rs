//! Error types for the Post 318 events backend.

use thiserror::Error;

/// Errors that can occur in post318 operations.
#[derive(Error, Debug)]
pub enum Post318Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid recurrence rule: {0}")]
    InvalidRule(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for post318 operations.
pub type Post318Result<T> = Result<T, Post318Error>;
