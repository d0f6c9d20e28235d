//! Core error types for priohub-core.
//!
//! Failure policy: the board and insight clients return typed errors and never
//! recover internally. Callers at the HTTP boundary decide what "soft failure"
//! means (empty card set, fallback advisory string); the one exception is a
//! malformed deadline, which the scoring engine absorbs as a fixed urgency
//! fallback rather than an error.

use thiserror::Error;

/// Errors from the task-board adapter.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Network-level failure (connect, timeout, TLS).
    #[error("board transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The board answered with a non-success HTTP status.
    #[error("board API returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The board answered 2xx but the body did not match the expected shape.
    #[error("failed to decode board response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Errors from the insight requester.
#[derive(Error, Debug)]
pub enum InsightError {
    /// Network-level failure (connect, timeout, TLS).
    #[error("insight transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The generative-text service answered with a non-success HTTP status.
    #[error("insight API returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The response decoded but carried no candidate text.
    #[error("malformed insight response: {0}")]
    Malformed(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable was present but unusable.
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}
