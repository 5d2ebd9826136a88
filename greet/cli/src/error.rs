//! Error types for the greet CLI.

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// Errors that can stop the CLI from printing a greeting.
#[derive(Debug, Error)]
pub enum GreetError {
    /// Failed to read the name from stdin.
    #[error("failed to read name from stdin: {0}")]
    Stdin(#[from] std::io::Error),

    /// Stdin was empty.
    #[error("no name provided. Pass NAME as an argument or pipe it to stdin")]
    EmptyName,

    /// Failed to write the usage text.
    #[error("failed to print help: {0}")]
    Help(std::io::Error),

    /// Failed to encode the greeting as JSON.
    #[error("failed to encode greeting: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to install the log subscriber.
    #[error("failed to initialize logging: {0}")]
    Log(#[from] TryInitError),
}
