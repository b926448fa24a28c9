//! CLI error types

use thiserror::Error;

use crate::client::ClientError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the terminal
#[derive(Debug, Error)]
pub enum CliError {
    /// The node request or decode failed.
    #[error("{0}")]
    Client(#[from] ClientError),

    /// The decoded transaction could not be printed.
    #[error("formatting output: {0}")]
    Output(#[from] serde_json::Error),
}
