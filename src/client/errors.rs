//! # Client Errors
//!
//! Error types for the HTTP layer. Decode failures keep their underlying
//! [`DecodeError`] untouched inside [`ClientError::Parse`], which only adds
//! the id that was being fetched; callers can still tell an unknown type
//! from a malformed body.

use thiserror::Error;

use crate::proto::DecodeError;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors from talking to a node
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL and request path could not be combined.
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// Transport-level failure (connect, TLS, timeout, body read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The node answered with a non-success status.
    #[error("node returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body did not decode as a transaction.
    #[error("parsing transaction {id}: {source}")]
    Parse {
        id: String,
        #[source]
        source: DecodeError,
    },
}

impl ClientError {
    /// Returns the decode error behind a parse failure, if that is what
    /// this is.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            ClientError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}
