//! # Decode Errors
//!
//! Error types for transaction decoding. The three variants are deliberate
//! diagnostic categories: a [`DecodeError::Envelope`] failure means the
//! payload was not a readable transaction object at all, an
//! [`DecodeError::UnknownTypeVersion`] means the node speaks a newer protocol
//! generation than this client, and a [`DecodeError::Body`] means the type
//! tag was recognized but the rest of the object did not match its shape.

use thiserror::Error;

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Transaction decode errors
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The buffer is not a well-formed JSON object, or the `type`
    /// discriminator is missing or not a small integer.
    #[error("invalid transaction envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// The `type` tag falls outside the supported table. Carries the
    /// offending pair exactly as probed, for version-mismatch diagnostics.
    #[error("unknown transaction type {tx_type} version {version}")]
    UnknownTypeVersion { tx_type: u8, version: u8 },

    /// The tag matched a known type but the body did not conform to that
    /// type's shape (missing field, wrong primitive, malformed nesting).
    #[error("malformed transaction body: {0}")]
    Body(#[source] serde_json::Error),
}

impl DecodeError {
    /// Returns true for failures that indicate a protocol-generation
    /// mismatch rather than corrupt or drifted data.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self, DecodeError::UnknownTypeVersion { .. })
    }
}
