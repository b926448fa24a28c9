//! # Transaction Decoding
//!
//! Two-pass decoding of the node's transaction JSON. The envelope carries
//! its discriminator in-place (`type`, optional `version`) next to the
//! variant-specific fields, so the buffer is read twice: [`probe`] extracts
//! just the discriminator, then [`decode_transaction`] re-reads the whole
//! buffer into the shape the tag selected. Both reads happen on the same
//! `&[u8]`, so they observe identical bytes; the input must therefore be
//! fully buffered, not a forward-only stream.
//!
//! Decoding is pure and stateless. Concurrent calls on independent buffers
//! need no coordination.

use serde::Deserialize;

use super::errors::{DecodeError, DecodeResult};
use super::transactions::Transaction;
use super::types::TransactionType;

/// The discriminator probed from the front of a transaction envelope.
///
/// `version` defaults to zero when absent, matching the node's
/// omit-when-empty encoding; absence and an explicit zero are
/// indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TypeVersion {
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub version: u8,
}

/// Reads the `(type, version)` discriminator from a buffered JSON envelope.
///
/// Extra fields in the object are ignored, so this works on the full
/// transaction payload. Fails with [`DecodeError::Envelope`] if the buffer
/// is not a JSON object or `type` is missing or not a byte-sized integer.
pub fn probe(buf: &[u8]) -> DecodeResult<TypeVersion> {
    serde_json::from_slice(buf).map_err(DecodeError::Envelope)
}

/// Decodes a full transaction envelope into the variant its tag selects.
///
/// `buf` must be the same bytes the discriminator was probed from. Dispatch
/// is on `type` alone: the current protocol generation has exactly one shape
/// per tag, and `version` rides along for diagnostics only. Extending the
/// table to a second generation means keying this match on the
/// `(type, version)` pair instead.
pub fn decode_transaction(tv: &TypeVersion, buf: &[u8]) -> DecodeResult<Transaction> {
    let Some(tx_type) = TransactionType::from_id(tv.tx_type) else {
        return Err(DecodeError::UnknownTypeVersion {
            tx_type: tv.tx_type,
            version: tv.version,
        });
    };

    let tx = match tx_type {
        TransactionType::Genesis => Transaction::Genesis(decode_body(buf)?),
        TransactionType::Payment => Transaction::Payment(decode_body(buf)?),
        TransactionType::Issue => Transaction::Issue(decode_body(buf)?),
        TransactionType::Transfer => Transaction::Transfer(decode_body(buf)?),
        TransactionType::Reissue => Transaction::Reissue(decode_body(buf)?),
        TransactionType::Burn => Transaction::Burn(decode_body(buf)?),
        TransactionType::Exchange => Transaction::Exchange(decode_body(buf)?),
        TransactionType::Lease => Transaction::Lease(decode_body(buf)?),
        TransactionType::LeaseCancel => Transaction::LeaseCancel(decode_body(buf)?),
        TransactionType::CreateAlias => Transaction::CreateAlias(decode_body(buf)?),
        TransactionType::MassTransfer => Transaction::MassTransfer(decode_body(buf)?),
        TransactionType::Data => Transaction::Data(decode_body(buf)?),
        TransactionType::SetScript => Transaction::SetScript(decode_body(buf)?),
        TransactionType::Sponsorship => Transaction::Sponsorship(decode_body(buf)?),
    };

    Ok(tx)
}

/// Probes and decodes in one step. This is what the HTTP layer calls once it
/// has a buffered response body.
pub fn from_json_bytes(buf: &[u8]) -> DecodeResult<Transaction> {
    let tv = probe(buf)?;
    decode_transaction(&tv, buf)
}

fn decode_body<'de, T: Deserialize<'de>>(buf: &'de [u8]) -> DecodeResult<T> {
    serde_json::from_slice(buf).map_err(DecodeError::Body)
}
