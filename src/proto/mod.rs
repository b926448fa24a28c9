//! Protocol types for the node's transaction JSON
//!
//! This module owns the transaction data model and the tagged decoder:
//!
//! - [`types`]: the wire type tags
//! - [`transactions`]: one struct per transaction shape plus the
//!   [`Transaction`] sum type
//! - [`decode`]: the two-pass probe-then-decode entry points
//! - [`errors`]: the decode error taxonomy

mod decode;
mod errors;
mod transactions;
mod types;

pub use decode::{decode_transaction, from_json_bytes, probe, TypeVersion};
pub use errors::{DecodeError, DecodeResult};
pub use transactions::{
    AssetPair, BurnV1, CreateAliasV1, DataEntry, DataV1, ExchangeV1, Genesis, IssueV1,
    LeaseCancelV1, LeaseV1, MassTransferEntry, MassTransferV1, Order, OrderType, Payment,
    ReissueV1, SetScriptV1, SponsorshipV1, Transaction, TransferV1,
};
pub use types::TransactionType;
