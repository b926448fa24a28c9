//! # Transaction Shapes
//!
//! Concrete representations of the node's JSON transaction objects, one
//! struct per wire type tag, plus the [`Transaction`] sum type returned by
//! the decoder.
//!
//! Field names follow the node's camelCase JSON. Fields that may be absent
//! on the wire are `Option` with a default, so absence and `null` decode the
//! same way; they are also skipped on output so a round trip reproduces the
//! original object.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::types::TransactionType;

/// Genesis transaction (type 1). Initial balance grant, no sender and no fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genesis {
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    pub timestamp: u64,
    pub recipient: String,
    pub amount: u64,
}

/// Legacy payment transaction (type 2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    pub recipient: String,
    pub amount: u64,
    pub fee: u64,
    pub timestamp: u64,
    pub signature: String,
}

/// Asset issue transaction (type 3, version 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueV1 {
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: u64,
    pub decimals: u8,
    pub reissuable: bool,
    pub fee: u64,
    pub timestamp: u64,
    pub signature: String,
}

/// Transfer transaction (type 4, version 1). `asset_id` of `None` means the
/// chain's native coin, likewise for the fee asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferV1 {
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    pub recipient: String,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_asset_id: Option<String>,
    pub fee: u64,
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    pub signature: String,
}

/// Asset reissue transaction (type 5, version 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReissueV1 {
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    pub asset_id: String,
    pub quantity: u64,
    pub reissuable: bool,
    pub fee: u64,
    pub timestamp: u64,
    pub signature: String,
}

/// Asset burn transaction (type 6, version 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnV1 {
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    pub asset_id: String,
    pub amount: u64,
    pub fee: u64,
    pub timestamp: u64,
    pub signature: String,
}

/// Which side of the book an order sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Buy,
    Sell,
}

/// The asset pair an order trades. `None` on either side means the native
/// coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_asset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_asset: Option<String>,
}

/// A matcher order embedded in an exchange transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sender_public_key: String,
    pub matcher_public_key: String,
    pub asset_pair: AssetPair,
    pub order_type: OrderType,
    pub price: u64,
    pub amount: u64,
    pub timestamp: u64,
    pub expiration: u64,
    pub matcher_fee: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Exchange transaction (type 7, version 1). Settles two matched orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeV1 {
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    pub order1: Order,
    pub order2: Order,
    pub price: u64,
    pub amount: u64,
    pub buy_matcher_fee: u64,
    pub sell_matcher_fee: u64,
    pub fee: u64,
    pub timestamp: u64,
    pub signature: String,
}

/// Lease transaction (type 8, version 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseV1 {
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    pub recipient: String,
    pub amount: u64,
    pub fee: u64,
    pub timestamp: u64,
    pub signature: String,
}

/// Lease cancel transaction (type 9, version 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseCancelV1 {
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    pub lease_id: String,
    pub fee: u64,
    pub timestamp: u64,
    pub signature: String,
}

/// Alias registration transaction (type 10, version 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAliasV1 {
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    pub alias: String,
    pub fee: u64,
    pub timestamp: u64,
    pub signature: String,
}

/// One recipient of a mass transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassTransferEntry {
    pub recipient: String,
    pub amount: u64,
}

/// Mass transfer transaction (type 11, version 1). Proof-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MassTransferV1 {
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    pub transfers: Vec<MassTransferEntry>,
    pub fee: u64,
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proofs: Vec<String>,
}

/// A typed key-value entry of a data transaction. The node tags each entry
/// with a `type` field that selects the value representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DataEntry {
    Integer { key: String, value: i64 },
    Boolean { key: String, value: bool },
    /// Base64 payload, kept as the node sends it.
    Binary { key: String, value: String },
    String { key: String, value: String },
}

impl DataEntry {
    /// Returns the entry key regardless of value type.
    pub fn key(&self) -> &str {
        match self {
            Self::Integer { key, .. }
            | Self::Boolean { key, .. }
            | Self::Binary { key, .. }
            | Self::String { key, .. } => key,
        }
    }
}

/// Data transaction (type 12, version 1). Proof-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataV1 {
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    pub data: Vec<DataEntry>,
    pub fee: u64,
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proofs: Vec<String>,
}

/// Script assignment transaction (type 13, version 1). A `script` of `None`
/// clears any script already attached to the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetScriptV1 {
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    pub fee: u64,
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proofs: Vec<String>,
}

/// Fee sponsorship transaction (type 14, version 1). A missing
/// `min_sponsored_asset_fee` turns sponsorship off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorshipV1 {
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    pub asset_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_sponsored_asset_fee: Option<u64>,
    pub fee: u64,
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proofs: Vec<String>,
}

/// A decoded transaction of any supported type.
///
/// Serialization is untagged: each variant already carries its own `type`
/// field, so the enum adds no wrapper object. Deserialization goes through
/// [`crate::proto::decode`], which dispatches on the probed tag instead of
/// trying variants in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Transaction {
    Genesis(Genesis),
    Payment(Payment),
    Issue(IssueV1),
    Transfer(TransferV1),
    Reissue(ReissueV1),
    Burn(BurnV1),
    Exchange(ExchangeV1),
    Lease(LeaseV1),
    LeaseCancel(LeaseCancelV1),
    CreateAlias(CreateAliasV1),
    MassTransfer(MassTransferV1),
    Data(DataV1),
    SetScript(SetScriptV1),
    Sponsorship(SponsorshipV1),
}

impl Transaction {
    /// Returns the type tag this transaction decoded as.
    pub fn tx_type(&self) -> TransactionType {
        match self {
            Self::Genesis(_) => TransactionType::Genesis,
            Self::Payment(_) => TransactionType::Payment,
            Self::Issue(_) => TransactionType::Issue,
            Self::Transfer(_) => TransactionType::Transfer,
            Self::Reissue(_) => TransactionType::Reissue,
            Self::Burn(_) => TransactionType::Burn,
            Self::Exchange(_) => TransactionType::Exchange,
            Self::Lease(_) => TransactionType::Lease,
            Self::LeaseCancel(_) => TransactionType::LeaseCancel,
            Self::CreateAlias(_) => TransactionType::CreateAlias,
            Self::MassTransfer(_) => TransactionType::MassTransfer,
            Self::Data(_) => TransactionType::Data,
            Self::SetScript(_) => TransactionType::SetScript,
            Self::Sponsorship(_) => TransactionType::Sponsorship,
        }
    }

    /// Returns the node-assigned transaction id, when present.
    pub fn id(&self) -> Option<&str> {
        let id = match self {
            Self::Genesis(t) => &t.id,
            Self::Payment(t) => &t.id,
            Self::Issue(t) => &t.id,
            Self::Transfer(t) => &t.id,
            Self::Reissue(t) => &t.id,
            Self::Burn(t) => &t.id,
            Self::Exchange(t) => &t.id,
            Self::Lease(t) => &t.id,
            Self::LeaseCancel(t) => &t.id,
            Self::CreateAlias(t) => &t.id,
            Self::MassTransfer(t) => &t.id,
            Self::Data(t) => &t.id,
            Self::SetScript(t) => &t.id,
            Self::Sponsorship(t) => &t.id,
        };
        id.as_deref()
    }

    /// Returns the fee paid, in the smallest coin unit. Genesis transactions
    /// carry no fee and report zero.
    pub fn fee(&self) -> u64 {
        match self {
            Self::Genesis(_) => 0,
            Self::Payment(t) => t.fee,
            Self::Issue(t) => t.fee,
            Self::Transfer(t) => t.fee,
            Self::Reissue(t) => t.fee,
            Self::Burn(t) => t.fee,
            Self::Exchange(t) => t.fee,
            Self::Lease(t) => t.fee,
            Self::LeaseCancel(t) => t.fee,
            Self::CreateAlias(t) => t.fee,
            Self::MassTransfer(t) => t.fee,
            Self::Data(t) => t.fee,
            Self::SetScript(t) => t.fee,
            Self::Sponsorship(t) => t.fee,
        }
    }

    /// Returns the transaction timestamp in milliseconds since the epoch.
    pub fn timestamp(&self) -> u64 {
        match self {
            Self::Genesis(t) => t.timestamp,
            Self::Payment(t) => t.timestamp,
            Self::Issue(t) => t.timestamp,
            Self::Transfer(t) => t.timestamp,
            Self::Reissue(t) => t.timestamp,
            Self::Burn(t) => t.timestamp,
            Self::Exchange(t) => t.timestamp,
            Self::Lease(t) => t.timestamp,
            Self::LeaseCancel(t) => t.timestamp,
            Self::CreateAlias(t) => t.timestamp,
            Self::MassTransfer(t) => t.timestamp,
            Self::Data(t) => t.timestamp,
            Self::SetScript(t) => t.timestamp,
            Self::Sponsorship(t) => t.timestamp,
        }
    }

    /// Returns the timestamp as UTC wall-clock time, or `None` if the raw
    /// millisecond value does not fit chrono's range.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp() as i64).single()
    }
}
