//! Transaction type tags
//!
//! Every transaction envelope carries a small integer `type` field that
//! selects the concrete shape of the rest of the object. The node currently
//! speaks protocol generation 1, where each tag maps to exactly one shape.

use std::fmt;

/// Transaction type tag as it appears on the wire.
///
/// The numeric values are fixed by the node protocol and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransactionType {
    /// Initial balance distribution
    Genesis = 1,
    /// Legacy coin transfer
    Payment = 2,
    /// Asset issue
    Issue = 3,
    /// Asset or coin transfer
    Transfer = 4,
    /// Asset reissue
    Reissue = 5,
    /// Asset burn
    Burn = 6,
    /// Matcher-settled order exchange
    Exchange = 7,
    /// Lease coins to another account
    Lease = 8,
    /// Cancel an active lease
    LeaseCancel = 9,
    /// Register an account alias
    CreateAlias = 10,
    /// Transfer to many recipients at once
    MassTransfer = 11,
    /// Store typed key-value entries on an account
    Data = 12,
    /// Attach or clear an account script
    SetScript = 13,
    /// Sponsor fees for an asset
    Sponsorship = 14,
}

impl TransactionType {
    /// Looks up the type for a raw wire tag.
    ///
    /// Returns `None` for tags outside the known range, so the caller can
    /// report the offending value instead of guessing a shape.
    pub fn from_id(id: u8) -> Option<Self> {
        let t = match id {
            1 => Self::Genesis,
            2 => Self::Payment,
            3 => Self::Issue,
            4 => Self::Transfer,
            5 => Self::Reissue,
            6 => Self::Burn,
            7 => Self::Exchange,
            8 => Self::Lease,
            9 => Self::LeaseCancel,
            10 => Self::CreateAlias,
            11 => Self::MassTransfer,
            12 => Self::Data,
            13 => Self::SetScript,
            14 => Self::Sponsorship,
            _ => return None,
        };
        Some(t)
    }

    /// Returns the wire tag for this type.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Returns the name used in the node's API documentation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Genesis => "genesis",
            Self::Payment => "payment",
            Self::Issue => "issue",
            Self::Transfer => "transfer",
            Self::Reissue => "reissue",
            Self::Burn => "burn",
            Self::Exchange => "exchange",
            Self::Lease => "lease",
            Self::LeaseCancel => "lease_cancel",
            Self::CreateAlias => "create_alias",
            Self::MassTransfer => "mass_transfer",
            Self::Data => "data",
            Self::SetScript => "set_script",
            Self::Sponsorship => "sponsorship",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
