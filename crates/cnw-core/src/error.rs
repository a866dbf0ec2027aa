use thiserror::Error;

use crate::amount::Wei;

/// Errors raised by the collection's supply, mint, and access operations.
///
/// Every rejected operation leaves collection state unchanged. Nothing is
/// retried internally; the caller decides whether to retry with corrected
/// arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Caller lacks the owner privilege.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A batch capacity argument was zero.
    #[error("new supply must be greater than 0")]
    InvalidCapacity,

    /// A batch metadata URI was empty.
    #[error("metadata URI should be defined")]
    InvalidMetadata,

    /// A supply extension was attempted while the extension lock is held.
    #[error("Supply bumps are currently locked!")]
    ExtensionLocked,

    /// Attached payment is below the unit price.
    #[error("Insufficient funds: paid {paid}, unit price is {price}")]
    InsufficientFunds { paid: Wei, price: Wei },

    /// Every index of the current total capacity has been minted.
    #[error("Sorry, all items are gone.")]
    SupplyDepleted,

    /// Token index outside the minted or mintable range.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The ownership ledger already holds an owner for this index.
    #[error("Token {0} already minted")]
    AlreadyMinted(u64),

    /// Address could not be parsed, or the zero address was used where a
    /// real account is required.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Capacity or balance arithmetic overflowed.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CollectionError {
    fn from(e: serde_json::Error) -> Self {
        CollectionError::Serialization(e.to_string())
    }
}

impl From<hex::FromHexError> for CollectionError {
    fn from(e: hex::FromHexError) -> Self {
        CollectionError::InvalidAddress(e.to_string())
    }
}
