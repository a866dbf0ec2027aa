// crates/cnw-core/src/events.rs
//
// Observable events emitted by collection operations.
//
// Each successful state change appends exactly one event to the collection's
// log. Rejected operations emit nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identity::Address;

/// A new supply batch was appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchAdded {
    /// Capacity added by this batch.
    pub capacity: u64,
    /// Metadata pointer assigned to every index in the batch.
    pub metadata_uri: String,
}

/// Ownership of a token index was recorded. `from` is `None` on mint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: Option<Address>,
    pub to: Address,
    pub token_id: u64,
}

/// The collection owner changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

/// Any event the collection can emit, in log order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum CollectionEvent {
    BatchAdded(BatchAdded),
    Transfer(Transfer),
    OwnershipTransferred(OwnershipTransferred),
}

impl From<BatchAdded> for CollectionEvent {
    fn from(e: BatchAdded) -> Self {
        CollectionEvent::BatchAdded(e)
    }
}

impl From<Transfer> for CollectionEvent {
    fn from(e: Transfer) -> Self {
        CollectionEvent::Transfer(e)
    }
}

impl From<OwnershipTransferred> for CollectionEvent {
    fn from(e: OwnershipTransferred) -> Self {
        CollectionEvent::OwnershipTransferred(e)
    }
}

impl fmt::Display for CollectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionEvent::BatchAdded(e) => {
                write!(f, "BatchAdded({}, {:?})", e.capacity, e.metadata_uri)
            }
            CollectionEvent::Transfer(e) => match e.from {
                Some(from) => write!(f, "Transfer({}, {}, {})", from, e.to, e.token_id),
                None => write!(f, "Transfer(none, {}, {})", e.to, e.token_id),
            },
            CollectionEvent::OwnershipTransferred(e) => write!(
                f,
                "OwnershipTransferred({}, {})",
                e.previous_owner, e.new_owner
            ),
        }
    }
}
