// crates/cnw-mint/src/access.rs
//
// Single-owner access guard.
//
// Privileged operations take the caller's address as an explicit argument and
// pass it through `only_owner` before touching any state.

use serde::{Deserialize, Serialize};

use cnw_core::error::CollectionError;
use cnw_core::events::OwnershipTransferred;
use cnw_core::identity::Address;

/// Holds the one address allowed to perform privileged operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownable {
    owner: Address,
}

impl Ownable {
    /// Create a guard owned by `owner`.
    ///
    /// # Errors
    /// `InvalidAddress` if `owner` is the zero address.
    pub fn new(owner: Address) -> Result<Self, CollectionError> {
        Ok(Self {
            owner: owner.require_nonzero("owner")?,
        })
    }

    /// Current owner.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Fail with `Unauthorized` unless `caller` is the owner.
    pub fn only_owner(&self, caller: &Address) -> Result<(), CollectionError> {
        if *caller != self.owner {
            tracing::debug!("Rejected privileged call from non-owner {}", caller);
            return Err(CollectionError::Unauthorized(format!(
                "caller {} is not the owner",
                caller
            )));
        }
        Ok(())
    }

    /// Hand the owner privilege to `new_owner`.
    ///
    /// # Errors
    /// `Unauthorized` if `caller` is not the owner, `InvalidAddress` if
    /// `new_owner` is the zero address.
    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        new_owner: Address,
    ) -> Result<OwnershipTransferred, CollectionError> {
        self.only_owner(caller)?;
        let new_owner = new_owner.require_nonzero("new owner")?;

        let previous_owner = self.owner;
        self.owner = new_owner;
        tracing::info!("Ownership transferred: {} -> {}", previous_owner, new_owner);

        Ok(OwnershipTransferred {
            previous_owner,
            new_owner,
        })
    }
}
