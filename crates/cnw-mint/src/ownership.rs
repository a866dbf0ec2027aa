// crates/cnw-mint/src/ownership.rs
//
// In-memory token ownership ledger.
//
// Records who holds each minted index. Transfers between holders are outside
// this crate, so the ledger only ever grows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cnw_core::error::CollectionError;
use cnw_core::events::Transfer;
use cnw_core::identity::Address;
use cnw_core::traits::OwnershipLedger;

/// `OwnershipLedger` backed by ordered maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryOwnershipLedger {
    owners: BTreeMap<u64, Address>,
    balances: BTreeMap<Address, u64>,
}

impl InMemoryOwnershipLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens recorded.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Token indices held by `owner`, ascending.
    pub fn tokens_of(&self, owner: &Address) -> Vec<u64> {
        self.owners
            .iter()
            .filter(|(_, holder)| *holder == owner)
            .map(|(token_id, _)| *token_id)
            .collect()
    }
}

impl OwnershipLedger for InMemoryOwnershipLedger {
    fn record_ownership(
        &mut self,
        token_id: u64,
        owner: Address,
    ) -> Result<Transfer, CollectionError> {
        let owner = owner.require_nonzero("token recipient")?;
        if self.owners.contains_key(&token_id) {
            return Err(CollectionError::AlreadyMinted(token_id));
        }

        self.owners.insert(token_id, owner);
        *self.balances.entry(owner).or_insert(0) += 1;

        Ok(Transfer {
            from: None,
            to: owner,
            token_id,
        })
    }

    fn owner_of(&self, token_id: u64) -> Result<Address, CollectionError> {
        self.owners
            .get(&token_id)
            .copied()
            .ok_or_else(|| CollectionError::NotFound(format!("token {} has not been minted", token_id)))
    }

    fn balance_of(&self, owner: &Address) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    fn token_count(&self) -> u64 {
        self.owners.len() as u64
    }
}
