// crates/cnw-mint/src/collection.rs
//
// Collection: the public surface of the issuer.
//
// Composes the supply ledger (with its owner guard), the mint gate, the
// ownership ledger, payment custody, and the event log. Every operation runs
// to completion or fails without touching state, and each success appends
// exactly one event.

use serde::{Deserialize, Serialize};

use cnw_core::amount::Wei;
use cnw_core::error::CollectionError;
use cnw_core::events::{BatchAdded, CollectionEvent};
use cnw_core::identity::Address;
use cnw_core::traits::{OwnershipLedger, PaymentCustody};

use crate::batch::Batch;
use crate::gate::{MintGate, Minted};
use crate::ownership::InMemoryOwnershipLedger;
use crate::supply::SupplyLedger;
use crate::treasury::Treasury;

/// A batched, metadata-rotating collectible collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection<L = InMemoryOwnershipLedger, C = Treasury> {
    supply: SupplyLedger,
    #[serde(skip)]
    gate: MintGate,
    ownership: L,
    custody: C,
    #[serde(default)]
    events: Vec<CollectionEvent>,
}

impl Collection {
    /// Create a collection with the in-memory ownership ledger and treasury.
    pub fn new(
        capacity: u64,
        metadata_uri: impl Into<String>,
        owner: Address,
    ) -> Result<Self, CollectionError> {
        Self::initialize(
            capacity,
            metadata_uri,
            owner,
            InMemoryOwnershipLedger::new(),
            Treasury::new(),
        )
    }
}

impl<L, C> Collection<L, C>
where
    L: OwnershipLedger,
    C: PaymentCustody,
{
    /// Create a collection whose first batch is `capacity` indices at
    /// `metadata_uri`, owned by `owner`.
    pub fn initialize(
        capacity: u64,
        metadata_uri: impl Into<String>,
        owner: Address,
        ownership: L,
        custody: C,
    ) -> Result<Self, CollectionError> {
        Ok(Self {
            supply: SupplyLedger::initialize(capacity, metadata_uri, owner)?,
            gate: MintGate::new(),
            ownership,
            custody,
            events: Vec::new(),
        })
    }

    pub fn owner(&self) -> Address {
        self.supply.owner()
    }

    /// Hand the owner privilege to `new_owner`. Owner only.
    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        new_owner: Address,
    ) -> Result<(), CollectionError> {
        let event = self.supply.access_mut().transfer_ownership(caller, new_owner)?;
        self.events.push(event.into());
        Ok(())
    }

    /// Append a supply batch. Owner only; permitted once.
    pub fn extend_supply(
        &mut self,
        caller: &Address,
        added_capacity: u64,
        metadata_uri: impl Into<String>,
    ) -> Result<BatchAdded, CollectionError> {
        let event = self
            .supply
            .extend_supply(caller, added_capacity, metadata_uri)?;
        self.events.push(event.clone().into());
        Ok(event)
    }

    pub fn extension_available(&self) -> bool {
        self.supply.extension_available()
    }

    /// Mint the next index to `caller`. Returns the new token index.
    pub fn mint(&mut self, caller: Address, payment: Wei) -> Result<u64, CollectionError> {
        self.mint_to(caller, caller, payment).map(|minted| minted.token_id)
    }

    /// Mint the next index to `recipient`, paid for by `payer`.
    pub fn mint_to(
        &mut self,
        payer: Address,
        recipient: Address,
        payment: Wei,
    ) -> Result<Minted, CollectionError> {
        let minted = self.gate.mint(
            &mut self.supply,
            &mut self.ownership,
            &mut self.custody,
            payer,
            recipient,
            payment,
        )?;
        self.events.push(minted.transfer.clone().into());
        Ok(minted)
    }

    /// Metadata URI for any index within the total capacity, minted or not.
    pub fn metadata_for(&self, token_index: u64) -> Result<&str, CollectionError> {
        self.supply.metadata_for(token_index)
    }

    /// Metadata URI of a minted token. `NotFound` for unminted indices.
    pub fn token_uri(&self, token_id: u64) -> Result<&str, CollectionError> {
        self.ownership.owner_of(token_id)?;
        self.supply.metadata_for(token_id)
    }

    pub fn owner_of(&self, token_id: u64) -> Result<Address, CollectionError> {
        self.ownership.owner_of(token_id)
    }

    pub fn balance_of(&self, holder: &Address) -> u64 {
        self.ownership.balance_of(holder)
    }

    pub fn remaining_capacity(&self) -> u64 {
        self.supply.remaining_capacity()
    }

    /// Total capacity across all batches. Owner only.
    pub fn total_supply(&self, caller: &Address) -> Result<u64, CollectionError> {
        self.supply.total_supply(caller)
    }

    pub fn minted_count(&self) -> u64 {
        self.supply.minted_count()
    }

    pub fn batches(&self) -> &[Batch] {
        self.supply.batches()
    }

    pub fn supply(&self) -> &SupplyLedger {
        &self.supply
    }

    pub fn unit_price(&self) -> Wei {
        self.gate.unit_price()
    }

    pub fn custody_balance(&self) -> Wei {
        self.custody.balance()
    }

    pub fn ownership(&self) -> &L {
        &self.ownership
    }

    pub fn custody(&self) -> &C {
        &self.custody
    }

    /// Events emitted so far, oldest first.
    pub fn events(&self) -> &[CollectionEvent] {
        &self.events
    }

    /// Take all events emitted so far, leaving the log empty.
    pub fn drain_events(&mut self) -> Vec<CollectionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Verify the supply ledger invariants and that the owned indices are
    /// exactly `1..=minted_count`. Used after loading persisted state.
    pub fn check_invariants(&self) -> Result<(), CollectionError> {
        self.supply.check_invariants()?;

        let minted = self.supply.minted_count();
        let owned = self.ownership.token_count();
        if owned != minted {
            return Err(CollectionError::Serialization(format!(
                "corrupt collection: {} owned tokens but minted count is {}",
                owned, minted
            )));
        }
        if let Some(missing) = (1..=minted).find(|id| self.ownership.owner_of(*id).is_err()) {
            return Err(CollectionError::Serialization(format!(
                "corrupt collection: minted token {} has no owner",
                missing
            )));
        }
        Ok(())
    }
}
