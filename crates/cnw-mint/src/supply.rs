// crates/cnw-mint/src/supply.rs
//
// Supply ledger: batches, total capacity, minted count, and the extension lock.
//
// Token indices start at 1. Batches partition 1..=total_capacity in insertion
// order: batch 0 covers 1..=c0, batch 1 covers c0+1..=c0+c1, and so on.
//
// Extension state machine:
//   Open -> Locked   (successful extend_supply)
// There is no transition back to Open.

use std::fmt;

use serde::{Deserialize, Serialize};

use cnw_core::error::CollectionError;
use cnw_core::events::BatchAdded;
use cnw_core::identity::Address;

use crate::access::Ownable;
use crate::batch::Batch;

/// Whether a supply extension is currently permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtensionState {
    /// A free batch slot exists; the owner may extend supply.
    Open,
    /// An extension was performed; further extensions are rejected.
    Locked,
}

impl fmt::Display for ExtensionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionState::Open => write!(f, "Open"),
            ExtensionState::Locked => write!(f, "Locked"),
        }
    }
}

/// Tracks capacity, consumption, and per-batch metadata for the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyLedger {
    access: Ownable,
    batches: Vec<Batch>,
    total_capacity: u64,
    minted_count: u64,
    extension: ExtensionState,
}

impl SupplyLedger {
    /// Create the ledger with batch 0.
    ///
    /// # Errors
    /// `InvalidCapacity` if `capacity` is 0, `InvalidMetadata` if
    /// `metadata_uri` is empty, `InvalidAddress` if `owner` is zero.
    pub fn initialize(
        capacity: u64,
        metadata_uri: impl Into<String>,
        owner: Address,
    ) -> Result<Self, CollectionError> {
        let batch = Batch::new(capacity, metadata_uri)?;
        let access = Ownable::new(owner)?;

        tracing::info!(
            "Supply initialized: capacity {} at {:?}, owner {}",
            batch.capacity,
            batch.metadata_uri,
            owner
        );

        Ok(Self {
            access,
            total_capacity: batch.capacity,
            batches: vec![batch],
            minted_count: 0,
            extension: ExtensionState::Open,
        })
    }

    /// Append a new batch. Owner only, and only while the extension lock is
    /// open.
    ///
    /// Checks run in this order, and the first failure wins: `Unauthorized`,
    /// `InvalidCapacity`, `InvalidMetadata`, `ExtensionLocked`, `Overflow`.
    /// On success the lock is taken and the `BatchAdded` event is returned.
    pub fn extend_supply(
        &mut self,
        caller: &Address,
        added_capacity: u64,
        metadata_uri: impl Into<String>,
    ) -> Result<BatchAdded, CollectionError> {
        self.access.only_owner(caller)?;
        let batch = Batch::new(added_capacity, metadata_uri)?;

        if self.extension == ExtensionState::Locked {
            tracing::warn!(
                "Supply extension of {} rejected: extension lock is held",
                added_capacity
            );
            return Err(CollectionError::ExtensionLocked);
        }

        let total_capacity = self
            .total_capacity
            .checked_add(batch.capacity)
            .ok_or_else(|| {
                CollectionError::Overflow(format!(
                    "total capacity {} + {} exceeds u64",
                    self.total_capacity, batch.capacity
                ))
            })?;

        let event = BatchAdded {
            capacity: batch.capacity,
            metadata_uri: batch.metadata_uri.clone(),
        };

        self.batches.push(batch);
        self.total_capacity = total_capacity;
        self.extension = ExtensionState::Locked;

        tracing::info!(
            "Batch {} added: +{} at {:?}, total capacity {}",
            self.batches.len() - 1,
            event.capacity,
            event.metadata_uri,
            self.total_capacity
        );

        Ok(event)
    }

    /// True iff a supply extension is currently permitted.
    pub fn extension_available(&self) -> bool {
        self.extension == ExtensionState::Open
    }

    pub fn extension_state(&self) -> ExtensionState {
        self.extension
    }

    /// Position of the batch whose index range contains `token_index`.
    ///
    /// # Errors
    /// `NotFound` if `token_index` is 0 or beyond the total capacity.
    pub fn batch_of(&self, token_index: u64) -> Result<usize, CollectionError> {
        if token_index == 0 || token_index > self.total_capacity {
            return Err(CollectionError::NotFound(format!(
                "token index {} is outside 1..={}",
                token_index, self.total_capacity
            )));
        }

        let mut cumulative: u64 = 0;
        for (position, batch) in self.batches.iter().enumerate() {
            cumulative += batch.capacity;
            if cumulative >= token_index {
                return Ok(position);
            }
        }

        Err(CollectionError::NotFound(format!(
            "no batch covers token index {}",
            token_index
        )))
    }

    /// Metadata URI of the batch containing `token_index`.
    pub fn metadata_for(&self, token_index: u64) -> Result<&str, CollectionError> {
        let position = self.batch_of(token_index)?;
        Ok(&self.batches[position].metadata_uri)
    }

    /// Indices still available to mint.
    pub fn remaining_capacity(&self) -> u64 {
        self.total_capacity - self.minted_count
    }

    /// Total capacity across all batches. Owner only.
    pub fn total_supply(&self, caller: &Address) -> Result<u64, CollectionError> {
        self.access.only_owner(caller)?;
        Ok(self.total_capacity)
    }

    /// Number of tokens minted so far.
    pub fn minted_count(&self) -> u64 {
        self.minted_count
    }

    /// All batches in insertion order. Batch 0 is always present.
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn owner(&self) -> Address {
        self.access.owner()
    }

    pub fn access(&self) -> &Ownable {
        &self.access
    }

    pub(crate) fn access_mut(&mut self) -> &mut Ownable {
        &mut self.access
    }

    /// The index the next successful mint will receive.
    ///
    /// # Errors
    /// `SupplyDepleted` if no capacity remains.
    pub fn next_index(&self) -> Result<u64, CollectionError> {
        if self.remaining_capacity() == 0 {
            return Err(CollectionError::SupplyDepleted);
        }
        Ok(self.minted_count + 1)
    }

    /// Consume `token_index`, which must be the value `next_index` returned.
    pub(crate) fn commit_mint(&mut self, token_index: u64) {
        debug_assert_eq!(token_index, self.minted_count + 1);
        debug_assert!(token_index <= self.total_capacity);
        self.minted_count = token_index;
    }

    /// Verify the ledger invariants. Used after loading persisted state,
    /// which bypasses the constructors.
    pub fn check_invariants(&self) -> Result<(), CollectionError> {
        let corrupt = |msg: String| {
            Err(CollectionError::Serialization(format!(
                "corrupt supply ledger: {}",
                msg
            )))
        };

        if self.batches.is_empty() {
            return corrupt("no batches".to_string());
        }
        if let Some(bad) = self
            .batches
            .iter()
            .position(|b| b.capacity == 0 || b.metadata_uri.is_empty())
        {
            return corrupt(format!("batch {} is invalid", bad));
        }
        let sum = self
            .batches
            .iter()
            .try_fold(0u64, |acc, b| acc.checked_add(b.capacity));
        if sum != Some(self.total_capacity) {
            return corrupt(format!(
                "total capacity {} does not match batch sum {:?}",
                self.total_capacity, sum
            ));
        }
        if self.minted_count > self.total_capacity {
            return corrupt(format!(
                "minted count {} exceeds total capacity {}",
                self.minted_count, self.total_capacity
            ));
        }
        if self.batches.len() > 1 && self.extension != ExtensionState::Locked {
            return corrupt("extended supply with open extension lock".to_string());
        }
        if self.access.owner().is_zero() {
            return corrupt("zero owner".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Address {
        Address::repeat_byte(1)
    }

    fn stranger() -> Address {
        Address::repeat_byte(2)
    }

    fn ledger(capacity: u64) -> SupplyLedger {
        SupplyLedger::initialize(capacity, "ipfs://abc", owner()).unwrap()
    }

    fn mint_n(ledger: &mut SupplyLedger, n: u64) {
        for _ in 0..n {
            let index = ledger.next_index().unwrap();
            ledger.commit_mint(index);
        }
    }

    #[test]
    fn test_initialize() {
        let ledger = ledger(30);
        assert_eq!(ledger.remaining_capacity(), 30);
        assert_eq!(ledger.minted_count(), 0);
        assert!(ledger.extension_available());
        assert_eq!(ledger.batches().len(), 1);
        assert_eq!(ledger.owner(), owner());
        assert!(ledger.check_invariants().is_ok());
    }

    #[test]
    fn test_initialize_rejects_zero_capacity() {
        let result = SupplyLedger::initialize(0, "ipfs://abc", owner());
        assert_eq!(result, Err(CollectionError::InvalidCapacity));
    }

    #[test]
    fn test_initialize_rejects_empty_metadata() {
        let result = SupplyLedger::initialize(5, "", owner());
        assert_eq!(result, Err(CollectionError::InvalidMetadata));
    }

    #[test]
    fn test_extend_supply() {
        let mut ledger = ledger(5);
        let event = ledger.extend_supply(&owner(), 50, "ipfs://some-uri").unwrap();
        assert_eq!(event.capacity, 50);
        assert_eq!(event.metadata_uri, "ipfs://some-uri");
        assert_eq!(ledger.total_supply(&owner()).unwrap(), 55);
        assert_eq!(ledger.remaining_capacity(), 55);
        assert!(!ledger.extension_available());
        assert_eq!(ledger.extension_state(), ExtensionState::Locked);
    }

    #[test]
    fn test_extend_supply_locks_further_extensions() {
        let mut ledger = ledger(5);
        ledger.extend_supply(&owner(), 10, "ipfs://zxy").unwrap();
        let result = ledger.extend_supply(&owner(), 40, "ipfs://some-other-uri");
        assert_eq!(result, Err(CollectionError::ExtensionLocked));
        assert_eq!(ledger.batches().len(), 2);
        assert_eq!(ledger.remaining_capacity(), 15);
    }

    #[test]
    fn test_extend_supply_non_owner() {
        let mut ledger = ledger(5);
        let result = ledger.extend_supply(&stranger(), 10, "ipfs://zxy");
        assert!(matches!(result, Err(CollectionError::Unauthorized(_))));
        // Invalid arguments still report the authorization failure first.
        let result = ledger.extend_supply(&stranger(), 0, "");
        assert!(matches!(result, Err(CollectionError::Unauthorized(_))));
        assert!(ledger.extension_available());
    }

    #[test]
    fn test_extend_supply_zero_capacity_regardless_of_lock() {
        let mut ledger = ledger(5);
        assert_eq!(
            ledger.extend_supply(&owner(), 0, "ipfs://zxy"),
            Err(CollectionError::InvalidCapacity)
        );
        ledger.extend_supply(&owner(), 10, "ipfs://zxy").unwrap();
        assert_eq!(
            ledger.extend_supply(&owner(), 0, "ipfs://zxy"),
            Err(CollectionError::InvalidCapacity)
        );
    }

    #[test]
    fn test_extend_supply_empty_metadata() {
        let mut ledger = ledger(5);
        assert_eq!(
            ledger.extend_supply(&owner(), 20, ""),
            Err(CollectionError::InvalidMetadata)
        );
        assert!(ledger.extension_available());
        assert_eq!(ledger.remaining_capacity(), 5);
    }

    #[test]
    fn test_extend_supply_empty_metadata_regardless_of_lock() {
        let mut ledger = ledger(5);
        ledger.extend_supply(&owner(), 10, "ipfs://zxy").unwrap();
        assert_eq!(
            ledger.extend_supply(&owner(), 20, ""),
            Err(CollectionError::InvalidMetadata)
        );
        assert_eq!(ledger.batches().len(), 2);
    }

    #[test]
    fn test_extend_supply_overflow() {
        let mut ledger = SupplyLedger::initialize(u64::MAX, "ipfs://abc", owner()).unwrap();
        let result = ledger.extend_supply(&owner(), 1, "ipfs://zxy");
        assert!(matches!(result, Err(CollectionError::Overflow(_))));
        assert!(ledger.extension_available());
    }

    #[test]
    fn test_total_supply_owner_only() {
        let ledger = ledger(30);
        assert_eq!(ledger.total_supply(&owner()).unwrap(), 30);
        assert!(matches!(
            ledger.total_supply(&stranger()),
            Err(CollectionError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_metadata_for_batches() {
        let mut ledger = ledger(5);
        ledger.extend_supply(&owner(), 10, "ipfs://xyz").unwrap();

        for index in 1..=5 {
            assert_eq!(ledger.metadata_for(index).unwrap(), "ipfs://abc");
        }
        for index in 6..=15 {
            assert_eq!(ledger.metadata_for(index).unwrap(), "ipfs://xyz");
        }
        assert_eq!(ledger.batch_of(5).unwrap(), 0);
        assert_eq!(ledger.batch_of(6).unwrap(), 1);
    }

    #[test]
    fn test_metadata_for_out_of_range() {
        let ledger = ledger(5);
        assert!(matches!(ledger.metadata_for(0), Err(CollectionError::NotFound(_))));
        assert!(matches!(ledger.metadata_for(6), Err(CollectionError::NotFound(_))));
    }

    #[test]
    fn test_next_index_until_depleted() {
        let mut ledger = ledger(3);
        assert_eq!(ledger.next_index().unwrap(), 1);
        mint_n(&mut ledger, 3);
        assert_eq!(ledger.minted_count(), 3);
        assert_eq!(ledger.remaining_capacity(), 0);
        assert_eq!(ledger.next_index(), Err(CollectionError::SupplyDepleted));
    }

    #[test]
    fn test_extension_restores_capacity_after_depletion() {
        let mut ledger = ledger(5);
        mint_n(&mut ledger, 5);
        ledger.extend_supply(&owner(), 10, "ipfs://xyz").unwrap();
        assert_eq!(ledger.remaining_capacity(), 10);
        assert_eq!(ledger.next_index().unwrap(), 6);
    }

    #[test]
    fn test_check_invariants_detects_corruption() {
        let mut ledger = ledger(5);
        ledger.total_capacity = 7;
        assert!(ledger.check_invariants().is_err());

        let mut ledger = self::ledger(5);
        ledger.minted_count = 6;
        assert!(ledger.check_invariants().is_err());

        let mut ledger = self::ledger(5);
        ledger.extend_supply(&owner(), 1, "ipfs://b").unwrap();
        ledger.extension = ExtensionState::Open;
        assert!(ledger.check_invariants().is_err());
    }
}
