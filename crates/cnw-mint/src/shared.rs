// crates/cnw-mint/src/shared.rs
//
// SharedCollection: a Collection behind one mutex, for callers that mint and
// extend from several threads.
//
// Each operation holds the lock for its full duration, so the sequential,
// all-or-nothing behavior of `Collection` carries over unchanged.

use std::sync::Arc;

use parking_lot::Mutex;

use cnw_core::amount::Wei;
use cnw_core::error::CollectionError;
use cnw_core::events::BatchAdded;
use cnw_core::identity::Address;
use cnw_core::traits::{OwnershipLedger, PaymentCustody};

use crate::collection::Collection;
use crate::gate::Minted;
use crate::ownership::InMemoryOwnershipLedger;
use crate::treasury::Treasury;

/// Cloneable handle to a mutex-guarded `Collection`.
pub struct SharedCollection<L = InMemoryOwnershipLedger, C = Treasury> {
    inner: Arc<Mutex<Collection<L, C>>>,
}

impl<L, C> Clone for SharedCollection<L, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L, C> SharedCollection<L, C>
where
    L: OwnershipLedger,
    C: PaymentCustody,
{
    pub fn new(collection: Collection<L, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(collection)),
        }
    }

    pub fn mint(&self, caller: Address, payment: Wei) -> Result<u64, CollectionError> {
        self.inner.lock().mint(caller, payment)
    }

    pub fn mint_to(
        &self,
        payer: Address,
        recipient: Address,
        payment: Wei,
    ) -> Result<Minted, CollectionError> {
        self.inner.lock().mint_to(payer, recipient, payment)
    }

    pub fn extend_supply(
        &self,
        caller: &Address,
        added_capacity: u64,
        metadata_uri: impl Into<String>,
    ) -> Result<BatchAdded, CollectionError> {
        self.inner
            .lock()
            .extend_supply(caller, added_capacity, metadata_uri)
    }

    pub fn remaining_capacity(&self) -> u64 {
        self.inner.lock().remaining_capacity()
    }

    /// Run `f` against the collection while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&Collection<L, C>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Run `f` against the collection mutably while holding the lock.
    ///
    /// Several calls made inside `f` execute as one atomic step.
    pub fn write<R>(&self, f: impl FnOnce(&mut Collection<L, C>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
