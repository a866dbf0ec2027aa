// crates/cnw-core/src/traits.rs

use crate::amount::Wei;
use crate::error::CollectionError;
use crate::events::Transfer;
use crate::identity::Address;

/// Token ownership ledger consumed by the mint gate.
///
/// Implemented by cnw-mint (`InMemoryOwnershipLedger`). Transfers between
/// holders are the ledger's business and are not part of this seam.
pub trait OwnershipLedger {
    /// Record `owner` as holder of a freshly minted `token_id`.
    ///
    /// Returns the `Transfer` event (with `from = None`) describing the mint.
    /// Fails with `AlreadyMinted` if the index already has an owner, in which
    /// case the ledger is unchanged.
    fn record_ownership(&mut self, token_id: u64, owner: Address)
        -> Result<Transfer, CollectionError>;

    /// Current owner of `token_id`, or `NotFound` if it was never minted.
    fn owner_of(&self, token_id: u64) -> Result<Address, CollectionError>;

    /// Number of tokens held by `owner`.
    fn balance_of(&self, owner: &Address) -> u64;

    /// Number of token indices that have an owner.
    fn token_count(&self) -> u64;
}

/// Custody for the value attached to mint calls.
///
/// Implemented by cnw-mint (`Treasury`).
pub trait PaymentCustody {
    /// Take custody of `amount` paid by `from`. Infallible, so it can run
    /// after the mint is committed.
    fn deposit(&mut self, from: Address, amount: Wei);

    /// Total value currently held.
    fn balance(&self) -> Wei;
}
