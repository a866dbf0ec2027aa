// crates/cnw-mint/src/gate.rs
//
// Mint gate: payment and availability checks, sequential index allocation,
// and hand-off to the ownership ledger.
//
// Order of effects on success:
//   1. payment >= unit price
//   2. next index allocated (fails when supply is depleted)
//   3. metadata resolved for the index
//   4. ownership recorded (the only fallible collaborator call)
//   5. minted count committed, payment deposited
// Nothing is mutated before step 4 succeeds.

use serde::{Deserialize, Serialize};

use cnw_core::amount::Wei;
use cnw_core::error::CollectionError;
use cnw_core::events::Transfer;
use cnw_core::identity::Address;
use cnw_core::traits::{OwnershipLedger, PaymentCustody};

use crate::supply::SupplyLedger;

/// Fixed price per mint: 0.003 ETH.
pub const UNIT_PRICE: Wei = Wei::from_wei(3_000_000_000_000_000);

/// Result of a successful mint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minted {
    pub token_id: u64,
    pub metadata_uri: String,
    pub transfer: Transfer,
}

/// Validates and executes public mints against a `SupplyLedger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintGate {
    unit_price: Wei,
}

impl MintGate {
    pub fn new() -> Self {
        Self {
            unit_price: UNIT_PRICE,
        }
    }

    pub fn unit_price(&self) -> Wei {
        self.unit_price
    }

    /// Fail with `InsufficientFunds` if `payment` is below the unit price.
    pub fn check_payment(&self, payment: Wei) -> Result<(), CollectionError> {
        if payment < self.unit_price {
            return Err(CollectionError::InsufficientFunds {
                paid: payment,
                price: self.unit_price,
            });
        }
        Ok(())
    }

    /// Mint the next index to `recipient`, paid for by `payer`.
    ///
    /// # Errors
    /// `InsufficientFunds`, then `SupplyDepleted`, then whatever the ownership
    /// ledger reports. Every failure leaves the supply ledger, the ownership
    /// ledger, and custody untouched.
    pub fn mint<L, C>(
        &self,
        supply: &mut SupplyLedger,
        ownership: &mut L,
        custody: &mut C,
        payer: Address,
        recipient: Address,
        payment: Wei,
    ) -> Result<Minted, CollectionError>
    where
        L: OwnershipLedger,
        C: PaymentCustody,
    {
        if let Err(e) = self.check_payment(payment) {
            tracing::debug!("Mint by {} rejected: {}", payer, e);
            return Err(e);
        }

        let token_id = match supply.next_index() {
            Ok(index) => index,
            Err(e) => {
                tracing::debug!("Mint by {} rejected: {}", payer, e);
                return Err(e);
            }
        };
        let metadata_uri = supply.metadata_for(token_id)?.to_string();

        let transfer = ownership.record_ownership(token_id, recipient)?;

        supply.commit_mint(token_id);
        custody.deposit(payer, payment);

        tracing::info!(
            "Minted token {} to {} ({}), {} remaining",
            token_id,
            recipient,
            metadata_uri,
            supply.remaining_capacity()
        );

        Ok(Minted {
            token_id,
            metadata_uri,
            transfer,
        })
    }
}

impl Default for MintGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ownership::InMemoryOwnershipLedger;
    use crate::treasury::Treasury;

    fn owner() -> Address {
        Address::repeat_byte(1)
    }

    fn buyer() -> Address {
        Address::repeat_byte(2)
    }

    struct Fixture {
        gate: MintGate,
        supply: SupplyLedger,
        ownership: InMemoryOwnershipLedger,
        treasury: Treasury,
    }

    impl Fixture {
        fn new(capacity: u64) -> Self {
            Self {
                gate: MintGate::new(),
                supply: SupplyLedger::initialize(capacity, "ipfs://abc", owner()).unwrap(),
                ownership: InMemoryOwnershipLedger::new(),
                treasury: Treasury::new(),
            }
        }

        fn mint(&mut self, payment: Wei) -> Result<Minted, CollectionError> {
            self.gate.mint(
                &mut self.supply,
                &mut self.ownership,
                &mut self.treasury,
                buyer(),
                buyer(),
                payment,
            )
        }
    }

    #[test]
    fn test_unit_price() {
        assert_eq!(UNIT_PRICE, Wei::from_ether(0.003));
        assert_eq!(MintGate::new().unit_price(), UNIT_PRICE);
    }

    #[test]
    fn test_mint_first_token() {
        let mut fx = Fixture::new(5);
        let minted = fx.mint(UNIT_PRICE).unwrap();

        assert_eq!(minted.token_id, 1);
        assert_eq!(minted.metadata_uri, "ipfs://abc");
        assert_eq!(minted.transfer.from, None);
        assert_eq!(minted.transfer.to, buyer());
        assert_eq!(fx.supply.minted_count(), 1);
        assert_eq!(fx.ownership.owner_of(1).unwrap(), buyer());
        assert_eq!(fx.treasury.balance(), UNIT_PRICE);
    }

    #[test]
    fn test_insufficient_payment() {
        let mut fx = Fixture::new(5);
        let result = fx.mint(Wei::zero());
        assert_eq!(
            result,
            Err(CollectionError::InsufficientFunds {
                paid: Wei::zero(),
                price: UNIT_PRICE
            })
        );
        let result = fx.mint(UNIT_PRICE - Wei::from_wei(1));
        assert!(matches!(result, Err(CollectionError::InsufficientFunds { .. })));
        assert_eq!(fx.supply.minted_count(), 0);
        assert!(fx.ownership.is_empty());
        assert_eq!(fx.treasury.balance(), Wei::zero());
    }

    #[test]
    fn test_overpayment_is_kept() {
        let mut fx = Fixture::new(5);
        let payment = Wei::from_ether(0.01);
        fx.mint(payment).unwrap();
        assert_eq!(fx.treasury.balance(), payment);
    }

    #[test]
    fn test_supply_depleted() {
        let mut fx = Fixture::new(5);
        for expected in 1..=5 {
            assert_eq!(fx.mint(UNIT_PRICE).unwrap().token_id, expected);
        }
        assert_eq!(fx.mint(UNIT_PRICE), Err(CollectionError::SupplyDepleted));
        assert_eq!(fx.supply.minted_count(), 5);
        assert_eq!(fx.treasury.deposits(), 5);
    }

    #[test]
    fn test_price_checked_before_availability() {
        let mut fx = Fixture::new(1);
        fx.mint(UNIT_PRICE).unwrap();
        assert!(matches!(
            fx.mint(Wei::zero()),
            Err(CollectionError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn test_ledger_failure_leaves_state_unchanged() {
        let mut fx = Fixture::new(5);
        // Index 1 is already claimed in the external ledger.
        fx.ownership.record_ownership(1, owner()).unwrap();

        let result = fx.mint(UNIT_PRICE);
        assert_eq!(result, Err(CollectionError::AlreadyMinted(1)));
        assert_eq!(fx.supply.minted_count(), 0);
        assert_eq!(fx.treasury.balance(), Wei::zero());
    }

    #[test]
    fn test_mint_into_second_batch() {
        let mut fx = Fixture::new(2);
        fx.mint(UNIT_PRICE).unwrap();
        fx.mint(UNIT_PRICE).unwrap();
        fx.supply.extend_supply(&owner(), 3, "ipfs://xyz").unwrap();

        let minted = fx.mint(UNIT_PRICE).unwrap();
        assert_eq!(minted.token_id, 3);
        assert_eq!(minted.metadata_uri, "ipfs://xyz");
    }
}
