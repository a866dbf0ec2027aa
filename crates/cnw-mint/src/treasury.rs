// crates/cnw-mint/src/treasury.rs
//
// Payment custody for mint proceeds.
//
// Every successful mint deposits the full attached payment, including any
// amount above the unit price. Withdrawal is handled outside this crate.

use serde::{Deserialize, Serialize};

use cnw_core::amount::Wei;
use cnw_core::identity::Address;
use cnw_core::traits::PaymentCustody;

/// Holds mint proceeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treasury {
    /// Current balance.
    balance: Wei,
    /// Number of deposits received.
    deposits: u64,
}

impl Treasury {
    /// Create a new treasury with zero balance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a treasury with an initial balance.
    pub fn with_balance(balance: Wei) -> Self {
        Self {
            balance,
            deposits: 0,
        }
    }

    /// Number of deposits received.
    pub fn deposits(&self) -> u64 {
        self.deposits
    }
}

impl PaymentCustody for Treasury {
    fn deposit(&mut self, from: Address, amount: Wei) {
        self.balance = self.balance + amount;
        self.deposits += 1;
        tracing::debug!("Treasury received {} from {}", amount, from);
    }

    fn balance(&self) -> Wei {
        self.balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnw_core::amount::WEI_PER_ETHER;

    fn payer() -> Address {
        Address::repeat_byte(3)
    }

    #[test]
    fn test_new_treasury_has_zero_balance() {
        let treasury = Treasury::new();
        assert_eq!(treasury.balance(), Wei::zero());
        assert_eq!(treasury.deposits(), 0);
    }

    #[test]
    fn test_multiple_deposits() {
        let mut treasury = Treasury::new();
        treasury.deposit(payer(), Wei::from_wei(WEI_PER_ETHER));
        treasury.deposit(payer(), Wei::from_wei(2 * WEI_PER_ETHER));
        assert_eq!(treasury.balance(), Wei::from_wei(3 * WEI_PER_ETHER));
        assert_eq!(treasury.deposits(), 2);
    }

    #[test]
    fn test_deposit_saturates() {
        let mut treasury = Treasury::with_balance(Wei::from_wei(u128::MAX));
        treasury.deposit(payer(), Wei::from_wei(1));
        assert_eq!(treasury.balance(), Wei::from_wei(u128::MAX));
    }
}
