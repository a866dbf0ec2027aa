// crates/cnw-core/src/amount.rs
//
// Payment amounts attached to mint calls.
//
// The smallest unit is the wei. 1 ETH = 10^18 wei. All accounting uses integer
// wei so that price comparisons are exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Number of wei in one ETH. 1 ETH = 10^18 wei.
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// An amount of value in wei.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Wei(u128);

impl Wei {
    /// Create an amount from a whole ETH value (as f64).
    ///
    /// Intended for operator input; prices inside the crate are built with
    /// [`Wei::from_wei`].
    ///
    /// # Example
    /// ```
    /// use cnw_core::amount::Wei;
    /// let amount = Wei::from_ether(0.003);
    /// assert_eq!(amount.as_wei(), 3_000_000_000_000_000);
    /// ```
    pub fn from_ether(amount: f64) -> Self {
        Self((amount * WEI_PER_ETHER as f64).round() as u128)
    }

    /// Create an amount from a raw wei value.
    pub const fn from_wei(wei: u128) -> Self {
        Self(wei)
    }

    /// Raw wei value.
    pub const fn as_wei(&self) -> u128 {
        self.0
    }

    /// Convert this amount to ETH as a floating-point value.
    pub fn to_ether(&self) -> f64 {
        self.0 as f64 / WEI_PER_ETHER as f64
    }

    /// Returns zero wei.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Checked addition, `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }
}

impl Add for Wei {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Wei {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / WEI_PER_ETHER;
        let frac = self.0 % WEI_PER_ETHER;
        if frac == 0 {
            write!(f, "{} ETH", whole)
        } else {
            // Up to 18 decimal places, trailing zeros trimmed
            let frac_str = format!("{:018}", frac);
            let trimmed = frac_str.trim_end_matches('0');
            write!(f, "{}.{} ETH", whole, trimmed)
        }
    }
}
