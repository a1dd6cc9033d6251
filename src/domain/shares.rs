//! Liquidity-share units.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;

/// Units of a provider's claim on a pool's reserves.
///
/// Distinct from [`Amount`] because shares are not a token balance: they
/// are minted by the pool and only ever burned against it.  Minting is the
/// linear sum of the two deposited amounts, so [`Shares::from_deposit`]
/// is the one place that converts token amounts into shares.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Amount, Shares};
///
/// let minted = Shares::from_deposit(Amount::new(500), Amount::new(500));
/// assert_eq!(minted, Some(Shares::new(1_000)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates `Shares` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if there are no shares.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Shares minted for a deposit of `amount_a` and `amount_b`.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub const fn from_deposit(amount_a: Amount, amount_b: Amount) -> Option<Self> {
        match amount_a.get().checked_add(amount_b.get()) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
