//! Reserve and share state of a single token-pair pool.
//!
//! # State
//!
//! - `reserve_a` / `reserve_b`: token balances credited to the pool, in
//!   canonical order (`reserve_a` belongs to the lower token address).
//! - `total_shares`: shares outstanding.
//! - `shares`: per-account share balances; accounts with a zero balance
//!   have no entry.
//!
//! # Invariants
//!
//! - `total_shares == 0` ⇔ `reserve_a == 0 && reserve_b == 0` for every
//!   state reached through balanced deposits, withdrawals and swaps.
//! - `Σ shares == total_shares`.
//!
//! Mutators are crate-private and each validates its arithmetic before
//! touching any field, so a failed mutator leaves the pool unchanged.

use std::collections::HashMap;

use crate::domain::{Address, Amount, Shares};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// A constant-product pool record.
///
/// Owned by the [`PoolRegistry`](super::PoolRegistry); readers receive
/// clones through [`PoolView::pool`](crate::traits::PoolView::pool).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    shares: HashMap<Address, Shares>,
}

impl Pool {
    /// Reserve of the lower-address token.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Reserve of the higher-address token.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Shares outstanding.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Shares held by `account` (zero if it holds none).
    #[must_use]
    pub fn shares_of(&self, account: &Address) -> Shares {
        self.shares.get(account).copied().unwrap_or_default()
    }

    /// `true` when the pool holds no reserves and no shares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_shares.is_zero() && self.reserve_a.is_zero() && self.reserve_b.is_zero()
    }

    /// Reserves oriented so that the slot of the token flagged by
    /// `first_leads` comes first.
    pub(crate) const fn oriented(&self, first_leads: bool) -> (Amount, Amount) {
        if first_leads {
            (self.reserve_a, self.reserve_b)
        } else {
            (self.reserve_b, self.reserve_a)
        }
    }

    /// Checks the share-sum invariant.
    #[must_use]
    pub fn shares_balanced(&self) -> bool {
        self.shares
            .values()
            .try_fold(0u128, |acc, s| acc.checked_add(s.get()))
            == Some(self.total_shares.get())
    }

    /// Credits a deposit and mints `minted` shares to `recipient`.
    pub(crate) fn deposit(
        &mut self,
        amount_a: Amount,
        amount_b: Amount,
        recipient: Address,
        minted: Shares,
    ) -> Result<(), AmmError> {
        let reserve_a = self.reserve_a.safe_add(&amount_a)?;
        let reserve_b = self.reserve_b.safe_add(&amount_b)?;
        let total_shares = self.total_shares.safe_add(&minted)?;
        let held = self.shares_of(&recipient).safe_add(&minted)?;

        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.total_shares = total_shares;
        if !held.is_zero() {
            self.shares.insert(recipient, held);
        }
        Ok(())
    }

    /// Burns `burned` of `owner`'s shares and debits the withdrawn amounts.
    pub(crate) fn withdraw(
        &mut self,
        owner: &Address,
        burned: Shares,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<(), AmmError> {
        let held = self.shares_of(owner);
        let remaining = held
            .checked_sub(&burned)
            .ok_or(AmmError::InsufficientLiquidityShares {
                requested: burned.get(),
                held: held.get(),
            })?;
        let reserve_a = self.reserve_a.safe_sub(&amount_a)?;
        let reserve_b = self.reserve_b.safe_sub(&amount_b)?;
        let total_shares = self.total_shares.safe_sub(&burned)?;

        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.total_shares = total_shares;
        if remaining.is_zero() {
            self.shares.remove(owner);
        } else {
            self.shares.insert(*owner, remaining);
        }
        Ok(())
    }

    /// Applies a priced swap: the input slot grows by `amount_in`, the
    /// output slot shrinks by `amount_out`.
    pub(crate) fn apply_swap(
        &mut self,
        input_is_a: bool,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Result<(), AmmError> {
        let (reserve_in, reserve_out) = self.oriented(input_is_a);
        let new_in = reserve_in.safe_add(&amount_in)?;
        let new_out = reserve_out.safe_sub(&amount_out)?;
        if input_is_a {
            self.reserve_a = new_in;
            self.reserve_b = new_out;
        } else {
            self.reserve_b = new_in;
            self.reserve_a = new_out;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> Address {
        Address::from_low_u64(0xa1)
    }

    fn bob() -> Address {
        Address::from_low_u64(0xb0)
    }

    fn funded() -> Pool {
        let mut pool = Pool::default();
        let Ok(()) = pool.deposit(Amount::new(500), Amount::new(700), alice(), Shares::new(1_200))
        else {
            panic!("deposit");
        };
        pool
    }

    #[test]
    fn default_is_empty() {
        let pool = Pool::default();
        assert!(pool.is_empty());
        assert!(pool.shares_balanced());
        assert_eq!(pool.shares_of(&alice()), Shares::ZERO);
    }

    #[test]
    fn deposit_credits_everything() {
        let pool = funded();
        assert_eq!(pool.reserve_a(), Amount::new(500));
        assert_eq!(pool.reserve_b(), Amount::new(700));
        assert_eq!(pool.total_shares(), Shares::new(1_200));
        assert_eq!(pool.shares_of(&alice()), Shares::new(1_200));
        assert_eq!(pool.shares.len(), 1);
        assert!(pool.shares_balanced());
    }

    #[test]
    fn zero_mint_leaves_no_entry() {
        let mut pool = funded();
        let Ok(()) = pool.deposit(Amount::ZERO, Amount::ZERO, bob(), Shares::ZERO) else {
            panic!("deposit");
        };
        assert_eq!(pool.shares.len(), 1);
    }

    #[test]
    fn withdraw_all_returns_to_zero_state() {
        let mut pool = funded();
        let Ok(()) = pool.withdraw(&alice(), Shares::new(1_200), Amount::new(500), Amount::new(700))
        else {
            panic!("withdraw");
        };
        assert!(pool.is_empty());
        assert_eq!(pool.shares.len(), 0);
    }

    #[test]
    fn withdraw_more_than_held_is_rejected_untouched() {
        let mut pool = funded();
        let before = pool.clone();
        let err = pool.withdraw(&bob(), Shares::new(1), Amount::ZERO, Amount::ZERO);
        assert_eq!(
            err,
            Err(AmmError::InsufficientLiquidityShares {
                requested: 1,
                held: 0
            })
        );
        assert_eq!(pool, before);
    }

    #[test]
    fn failed_deposit_leaves_pool_untouched() {
        let mut pool = funded();
        let before = pool.clone();
        let err = pool.deposit(Amount::MAX, Amount::new(1), bob(), Shares::new(1));
        assert!(matches!(err, Err(AmmError::Overflow(_))));
        assert_eq!(pool, before);
    }

    #[test]
    fn swap_moves_correct_slots() {
        let mut pool = funded();
        let Ok(()) = pool.apply_swap(false, Amount::new(100), Amount::new(60)) else {
            panic!("swap");
        };
        assert_eq!(pool.reserve_a(), Amount::new(440));
        assert_eq!(pool.reserve_b(), Amount::new(800));
        assert_eq!(pool.oriented(false), (Amount::new(800), Amount::new(440)));
    }

    #[test]
    fn swap_cannot_drain_past_zero() {
        let mut pool = funded();
        let err = pool.apply_swap(true, Amount::new(1), Amount::new(701));
        assert!(matches!(err, Err(AmmError::Underflow(_))));
    }
}
