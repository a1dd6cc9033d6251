//! Liquidity provision trait.
//!
//! # Share Accounting Invariant
//!
//! For every pool, the sum of all account share balances equals the pool's
//! `total_shares`, and `total_shares == 0` exactly when both reserves are
//! zero.  Only [`LiquidityEngine::add_liquidity`] mints shares and only
//! [`LiquidityEngine::remove_liquidity`] burns them.
//!
//! # Minting Rule
//!
//! Shares minted for a deposit are the linear sum `amount_a + amount_b` of
//! the amounts actually credited to reserves.  Desired amounts are pulled
//! from the caller in full; any excess over the credited amount stays in
//! the engine's custody and is not refunded.

use crate::domain::{Address, AddLiquidity, Deposit, RemoveLiquidity, Withdrawal};
use crate::error::AmmError;

/// Adds and removes liquidity against a token pair's pool.
pub trait LiquidityEngine {
    /// Deposits tokens into the pair's pool and mints shares to
    /// `request.recipient`.
    ///
    /// The pool is created on the first successful deposit for the pair.
    /// On an empty pool the desired amounts are credited as-is.  Otherwise
    /// both proportional amounts are computed from current reserves and
    /// each must fit within its desired amount.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ExpiredDeadline`] if the call arrives after `deadline`.
    /// - [`AmmError::InvalidTokenPair`] if both tokens are identical.
    /// - [`AmmError::InvalidRecipient`] if `recipient` is the zero address.
    /// - [`AmmError::ExcessiveInputRequired`] if a proportional amount
    ///   exceeds its desired amount.
    /// - [`AmmError::SlippageExceeded`] if a credited amount is below its
    ///   minimum.
    /// - [`AmmError::ExternalTransferFailed`] if a pull fails.
    fn add_liquidity(&self, caller: Address, request: &AddLiquidity) -> Result<Deposit, AmmError>;

    /// Burns `request.liquidity` of the caller's shares and pays the
    /// proportional reserves to `request.recipient`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ExpiredDeadline`], [`AmmError::InvalidTokenPair`],
    ///   [`AmmError::InvalidRecipient`] as for `add_liquidity`.
    /// - [`AmmError::InsufficientLiquidityShares`] if the caller holds fewer
    ///   shares than requested.
    /// - [`AmmError::DivisionByZero`] if the pool has no shares outstanding.
    /// - [`AmmError::SlippageExceeded`] if a payout is below its minimum.
    /// - [`AmmError::ExternalTransferFailed`] if a payout fails.
    fn remove_liquidity(
        &self,
        caller: Address,
        request: &RemoveLiquidity,
    ) -> Result<Withdrawal, AmmError>;
}
