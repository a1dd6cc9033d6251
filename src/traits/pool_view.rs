//! Read-only pool queries.
//!
//! # Argument Order
//!
//! [`PoolView::get_price`] orients its result by the *query* arguments:
//! the reserve of `token_a` over the reserve of `token_b`.
//! [`PoolView::get_reserves`] does **not**: it returns the pool's stored
//! slots in canonical order (lower address first) whatever order the
//! tokens are passed in.

use crate::domain::{Address, Amount, Price, Shares};
use crate::error::AmmError;
use crate::pools::Pool;

/// Queries that never mutate pool state.
pub trait PoolView {
    /// `reserve(token_a) × 10^18 / reserve(token_b)`, floored.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidTokenPair`] if both tokens are identical.
    /// - [`AmmError::DivisionByZero`] if `token_b`'s reserve is zero
    ///   (including when the pool does not exist).
    /// - [`AmmError::Overflow`] if the scaled ratio exceeds `u128`.
    fn get_price(&self, token_a: Address, token_b: Address) -> Result<Price, AmmError>;

    /// The raw `(reserve_a, reserve_b)` slots, canonical order.
    ///
    /// An unknown pool reports `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidTokenPair`] if both tokens are identical.
    fn get_reserves(
        &self,
        token_a: Address,
        token_b: Address,
    ) -> Result<(Amount, Amount), AmmError>;

    /// Shares held by `account` in the pair's pool; zero if none.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidTokenPair`] if both tokens are identical.
    fn shares_of(
        &self,
        token_a: Address,
        token_b: Address,
        account: Address,
    ) -> Result<Shares, AmmError>;

    /// Total shares outstanding in the pair's pool; zero if none.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidTokenPair`] if both tokens are identical.
    fn total_shares(&self, token_a: Address, token_b: Address) -> Result<Shares, AmmError>;

    /// A copy of the pair's pool state, or `None` if it was never created.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidTokenPair`] if both tokens are identical.
    fn pool(&self, token_a: Address, token_b: Address) -> Result<Option<Pool>, AmmError>;
}
