//! Canonically ordered pair of distinct tokens.

use super::{Address, PoolKey};
use crate::error::AmmError;

/// An unordered pair of distinct tokens, stored in canonical order.
///
/// The constructor sorts its arguments so that `first() < second()`;
/// `(A, B)` and `(B, A)` therefore build equal pairs and resolve to the
/// same [`PoolKey`].  A pool's `reserve_a` slot always belongs to
/// [`first`](Self::first) and `reserve_b` to [`second`](Self::second).
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Address, TokenPair};
///
/// let usdc = Address::from_low_u64(1);
/// let weth = Address::from_low_u64(2);
///
/// let pair = TokenPair::new(weth, usdc).expect("distinct tokens");
/// assert_eq!(pair.first(), usdc);
/// assert_eq!(pair.second(), weth);
/// assert_eq!(pair, TokenPair::new(usdc, weth).expect("distinct tokens"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    first: Address,
    second: Address,
}

impl TokenPair {
    /// Creates a canonically ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidTokenPair`] if both tokens are identical.
    pub fn new(token_a: Address, token_b: Address) -> Result<Self, AmmError> {
        if token_a == token_b {
            return Err(AmmError::InvalidTokenPair);
        }
        let (first, second) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };
        Ok(Self { first, second })
    }

    /// The lower token; owns the pool's `reserve_a` slot.
    #[must_use]
    pub const fn first(&self) -> Address {
        self.first
    }

    /// The higher token; owns the pool's `reserve_b` slot.
    #[must_use]
    pub const fn second(&self) -> Address {
        self.second
    }

    /// Returns `true` if `token` is the lower token of the pair.
    #[must_use]
    pub fn is_first(&self, token: &Address) -> bool {
        self.first == *token
    }

    /// Derives the canonical pool key for this pair.
    #[must_use]
    pub fn key(&self) -> PoolKey {
        PoolKey::from_ordered(&self.first, &self.second)
    }
}
