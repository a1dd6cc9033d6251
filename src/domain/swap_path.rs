//! Direct two-token swap route.

use super::{Address, TokenPair};
use crate::error::AmmError;

/// A validated swap route: exactly one input token and one output token.
///
/// Multi-hop routing is not supported, so any path whose length is not
/// two is rejected at construction.  Whether the two tokens form a valid
/// pair is checked later, by [`SwapPath::pair`].
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Address, SwapPath};
///
/// let a = Address::from_low_u64(1);
/// let b = Address::from_low_u64(2);
/// let path = SwapPath::new(&[a, b]).expect("direct path");
/// assert_eq!(path.token_in(), a);
/// assert_eq!(path.token_out(), b);
///
/// assert!(SwapPath::new(&[a, b, a]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapPath {
    token_in: Address,
    token_out: Address,
}

impl SwapPath {
    /// Validates a raw path.
    ///
    /// # Errors
    ///
    /// [`AmmError::UnsupportedPath`] if `path.len() != 2`.
    pub fn new(path: &[Address]) -> Result<Self, AmmError> {
        let [token_in, token_out] = path else {
            return Err(AmmError::UnsupportedPath(path.len()));
        };
        Ok(Self {
            token_in: *token_in,
            token_out: *token_out,
        })
    }

    /// Token sold by the caller.
    #[must_use]
    pub const fn token_in(&self) -> Address {
        self.token_in
    }

    /// Token paid out to the recipient.
    #[must_use]
    pub const fn token_out(&self) -> Address {
        self.token_out
    }

    /// The canonical pair traded by this path.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidTokenPair`] if both entries are the same token.
    pub fn pair(&self) -> Result<TokenPair, AmmError> {
        TokenPair::new(self.token_in, self.token_out)
    }
}
