//! Canonical pool key derivation.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Address, TokenPair};
use crate::error::AmmError;

/// Domain separator mixed into every pool key.
pub const POOL_KEY_DOMAIN: &[u8] = b"PAIR_AMM_POOL_V1";

/// Stable, order-independent identifier of a token pair's pool.
///
/// `PoolKey = BLAKE3(POOL_KEY_DOMAIN || lower || higher)`, where `lower`
/// and `higher` are the two token addresses in ascending order.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Address, PoolKey};
///
/// let a = Address::from_low_u64(10);
/// let b = Address::from_low_u64(20);
/// assert_eq!(PoolKey::derive(a, b), PoolKey::derive(b, a));
/// assert!(PoolKey::derive(a, a).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PoolKey([u8; 32]);

impl PoolKey {
    /// Canonicalizes an unordered token pair into its pool key.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidTokenPair`] if `token_a == token_b`.
    pub fn derive(token_a: Address, token_b: Address) -> Result<Self, AmmError> {
        Ok(TokenPair::new(token_a, token_b)?.key())
    }

    /// Hashes an already ordered pair. Callers guarantee `lower < higher`.
    pub(crate) fn from_ordered(lower: &Address, higher: &Address) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(POOL_KEY_DOMAIN);
        hasher.update(&lower.as_bytes());
        hasher.update(&higher.as_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    /// Returns the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First 8 bytes are plenty to tell pools apart in logs.
        for b in &self.0[..8] {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}
