//! Configuration for an [`AmmEngine`](crate::engine::AmmEngine).

use serde::{Deserialize, Serialize};

use crate::domain::Address;
use crate::error::AmmError;

/// Host-supplied parameters of an engine instance.
///
/// # Fields
///
/// - `custody`: the account that receives every pulled token and pays
///   every outgoing transfer.  All pools of one engine share it.
///
/// # Validation
///
/// - `custody` must not be the zero address.
///
/// # Examples
///
/// ```
/// use pair_amm::config::EngineConfig;
/// use pair_amm::domain::Address;
///
/// let cfg = EngineConfig::new(Address::from_low_u64(0xc0)).expect("valid config");
/// assert_eq!(cfg.custody(), Address::from_low_u64(0xc0));
/// assert!(EngineConfig::new(Address::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    custody: Address,
}

impl EngineConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidRecipient`] if `custody` is zero.
    pub fn new(custody: Address) -> Result<Self, AmmError> {
        let config = Self { custody };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// Deserialized configurations bypass [`new`](Self::new), so the
    /// engine calls this again on construction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidRecipient`] if `custody` is zero.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.custody.is_zero() {
            return Err(AmmError::InvalidRecipient);
        }
        Ok(())
    }

    /// The engine's custody account.
    #[must_use]
    pub const fn custody(&self) -> Address {
        self.custody
    }
}
