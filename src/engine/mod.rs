//! The pool engine: liquidity, swaps and read-only views over a
//! [`PoolRegistry`].
//!
//! # Call Protocol
//!
//! Every mutating call runs the same four phases while holding the target
//! pool's lock:
//!
//! 1. **Validate**: deadline, token pair, recipient.
//! 2. **Stage**: compute amounts and apply them to a *clone* of the pool.
//! 3. **Transfer**: issue the external token transfers in protocol order.
//! 4. **Commit**: write the staged pool back and emit the event.
//!
//! A failure in any phase returns before phase 4, so the live pool is
//! never observed half-updated and nothing needs undoing in memory.  All
//! amount checks happen in phase 2, so a rejected call issues no external
//! transfer at all.
//!
//! When a later transfer of phase 3 fails after an earlier one succeeded,
//! the engine reverses the earlier one before returning the error, so the
//! custody balance of each token keeps tracking the pool reserves.

mod liquidity;
mod swap;
mod view;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

use crate::config::EngineConfig;
use crate::domain::{Address, Amount, PoolEvent, Timestamp};
use crate::error::AmmError;
use crate::pools::PoolRegistry;
use crate::traits::{Clock, EventSink, TokenTransfer};

/// A two-token AMM engine bound to its host collaborators.
///
/// Implements [`LiquidityEngine`](crate::traits::LiquidityEngine),
/// [`SwapEngine`](crate::traits::SwapEngine) and
/// [`PoolView`](crate::traits::PoolView).  The engine is `Send + Sync`
/// whenever its collaborators are, and may be shared across threads.
///
/// Collaborators must not call back into the engine for the pool they are
/// serving: pool locks are not reentrant.
///
/// # Example
///
/// ```rust
/// use pair_amm::config::EngineConfig;
/// use pair_amm::domain::{Address, AddLiquidity, Amount, Timestamp};
/// use pair_amm::engine::AmmEngine;
/// use pair_amm::host::{ManualClock, MemoryLedger, RecordingSink};
/// use pair_amm::traits::{LiquidityEngine, PoolView};
///
/// let usdc = Address::from_low_u64(1);
/// let weth = Address::from_low_u64(2);
/// let alice = Address::from_low_u64(100);
///
/// let ledger = MemoryLedger::new();
/// ledger.mint(&usdc, &alice, Amount::new(1_000));
/// ledger.mint(&weth, &alice, Amount::new(1_000));
///
/// let config = EngineConfig::new(Address::from_low_u64(0xc0)).expect("valid config");
/// let engine = AmmEngine::new(config, ledger, ManualClock::new(0), RecordingSink::new())
///     .expect("engine");
///
/// let deposit = engine
///     .add_liquidity(alice, &AddLiquidity {
///         token_a: usdc,
///         token_b: weth,
///         amount_a_desired: Amount::new(500),
///         amount_b_desired: Amount::new(500),
///         amount_a_min: Amount::ZERO,
///         amount_b_min: Amount::ZERO,
///         recipient: alice,
///         deadline: Timestamp::from_secs(60),
///     })
///     .expect("deposit");
/// assert_eq!(deposit.liquidity.get(), 1_000);
/// assert_eq!(
///     engine.get_reserves(usdc, weth).expect("distinct"),
///     (Amount::new(500), Amount::new(500))
/// );
/// ```
#[derive(Debug)]
pub struct AmmEngine<T, C, E> {
    config: EngineConfig,
    registry: PoolRegistry,
    token: T,
    clock: C,
    events: E,
}

impl<T, C, E> AmmEngine<T, C, E>
where
    T: TokenTransfer,
    C: Clock,
    E: EventSink,
{
    /// Creates an engine with an empty registry.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineConfig::validate`] failures.
    pub fn new(config: EngineConfig, token: T, clock: C, events: E) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            config,
            registry: PoolRegistry::new(),
            token,
            clock,
            events,
        })
    }

    /// The engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The pool registry.
    #[must_use]
    pub const fn registry(&self) -> &PoolRegistry {
        &self.registry
    }

    /// The token collaborator.
    #[must_use]
    pub const fn token(&self) -> &T {
        &self.token
    }

    /// The event sink.
    #[must_use]
    pub const fn events(&self) -> &E {
        &self.events
    }

    /// Rejects calls arriving after `deadline`. Reads the clock once.
    fn ensure_deadline(&self, deadline: Timestamp) -> Result<(), AmmError> {
        let now = self.clock.now();
        if now.is_within(deadline) {
            Ok(())
        } else {
            Err(AmmError::ExpiredDeadline {
                now: now.as_secs(),
                deadline: deadline.as_secs(),
            })
        }
    }

    /// Pulls `amount` of `token` from `owner` into custody.
    fn pull(&self, token: &Address, owner: &Address, amount: Amount) -> Result<(), AmmError> {
        self.token
            .transfer_from(token, owner, &self.config.custody(), amount)
            .map_err(|source| {
                tracing::warn!(%token, %owner, %amount, error = %source, "pull failed, rolling back");
                AmmError::ExternalTransferFailed {
                    token: *token,
                    source,
                }
            })
    }

    /// Pays `amount` of `token` out of custody to `recipient`.
    fn push(&self, token: &Address, recipient: &Address, amount: Amount) -> Result<(), AmmError> {
        self.token
            .transfer(token, &self.config.custody(), recipient, amount)
            .map_err(|source| {
                tracing::warn!(%token, %recipient, %amount, error = %source, "payout failed, rolling back");
                AmmError::ExternalTransferFailed {
                    token: *token,
                    source,
                }
            })
    }

    /// Returns a completed [`pull`](Self::pull) to `owner` after a later
    /// transfer of the same call failed.
    fn unwind_pull(&self, token: &Address, owner: &Address, amount: Amount) {
        if let Err(error) = self
            .token
            .transfer(token, &self.config.custody(), owner, amount)
        {
            tracing::error!(%token, %owner, %amount, %error, "could not return pulled amount");
        }
    }

    /// Recovers a completed [`push`](Self::push) from `recipient` after a
    /// later transfer of the same call failed.
    fn unwind_push(&self, token: &Address, recipient: &Address, amount: Amount) {
        if let Err(error) =
            self.token
                .transfer_from(token, recipient, &self.config.custody(), amount)
        {
            tracing::error!(%token, %recipient, %amount, %error, "could not recover paid-out amount");
        }
    }

    fn emit(&self, event: &PoolEvent) {
        tracing::debug!(event = event.name(), "emitting pool event");
        self.events.emit(event);
    }
}

/// Rejects the null recipient.
fn ensure_recipient(recipient: &Address) -> Result<(), AmmError> {
    if recipient.is_zero() {
        return Err(AmmError::InvalidRecipient);
    }
    Ok(())
}
