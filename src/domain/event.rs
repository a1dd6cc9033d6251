//! Domain events emitted after a call commits.
//!
//! Events are informational: the engine never reads them back.  They are
//! handed to an [`EventSink`](crate::traits::EventSink) only once every
//! state change and external transfer of the call has succeeded.

use serde::{Deserialize, Serialize};

use super::{Address, Amount, Shares};

/// Pool state change notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum PoolEvent {
    /// Liquidity deposited and shares minted.
    LiquidityAdded {
        /// Account that supplied the tokens.
        provider: Address,
        /// First token as passed by the caller.
        token_a: Address,
        /// Second token as passed by the caller.
        token_b: Address,
        /// Amount of `token_a` credited to reserves.
        amount_a: Amount,
        /// Amount of `token_b` credited to reserves.
        amount_b: Amount,
        /// Shares minted to the recipient.
        liquidity: Shares,
    },

    /// Shares burned and reserves withdrawn.
    LiquidityRemoved {
        /// Account whose shares were burned.
        provider: Address,
        /// First token as passed by the caller.
        token_a: Address,
        /// Second token as passed by the caller.
        token_b: Address,
        /// Amount of `token_a` paid out.
        amount_a: Amount,
        /// Amount of `token_b` paid out.
        amount_b: Amount,
    },

    /// Direct two-token exchange.
    TokenSwapped {
        /// Account that sold `token_in`.
        user: Address,
        /// Token sold.
        token_in: Address,
        /// Token bought.
        token_out: Address,
        /// Amount sold.
        amount_in: Amount,
        /// Amount paid out.
        amount_out: Amount,
    },
}

impl PoolEvent {
    /// Short event name, as used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LiquidityAdded { .. } => "LiquidityAdded",
            Self::LiquidityRemoved { .. } => "LiquidityRemoved",
            Self::TokenSwapped { .. } => "TokenSwapped",
        }
    }
}
