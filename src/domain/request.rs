//! Caller-supplied parameters for mutating engine calls.

use super::{Address, Amount, Shares, Timestamp};

/// Parameters of [`LiquidityEngine::add_liquidity`](crate::traits::LiquidityEngine::add_liquidity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddLiquidity {
    /// First token, in the caller's order.
    pub token_a: Address,
    /// Second token, in the caller's order.
    pub token_b: Address,
    /// Amount of `token_a` pulled from the caller.
    pub amount_a_desired: Amount,
    /// Amount of `token_b` pulled from the caller.
    pub amount_b_desired: Amount,
    /// Least acceptable `token_a` credited to reserves.
    pub amount_a_min: Amount,
    /// Least acceptable `token_b` credited to reserves.
    pub amount_b_min: Amount,
    /// Account credited with the minted shares.
    pub recipient: Address,
    /// Last instant at which the call may execute.
    pub deadline: Timestamp,
}

/// Parameters of [`LiquidityEngine::remove_liquidity`](crate::traits::LiquidityEngine::remove_liquidity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveLiquidity {
    /// First token, in the caller's order.
    pub token_a: Address,
    /// Second token, in the caller's order.
    pub token_b: Address,
    /// Shares to burn from the caller's balance.
    pub liquidity: Shares,
    /// Least acceptable `token_a` paid out.
    pub amount_a_min: Amount,
    /// Least acceptable `token_b` paid out.
    pub amount_b_min: Amount,
    /// Account receiving the withdrawn tokens.
    pub recipient: Address,
    /// Last instant at which the call may execute.
    pub deadline: Timestamp,
}

/// Parameters of [`SwapEngine::swap_exact_tokens_for_tokens`](crate::traits::SwapEngine::swap_exact_tokens_for_tokens).
///
/// `path` is kept raw so that its length is validated by the engine, which
/// reports [`AmmError::UnsupportedPath`](crate::error::AmmError::UnsupportedPath)
/// for anything but a direct pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapExactIn {
    /// Exact amount of `path[0]` sold.
    pub amount_in: Amount,
    /// Least acceptable amount of `path[1]` received.
    pub amount_out_min: Amount,
    /// `[token_in, token_out]`.
    pub path: Vec<Address>,
    /// Account receiving the output tokens.
    pub recipient: Address,
    /// Last instant at which the call may execute.
    pub deadline: Timestamp,
}
