//! Values returned by successful engine calls.

use super::{Amount, Shares};

/// Result of a committed liquidity deposit.
///
/// `amount_a`/`amount_b` follow the caller's argument order, not the
/// pool's canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deposit {
    /// Amount of the caller's first token credited to reserves.
    pub amount_a: Amount,
    /// Amount of the caller's second token credited to reserves.
    pub amount_b: Amount,
    /// Shares minted to the recipient.
    pub liquidity: Shares,
}

/// Result of a committed liquidity withdrawal, in caller argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withdrawal {
    /// Amount of the caller's first token paid out.
    pub amount_a: Amount,
    /// Amount of the caller's second token paid out.
    pub amount_b: Amount,
}

/// Result of a committed swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOutcome {
    /// Amount of the input token taken from the caller.
    pub amount_in: Amount,
    /// Amount of the output token paid to the recipient.
    pub amount_out: Amount,
}

impl From<Deposit> for (Amount, Amount, Shares) {
    fn from(d: Deposit) -> Self {
        (d.amount_a, d.amount_b, d.liquidity)
    }
}

impl From<Withdrawal> for (Amount, Amount) {
    fn from(w: Withdrawal) -> Self {
        (w.amount_a, w.amount_b)
    }
}

impl From<SwapOutcome> for (Amount, Amount) {
    fn from(s: SwapOutcome) -> Self {
        (s.amount_in, s.amount_out)
    }
}
