//! Direct two-token swap trait.
//!
//! # Fee Invariant
//!
//! The 0.3% fee is taken from the input before pricing and stays in the
//! pool, so after every successful swap
//!
//! ```text
//! reserve_in_new × reserve_out_new ≥ reserve_in_old × reserve_out_old
//! ```

use crate::domain::{Address, SwapExactIn, SwapOutcome};
use crate::error::AmmError;

/// Executes exact-input swaps along a direct two-token path.
pub trait SwapEngine {
    /// Sells exactly `request.amount_in` of `path[0]` for `path[1]`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnsupportedPath`] if `path` is not exactly two tokens.
    /// - [`AmmError::ExpiredDeadline`] if the call arrives after `deadline`.
    /// - [`AmmError::InvalidRecipient`] if `recipient` is the zero address.
    /// - [`AmmError::InvalidTokenPair`] if both path entries are identical.
    /// - [`AmmError::InsufficientPoolLiquidity`] if either reserve is zero.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `amount_out_min`.
    /// - [`AmmError::ExternalTransferFailed`] if the pull or payout fails.
    fn swap_exact_tokens_for_tokens(
        &self,
        caller: Address,
        request: &SwapExactIn,
    ) -> Result<SwapOutcome, AmmError>;
}
