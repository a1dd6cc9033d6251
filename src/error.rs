//! Unified error types for the pool engine.
//!
//! Every fallible operation in the crate returns [`AmmError`].  Errors are
//! terminal for the call that produced them: the engine never retries, and
//! any state staged during the call is discarded before the error reaches
//! the caller.

use core::fmt;

use crate::domain::Address;

/// Which leg of a token pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first token as supplied by the caller.
    A,
    /// The second token as supplied by the caller.
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Failure reported by a [`TokenTransfer`](crate::traits::TokenTransfer)
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    /// The debited account does not hold enough of the token.
    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        /// Amount the transfer tried to move.
        requested: u128,
        /// Balance held by the debited account.
        available: u128,
    },
    /// The token ledger refused the transfer (returned `false`).
    #[error("transfer rejected by token: {0}")]
    Rejected(&'static str),
    /// The credited balance would overflow.
    #[error("recipient balance overflow")]
    Overflow,
}

/// Error taxonomy for every engine operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// The call arrived after its deadline.
    #[error("deadline expired: now {now}, deadline {deadline}")]
    ExpiredDeadline {
        /// Time observed at call entry.
        now: u64,
        /// Caller-supplied deadline.
        deadline: u64,
    },

    /// Both tokens of a pair are the same.
    #[error("invalid token pair: tokens must differ")]
    InvalidTokenPair,

    /// The recipient (or configured custody account) is the zero address.
    #[error("invalid recipient: zero address")]
    InvalidRecipient,

    /// The proportional amount for one side exceeds what the caller offered.
    #[error("excessive input required for token {0}")]
    ExcessiveInputRequired(Side),

    /// A realized amount fell below the caller-supplied minimum.
    #[error("slippage exceeded")]
    SlippageExceeded,

    /// The caller holds fewer shares than it tried to burn.
    #[error("insufficient liquidity shares: requested {requested}, held {held}")]
    InsufficientLiquidityShares {
        /// Shares the caller asked to burn.
        requested: u128,
        /// Shares the caller actually holds.
        held: u128,
    },

    /// One of the pool reserves is zero, so no price can be formed.
    #[error("insufficient pool liquidity")]
    InsufficientPoolLiquidity,

    /// A division had a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The swap path does not hold exactly two tokens.
    #[error("unsupported path of length {0}: only direct two-token swaps are supported")]
    UnsupportedPath(usize),

    /// A token collaborator failed to move value.
    #[error("external transfer of token {token} failed: {source}")]
    ExternalTransferFailed {
        /// Token whose transfer failed.
        token: Address,
        /// Reason reported by the collaborator.
        #[source]
        source: TransferError,
    },

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_expired_deadline() {
        let e = AmmError::ExpiredDeadline {
            now: 10,
            deadline: 9,
        };
        assert_eq!(e.to_string(), "deadline expired: now 10, deadline 9");
    }

    #[test]
    fn display_excessive_input_names_side() {
        assert_eq!(
            AmmError::ExcessiveInputRequired(Side::B).to_string(),
            "excessive input required for token B"
        );
    }

    #[test]
    fn transfer_error_is_source() {
        use std::error::Error as _;
        let e = AmmError::ExternalTransferFailed {
            token: Address::from_bytes([7u8; 32]),
            source: TransferError::Rejected("frozen"),
        };
        assert!(e.source().is_some());
        assert!(e.to_string().contains("frozen"));
    }

    #[test]
    fn unsupported_path_reports_length() {
        assert!(AmmError::UnsupportedPath(3).to_string().contains('3'));
    }
}
