//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use pair_amm::prelude::*;
//! ```

pub use crate::domain::{
    AddLiquidity, Address, Amount, Deposit, PoolEvent, PoolKey, Price, RemoveLiquidity, Shares,
    SwapExactIn, SwapOutcome, Timestamp, TokenPair, Withdrawal,
};

pub use crate::traits::{Clock, EventSink, LiquidityEngine, PoolView, SwapEngine, TokenTransfer};

pub use crate::math::{get_amount_out, CheckedArithmetic};

pub use crate::config::EngineConfig;

pub use crate::engine::AmmEngine;

pub use crate::host::{ManualClock, MemoryLedger, RecordingSink, SystemClock, TracingSink};

pub use crate::error::{AmmError, Result, Side, TransferError};
