//! Fundamental domain value types used throughout the engine.
//!
//! Identifiers, amounts, share units, time, canonical pair keys, swap
//! routes and the events a pool emits.  All types are small `Copy`
//! newtypes or validated structs.

mod address;
mod amount;
mod event;
mod outcome;
mod pool_key;
mod price;
mod request;
mod shares;
mod swap_path;
mod timestamp;
mod token_pair;

pub use address::Address;
pub use amount::Amount;
pub use event::PoolEvent;
pub use outcome::{Deposit, SwapOutcome, Withdrawal};
pub use pool_key::{PoolKey, POOL_KEY_DOMAIN};
pub use price::Price;
pub use request::{AddLiquidity, RemoveLiquidity, SwapExactIn};
pub use shares::Shares;
pub use swap_path::SwapPath;
pub use timestamp::Timestamp;
pub use token_pair::TokenPair;
