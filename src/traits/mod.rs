//! Core trait abstractions.
//!
//! Engine-facing traits: [`LiquidityEngine`], [`SwapEngine`] and
//! [`PoolView`].  Host-facing collaborator traits: [`TokenTransfer`],
//! [`Clock`] and [`EventSink`].

mod collaborators;
mod liquidity_engine;
mod pool_view;
mod swap_engine;

pub use collaborators::{Clock, EventSink, TokenTransfer};
pub use liquidity_engine::LiquidityEngine;
pub use pool_view::PoolView;
pub use swap_engine::SwapEngine;
