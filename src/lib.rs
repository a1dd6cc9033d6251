//! # Pair AMM
//!
//! Two-token constant-product liquidity pool engine: deposit a pair, mint
//! pool shares, swap one token for the other at `x × y = k` less a 0.3%
//! fee, and withdraw pro rata.
//!
//! The engine is a library.  It owns pool state only; token balances,
//! time and event delivery belong to the host and are reached through the
//! collaborator traits in [`traits`].
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pair-amm = "0.1"
//! ```
//!
//! ## Seed a pool and execute a swap
//!
//! ```rust
//! use pair_amm::prelude::*;
//!
//! // 1. Two tokens and two accounts
//! let usdc = Address::from_low_u64(1);
//! let weth = Address::from_low_u64(2);
//! let (alice, bob) = (Address::from_low_u64(100), Address::from_low_u64(200));
//!
//! // 2. An in-memory ledger standing in for the host's token balances
//! let ledger = MemoryLedger::new();
//! for who in [alice, bob] {
//!     ledger.mint(&usdc, &who, Amount::new(10_000));
//!     ledger.mint(&weth, &who, Amount::new(10_000));
//! }
//!
//! // 3. The engine, with a custody account holding every pool's tokens
//! let config = EngineConfig::new(Address::from_low_u64(0xc0)).expect("valid config");
//! let engine = AmmEngine::new(config, ledger, ManualClock::new(0), RecordingSink::new())
//!     .expect("engine");
//!
//! // 4. Seed the pool with 1 000 of each token
//! engine
//!     .add_liquidity(alice, &AddLiquidity {
//!         token_a: usdc,
//!         token_b: weth,
//!         amount_a_desired: Amount::new(1_000),
//!         amount_b_desired: Amount::new(1_000),
//!         amount_a_min: Amount::ZERO,
//!         amount_b_min: Amount::ZERO,
//!         recipient: alice,
//!         deadline: Timestamp::from_secs(60),
//!     })
//!     .expect("deposit");
//!
//! // 5. Sell 100 USDC for WETH
//! let outcome = engine
//!     .swap_exact_tokens_for_tokens(bob, &SwapExactIn {
//!         amount_in: Amount::new(100),
//!         amount_out_min: Amount::new(85),
//!         path: vec![usdc, weth],
//!         recipient: bob,
//!         deadline: Timestamp::from_secs(60),
//!     })
//!     .expect("swap");
//!
//! assert_eq!(outcome.amount_out, Amount::new(90));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │    Host     │  TokenTransfer + Clock + EventSink
//! └──────┬──────┘
//!        │ add / remove / swap / views
//!        ▼
//! ┌─────────────┐
//! │   Engine    │  validate → stage → transfer → commit
//! └──────┬──────┘
//!        │ PoolKey (canonical pair hash)
//!        ▼
//! ┌─────────────┐
//! │  Registry   │  one Mutex<Pool> per pair
//! └──────┬──────┘
//!        │ reserves + shares
//!        ▼
//! ┌─────────────┐
//! │ Math/Domain │  get_amount_out, mul_div, Amount, Shares, Price, …
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Address`](domain::Address), [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`PoolKey`](domain::PoolKey), requests and events |
//! | [`traits`] | Engine traits [`LiquidityEngine`](traits::LiquidityEngine), [`SwapEngine`](traits::SwapEngine), [`PoolView`](traits::PoolView) and the host collaborators |
//! | [`engine`] | [`AmmEngine`](engine::AmmEngine), the implementation of all three engine traits |
//! | [`pools`]  | [`Pool`](pools::Pool) state and the [`PoolRegistry`](pools::PoolRegistry) |
//! | [`math`]   | Pricing function, wide multiply-divide, checked arithmetic |
//! | [`config`] | [`EngineConfig`](config::EngineConfig) |
//! | [`host`]   | In-memory ledger, clocks and event sinks for simulations and tests |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod host;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
