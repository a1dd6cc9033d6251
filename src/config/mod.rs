//! Engine configuration.
//!
//! [`EngineConfig`] carries the parameters a host fixes when it builds an
//! [`AmmEngine`](crate::engine::AmmEngine).  It is serde-enabled so hosts
//! can load it alongside their own settings.

mod engine_config;

pub use engine_config::EngineConfig;
