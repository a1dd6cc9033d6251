//! Pool records and the registry that owns them.
//!
//! | Type | Role |
//! |------|------|
//! | [`Pool`] | reserve and share state of one token pair |
//! | [`PoolRegistry`] | arena keyed by [`PoolKey`](crate::domain::PoolKey), filled by first deposits |

mod pool;
mod registry;

pub use pool::Pool;
pub(crate) use registry::Entry;
pub use registry::{PoolHandle, PoolRegistry};
