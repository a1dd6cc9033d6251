//! In-process implementations of the host collaborator traits.
//!
//! Production hosts plug their own ledger, clock and event transport into
//! [`AmmEngine`](crate::engine::AmmEngine); these implementations cover
//! simulations, demos and tests.

mod clock;
mod ledger;
mod sink;

pub use clock::{ManualClock, SystemClock};
pub use ledger::MemoryLedger;
pub use sink::{RecordingSink, TracingSink};
