//! Host-supplied time values.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A point in time as reported by the host, in seconds.
///
/// The engine only ever compares a `Timestamp` against a caller's deadline,
/// so the epoch and unit are whatever the host's [`Clock`](crate::traits::Clock)
/// and its callers agree on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a `Timestamp` from raw seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the raw seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// `true` if `self` is still within `deadline` (inclusive).
    #[must_use]
    pub const fn is_within(&self, deadline: Timestamp) -> bool {
        self.0 <= deadline.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
