//! Fixed-point exchange rate.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A reserve ratio scaled by `10^18`.
///
/// `Price::raw() == reserve_numerator * 10^18 / reserve_denominator`,
/// floored.  A raw value of [`Price::SCALE`] means a 1:1 ratio.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Price;
///
/// let p = Price::from_raw(Price::SCALE / 2);
/// assert_eq!(p.to_string(), "0.500000000000000000");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u128);

impl Price {
    /// Number of decimal places in the fixed-point representation.
    pub const DECIMALS: u32 = 18;

    /// `10^18`, the raw value of a 1:1 price.
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// Wraps an already-scaled value.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// The scaled value.
    #[must_use]
    pub const fn raw(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:018}",
            self.0 / Self::SCALE,
            self.0 % Self::SCALE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_to_one() {
        let p = Price::from_raw(Price::SCALE);
        assert_eq!(p.raw(), Price::SCALE);
        assert_eq!(p.to_string(), "1.000000000000000000");
    }

    #[test]
    fn fractional_display() {
        assert_eq!(Price::from_raw(25).to_string(), "0.000000000000000025");
    }
}
