//! Wide unsigned integers for intermediate products.
//!
//! Reserves and amounts are `u128`, but products such as
//! `amount_in × 997 × reserve_out` need up to 266 bits before the final
//! division brings them back into range.  [`U512`] holds any product of
//! three `u128`-sized factors without overflow.

use crate::error::AmmError;

uint::construct_uint! {
    /// 512-bit unsigned integer for overflow-free intermediate arithmetic.
    pub struct U512(8);
}

impl U512 {
    /// Narrows back to `u128`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] with `context` if the value does not
    /// fit in 128 bits.
    pub fn narrow(self, context: &'static str) -> Result<u128, AmmError> {
        if self.bits() > 128 {
            return Err(AmmError::Overflow(context));
        }
        Ok(self.low_u128())
    }
}

/// Computes `floor(a × b / denominator)` without intermediate overflow.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use pair_amm::math::mul_div;
///
/// assert_eq!(mul_div(u128::MAX, 4, 8), Ok(u128::MAX / 2));
/// assert!(mul_div(1, 1, 0).is_err());
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128, AmmError> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = U512::from(a) * U512::from(b);
    (product / U512::from(denominator)).narrow("mul_div quotient exceeds u128")
}
