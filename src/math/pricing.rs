//! Constant-product pricing with a 0.3% input fee.
//!
//! ```text
//! amount_in_with_fee = amount_in × 997
//! amount_out = amount_in_with_fee × reserve_out
//!            / (reserve_in × 1000 + amount_in_with_fee)
//! ```
//!
//! The fee stays in the pool, so `reserve_in × reserve_out` never
//! decreases across a swap priced by [`get_amount_out`].

use super::wide::U512;
use crate::domain::{Amount, Price};
use crate::error::AmmError;

/// Fee numerator: 997 / 1000 of the input is priced.
pub const FEE_NUMERATOR: u32 = 997;

/// Fee denominator.
pub const FEE_DENOMINATOR: u32 = 1_000;

/// Output amount for an exact-input swap against the given reserves.
///
/// Pure: depends only on its arguments.  Intermediate products are carried
/// in [`U512`] so no input combination overflows before the division.
///
/// # Errors
///
/// Returns [`AmmError::InsufficientPoolLiquidity`] if either reserve is
/// zero.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Amount;
/// use pair_amm::math::get_amount_out;
///
/// let out = get_amount_out(Amount::new(100), Amount::new(1_000), Amount::new(1_000));
/// assert_eq!(out, Ok(Amount::new(90)));
/// ```
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, AmmError> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientPoolLiquidity);
    }

    let amount_in_with_fee = U512::from(amount_in.get()) * U512::from(FEE_NUMERATOR);
    let numerator = amount_in_with_fee * U512::from(reserve_out.get());
    let denominator =
        U512::from(reserve_in.get()) * U512::from(FEE_DENOMINATOR) + amount_in_with_fee;

    // denominator > 0 because reserve_in > 0; quotient < reserve_out.
    let amount_out = (numerator / denominator).narrow("amount_out exceeds u128")?;
    tracing::trace!(
        amount_in = %amount_in,
        reserve_in = %reserve_in,
        reserve_out = %reserve_out,
        amount_out = %amount_out,
        "priced swap"
    );
    Ok(Amount::new(amount_out))
}

/// Ratio `numerator_reserve × 10^18 / denominator_reserve`, floored.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator_reserve` is zero.
/// - [`AmmError::Overflow`] if the scaled ratio does not fit in `u128`.
pub fn scaled_ratio(
    numerator_reserve: Amount,
    denominator_reserve: Amount,
) -> Result<Price, AmmError> {
    if denominator_reserve.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let scaled = U512::from(numerator_reserve.get()) * U512::from(Price::SCALE);
    let raw = (scaled / U512::from(denominator_reserve.get())).narrow("price exceeds u128")?;
    Ok(Price::from_raw(raw))
}
