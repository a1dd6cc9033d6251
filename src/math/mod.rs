//! Arithmetic for pool calculations.
//!
//! - [`CheckedArithmetic`] for overflow-safe bookkeeping on domain types.
//! - [`U512`] and [`mul_div`] for wide intermediate products.
//! - [`get_amount_out`], the constant-product pricing function, and
//!   [`scaled_ratio`] for 18-decimal reserve ratios.

mod checked;
mod pricing;
mod wide;

pub use checked::CheckedArithmetic;
pub use pricing::{get_amount_out, scaled_ratio, FEE_DENOMINATOR, FEE_NUMERATOR};
pub use wide::{mul_div, U512};
