//! Display rounding shared by every percentage and growth figure.
//!
//! All published figures use two decimal places with half-away-from-zero
//! midpoint handling, so outputs compare exactly across implementations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places in published percentages, growth rates and indices.
pub const DISPLAY_SCALE: u32 = 2;

/// Rounds to [`DISPLAY_SCALE`] places, midpoints away from zero.
///
/// # Examples
///
/// ```
/// use sectoral_core::rounding::round_display;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_display(dec!(2.345)), dec!(2.35));
/// assert_eq!(round_display(dec!(-2.345)), dec!(-2.35));
/// ```
#[must_use]
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
