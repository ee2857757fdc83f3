//! Share and growth calculations.
//!
//! Both functions return figures already rounded with
//! [`round_display`](sectoral_core::rounding::round_display).

use rust_decimal::Decimal;
use sectoral_core::rounding::round_display;
use sectoral_core::{SectoralError, SectoralResult};

/// Share of `value` in `total`, in percent.
///
/// Formula: `100 * value / total`
///
/// # Errors
///
/// `DivisionByZero` when `total` is zero, `ArithmeticOverflow` when the share
/// is too large for a `Decimal` (a total far below the sector value).
///
/// # Examples
///
/// ```
/// use sectoral_analytics::metrics::percentage;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(percentage(dec!(100), dec!(400)).unwrap(), dec!(25.00));
/// ```
pub fn percentage(value: Decimal, total: Decimal) -> SectoralResult<Decimal> {
    if total.is_zero() {
        return Err(SectoralError::division_by_zero("percentage of total"));
    }
    value
        .checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(round_display)
        .ok_or_else(|| SectoralError::overflow("percentage of total"))
}

/// Year-over-year growth from `prior` to `current`, in percent.
///
/// Formula: `100 * (current - prior) / prior`
///
/// # Errors
///
/// `DivisionByZero` when `prior` is zero, `ArithmeticOverflow` when the rate
/// does not fit a `Decimal`. Callers treat both as an undefined growth rate
/// for the one sector rather than a failed report.
pub fn yoy_growth(current: Decimal, prior: Decimal) -> SectoralResult<Decimal> {
    if prior.is_zero() {
        return Err(SectoralError::division_by_zero("year-over-year growth"));
    }
    current
        .checked_sub(prior)
        .and_then(|change| change.checked_div(prior))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(round_display)
        .ok_or_else(|| SectoralError::overflow("year-over-year growth"))
}

/// Overflow-checked sum.
///
/// # Errors
///
/// `ArithmeticOverflow` naming `operation` when the sum leaves the `Decimal` range.
pub fn checked_sum<I>(values: I, operation: &str) -> SectoralResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .ok_or_else(|| SectoralError::overflow(operation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(dec!(300), dec!(400)).unwrap(), dec!(75));
        assert_eq!(percentage(dec!(1), dec!(3)).unwrap(), dec!(33.33));
        assert_eq!(percentage(dec!(2), dec!(3)).unwrap(), dec!(66.67));
    }

    #[test]
    fn test_percentage_of_national_total() {
        // Mining share of 2024 GDP
        let share = percentage(dec!(405678.90), dec!(1776490.637)).unwrap();
        assert_eq!(share, dec!(22.84));
    }

    #[test]
    fn test_percentage_zero_total() {
        let err = percentage(dec!(1), Decimal::ZERO).unwrap_err();
        assert!(err.is_division_by_zero());
    }

    #[test]
    fn test_yoy_growth() {
        assert_eq!(yoy_growth(dec!(100), dec!(80)).unwrap(), dec!(25));
        assert_eq!(yoy_growth(dec!(300), dec!(300)).unwrap(), Decimal::ZERO);
        assert_eq!(yoy_growth(dec!(40), dec!(80)).unwrap(), dec!(-50));
    }

    #[test]
    fn test_yoy_growth_rounds_half_away_from_zero() {
        // 0.125% exactly
        assert_eq!(yoy_growth(dec!(100.125), dec!(100)).unwrap(), dec!(0.13));
        assert_eq!(yoy_growth(dec!(99.875), dec!(100)).unwrap(), dec!(-0.13));
    }

    #[test]
    fn test_yoy_growth_zero_prior() {
        let err = yoy_growth(dec!(10), Decimal::ZERO).unwrap_err();
        assert!(err.is_division_by_zero());
    }

    #[test]
    fn test_percentage_overflow() {
        let err = percentage(Decimal::from_i128_with_scale(10_i128.pow(28), 0), Decimal::ONE).unwrap_err();
        assert_eq!(err, SectoralError::overflow("percentage of total"));
    }

    #[test]
    fn test_yoy_growth_overflow_on_tiny_prior() {
        let err = yoy_growth(Decimal::from_i128_with_scale(10_i128.pow(21), 0), dec!(0.0000001)).unwrap_err();
        assert!(err.is_undefined_ratio());
        assert!(!err.is_division_by_zero());
    }

    #[test]
    fn test_checked_sum() {
        assert_eq!(checked_sum([dec!(1.5), dec!(2.5)], "sum").unwrap(), dec!(4));
        assert_eq!(checked_sum([], "sum").unwrap(), Decimal::ZERO);

        let half = Decimal::MAX / dec!(2) + Decimal::ONE;
        let err = checked_sum([half, half], "sector sum").unwrap_err();
        assert_eq!(err, SectoralError::overflow("sector sum"));
    }
}
