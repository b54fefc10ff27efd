//! Common utility functions for solar benefit calculations.
//!
//! This module provides shared functionality used across the estimation
//! pipeline, including rounding and unit-count helpers.

use rust_decimal::Decimal;

/// Rounds a decimal value to `dp` decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at
/// exactly the midpoint are rounded away from zero.
///
/// # Arguments
///
/// * `value` - The decimal value to round
/// * `dp` - Number of decimal places to keep
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454), 2), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455), 2), dec!(123.46));
/// assert_eq!(round_half_up(dec!(8.05), 1), dec!(8.1));
/// assert_eq!(round_half_up(dec!(272.7), 0), dec!(273));
/// assert_eq!(round_half_up(dec!(-123.455), 2), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns how many whole units of size `unit` are needed to cover `total`.
///
/// `unit` must be positive; callers validate their configuration before
/// dividing.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::calculations::common::ceil_units;
///
/// assert_eq!(ceil_units(dec!(6.17), dec!(0.4)), dec!(16));
/// assert_eq!(ceil_units(dec!(6.0), dec!(0.4)), dec!(15));
/// assert_eq!(ceil_units(dec!(0), dec!(0.4)), dec!(0));
/// ```
pub fn ceil_units(
    total: Decimal,
    unit: Decimal,
) -> Decimal {
    (total / unit).ceil()
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::calculations::common::max;
///
/// assert_eq!(max(dec!(1.0), dec!(0.62)), dec!(1.0));
/// assert_eq!(max(dec!(6.17), dec!(1.0)), dec!(6.17));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454), 2);

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455), 2);

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_rounds_up_above_midpoint() {
        let result = round_half_up(dec!(123.456), 2);

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455), 2);

        assert_eq!(result, dec!(-123.46)); // Away from zero
    }

    #[test]
    fn round_half_up_to_one_decimal_place() {
        let result = round_half_up(dec!(8.02469), 1);

        assert_eq!(result, dec!(8.0));
    }

    #[test]
    fn round_half_up_to_whole_number() {
        let result = round_half_up(dec!(59999.9999), 0);

        assert_eq!(result, dec!(60000));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(123.45), 2);

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00), 2);

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // ceil_units tests
    // =========================================================================

    #[test]
    fn ceil_units_rounds_partial_unit_up() {
        let result = ceil_units(dec!(6.17), dec!(0.4));

        assert_eq!(result, dec!(16));
    }

    #[test]
    fn ceil_units_exact_multiple_stays() {
        let result = ceil_units(dec!(6.0), dec!(0.4));

        assert_eq!(result, dec!(15));
    }

    #[test]
    fn ceil_units_zero_total_needs_no_units() {
        let result = ceil_units(dec!(0), dec!(0.4));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn ceil_units_tiny_total_needs_one_unit() {
        let result = ceil_units(dec!(0.01), dec!(0.4));

        assert_eq!(result, dec!(1));
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        let result = max(dec!(1.00), dec!(6.17));

        assert_eq!(result, dec!(6.17));
    }

    #[test]
    fn max_returns_first_when_larger() {
        let result = max(dec!(6.17), dec!(1.00));

        assert_eq!(result, dec!(6.17));
    }

    #[test]
    fn max_handles_equal_values() {
        let result = max(dec!(1.00), dec!(1.00));

        assert_eq!(result, dec!(1.00));
    }

    #[test]
    fn max_handles_zero() {
        let result = max(dec!(0.00), dec!(1.00));

        assert_eq!(result, dec!(1.00));
    }
}
