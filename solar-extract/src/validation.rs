//! Range checks over extracted bill figures.
//!
//! Extraction is text matching, so a figure can come back that is a
//! meter number or a late fee rather than the bill total. The checks
//! here flag values outside the ranges seen on real Indian residential
//! and small-commercial bills and derive the implied tariff as a
//! cross-check between the two figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use solar_core::calculations::common::round_half_up;

use crate::extractor::BillScan;

/// Outcome of validating a [`BillScan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillValidation {
    /// Whether the amount is present and within ₹100 - ₹50,000.
    pub amount_valid: bool,
    /// Whether the units are present and within 50 - 5000 kWh.
    pub units_valid: bool,
    /// Implied tariff in ₹/kWh, rounded to two decimal places. Present
    /// only when both figures pass their range checks.
    pub tariff: Option<Decimal>,
    /// Whether the implied tariff falls in the typical ₹3 - ₹15/unit
    /// band. Present whenever [`BillValidation::tariff`] is.
    pub tariff_reasonable: Option<bool>,
    /// Human-readable prompts for figures that look wrong.
    pub suggestions: Vec<String>,
}

/// Checks extracted figures against plausible bill ranges.
pub fn validate(scan: &BillScan) -> BillValidation {
    let amount_valid = scan
        .amount
        .is_some_and(|amount| amount >= Decimal::from(100) && amount <= Decimal::from(50_000));
    let units_valid = scan
        .units
        .is_some_and(|units| units >= Decimal::from(50) && units <= Decimal::from(5_000));

    let mut suggestions = Vec::new();
    if !amount_valid {
        suggestions
            .push("Please verify the bill amount. Typical range: ₹100 - ₹50,000".to_string());
    }
    if !units_valid {
        suggestions
            .push("Please verify the units consumed. Typical range: 50 - 5000 units".to_string());
    }

    let mut tariff = None;
    let mut tariff_reasonable = None;
    if amount_valid && units_valid {
        if let Some((amount, units)) = scan.amount.zip(scan.units) {
            let implied = amount / units;
            let rounded = round_half_up(implied, 2);
            let reasonable = implied >= Decimal::from(3) && implied <= Decimal::from(15);
            if !reasonable {
                suggestions.push(format!(
                    "Calculated tariff (₹{rounded:.2}/unit) seems unusual. Please verify."
                ));
            }
            tariff = Some(rounded);
            tariff_reasonable = Some(reasonable);
        }
    }

    BillValidation {
        amount_valid,
        units_valid,
        tariff,
        tariff_reasonable,
        suggestions,
    }
}

/// Clamps a derived tariff into the ₹1 - ₹20/unit band accepted as an
/// estimate input.
pub fn clamp_tariff(tariff: Decimal) -> Decimal {
    tariff.clamp(Decimal::ONE, Decimal::from(20))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn scan(amount: Option<Decimal>, units: Option<Decimal>) -> BillScan {
        BillScan { amount, units }
    }

    // ====================================================================
    // Range checks
    // ====================================================================

    #[test]
    fn typical_bill_passes_all_checks() {
        let validation = validate(&scan(Some(dec!(5000)), Some(dec!(625))));

        assert!(validation.amount_valid);
        assert!(validation.units_valid);
        assert_eq!(validation.tariff, Some(dec!(8.00)));
        assert_eq!(validation.tariff_reasonable, Some(true));
        assert_eq!(validation.suggestions, Vec::<String>::new());
    }

    #[test]
    fn amount_range_is_inclusive() {
        assert!(validate(&scan(Some(dec!(100)), None)).amount_valid);
        assert!(validate(&scan(Some(dec!(50000)), None)).amount_valid);
        assert!(!validate(&scan(Some(dec!(99.99)), None)).amount_valid);
        assert!(!validate(&scan(Some(dec!(50001)), None)).amount_valid);
    }

    #[test]
    fn units_range_is_inclusive() {
        assert!(validate(&scan(None, Some(dec!(50)))).units_valid);
        assert!(validate(&scan(None, Some(dec!(5000)))).units_valid);
        assert!(!validate(&scan(None, Some(dec!(49)))).units_valid);
        assert!(!validate(&scan(None, Some(dec!(5001)))).units_valid);
    }

    #[test]
    fn missing_figures_are_invalid() {
        let validation = validate(&BillScan::default());

        assert!(!validation.amount_valid);
        assert!(!validation.units_valid);
        assert_eq!(
            validation.suggestions,
            vec![
                "Please verify the bill amount. Typical range: ₹100 - ₹50,000".to_string(),
                "Please verify the units consumed. Typical range: 50 - 5000 units".to_string(),
            ]
        );
    }

    #[test]
    fn out_of_range_amount_gets_a_suggestion() {
        let validation = validate(&scan(Some(dec!(75)), Some(dec!(625))));

        assert!(!validation.amount_valid);
        assert!(validation.units_valid);
        assert_eq!(
            validation.suggestions,
            vec!["Please verify the bill amount. Typical range: ₹100 - ₹50,000".to_string()]
        );
    }

    // ====================================================================
    // Implied tariff
    // ====================================================================

    #[test]
    fn no_tariff_when_either_figure_fails() {
        let validation = validate(&scan(Some(dec!(75)), Some(dec!(625))));

        assert_eq!(validation.tariff, None);
        assert_eq!(validation.tariff_reasonable, None);
    }

    #[test]
    fn tariff_is_rounded_to_paise() {
        // 4,100 / 612 = 6.699...
        let validation = validate(&scan(Some(dec!(4100)), Some(dec!(612))));

        assert_eq!(validation.tariff, Some(dec!(6.70)));
        assert_eq!(validation.tariff_reasonable, Some(true));
    }

    #[test]
    fn reasonable_band_is_inclusive() {
        let low = validate(&scan(Some(dec!(300)), Some(dec!(100))));
        assert_eq!(low.tariff, Some(dec!(3)));
        assert_eq!(low.tariff_reasonable, Some(true));

        let high = validate(&scan(Some(dec!(1500)), Some(dec!(100))));
        assert_eq!(high.tariff, Some(dec!(15)));
        assert_eq!(high.tariff_reasonable, Some(true));
    }

    #[test]
    fn low_tariff_is_flagged_as_unusual() {
        let validation = validate(&scan(Some(dec!(500)), Some(dec!(400))));

        assert_eq!(validation.tariff, Some(dec!(1.25)));
        assert_eq!(validation.tariff_reasonable, Some(false));
        assert_eq!(
            validation.suggestions,
            vec!["Calculated tariff (₹1.25/unit) seems unusual. Please verify.".to_string()]
        );
    }

    #[test]
    fn high_tariff_is_flagged_as_unusual() {
        let validation = validate(&scan(Some(dec!(50000)), Some(dec!(2500))));

        assert_eq!(validation.tariff, Some(dec!(20)));
        assert_eq!(validation.tariff_reasonable, Some(false));
        assert_eq!(
            validation.suggestions,
            vec!["Calculated tariff (₹20.00/unit) seems unusual. Please verify.".to_string()]
        );
    }

    // ====================================================================
    // Tariff clamp
    // ====================================================================

    #[test]
    fn clamp_caps_implausible_tariffs() {
        assert_eq!(clamp_tariff(dec!(25)), dec!(20));
        assert_eq!(clamp_tariff(dec!(0.50)), dec!(1));
        assert_eq!(clamp_tariff(dec!(8)), dec!(8));
    }
}
