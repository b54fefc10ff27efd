//! Solar benefit estimation pipeline.
//!
//! This module derives a complete benefit profile for a rooftop solar
//! installation from a monthly electricity bill, a grid tariff and the
//! average solar irradiance at the site.
//!
//! # Pipeline
//!
//! The estimate is built in the following steps:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Monthly consumption (kWh) = bill ÷ tariff |
//! | 2    | Plant capacity (kW) = consumption ÷ (irradiance × performance ratio × days per month), clamped to the configured minimum |
//! | 3    | Sizing extras: panel count, inverter capacity, rooftop area |
//! | 4    | Monthly generation = capacity × irradiance × performance ratio × days per month |
//! | 5    | Yearly generation = monthly generation × months per year |
//! | 6    | Annual savings = yearly generation × tariff |
//! | 7    | Investment (CAPEX only) = capacity × cost per kW from the cost schedule |
//! | 8    | Payback = investment ÷ annual savings, absent when savings are zero |
//! | 9    | CO₂ avoided = yearly generation × emission factor, plus tree equivalence |
//!
//! All arithmetic runs at full decimal precision; [`BenefitEstimate::rounded`]
//! applies display scales at the end.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use solar_core::calculations::{EstimateRequest, Estimator, EstimatorConfig};
//! use solar_core::{ConsumerType, CostSchedule, InvestmentModel};
//!
//! let config = EstimatorConfig::default();
//! let schedule = CostSchedule::standard();
//!
//! let request = EstimateRequest {
//!     monthly_bill: dec!(5000),
//!     tariff: dec!(8.0),
//!     irradiance: dec!(4.5),
//!     consumer_type: ConsumerType::Residential,
//!     investment_model: InvestmentModel::Capex,
//! };
//!
//! let estimate = Estimator::new(&config, &schedule)
//!     .estimate(&request)
//!     .unwrap()
//!     .rounded();
//!
//! assert_eq!(estimate.monthly_consumption_kwh, dec!(625.00));
//! assert_eq!(estimate.capacity_kw, dec!(6.17));
//! assert_eq!(estimate.annual_savings, dec!(60000));
//! assert_eq!(estimate.investment, Some(dec!(481481)));
//! assert_eq!(estimate.payback_years, Some(dec!(8.0)));
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{ceil_units, max, round_half_up};
use crate::models::{ConsumerType, CostSchedule, InvestmentModel, SystemTier};

/// Errors that can occur while building an estimate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    /// A configuration value failed validation.
    #[error("invalid estimator configuration: {0}")]
    InvalidConfig(String),

    /// The cost schedule has no rate for the classified system.
    #[error("no cost rate for {} {} systems", .consumer_type.as_str(), .tier.as_str())]
    MissingCostRate {
        consumer_type: ConsumerType,
        tier: SystemTier,
    },
}

/// Physical and financial constants the pipeline runs on.
///
/// The defaults describe a typical Indian rooftop installation. A config
/// is immutable once handed to an [`Estimator`]; vary inputs through
/// [`EstimateRequest`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Fraction of nameplate output an installed system actually yields.
    pub performance_ratio: Decimal,

    /// Irradiance (kWh/m²/day) substituted when a request carries none.
    pub default_irradiance: Decimal,

    /// Smallest system worth installing; positive consumption never
    /// sizes below this.
    pub min_capacity_kw: Decimal,

    /// Nameplate rating of a single panel, in kW.
    pub panel_rating_kw: Decimal,

    /// Inverter capacity as a fraction of DC capacity.
    pub inverter_ratio: Decimal,

    /// Shadow-free rooftop area needed per kW, in sq ft.
    pub area_per_kw_sqft: Decimal,

    /// Operating lifetime used for lifetime savings and CO₂ totals.
    pub system_lifetime_years: Decimal,

    /// Grid emission factor, kg CO₂ per kWh displaced.
    pub co2_kg_per_kwh: Decimal,

    /// Annual CO₂ absorption of one tree, in kg.
    pub tree_absorption_kg: Decimal,

    /// Billing-month length used to bridge daily irradiance and monthly
    /// consumption.
    pub days_per_month: Decimal,

    pub months_per_year: Decimal,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            performance_ratio: Decimal::new(75, 2),
            default_irradiance: Decimal::new(45, 1),
            min_capacity_kw: Decimal::ONE,
            panel_rating_kw: Decimal::new(4, 1),
            inverter_ratio: Decimal::new(8, 1),
            area_per_kw_sqft: Decimal::from(8),
            system_lifetime_years: Decimal::from(25),
            co2_kg_per_kwh: Decimal::new(8, 1),
            tree_absorption_kg: Decimal::from(22),
            days_per_month: Decimal::from(30),
            months_per_year: Decimal::from(12),
        }
    }
}

impl EstimatorConfig {
    /// Checks that every constant is usable by the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidConfig`] naming the offending field
    /// when a value is not positive or the performance ratio exceeds 1.
    pub fn validate(&self) -> Result<(), EstimateError> {
        let required_positive = [
            ("performance_ratio", self.performance_ratio),
            ("default_irradiance", self.default_irradiance),
            ("min_capacity_kw", self.min_capacity_kw),
            ("panel_rating_kw", self.panel_rating_kw),
            ("inverter_ratio", self.inverter_ratio),
            ("area_per_kw_sqft", self.area_per_kw_sqft),
            ("system_lifetime_years", self.system_lifetime_years),
            ("co2_kg_per_kwh", self.co2_kg_per_kwh),
            ("tree_absorption_kg", self.tree_absorption_kg),
            ("days_per_month", self.days_per_month),
            ("months_per_year", self.months_per_year),
        ];

        for (name, value) in required_positive {
            if value <= Decimal::ZERO {
                return Err(EstimateError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.performance_ratio > Decimal::ONE {
            return Err(EstimateError::InvalidConfig(format!(
                "performance_ratio must not exceed 1, got {}",
                self.performance_ratio
            )));
        }

        Ok(())
    }
}

/// Input values for one estimate.
///
/// `tariff` and `irradiance` are whatever the caller resolved from the
/// location directory, a scanned bill or explicit flags. Non-positive
/// values are substituted inside the pipeline, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Monthly electricity bill in ₹.
    pub monthly_bill: Decimal,

    /// Grid tariff in ₹ per kWh.
    pub tariff: Decimal,

    /// Average solar irradiance at the site, in kWh/m²/day.
    pub irradiance: Decimal,

    pub consumer_type: ConsumerType,

    pub investment_model: InvestmentModel,
}

/// Request values after default substitution, plus the consumption they
/// imply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedInputs {
    pub tariff: Decimal,
    pub irradiance: Decimal,
    pub monthly_consumption_kwh: Decimal,
}

/// Full-precision result of the estimation pipeline.
///
/// `investment` and `payback_years` are `None` for OPEX systems;
/// `payback_years` is also `None` when annual savings are zero, rather
/// than a very large sentinel figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitEstimate {
    pub consumer_type: ConsumerType,
    pub investment_model: InvestmentModel,

    /// Tariff the savings were priced at.
    pub tariff: Decimal,

    /// Irradiance the system was sized against, after any fallback.
    pub irradiance: Decimal,

    pub monthly_consumption_kwh: Decimal,
    pub capacity_kw: Decimal,
    pub panel_count: i64,
    pub inverter_capacity_kw: Decimal,
    pub area_required_sqft: Decimal,

    pub monthly_generation_kwh: Decimal,
    pub yearly_generation_kwh: Decimal,

    pub monthly_savings: Decimal,
    pub annual_savings: Decimal,
    pub lifetime_savings: Decimal,
    pub investment: Option<Decimal>,
    pub payback_years: Option<Decimal>,

    pub annual_co2_saved_tons: Decimal,
    pub lifetime_co2_saved_tons: Decimal,
    pub equivalent_trees: Decimal,
}

impl BenefitEstimate {
    /// Returns a copy with every derived figure rounded for presentation.
    ///
    /// Money over a year or longer rounds to whole rupees, monthly money
    /// and physical quantities to two places, payback to a tenth of a
    /// year, tree counts to whole trees. Inputs pass through unchanged.
    pub fn rounded(&self) -> Self {
        Self {
            consumer_type: self.consumer_type,
            investment_model: self.investment_model,
            tariff: self.tariff,
            irradiance: self.irradiance,
            monthly_consumption_kwh: round_half_up(self.monthly_consumption_kwh, 2),
            capacity_kw: round_half_up(self.capacity_kw, 2),
            panel_count: self.panel_count,
            inverter_capacity_kw: round_half_up(self.inverter_capacity_kw, 2),
            area_required_sqft: round_half_up(self.area_required_sqft, 2),
            monthly_generation_kwh: round_half_up(self.monthly_generation_kwh, 2),
            yearly_generation_kwh: round_half_up(self.yearly_generation_kwh, 0),
            monthly_savings: round_half_up(self.monthly_savings, 2),
            annual_savings: round_half_up(self.annual_savings, 0),
            lifetime_savings: round_half_up(self.lifetime_savings, 0),
            investment: self.investment.map(|v| round_half_up(v, 0)),
            payback_years: self.payback_years.map(|v| round_half_up(v, 1)),
            annual_co2_saved_tons: round_half_up(self.annual_co2_saved_tons, 2),
            lifetime_co2_saved_tons: round_half_up(self.lifetime_co2_saved_tons, 2),
            equivalent_trees: round_half_up(self.equivalent_trees, 0),
        }
    }
}

/// Calculator for solar benefit estimates.
///
/// Borrows its configuration and cost schedule so one pair can serve any
/// number of requests.
#[derive(Debug, Clone)]
pub struct Estimator<'a> {
    config: &'a EstimatorConfig,
    cost_schedule: &'a CostSchedule,
}

impl<'a> Estimator<'a> {
    pub fn new(
        config: &'a EstimatorConfig,
        cost_schedule: &'a CostSchedule,
    ) -> Self {
        Self {
            config,
            cost_schedule,
        }
    }

    /// Runs the full estimation pipeline for one request.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError`] if the configuration fails validation or
    /// a CAPEX request classifies into a tier the cost schedule has no
    /// rate for.
    pub fn estimate(
        &self,
        request: &EstimateRequest,
    ) -> Result<BenefitEstimate, EstimateError> {
        self.config.validate()?;

        let resolved = self.resolve(request);

        // System sizing
        let capacity_kw =
            self.plant_capacity(resolved.monthly_consumption_kwh, resolved.irradiance);
        let panel_count = self.panel_count(capacity_kw);
        let inverter_capacity_kw = capacity_kw * self.config.inverter_ratio;
        let area_required_sqft = capacity_kw * self.config.area_per_kw_sqft;

        // Generation
        let monthly_generation_kwh = self.monthly_generation(capacity_kw, resolved.irradiance);
        let yearly_generation_kwh = monthly_generation_kwh * self.config.months_per_year;

        // Financials
        let annual_savings = yearly_generation_kwh * resolved.tariff;
        let monthly_savings = annual_savings / self.config.months_per_year;
        let lifetime_savings = annual_savings * self.config.system_lifetime_years;
        let investment =
            self.investment(request.investment_model, request.consumer_type, capacity_kw)?;
        let payback_years = self.payback_years(investment, annual_savings);

        // Environmental impact
        let annual_co2_kg = yearly_generation_kwh * self.config.co2_kg_per_kwh;
        let annual_co2_saved_tons = annual_co2_kg / Decimal::ONE_THOUSAND;
        let lifetime_co2_saved_tons = annual_co2_saved_tons * self.config.system_lifetime_years;
        let equivalent_trees = annual_co2_kg / self.config.tree_absorption_kg;

        Ok(BenefitEstimate {
            consumer_type: request.consumer_type,
            investment_model: request.investment_model,
            tariff: resolved.tariff,
            irradiance: resolved.irradiance,
            monthly_consumption_kwh: resolved.monthly_consumption_kwh,
            capacity_kw,
            panel_count,
            inverter_capacity_kw,
            area_required_sqft,
            monthly_generation_kwh,
            yearly_generation_kwh,
            monthly_savings,
            annual_savings,
            lifetime_savings,
            investment,
            payback_years,
            annual_co2_saved_tons,
            lifetime_co2_saved_tons,
            equivalent_trees,
        })
    }

    /// Applies default substitution to a request and derives consumption.
    ///
    /// Non-positive irradiance falls back to the configured default.
    /// A non-positive tariff makes consumption undefined, which the
    /// pipeline treats as zero. Both substitutions are logged.
    pub fn resolve(
        &self,
        request: &EstimateRequest,
    ) -> ResolvedInputs {
        let irradiance = if request.irradiance > Decimal::ZERO {
            request.irradiance
        } else {
            warn!(
                irradiance = %request.irradiance,
                fallback = %self.config.default_irradiance,
                "irradiance not positive, using fallback"
            );
            self.config.default_irradiance
        };

        let monthly_consumption_kwh = if request.tariff > Decimal::ZERO {
            request.monthly_bill / request.tariff
        } else {
            warn!(
                tariff = %request.tariff,
                "tariff not positive, treating consumption as zero"
            );
            Decimal::ZERO
        };

        ResolvedInputs {
            tariff: request.tariff,
            irradiance,
            monthly_consumption_kwh,
        }
    }

    /// Sizes the plant for the given consumption.
    ///
    /// Zero consumption sizes a zero plant. Any positive consumption is
    /// clamped up to the configured minimum capacity.
    fn plant_capacity(
        &self,
        monthly_consumption_kwh: Decimal,
        irradiance: Decimal,
    ) -> Decimal {
        if monthly_consumption_kwh <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let capacity = monthly_consumption_kwh
            / (irradiance * self.config.performance_ratio * self.config.days_per_month);

        max(self.config.min_capacity_kw, capacity)
    }

    /// Panels needed to reach `capacity_kw`, as whole panels.
    fn panel_count(
        &self,
        capacity_kw: Decimal,
    ) -> i64 {
        ceil_units(capacity_kw, self.config.panel_rating_kw)
            .to_i64()
            .unwrap_or(i64::MAX)
    }

    /// Expected generation over one billing month.
    fn monthly_generation(
        &self,
        capacity_kw: Decimal,
        irradiance: Decimal,
    ) -> Decimal {
        capacity_kw * irradiance * self.config.performance_ratio * self.config.days_per_month
    }

    /// Upfront investment. `None` for OPEX, where the installer owns the
    /// plant.
    fn investment(
        &self,
        investment_model: InvestmentModel,
        consumer_type: ConsumerType,
        capacity_kw: Decimal,
    ) -> Result<Option<Decimal>, EstimateError> {
        match investment_model {
            InvestmentModel::Opex => Ok(None),
            InvestmentModel::Capex => {
                let tier = SystemTier::for_capacity(consumer_type, capacity_kw);
                let cost_per_kw = self
                    .cost_schedule
                    .cost_per_kw(consumer_type, tier)
                    .ok_or(EstimateError::MissingCostRate {
                        consumer_type,
                        tier,
                    })?;

                Ok(Some(capacity_kw * cost_per_kw))
            }
        }
    }

    /// Years of savings needed to recover the investment. `None` when
    /// there is no investment or nothing is saved.
    fn payback_years(
        &self,
        investment: Option<Decimal>,
        annual_savings: Decimal,
    ) -> Option<Decimal> {
        let investment = investment?;
        if annual_savings <= Decimal::ZERO {
            return None;
        }

        Some(investment / annual_savings)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    fn standard_request() -> EstimateRequest {
        EstimateRequest {
            monthly_bill: dec!(5000),
            tariff: dec!(8.0),
            irradiance: dec!(4.5),
            consumer_type: ConsumerType::Residential,
            investment_model: InvestmentModel::Capex,
        }
    }

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // resolve tests
    // =========================================================================

    #[test]
    fn resolve_keeps_positive_inputs() {
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);

        let resolved = estimator.resolve(&standard_request());

        assert_eq!(resolved.tariff, dec!(8.0));
        assert_eq!(resolved.irradiance, dec!(4.5));
        assert_eq!(resolved.monthly_consumption_kwh, dec!(625));
    }

    #[test]
    fn resolve_falls_back_when_irradiance_zero() {
        let _guard = init_test_tracing();
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);
        let mut request = standard_request();
        request.irradiance = dec!(0);

        let resolved = estimator.resolve(&request);

        assert_eq!(resolved.irradiance, dec!(4.5));
    }

    #[test]
    fn resolve_falls_back_when_irradiance_negative() {
        let _guard = init_test_tracing();
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);
        let mut request = standard_request();
        request.irradiance = dec!(-1.0);

        let resolved = estimator.resolve(&request);

        assert_eq!(resolved.irradiance, dec!(4.5));
    }

    #[test]
    fn resolve_zero_tariff_gives_zero_consumption() {
        let _guard = init_test_tracing();
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);
        let mut request = standard_request();
        request.tariff = dec!(0);

        let resolved = estimator.resolve(&request);

        assert_eq!(resolved.monthly_consumption_kwh, dec!(0));
    }

    // =========================================================================
    // plant_capacity tests
    // =========================================================================

    #[test]
    fn plant_capacity_reference_value() {
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);

        // 625 / (4.5 * 0.75 * 30) = 625 / 101.25
        let capacity = estimator.plant_capacity(dec!(625), dec!(4.5));

        assert_eq!(round_half_up(capacity, 2), dec!(6.17));
    }

    #[test]
    fn plant_capacity_clamps_to_minimum() {
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);

        let capacity = estimator.plant_capacity(dec!(50), dec!(4.5));

        assert_eq!(capacity, dec!(1.0));
    }

    #[test]
    fn plant_capacity_zero_consumption_sizes_nothing() {
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);

        let capacity = estimator.plant_capacity(dec!(0), dec!(4.5));

        assert_eq!(capacity, dec!(0));
    }

    // =========================================================================
    // estimate (integration) tests
    // =========================================================================

    #[test]
    fn estimate_reference_case() {
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);

        let estimate = estimator.estimate(&standard_request()).unwrap().rounded();

        assert_eq!(estimate.monthly_consumption_kwh, dec!(625.00));
        assert_eq!(estimate.capacity_kw, dec!(6.17));
        assert_eq!(estimate.panel_count, 16);
        assert_eq!(estimate.inverter_capacity_kw, dec!(4.94));
        assert_eq!(estimate.area_required_sqft, dec!(49.38));
        assert_eq!(estimate.monthly_generation_kwh, dec!(625.00));
        assert_eq!(estimate.yearly_generation_kwh, dec!(7500));
        assert_eq!(estimate.monthly_savings, dec!(5000.00));
        assert_eq!(estimate.annual_savings, dec!(60000));
        assert_eq!(estimate.lifetime_savings, dec!(1500000));
        assert_eq!(estimate.investment, Some(dec!(481481)));
        assert_eq!(estimate.payback_years, Some(dec!(8.0)));
        assert_eq!(estimate.annual_co2_saved_tons, dec!(6.00));
        assert_eq!(estimate.lifetime_co2_saved_tons, dec!(150.00));
        assert_eq!(estimate.equivalent_trees, dec!(273));
    }

    #[test]
    fn estimate_opex_has_no_investment_or_payback() {
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);
        let mut request = standard_request();
        request.investment_model = InvestmentModel::Opex;

        let estimate = estimator.estimate(&request).unwrap().rounded();

        assert_eq!(estimate.investment, None);
        assert_eq!(estimate.payback_years, None);
        // Savings are independent of the financing model.
        assert_eq!(estimate.annual_savings, dec!(60000));
    }

    #[test]
    fn estimate_zero_tariff_yields_zero_system() {
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);
        let mut request = standard_request();
        request.tariff = dec!(0);

        let estimate = estimator.estimate(&request).unwrap().rounded();

        assert_eq!(estimate.monthly_consumption_kwh, dec!(0));
        assert_eq!(estimate.capacity_kw, dec!(0));
        assert_eq!(estimate.panel_count, 0);
        assert_eq!(estimate.annual_savings, dec!(0));
        assert_eq!(estimate.investment, Some(dec!(0)));
        assert_eq!(estimate.payback_years, None);
        assert_eq!(estimate.equivalent_trees, dec!(0));
    }

    #[test]
    fn estimate_minimum_system_for_tiny_consumption() {
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);
        let mut request = standard_request();
        request.monthly_bill = dec!(100);

        let estimate = estimator.estimate(&request).unwrap().rounded();

        assert_eq!(estimate.capacity_kw, dec!(1.00));
        assert_eq!(estimate.investment, Some(dec!(80000)));
    }

    #[test]
    fn estimate_commercial_uses_commercial_rates() {
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);
        let mut request = standard_request();
        request.monthly_bill = dec!(50000);
        request.consumer_type = ConsumerType::Commercial;

        let estimate = estimator.estimate(&request).unwrap().rounded();

        // 6250 kWh -> 61.73 kW, a medium commercial system at 72000/kW.
        assert_eq!(estimate.capacity_kw, dec!(61.73));
        assert_eq!(estimate.investment, Some(dec!(4444444)));
    }

    #[test]
    fn estimate_small_residential_uses_small_rate() {
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);
        let mut request = standard_request();
        request.monthly_bill = dec!(2000);

        let estimate = estimator.estimate(&request).unwrap().rounded();

        // 250 kWh -> 2.47 kW, a small residential system at 80000/kW.
        assert_eq!(estimate.capacity_kw, dec!(2.47));
        assert_eq!(estimate.investment, Some(dec!(197531)));
    }

    #[test]
    fn estimate_missing_cost_rate_fails_capex() {
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::new(vec![]);
        let estimator = Estimator::new(&config, &schedule);

        let result = estimator.estimate(&standard_request());

        assert_eq!(
            result,
            Err(EstimateError::MissingCostRate {
                consumer_type: ConsumerType::Residential,
                tier: SystemTier::Medium,
            })
        );
    }

    #[test]
    fn estimate_opex_needs_no_cost_rate() {
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::new(vec![]);
        let estimator = Estimator::new(&config, &schedule);
        let mut request = standard_request();
        request.investment_model = InvestmentModel::Opex;

        let result = estimator.estimate(&request);

        assert!(result.is_ok());
    }

    #[test]
    fn estimate_rejects_non_positive_performance_ratio() {
        let config = EstimatorConfig {
            performance_ratio: dec!(0),
            ..EstimatorConfig::default()
        };
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);

        let result = estimator.estimate(&standard_request());

        assert!(matches!(result, Err(EstimateError::InvalidConfig(_))));
    }

    #[test]
    fn estimate_rejects_performance_ratio_above_one() {
        let config = EstimatorConfig {
            performance_ratio: dec!(1.5),
            ..EstimatorConfig::default()
        };
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);

        let result = estimator.estimate(&standard_request());

        assert!(matches!(result, Err(EstimateError::InvalidConfig(_))));
    }

    #[test]
    fn estimate_is_deterministic() {
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);
        let request = standard_request();

        let first = estimator.estimate(&request).unwrap();
        let second = estimator.estimate(&request).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn capacity_grows_with_consumption() {
        let config = EstimatorConfig::default();
        let schedule = CostSchedule::standard();
        let estimator = Estimator::new(&config, &schedule);
        let mut larger = standard_request();
        larger.monthly_bill = dec!(10000);

        let small = estimator.estimate(&standard_request()).unwrap();
        let large = estimator.estimate(&larger).unwrap();

        assert!(large.capacity_kw > small.capacity_kw);
    }
}
