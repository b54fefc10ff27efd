use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::consumer_type::ConsumerType;
use super::investment_model::InvestmentModel;

/// A persisted estimate. Derived figures are stored as presented to the
/// user, i.e. after display rounding. `investment` and `payback_years`
/// are absent for OPEX systems; `payback_years` is also absent when
/// annual savings are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarEstimate {
    pub id: i64,
    pub city: String,
    pub state: String,
    pub consumer_type: ConsumerType,
    pub investment_model: InvestmentModel,

    // Inputs as resolved for the calculation
    pub monthly_bill: Decimal,
    pub tariff: Decimal,
    pub irradiance: Decimal,

    // System sizing
    pub monthly_consumption_kwh: Decimal,
    pub capacity_kw: Decimal,
    pub panel_count: i64,
    pub inverter_capacity_kw: Decimal,
    pub area_required_sqft: Decimal,

    // Generation and financials
    pub monthly_generation_kwh: Decimal,
    pub yearly_generation_kwh: Decimal,
    pub monthly_savings: Decimal,
    pub annual_savings: Decimal,
    pub lifetime_savings: Decimal,
    pub investment: Option<Decimal>,
    pub payback_years: Option<Decimal>,

    // Environmental impact
    pub annual_co2_saved_tons: Decimal,
    pub lifetime_co2_saved_tons: Decimal,
    pub equivalent_trees: Decimal,

    pub created_at: DateTime<Utc>,
}

/// For creating new estimates (no id or timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSolarEstimate {
    pub city: String,
    pub state: String,
    pub consumer_type: ConsumerType,
    pub investment_model: InvestmentModel,
    pub monthly_bill: Decimal,
    pub tariff: Decimal,
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
