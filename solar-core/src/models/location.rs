use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub city: String,
    pub state: String,
    /// Average solar irradiance in kWh/m²/day.
    pub irradiance: Decimal,
    /// Grid tariff in ₹ per kWh.
    pub tariff: Decimal,
}
