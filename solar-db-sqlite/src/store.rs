use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, Row, sqlite::SqlitePool};
use tracing::debug;

use solar_core::calculations::common::round_half_up;
use solar_core::store::{CityCount, StoreSummary};
use solar_core::{
    ConsumerType, InvestmentModel, NewSolarEstimate, ResultStore, SolarEstimate, StoreError,
};

/// Timestamp format used for the `created_at` column.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const BASE_QUERY: &str = "SELECT id, city, state, consumer_type, investment_model,
        monthly_bill, tariff, irradiance,
        monthly_consumption_kwh, capacity_kw, panel_count,
        inverter_capacity_kw, area_required_sqft,
        monthly_generation_kwh, yearly_generation_kwh,
        monthly_savings, annual_savings, lifetime_savings,
        investment, payback_years,
        annual_co2_saved_tons, lifetime_co2_saved_tons, equivalent_trees,
        created_at
 FROM solar_estimates";

/// SQLite-backed [`ResultStore`].
///
/// Decimal figures are stored as TEXT and parsed back, so saved estimates
/// round-trip exactly.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn new(database_url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePool::connect(database_url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Self { pool })
    }

    pub async fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[derive(FromRow)]
struct SolarEstimateRow {
    id: i64,
    city: String,
    state: String,
    consumer_type: String,
    investment_model: String,
    monthly_bill: String,
    tariff: String,
    irradiance: String,
    monthly_consumption_kwh: String,
    capacity_kw: String,
    panel_count: i64,
    inverter_capacity_kw: String,
    area_required_sqft: String,
    monthly_generation_kwh: String,
    yearly_generation_kwh: String,
    monthly_savings: String,
    annual_savings: String,
    lifetime_savings: String,
    investment: Option<String>,
    payback_years: Option<String>,
    annual_co2_saved_tons: String,
    lifetime_co2_saved_tons: String,
    equivalent_trees: String,
    created_at: String,
}

impl TryFrom<SolarEstimateRow> for SolarEstimate {
    type Error = StoreError;

    fn try_from(row: SolarEstimateRow) -> Result<Self, Self::Error> {
        let consumer_type = ConsumerType::parse(&row.consumer_type).ok_or_else(|| {
            StoreError::Database(format!("Invalid consumer type: {}", row.consumer_type))
        })?;
        let investment_model = InvestmentModel::parse(&row.investment_model).ok_or_else(|| {
            StoreError::Database(format!("Invalid investment model: {}", row.investment_model))
        })?;

        Ok(SolarEstimate {
            id: row.id,
            city: row.city,
            state: row.state,
            consumer_type,
            investment_model,
            monthly_bill: parse_decimal(&row.monthly_bill)?,
            tariff: parse_decimal(&row.tariff)?,
            irradiance: parse_decimal(&row.irradiance)?,
            monthly_consumption_kwh: parse_decimal(&row.monthly_consumption_kwh)?,
            capacity_kw: parse_decimal(&row.capacity_kw)?,
            panel_count: row.panel_count,
            inverter_capacity_kw: parse_decimal(&row.inverter_capacity_kw)?,
            area_required_sqft: parse_decimal(&row.area_required_sqft)?,
            monthly_generation_kwh: parse_decimal(&row.monthly_generation_kwh)?,
            yearly_generation_kwh: parse_decimal(&row.yearly_generation_kwh)?,
            monthly_savings: parse_decimal(&row.monthly_savings)?,
            annual_savings: parse_decimal(&row.annual_savings)?,
            lifetime_savings: parse_decimal(&row.lifetime_savings)?,
            investment: parse_optional_decimal(&row.investment)?,
            payback_years: parse_optional_decimal(&row.payback_years)?,
            annual_co2_saved_tons: parse_decimal(&row.annual_co2_saved_tons)?,
            lifetime_co2_saved_tons: parse_decimal(&row.lifetime_co2_saved_tons)?,
            equivalent_trees: parse_decimal(&row.equivalent_trees)?,
            created_at: parse_datetime(&row.created_at)?,
        })
    }
}

fn parse_decimal(s: &str) -> Result<Decimal, StoreError> {
    s.parse::<Decimal>()
        .map_err(|e| StoreError::Database(format!("Failed to parse decimal '{}': {}", s, e)))
}

fn parse_optional_decimal(s: &Option<String>) -> Result<Option<Decimal>, StoreError> {
    s.as_ref().map(|s| parse_decimal(s)).transpose()
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StoreError> {
    // SQLite stores timestamps in various formats, try common ones
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| StoreError::Database(format!("Failed to parse datetime '{}': {}", s, e)))
}

#[async_trait]
impl ResultStore for SqliteStore {
    async fn save_estimate(
        &self,
        estimate: NewSolarEstimate,
    ) -> Result<SolarEstimate, StoreError> {
        let now = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        let result = sqlx::query(
            "INSERT INTO solar_estimates (
                city, state, consumer_type, investment_model,
                monthly_bill, tariff, irradiance,
                monthly_consumption_kwh, capacity_kw, panel_count,
                inverter_capacity_kw, area_required_sqft,
                monthly_generation_kwh, yearly_generation_kwh,
                monthly_savings, annual_savings, lifetime_savings,
                investment, payback_years,
                annual_co2_saved_tons, lifetime_co2_saved_tons, equivalent_trees,
                created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&estimate.city)
        .bind(&estimate.state)
        .bind(estimate.consumer_type.as_str())
        .bind(estimate.investment_model.as_str())
        .bind(estimate.monthly_bill.to_string())
        .bind(estimate.tariff.to_string())
        .bind(estimate.irradiance.to_string())
        .bind(estimate.monthly_consumption_kwh.to_string())
        .bind(estimate.capacity_kw.to_string())
        .bind(estimate.panel_count)
        .bind(estimate.inverter_capacity_kw.to_string())
        .bind(estimate.area_required_sqft.to_string())
        .bind(estimate.monthly_generation_kwh.to_string())
        .bind(estimate.yearly_generation_kwh.to_string())
        .bind(estimate.monthly_savings.to_string())
        .bind(estimate.annual_savings.to_string())
        .bind(estimate.lifetime_savings.to_string())
        .bind(estimate.investment.map(|d| d.to_string()))
        .bind(estimate.payback_years.map(|d| d.to_string()))
        .bind(estimate.annual_co2_saved_tons.to_string())
        .bind(estimate.lifetime_co2_saved_tons.to_string())
        .bind(estimate.equivalent_trees.to_string())
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        debug!(id, city = %estimate.city, "saved solar estimate");
        self.get_estimate(id).await
    }

    async fn get_estimate(&self, id: i64) -> Result<SolarEstimate, StoreError> {
        let row: SolarEstimateRow = sqlx::query_as(&format!("{} WHERE id = ?", BASE_QUERY))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?
            .ok_or(StoreError::NotFound)?;

        row.try_into()
    }

    async fn list_estimates(&self, city: Option<&str>) -> Result<Vec<SolarEstimate>, StoreError> {
        let rows: Vec<SolarEstimateRow> = match city {
            Some(city) => {
                sqlx::query_as(&format!(
                    "{} WHERE city = ? COLLATE NOCASE ORDER BY created_at DESC, id DESC",
                    BASE_QUERY
                ))
                .bind(city)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(&format!(
                    "{} ORDER BY created_at DESC, id DESC",
                    BASE_QUERY
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| StoreError::Database(e.to_string()))?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    async fn delete_estimate(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM solar_estimates WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        debug!(id, "deleted solar estimate");
        Ok(())
    }

    async fn summary(&self) -> Result<StoreSummary, StoreError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total_estimates,
                    COALESCE(SUM(CASE WHEN investment_model = 'CAPEX' THEN 1 ELSE 0 END), 0)
                        AS capex_estimates,
                    COALESCE(SUM(CASE WHEN investment_model = 'OPEX' THEN 1 ELSE 0 END), 0)
                        AS opex_estimates,
                    AVG(CAST(capacity_kw AS REAL)) AS average_capacity_kw
             FROM solar_estimates",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        let total_estimates: i64 = row
            .try_get("total_estimates")
            .map_err(|e| StoreError::Database(e.to_string()))?;
        let capex_estimates: i64 = row
            .try_get("capex_estimates")
            .map_err(|e| StoreError::Database(e.to_string()))?;
        let opex_estimates: i64 = row
            .try_get("opex_estimates")
            .map_err(|e| StoreError::Database(e.to_string()))?;
        let average: Option<f64> = row
            .try_get("average_capacity_kw")
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let average_capacity_kw = match average {
            Some(avg) => {
                let decimal = Decimal::try_from(avg).map_err(|e| {
                    StoreError::Database(format!(
                        "Failed to convert average capacity {}: {}",
                        avg, e
                    ))
                })?;
                Some(round_half_up(decimal, 2))
            }
            None => None,
        };

        let city_rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT city, COUNT(*) AS estimates
             FROM solar_estimates
             GROUP BY city
             ORDER BY estimates DESC, city ASC
             LIMIT 5",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        let top_cities = city_rows
            .into_iter()
            .map(|(city, estimates)| CityCount { city, estimates })
            .collect();

        Ok(StoreSummary {
            total_estimates,
            capex_estimates,
            opex_estimates,
            average_capacity_kw,
            top_cities,
        })
    }
}
