use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{NewSolarEstimate, SolarEstimate};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Estimate counts per city, used in [`StoreSummary::top_cities`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCount {
    pub city: String,
    pub estimates: i64,
}

/// Aggregate view over every stored estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSummary {
    pub total_estimates: i64,
    pub capex_estimates: i64,
    pub opex_estimates: i64,
    /// Mean recommended capacity, to two decimal places. `None` when the
    /// store is empty.
    pub average_capacity_kw: Option<Decimal>,
    /// Up to five cities with the most estimates, busiest first. Ties
    /// break alphabetically.
    pub top_cities: Vec<CityCount>,
}

/// Persistence boundary for computed estimates.
///
/// Estimates are immutable once saved; there is deliberately no update
/// operation. Backends implement this trait and register a factory with
/// [`StoreRegistry`](crate::store::StoreRegistry).
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Persists an estimate and returns it with its assigned id and
    /// creation timestamp.
    async fn save_estimate(
        &self,
        estimate: NewSolarEstimate,
    ) -> Result<SolarEstimate, StoreError>;

    async fn get_estimate(&self, id: i64) -> Result<SolarEstimate, StoreError>;

    /// Lists estimates, most recent first. `city` filters by exact city
    /// name, compared case-insensitively.
    async fn list_estimates(&self, city: Option<&str>) -> Result<Vec<SolarEstimate>, StoreError>;

    async fn delete_estimate(&self, id: i64) -> Result<(), StoreError>;

    async fn summary(&self) -> Result<StoreSummary, StoreError>;
}
