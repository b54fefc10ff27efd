//! In-memory store backend.
//!
//! Keeps every estimate in a `Vec` behind an `RwLock`. Contents vanish
//! when the process exits, which makes it the backend of choice for
//! tests and one-off runs without a database file.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::{InvestmentModel, NewSolarEstimate, SolarEstimate};
use crate::store::factory::{StoreConfig, StoreFactory};
use crate::store::result_store::{CityCount, ResultStore, StoreError, StoreSummary};

#[derive(Default)]
struct MemoryInner {
    estimates: Vec<SolarEstimate>,
    next_id: i64,
}

pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryInner::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryInner>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Database("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryInner>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Database("store lock poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn save_estimate(
        &self,
        estimate: NewSolarEstimate,
    ) -> Result<SolarEstimate, StoreError> {
        let mut inner = self.write()?;
        inner.next_id += 1;

        let saved = SolarEstimate {
            id: inner.next_id,
            city: estimate.city,
            state: estimate.state,
            consumer_type: estimate.consumer_type,
            investment_model: estimate.investment_model,
            monthly_bill: estimate.monthly_bill,
            tariff: estimate.tariff,
            irradiance: estimate.irradiance,
            monthly_consumption_kwh: estimate.monthly_consumption_kwh,
            capacity_kw: estimate.capacity_kw,
            panel_count: estimate.panel_count,
            inverter_capacity_kw: estimate.inverter_capacity_kw,
            area_required_sqft: estimate.area_required_sqft,
            monthly_generation_kwh: estimate.monthly_generation_kwh,
            yearly_generation_kwh: estimate.yearly_generation_kwh,
            monthly_savings: estimate.monthly_savings,
            annual_savings: estimate.annual_savings,
            lifetime_savings: estimate.lifetime_savings,
            investment: estimate.investment,
            payback_years: estimate.payback_years,
            annual_co2_saved_tons: estimate.annual_co2_saved_tons,
            lifetime_co2_saved_tons: estimate.lifetime_co2_saved_tons,
            equivalent_trees: estimate.equivalent_trees,
            created_at: Utc::now(),
        };

        inner.estimates.push(saved.clone());
        Ok(saved)
    }

    async fn get_estimate(&self, id: i64) -> Result<SolarEstimate, StoreError> {
        let inner = self.read()?;
        inner
            .estimates
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list_estimates(
        &self,
        city: Option<&str>,
    ) -> Result<Vec<SolarEstimate>, StoreError> {
        let inner = self.read()?;
        let mut estimates: Vec<SolarEstimate> = inner
            .estimates
            .iter()
            .filter(|e| match city {
                Some(c) => e.city.eq_ignore_ascii_case(c),
                None => true,
            })
            .cloned()
            .collect();

        // Stored in insertion order, so newest last; present newest first.
        estimates.reverse();
        Ok(estimates)
    }

    async fn delete_estimate(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        let position = inner
            .estimates
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound)?;

        inner.estimates.remove(position);
        Ok(())
    }

    async fn summary(&self) -> Result<StoreSummary, StoreError> {
        let inner = self.read()?;

        let total_estimates = inner.estimates.len() as i64;
        let capex_estimates = inner
            .estimates
            .iter()
            .filter(|e| e.investment_model == InvestmentModel::Capex)
            .count() as i64;
        let opex_estimates = total_estimates - capex_estimates;

        let average_capacity_kw = if inner.estimates.is_empty() {
            None
        } else {
            let sum: Decimal = inner.estimates.iter().map(|e| e.capacity_kw).sum();
            Some(round_half_up(sum / Decimal::from(total_estimates), 2))
        };

        let mut counts: HashMap<&str, i64> = HashMap::new();
        for estimate in &inner.estimates {
            *counts.entry(estimate.city.as_str()).or_insert(0) += 1;
        }
        let mut top_cities: Vec<CityCount> = counts
            .into_iter()
            .map(|(city, estimates)| CityCount {
                city: city.to_string(),
                estimates,
            })
            .collect();
        top_cities.sort_by(|a, b| {
            b.estimates
                .cmp(&a.estimates)
                .then_with(|| a.city.cmp(&b.city))
        });
        top_cities.truncate(5);

        Ok(StoreSummary {
            total_estimates,
            capex_estimates,
            opex_estimates,
            average_capacity_kw,
            top_cities,
        })
    }
}

/// Factory for the `memory` backend. The connection string is ignored.
pub struct MemoryStoreFactory;

#[async_trait]
impl StoreFactory for MemoryStoreFactory {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, _config: &StoreConfig) -> Result<Box<dyn ResultStore>, StoreError> {
        Ok(Box::new(MemoryStore::new()))
    }
}
