//! Location reference data for solar estimates.
//!
//! Bundles the Indian city table (state, average daily irradiance,
//! typical grid tariff) and derives per-city solar resource profiles.

pub mod directory;
pub mod resource;

pub use directory::{LocationDirectory, LocationLoaderError};
pub use resource::{ClimateZone, SeasonalIrradiance, SolarResource, WeatherFactors};
