//! Derived solar resource profiles.
//!
//! Supplements the static city table with a climate-zone classification,
//! the seasonal spread of irradiance, and the weather derating factors
//! that feed the report's resource section.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use solar_core::LocationRecord;
use solar_core::calculations::common::round_half_up;

/// Simplified climate classification for Indian cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClimateZone {
    HotDry,
    HotHumid,
    Temperate,
    Composite,
}

impl ClimateZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateZone::HotDry => "Hot-Dry",
            ClimateZone::HotHumid => "Hot-Humid",
            ClimateZone::Temperate => "Temperate",
            ClimateZone::Composite => "Composite",
        }
    }

    /// Classifies a city by name, case-insensitively. Desert, coastal and
    /// hill cities get their own zones; everywhere else counts as composite.
    pub fn for_city(city: &str) -> Self {
        const DESERT: [&str; 4] = ["Jaipur", "Jodhpur", "Bikaner", "Ahmedabad"];
        const COASTAL: [&str; 4] = ["Mumbai", "Chennai", "Visakhapatnam", "Kochi"];
        const HILL: [&str; 3] = ["Shimla", "Darjeeling", "Ooty"];

        let name = city.trim();
        let is_in = |names: &[&str]| names.iter().any(|n| n.eq_ignore_ascii_case(name));

        if is_in(&DESERT) {
            ClimateZone::HotDry
        } else if is_in(&COASTAL) {
            ClimateZone::HotHumid
        } else if is_in(&HILL) {
            ClimateZone::Temperate
        } else {
            ClimateZone::Composite
        }
    }

    /// Generation derating factors typical for the zone.
    pub fn weather_factors(&self) -> WeatherFactors {
        match self {
            ClimateZone::HotDry => WeatherFactors {
                dust: Decimal::new(95, 2),
                temperature: Decimal::new(92, 2),
                humidity: Decimal::new(98, 2),
                cloud: Decimal::new(95, 2),
            },
            ClimateZone::HotHumid => WeatherFactors {
                dust: Decimal::new(98, 2),
                temperature: Decimal::new(94, 2),
                humidity: Decimal::new(96, 2),
                cloud: Decimal::new(85, 2),
            },
            ClimateZone::Temperate => WeatherFactors {
                dust: Decimal::new(97, 2),
                temperature: Decimal::new(98, 2),
                humidity: Decimal::new(97, 2),
                cloud: Decimal::new(90, 2),
            },
            ClimateZone::Composite => WeatherFactors {
                dust: Decimal::new(96, 2),
                temperature: Decimal::new(95, 2),
                humidity: Decimal::new(97, 2),
                cloud: Decimal::new(90, 2),
            },
        }
    }
}

/// Multiplicative losses applied to nameplate generation, one factor per
/// weather effect. A factor of 0.95 means a 5% loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherFactors {
    pub dust: Decimal,
    pub temperature: Decimal,
    pub humidity: Decimal,
    pub cloud: Decimal,
}

impl WeatherFactors {
    /// Product of all four factors.
    pub fn combined(&self) -> Decimal {
        self.dust * self.temperature * self.humidity * self.cloud
    }
}

/// Average daily irradiance per season, kWh/m²/day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalIrradiance {
    /// December through February.
    pub winter: Decimal,
    /// March through May.
    pub summer: Decimal,
    /// June through September.
    pub monsoon: Decimal,
    /// October and November.
    pub post_monsoon: Decimal,
}

impl SeasonalIrradiance {
    /// Spreads an annual-average daily irradiance across the seasons
    /// (winter ×0.8, summer ×1.2, monsoon ×0.6, post-monsoon ×1.0).
    pub fn for_base(base_irradiance: Decimal) -> Self {
        let scaled = |factor: Decimal| round_half_up(base_irradiance * factor, 2);
        SeasonalIrradiance {
            winter: scaled(Decimal::new(8, 1)),
            summer: scaled(Decimal::new(12, 1)),
            monsoon: scaled(Decimal::new(6, 1)),
            post_monsoon: scaled(Decimal::ONE),
        }
    }
}

/// Solar resource profile for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarResource {
    pub city: String,
    pub climate_zone: ClimateZone,
    /// Global horizontal irradiance, kWh/m² per year.
    pub annual_ghi: Decimal,
    /// Direct normal irradiance, kWh/m² per year.
    pub annual_dni: Decimal,
    pub seasonal: SeasonalIrradiance,
    pub weather: WeatherFactors,
}

impl SolarResource {
    /// Derives the full profile from a directory record.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use solar_core::LocationRecord;
    /// use solar_data::SolarResource;
    ///
    /// let jaipur = LocationRecord {
    ///     city: "Jaipur".to_string(),
    ///     state: "Rajasthan".to_string(),
    ///     irradiance: dec!(6.0),
    ///     tariff: dec!(5.2),
    /// };
    ///
    /// let resource = SolarResource::for_location(&jaipur);
    /// assert_eq!(resource.annual_ghi, dec!(1861.50));
    /// assert_eq!(resource.climate_zone.as_str(), "Hot-Dry");
    /// ```
    pub fn for_location(location: &LocationRecord) -> Self {
        // Daily average scaled to a year at 85% capture efficiency; DNI in
        // Indian conditions runs about 85% of GHI.
        let annual_ghi = round_half_up(
            location.irradiance * Decimal::from(365) * Decimal::new(85, 2),
            2,
        );
        let annual_dni = round_half_up(annual_ghi * Decimal::new(85, 2), 2);
        let climate_zone = ClimateZone::for_city(&location.city);

        SolarResource {
            city: location.city.clone(),
            climate_zone,
            annual_ghi,
            annual_dni,
            seasonal: SeasonalIrradiance::for_base(location.irradiance),
            weather: climate_zone.weather_factors(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn record(
        city: &str,
        irradiance: Decimal,
    ) -> LocationRecord {
        LocationRecord {
            city: city.to_string(),
            state: "Test State".to_string(),
            irradiance,
            tariff: dec!(6.0),
        }
    }

    // ============================================================
    // Climate zones
    // ============================================================

    #[test]
    fn desert_cities_are_hot_dry() {
        for city in ["Jaipur", "Jodhpur", "Bikaner", "Ahmedabad"] {
            assert_eq!(ClimateZone::for_city(city), ClimateZone::HotDry);
        }
    }

    #[test]
    fn coastal_cities_are_hot_humid() {
        for city in ["Mumbai", "Chennai", "Visakhapatnam", "Kochi"] {
            assert_eq!(ClimateZone::for_city(city), ClimateZone::HotHumid);
        }
    }

    #[test]
    fn hill_cities_are_temperate() {
        for city in ["Shimla", "Darjeeling", "Ooty"] {
            assert_eq!(ClimateZone::for_city(city), ClimateZone::Temperate);
        }
    }

    #[test]
    fn everything_else_is_composite() {
        assert_eq!(ClimateZone::for_city("Delhi"), ClimateZone::Composite);
        assert_eq!(ClimateZone::for_city("Atlantis"), ClimateZone::Composite);
    }

    #[test]
    fn zone_lookup_is_case_insensitive() {
        assert_eq!(ClimateZone::for_city(" jaipur "), ClimateZone::HotDry);
        assert_eq!(ClimateZone::for_city("MUMBAI"), ClimateZone::HotHumid);
    }

    #[test]
    fn zone_names() {
        assert_eq!(ClimateZone::HotDry.as_str(), "Hot-Dry");
        assert_eq!(ClimateZone::HotHumid.as_str(), "Hot-Humid");
        assert_eq!(ClimateZone::Temperate.as_str(), "Temperate");
        assert_eq!(ClimateZone::Composite.as_str(), "Composite");
    }

    // ============================================================
    // Weather factors
    // ============================================================

    #[test]
    fn hot_dry_weather_factors() {
        let factors = ClimateZone::HotDry.weather_factors();

        assert_eq!(factors.dust, dec!(0.95));
        assert_eq!(factors.temperature, dec!(0.92));
        assert_eq!(factors.humidity, dec!(0.98));
        assert_eq!(factors.cloud, dec!(0.95));
    }

    #[test]
    fn hot_humid_weather_factors() {
        let factors = ClimateZone::HotHumid.weather_factors();

        assert_eq!(factors.dust, dec!(0.98));
        assert_eq!(factors.temperature, dec!(0.94));
        assert_eq!(factors.humidity, dec!(0.96));
        assert_eq!(factors.cloud, dec!(0.85));
    }

    #[test]
    fn temperate_weather_factors() {
        let factors = ClimateZone::Temperate.weather_factors();

        assert_eq!(factors.dust, dec!(0.97));
        assert_eq!(factors.temperature, dec!(0.98));
        assert_eq!(factors.humidity, dec!(0.97));
        assert_eq!(factors.cloud, dec!(0.90));
    }

    #[test]
    fn composite_weather_factors() {
        let factors = ClimateZone::Composite.weather_factors();

        assert_eq!(factors.dust, dec!(0.96));
        assert_eq!(factors.temperature, dec!(0.95));
        assert_eq!(factors.humidity, dec!(0.97));
        assert_eq!(factors.cloud, dec!(0.90));
    }

    #[test]
    fn combined_factor_is_the_product() {
        let factors = ClimateZone::HotDry.weather_factors();

        assert_eq!(factors.combined(), dec!(0.813694));
    }

    // ============================================================
    // Seasonal spread
    // ============================================================

    #[test]
    fn seasonal_spread_scales_the_base() {
        let seasonal = SeasonalIrradiance::for_base(dec!(5.0));

        assert_eq!(seasonal.winter, dec!(4.00));
        assert_eq!(seasonal.summer, dec!(6.00));
        assert_eq!(seasonal.monsoon, dec!(3.00));
        assert_eq!(seasonal.post_monsoon, dec!(5.00));
    }

    #[test]
    fn seasonal_spread_rounds_to_two_places() {
        let seasonal = SeasonalIrradiance::for_base(dec!(4.5));

        assert_eq!(seasonal.winter, dec!(3.60));
        assert_eq!(seasonal.summer, dec!(5.40));
        assert_eq!(seasonal.monsoon, dec!(2.70));
        assert_eq!(seasonal.post_monsoon, dec!(4.50));
    }

    // ============================================================
    // Full profile
    // ============================================================

    #[test]
    fn profile_for_a_composite_city() {
        let resource = SolarResource::for_location(&record("Delhi", dec!(4.5)));

        assert_eq!(resource.city, "Delhi");
        assert_eq!(resource.climate_zone, ClimateZone::Composite);
        assert_eq!(resource.annual_ghi, dec!(1396.13));
        assert_eq!(resource.annual_dni, dec!(1186.71));
        assert_eq!(resource.seasonal.monsoon, dec!(2.70));
        assert_eq!(resource.weather, ClimateZone::Composite.weather_factors());
    }

    #[test]
    fn profile_for_a_coastal_city() {
        let resource = SolarResource::for_location(&record("Mumbai", dec!(4.8)));

        assert_eq!(resource.climate_zone, ClimateZone::HotHumid);
        assert_eq!(resource.annual_ghi, dec!(1489.20));
        assert_eq!(resource.annual_dni, dec!(1265.82));
        assert_eq!(resource.weather.cloud, dec!(0.85));
    }
}
