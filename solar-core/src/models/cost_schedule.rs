use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::consumer_type::ConsumerType;

/// Size class of an installation. The capacity boundaries between classes
/// depend on the consumer type, see [`SystemTier::for_capacity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemTier {
    Small,
    Medium,
    Large,
}

impl SystemTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Classifies a capacity into a tier for the given consumer type.
    ///
    /// Boundaries (kW): Residential small < 5, medium ≤ 10, else large.
    /// Commercial small < 50, medium ≤ 100. Industrial small < 100,
    /// medium ≤ 500. The lower boundary is exclusive of the medium tier
    /// while the upper one is inclusive, matching installer price lists.
    pub fn for_capacity(
        consumer_type: ConsumerType,
        capacity_kw: Decimal,
    ) -> Self {
        match consumer_type {
            ConsumerType::Residential => {
                if capacity_kw < Decimal::from(5) {
                    Self::Small
                } else if capacity_kw <= Decimal::from(10) {
                    Self::Medium
                } else {
                    Self::Large
                }
            }
            ConsumerType::Commercial => {
                if capacity_kw < Decimal::from(50) {
                    Self::Small
                } else if capacity_kw <= Decimal::from(100) {
                    Self::Medium
                } else {
                    Self::Large
                }
            }
            ConsumerType::Industrial => {
                if capacity_kw < Decimal::from(100) {
                    Self::Small
                } else if capacity_kw <= Decimal::from(500) {
                    Self::Medium
                } else {
                    Self::Large
                }
            }
        }
    }
}

/// One row of the installed-cost table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRate {
    pub consumer_type: ConsumerType,
    pub tier: SystemTier,
    pub cost_per_kw: Decimal,
}

/// Installed cost per kW, keyed by consumer type and system tier.
///
/// Costs fall as systems grow, reflecting economies of scale in
/// procurement and installation. The table is looked up, never
/// interpolated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSchedule {
    rates: Vec<CostRate>,
}

impl CostSchedule {
    pub fn new(rates: Vec<CostRate>) -> Self {
        Self { rates }
    }

    /// The standard Indian rooftop price table, in ₹ per kW.
    pub fn standard() -> Self {
        let rows = [
            (ConsumerType::Residential, SystemTier::Small, 80_000),
            (ConsumerType::Residential, SystemTier::Medium, 78_000),
            (ConsumerType::Residential, SystemTier::Large, 76_000),
            (ConsumerType::Commercial, SystemTier::Small, 75_000),
            (ConsumerType::Commercial, SystemTier::Medium, 72_000),
            (ConsumerType::Commercial, SystemTier::Large, 70_000),
            (ConsumerType::Industrial, SystemTier::Small, 70_000),
            (ConsumerType::Industrial, SystemTier::Medium, 68_000),
            (ConsumerType::Industrial, SystemTier::Large, 65_000),
        ];

        Self {
            rates: rows
                .into_iter()
                .map(|(consumer_type, tier, cost)| CostRate {
                    consumer_type,
                    tier,
                    cost_per_kw: Decimal::from(cost),
                })
                .collect(),
        }
    }

    pub fn rates(&self) -> &[CostRate] {
        &self.rates
    }

    /// Looks up the cost per kW for a consumer type and tier.
    pub fn cost_per_kw(
        &self,
        consumer_type: ConsumerType,
        tier: SystemTier,
    ) -> Option<Decimal> {
        self.rates
            .iter()
            .find(|r| r.consumer_type == consumer_type && r.tier == tier)
            .map(|r| r.cost_per_kw)
    }

    /// Classifies `capacity_kw` into a tier and returns its cost per kW.
    pub fn rate_for_capacity(
        &self,
        consumer_type: ConsumerType,
        capacity_kw: Decimal,
    ) -> Option<Decimal> {
        self.cost_per_kw(
            consumer_type,
            SystemTier::for_capacity(consumer_type, capacity_kw),
        )
    }
}

impl Default for CostSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // SystemTier::for_capacity tests
    // =========================================================================

    #[test]
    fn residential_below_five_is_small() {
        let tier = SystemTier::for_capacity(ConsumerType::Residential, dec!(4.9));

        assert_eq!(tier, SystemTier::Small);
    }

    #[test]
    fn residential_five_is_medium() {
        let tier = SystemTier::for_capacity(ConsumerType::Residential, dec!(5.0));

        assert_eq!(tier, SystemTier::Medium);
    }

    #[test]
    fn residential_ten_is_medium() {
        let tier = SystemTier::for_capacity(ConsumerType::Residential, dec!(10.0));

        assert_eq!(tier, SystemTier::Medium);
    }

    #[test]
    fn residential_above_ten_is_large() {
        let tier = SystemTier::for_capacity(ConsumerType::Residential, dec!(10.01));

        assert_eq!(tier, SystemTier::Large);
    }

    #[test]
    fn commercial_boundaries() {
        let ct = ConsumerType::Commercial;

        assert_eq!(SystemTier::for_capacity(ct, dec!(49.9)), SystemTier::Small);
        assert_eq!(SystemTier::for_capacity(ct, dec!(50)), SystemTier::Medium);
        assert_eq!(SystemTier::for_capacity(ct, dec!(100)), SystemTier::Medium);
        assert_eq!(SystemTier::for_capacity(ct, dec!(101)), SystemTier::Large);
    }

    #[test]
    fn industrial_boundaries() {
        let ct = ConsumerType::Industrial;

        assert_eq!(SystemTier::for_capacity(ct, dec!(99)), SystemTier::Small);
        assert_eq!(SystemTier::for_capacity(ct, dec!(100)), SystemTier::Medium);
        assert_eq!(SystemTier::for_capacity(ct, dec!(500)), SystemTier::Medium);
        assert_eq!(SystemTier::for_capacity(ct, dec!(500.5)), SystemTier::Large);
    }

    #[test]
    fn zero_capacity_is_small() {
        let tier = SystemTier::for_capacity(ConsumerType::Residential, dec!(0));

        assert_eq!(tier, SystemTier::Small);
    }

    // =========================================================================
    // CostSchedule tests
    // =========================================================================

    #[test]
    fn standard_schedule_has_nine_rates() {
        assert_eq!(CostSchedule::standard().rates().len(), 9);
    }

    #[test]
    fn standard_residential_costs() {
        let schedule = CostSchedule::standard();
        let ct = ConsumerType::Residential;

        assert_eq!(schedule.cost_per_kw(ct, SystemTier::Small), Some(dec!(80000)));
        assert_eq!(schedule.cost_per_kw(ct, SystemTier::Medium), Some(dec!(78000)));
        assert_eq!(schedule.cost_per_kw(ct, SystemTier::Large), Some(dec!(76000)));
    }

    #[test]
    fn standard_commercial_costs() {
        let schedule = CostSchedule::standard();
        let ct = ConsumerType::Commercial;

        assert_eq!(schedule.cost_per_kw(ct, SystemTier::Small), Some(dec!(75000)));
        assert_eq!(schedule.cost_per_kw(ct, SystemTier::Medium), Some(dec!(72000)));
        assert_eq!(schedule.cost_per_kw(ct, SystemTier::Large), Some(dec!(70000)));
    }

    #[test]
    fn standard_industrial_costs() {
        let schedule = CostSchedule::standard();
        let ct = ConsumerType::Industrial;

        assert_eq!(schedule.cost_per_kw(ct, SystemTier::Small), Some(dec!(70000)));
        assert_eq!(schedule.cost_per_kw(ct, SystemTier::Medium), Some(dec!(68000)));
        assert_eq!(schedule.cost_per_kw(ct, SystemTier::Large), Some(dec!(65000)));
    }

    #[test]
    fn rate_for_capacity_classifies_then_looks_up() {
        let schedule = CostSchedule::standard();

        let rate = schedule.rate_for_capacity(ConsumerType::Residential, dec!(6.17));

        assert_eq!(rate, Some(dec!(78000)));
    }

    #[test]
    fn missing_rate_returns_none() {
        let schedule = CostSchedule::new(vec![CostRate {
            consumer_type: ConsumerType::Residential,
            tier: SystemTier::Small,
            cost_per_kw: dec!(80000),
        }]);

        let rate = schedule.cost_per_kw(ConsumerType::Industrial, SystemTier::Large);

        assert_eq!(rate, None);
    }

    #[test]
    fn default_is_the_standard_schedule() {
        assert_eq!(CostSchedule::default(), CostSchedule::standard());
    }
}
