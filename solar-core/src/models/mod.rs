mod consumer_type;
mod cost_schedule;
mod investment_model;
mod location;
mod recommendation;
mod solar_estimate;

pub use consumer_type::ConsumerType;
pub use cost_schedule::{CostRate, CostSchedule, SystemTier};
pub use investment_model::InvestmentModel;
pub use location::LocationRecord;
pub use recommendation::{Priority, Recommendation, RecommendationCategory};
pub use solar_estimate::{NewSolarEstimate, SolarEstimate};
