//! Qualitative guidance derived from a completed estimate.
//!
//! Recommendations are short, human-readable notes covering system size,
//! investment quality and consumer-type perks. They never change the
//! numbers; they only annotate them.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::calculations::estimator::BenefitEstimate;
use crate::models::{
    ConsumerType, InvestmentModel, Priority, Recommendation, RecommendationCategory,
};

/// Builds the advice list for an estimate.
///
/// `rooftop_area_sqft` is the shadow-free area the user reported having,
/// if any; when it falls short of the required area an extra high-priority
/// note is appended.
pub fn build_recommendations(
    estimate: &BenefitEstimate,
    rooftop_area_sqft: Option<Decimal>,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let capacity = round_half_up(estimate.capacity_kw, 1);
    if estimate.capacity_kw < Decimal::from(3) {
        recommendations.push(Recommendation {
            category: RecommendationCategory::SystemSize,
            title: "Small System Recommendation".to_string(),
            message: format!(
                "A {capacity:.1} kW system is suitable for your consumption. \
                 Consider energy-efficient appliances to maximize benefits."
            ),
            priority: Priority::Medium,
        });
    } else if estimate.capacity_kw > Decimal::from(10)
        && estimate.consumer_type == ConsumerType::Residential
    {
        recommendations.push(Recommendation {
            category: RecommendationCategory::SystemSize,
            title: "Large Residential System".to_string(),
            message: format!(
                "Your {capacity:.1} kW requirement is quite large for residential use. \
                 Consider splitting into phases or reviewing consumption patterns."
            ),
            priority: Priority::High,
        });
    }

    if estimate.investment_model == InvestmentModel::Capex {
        if let Some(payback) = estimate.payback_years {
            let years = round_half_up(payback, 1);
            if payback <= Decimal::from(5) {
                recommendations.push(Recommendation {
                    category: RecommendationCategory::Financial,
                    title: "Excellent Investment".to_string(),
                    message: format!(
                        "With a {years:.1} year payback period, this is an excellent \
                         investment opportunity."
                    ),
                    priority: Priority::High,
                });
            } else if payback > Decimal::from(8) {
                recommendations.push(Recommendation {
                    category: RecommendationCategory::Financial,
                    title: "Consider OPEX Model".to_string(),
                    message: format!(
                        "With a {years:.1} year payback, you might want to consider \
                         the OPEX/lease model instead."
                    ),
                    priority: Priority::Medium,
                });
            }
        }
    }

    if estimate.consumer_type == ConsumerType::Commercial {
        recommendations.push(Recommendation {
            category: RecommendationCategory::TaxBenefits,
            title: "Tax Benefits Available".to_string(),
            message: "Commercial installations are eligible for accelerated depreciation \
                      and other tax benefits. Consult a tax advisor."
                .to_string(),
            priority: Priority::Medium,
        });
    }

    if let Some(available) = rooftop_area_sqft {
        if available < estimate.area_required_sqft {
            let required = round_half_up(estimate.area_required_sqft, 0);
            let have = round_half_up(available, 0);
            recommendations.push(Recommendation {
                category: RecommendationCategory::RooftopArea,
                title: "Insufficient Rooftop Area".to_string(),
                message: format!(
                    "The system needs about {required} sq ft of shadow-free area but \
                     only {have} sq ft is available. Consider high-efficiency panels \
                     or a phased installation."
                ),
                priority: Priority::High,
            });
        }
    }

    recommendations
}
