use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationCategory {
    SystemSize,
    Financial,
    TaxBenefits,
    RooftopArea,
}

impl RecommendationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SystemSize => "system_size",
            Self::Financial => "financial",
            Self::TaxBenefits => "tax_benefits",
            Self::RooftopArea => "rooftop_area",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A piece of qualitative advice attached to an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub title: String,
    pub message: String,
    pub priority: Priority,
}
