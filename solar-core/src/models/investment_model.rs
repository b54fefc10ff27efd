use serde::{Deserialize, Serialize};

/// How the system is financed. CAPEX buys the plant outright; OPEX leases
/// it, so there is no upfront investment and no payback figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestmentModel {
    Capex,
    Opex,
}

impl InvestmentModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Capex => "CAPEX",
            Self::Opex => "OPEX",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "capex" => Some(Self::Capex),
            "opex" => Some(Self::Opex),
            _ => None,
        }
    }

    pub fn all() -> [Self; 2] {
        [Self::Capex, Self::Opex]
    }
}
