//! Solar benefit calculation modules.
//!
//! This module provides the estimation pipeline that turns a monthly
//! electricity bill into system sizing, savings, payback and emission
//! figures, plus the advice generator that annotates the result.

pub mod common;
pub mod estimator;
pub mod recommendations;

pub use estimator::{
    BenefitEstimate, EstimateError, EstimateRequest, Estimator, EstimatorConfig, ResolvedInputs,
};
pub use recommendations::build_recommendations;
