//! Plain-text report rendering for solar benefit estimates.

pub mod renderer;

pub use renderer::{ReportContext, ReportRenderer, TextReportRenderer, format_inr};
