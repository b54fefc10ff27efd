//! Plain-text analysis reports.
//!
//! The report mirrors the layout installers hand to customers: a header
//! identifying the estimate, then Input Summary, Recommended System
//! Specifications, Financial Analysis, Environmental Impact, the solar
//! resource profile when one was resolved, and the advice list. Output
//! is plain text so it can be printed or piped to other tools.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use solar_core::calculations::common::round_half_up;
use solar_core::calculations::estimator::BenefitEstimate;
use solar_core::models::{InvestmentModel, Recommendation};
use solar_data::SolarResource;

const LINE_WIDTH: usize = 72;
const LABEL_WIDTH: usize = 34;

/// Everything a report is rendered from. `estimate_id` is present only
/// for persisted estimates; `resource` only when the city resolved to a
/// known solar profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportContext {
    pub generated_at: DateTime<Utc>,
    pub estimate_id: Option<i64>,
    pub city: String,
    pub state: String,
    pub monthly_bill: Decimal,
    pub rooftop_area_sqft: Option<Decimal>,
    pub estimate: BenefitEstimate,
    pub recommendations: Vec<Recommendation>,
    pub resource: Option<SolarResource>,
}

/// Renders a completed estimate into a report document.
pub trait ReportRenderer {
    fn render(&self, context: &ReportContext) -> String;
}

/// The built-in plain-text renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReportRenderer;

impl TextReportRenderer {
    pub fn new() -> Self {
        TextReportRenderer
    }

    fn header(out: &mut String, context: &ReportContext) {
        out.push_str(&"=".repeat(LINE_WIDTH));
        out.push('\n');
        push_centered(out, "Solar Plant Financial Calculator");
        push_centered(out, "Comprehensive Analysis Report");
        out.push_str(&"=".repeat(LINE_WIDTH));
        out.push_str("\n\n");

        let generated = context.generated_at.format("%B %d, %Y at %I:%M %p");
        push_info(out, "Report Generated:", &generated.to_string());
        if let Some(id) = context.estimate_id {
            push_info(out, "Calculation ID:", &id.to_string());
        }
        push_info(out, "Location:", &format!("{}, {}", context.city, context.state));
        push_info(out, "Investment Model:", context.estimate.investment_model.as_str());
        push_info(out, "Consumer Type:", context.estimate.consumer_type.as_str());
    }

    fn input_summary(out: &mut String, context: &ReportContext) {
        push_section(out, "Input Summary");
        push_row(out, "Monthly Electricity Bill", &format_inr(context.monthly_bill));
        push_row(
            out,
            "Monthly Consumption",
            &format!("{} kWh", format_grouped(context.estimate.monthly_consumption_kwh, 0)),
        );
        let tariff = round_half_up(context.estimate.tariff, 2);
        push_row(out, "Electricity Tariff Rate", &format!("₹{tariff:.2}/unit"));
        let irradiance = round_half_up(context.estimate.irradiance, 1);
        push_row(out, "Solar Irradiance", &format!("{irradiance:.1} kWh/m²/day"));
        if let Some(area) = context.rooftop_area_sqft {
            push_row(
                out,
                "Available Rooftop Area",
                &format!("{} sq ft", format_grouped(area, 0)),
            );
        }
    }

    fn system_specs(out: &mut String, context: &ReportContext) {
        let estimate = &context.estimate;
        push_section(out, "Recommended System Specifications");
        let capacity = round_half_up(estimate.capacity_kw, 1);
        push_row(out, "System Capacity", &format!("{capacity:.1} kWp"));
        push_row(
            out,
            "Estimated Panel Count",
            &format!("{} panels", format_grouped(Decimal::from(estimate.panel_count), 0)),
        );
        let inverter = round_half_up(estimate.inverter_capacity_kw, 1);
        push_row(out, "Inverter Capacity", &format!("{inverter:.1} kW"));
        push_row(
            out,
            "Estimated Area Required",
            &format!("{} sq ft", format_grouped(estimate.area_required_sqft, 0)),
        );
        push_row(
            out,
            "Monthly Generation",
            &format!("{} kWh", format_grouped(estimate.monthly_generation_kwh, 0)),
        );
        push_row(
            out,
            "Annual Generation",
            &format!("{} kWh", format_grouped(estimate.yearly_generation_kwh, 0)),
        );
    }

    fn financial_analysis(out: &mut String, context: &ReportContext) {
        let estimate = &context.estimate;
        push_section(out, "Financial Analysis");
        push_row(out, "Monthly Savings", &format_inr(estimate.monthly_savings));
        push_row(out, "Annual Savings", &format_inr(estimate.annual_savings));
        push_row(out, "25-Year Total Savings", &format_inr(estimate.lifetime_savings));

        if estimate.investment_model == InvestmentModel::Capex {
            if let Some(investment) = estimate.investment {
                push_row(out, "Total Investment Required", &format_inr(investment));
                if let Some(payback) = estimate.payback_years {
                    let years = round_half_up(payback, 1);
                    push_row(out, "Payback Period", &format!("{years:.1} years"));
                }
                if !investment.is_zero() {
                    let roi = round_half_up(
                        estimate.lifetime_savings / investment * Decimal::from(100),
                        1,
                    );
                    push_row(out, "Return on Investment (25 years)", &format!("{roi:.1}%"));
                }
            }
        }
    }

    fn environmental_impact(out: &mut String, context: &ReportContext) {
        let estimate = &context.estimate;
        push_section(out, "Environmental Impact");
        let annual = round_half_up(estimate.annual_co2_saved_tons, 1);
        push_row(out, "Annual CO₂ Reduction", &format!("{annual:.1} tons"));
        let lifetime = round_half_up(estimate.lifetime_co2_saved_tons, 1);
        push_row(out, "25-Year CO₂ Reduction", &format!("{lifetime:.1} tons"));
        push_row(
            out,
            "Equivalent Trees Planted",
            &format!("{} trees", format_grouped(estimate.equivalent_trees, 0)),
        );
    }

    fn resource_profile(out: &mut String, resource: &SolarResource) {
        push_section(out, "Solar Resource Profile");
        push_row(out, "Climate Zone", resource.climate_zone.as_str());
        push_row(out, "Annual GHI", &format!("{} kWh/m²", format_grouped(resource.annual_ghi, 2)));
        push_row(out, "Annual DNI", &format!("{} kWh/m²", format_grouped(resource.annual_dni, 2)));
        push_row(
            out,
            "Winter Irradiance",
            &format!("{:.2} kWh/m²/day", round_half_up(resource.seasonal.winter, 2)),
        );
        push_row(
            out,
            "Summer Irradiance",
            &format!("{:.2} kWh/m²/day", round_half_up(resource.seasonal.summer, 2)),
        );
        push_row(
            out,
            "Monsoon Irradiance",
            &format!("{:.2} kWh/m²/day", round_half_up(resource.seasonal.monsoon, 2)),
        );
        push_row(
            out,
            "Post-Monsoon Irradiance",
            &format!("{:.2} kWh/m²/day", round_half_up(resource.seasonal.post_monsoon, 2)),
        );
        let derate = round_half_up(resource.weather.combined(), 2);
        push_row(out, "Combined Weather Derate", &format!("{derate:.2}"));
    }

    fn recommendations(out: &mut String, recommendations: &[Recommendation]) {
        push_section(out, "Recommendations");
        if recommendations.is_empty() {
            out.push_str("No additional notes for this system.\n");
            return;
        }
        for recommendation in recommendations {
            out.push_str(&format!(
                "[{}] {}\n",
                recommendation.priority.as_str(),
                recommendation.title
            ));
            for line in wrap(&recommendation.message, LINE_WIDTH - 4) {
                out.push_str("    ");
                out.push_str(&line);
                out.push('\n');
            }
        }
    }

    fn footer(out: &mut String) {
        out.push('\n');
        out.push_str(&"-".repeat(LINE_WIDTH));
        out.push('\n');
        let disclaimer = "Disclaimer: This report is generated based on the inputs provided \
                          and standard assumptions. Actual results may vary based on local \
                          conditions, system quality, maintenance, and other factors. Please \
                          consult with certified solar installers for detailed site assessment \
                          and final system design.";
        for line in wrap(disclaimer, LINE_WIDTH) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str("Generated by: Solar Plant Financial Calculator v2.0\n");
    }
}

impl ReportRenderer for TextReportRenderer {
    fn render(&self, context: &ReportContext) -> String {
        let mut out = String::new();
        Self::header(&mut out, context);
        Self::input_summary(&mut out, context);
        Self::system_specs(&mut out, context);
        Self::financial_analysis(&mut out, context);
        Self::environmental_impact(&mut out, context);
        if let Some(resource) = &context.resource {
            Self::resource_profile(&mut out, resource);
        }
        Self::recommendations(&mut out, &context.recommendations);
        Self::footer(&mut out);
        out
    }
}

/// Rounds to whole rupees and renders with the ₹ prefix and thousands
/// grouping.
pub fn format_inr(value: Decimal) -> String {
    format!("₹{}", format_grouped(value, 0))
}

/// Rounds to `dp` places and groups the integer part in threes.
pub fn format_grouped(value: Decimal, dp: u32) -> String {
    let rounded = round_half_up(value, dp);
    let text = format!("{rounded:.prec$}", prec = dp as usize);
    match text.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{}", group_digits(int_part), frac_part),
        None => group_digits(&text),
    }
}

fn group_digits(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, c) in digits.chars().enumerate() {
        let remaining = digits.len() - index;
        if index > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}")
}

/// Greedy word wrap. Words longer than the width get their own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn push_centered(out: &mut String, text: &str) {
    let centered = format!("{text:^width$}", width = LINE_WIDTH);
    out.push_str(centered.trim_end());
    out.push('\n');
}

fn push_section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(LINE_WIDTH));
    out.push('\n');
}

fn push_info(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{label:<21}{value}\n"));
}

fn push_row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{label:<width$}{value}\n", width = LABEL_WIDTH));
}
