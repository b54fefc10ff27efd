//! The `estimate` subcommand: resolve inputs, run the pipeline, print
//! the result, and optionally persist it or write a report.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use clap::Args;
use rust_decimal::Decimal;
use tracing::{info, warn};

use solar_core::calculations::common::round_half_up;
use solar_core::calculations::{
    BenefitEstimate, EstimateRequest, Estimator, EstimatorConfig, build_recommendations,
};
use solar_core::models::{
    ConsumerType, CostSchedule, InvestmentModel, LocationRecord, NewSolarEstimate, Recommendation,
};
use solar_data::{LocationDirectory, SolarResource};
use solar_extract::{BillScan, RegexBillExtractor, TextExtractor, clamp_tariff, validate};
use solar_report::{ReportContext, ReportRenderer, TextReportRenderer, format_inr};

use crate::commands::{StoreArgs, open_store};
use crate::utils::{parse_decimal, print_row};

// ─── arguments ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct EstimateArgs {
    /// Monthly electricity bill in ₹.
    #[arg(long, value_parser = parse_decimal)]
    pub bill: Option<Decimal>,

    /// City used for irradiance and tariff defaults (see `cities`).
    #[arg(long, default_value = "Delhi")]
    pub city: String,

    /// Grid tariff in ₹/unit. Defaults to the city's tariff.
    #[arg(long, value_parser = parse_decimal)]
    pub tariff: Option<Decimal>,

    /// Solar irradiance in kWh/m²/day. Defaults to the city's value.
    #[arg(long, value_parser = parse_decimal)]
    pub irradiance: Option<Decimal>,

    /// Consumer type: residential, commercial or industrial.
    #[arg(long, default_value = "residential")]
    pub consumer: String,

    /// Investment model: capex (you buy) or opex (installer owns).
    #[arg(long, default_value = "capex")]
    pub model: String,

    /// Shadow-free rooftop area in sq ft, for sizing advice.
    #[arg(long, value_parser = parse_decimal)]
    pub area: Option<Decimal>,

    /// Bill text file to scan for the amount and units when --bill or
    /// --tariff are not given.
    #[arg(long, value_name = "FILE")]
    pub bill_text: Option<PathBuf>,

    /// Persist the estimate to the configured store.
    #[arg(long)]
    pub save: bool,

    /// Write the full analysis report to FILE.
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

// ─── command ─────────────────────────────────────────────────────────────────

pub async fn run(
    store: &StoreArgs,
    args: EstimateArgs,
) -> Result<()> {
    let directory = LocationDirectory::bundled()?;
    let location = directory.resolve(&args.city);

    let scan = match &args.bill_text {
        Some(path) => Some(scan_bill_text(path)?),
        None => None,
    };

    let bill = resolve_bill(args.bill, scan.as_ref())?;
    let tariff = resolve_tariff(args.tariff, scan.as_ref(), &location);
    let irradiance = args.irradiance.unwrap_or(location.irradiance);

    let consumer_type = ConsumerType::parse(&args.consumer).ok_or_else(|| {
        anyhow!(
            "unknown consumer type '{}', expected residential, commercial or industrial",
            args.consumer
        )
    })?;
    let investment_model = InvestmentModel::parse(&args.model).ok_or_else(|| {
        anyhow!("unknown investment model '{}', expected capex or opex", args.model)
    })?;

    let config = EstimatorConfig::default();
    let schedule = CostSchedule::standard();
    let request = EstimateRequest {
        monthly_bill: bill,
        tariff,
        irradiance,
        consumer_type,
        investment_model,
    };
    let estimate = Estimator::new(&config, &schedule)
        .estimate(&request)?
        .rounded();
    let recommendations = build_recommendations(&estimate, args.area);

    print_estimate(&location, bill, &estimate, &recommendations);

    let saved_id = if args.save {
        let saved = open_store(store)
            .await?
            .save_estimate(new_estimate(&location, bill, &estimate))
            .await?;
        println!();
        println!("Saved as estimate #{}.", saved.id);
        Some(saved.id)
    } else {
        None
    };

    if let Some(path) = &args.report {
        let context = ReportContext {
            generated_at: Utc::now(),
            estimate_id: saved_id,
            city: location.city.clone(),
            state: location.state.clone(),
            monthly_bill: bill,
            rooftop_area_sqft: args.area,
            estimate: estimate.clone(),
            recommendations,
            resource: Some(SolarResource::for_location(&location)),
        };
        let report = TextReportRenderer::new().render(&context);
        fs::write(path, report)
            .with_context(|| format!("cannot write report to '{}'", path.display()))?;
        info!("report written to {}", path.display());
    }

    Ok(())
}

// ─── input resolution ────────────────────────────────────────────────────────

fn scan_bill_text(path: &Path) -> Result<BillScan> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read bill text '{}'", path.display()))?;

    let scan = RegexBillExtractor::new().extract(&text);
    match (scan.amount, scan.units) {
        (Some(amount), Some(units)) => info!(%amount, %units, "scanned bill text"),
        (Some(amount), None) => info!(%amount, "scanned bill text, units not found"),
        (None, Some(units)) => info!(%units, "scanned bill text, amount not found"),
        (None, None) => warn!("no billing figures found in bill text"),
    }

    for suggestion in &validate(&scan).suggestions {
        warn!("{suggestion}");
    }

    Ok(scan)
}

fn resolve_bill(
    flag: Option<Decimal>,
    scan: Option<&BillScan>,
) -> Result<Decimal> {
    if let Some(bill) = flag {
        return Ok(bill);
    }
    scan.and_then(|s| s.amount)
        .ok_or_else(|| anyhow!("no bill amount given, pass --bill or --bill-text"))
}

/// Tariff priority: explicit flag, then one derived from a scanned
/// bill, then the city default.
fn resolve_tariff(
    flag: Option<Decimal>,
    scan: Option<&BillScan>,
    location: &LocationRecord,
) -> Decimal {
    if let Some(tariff) = flag {
        return tariff;
    }
    match scan {
        Some(scan) if scan.amount.is_some() => derived_tariff(scan),
        _ => location.tariff,
    }
}

/// Derives ₹/unit from a scanned bill. Falls back to ₹6/unit when no
/// usable units figure was found, and clamps the result into the
/// plausible ₹1-20/unit band.
fn derived_tariff(scan: &BillScan) -> Decimal {
    let calculated = match (scan.amount, scan.units) {
        (Some(amount), Some(units)) if units > Decimal::ZERO => amount / units,
        _ => Decimal::from(6),
    };

    let clamped = clamp_tariff(calculated);
    if calculated > Decimal::from(20) {
        let calc = round_half_up(calculated, 2);
        let capped = round_half_up(clamped, 2);
        warn!("Calculated tariff (₹{calc:.2}/unit) seems high. Using ₹{capped:.2}/unit instead.");
    }
    clamped
}

// ─── output ──────────────────────────────────────────────────────────────────

fn print_estimate(
    location: &LocationRecord,
    bill: Decimal,
    estimate: &BenefitEstimate,
    recommendations: &[Recommendation],
) {
    println!("Solar Benefit Estimate for {}, {}", location.city, location.state);
    println!("{}", "=".repeat(60));
    print_row("Monthly Bill", format_inr(bill));
    let tariff = round_half_up(estimate.tariff, 2);
    print_row("Tariff", format!("₹{tariff:.2}/unit"));
    print_row("Irradiance", format!("{} kWh/m²/day", estimate.irradiance));
    print_row("Consumer Type", estimate.consumer_type.as_str());
    print_row("Investment Model", estimate.investment_model.as_str());

    println!();
    println!("System");
    print_row("  Capacity", format!("{} kW", estimate.capacity_kw));
    print_row("  Panels", estimate.panel_count);
    print_row("  Inverter", format!("{} kW", estimate.inverter_capacity_kw));
    print_row("  Rooftop Area Needed", format!("{} sq ft", estimate.area_required_sqft));
    print_row("  Monthly Generation", format!("{} kWh", estimate.monthly_generation_kwh));
    print_row("  Yearly Generation", format!("{} kWh", estimate.yearly_generation_kwh));

    println!();
    println!("Financials");
    print_row("  Monthly Savings", format_inr(estimate.monthly_savings));
    print_row("  Annual Savings", format_inr(estimate.annual_savings));
    print_row("  25-Year Savings", format_inr(estimate.lifetime_savings));
    if let Some(investment) = estimate.investment {
        print_row("  Investment", format_inr(investment));
    }
    if let Some(payback) = estimate.payback_years {
        print_row("  Payback", format!("{payback} years"));
    }

    println!();
    println!("Environment");
    print_row("  Annual CO₂ Avoided", format!("{} tons", estimate.annual_co2_saved_tons));
    print_row("  25-Year CO₂ Avoided", format!("{} tons", estimate.lifetime_co2_saved_tons));
    print_row("  Equivalent Trees", estimate.equivalent_trees);

    if !recommendations.is_empty() {
        println!();
        println!("Recommendations");
        for recommendation in recommendations {
            println!(
                "  [{}] {}: {}",
                recommendation.priority.as_str(),
                recommendation.title,
                recommendation.message
            );
        }
    }
}

fn new_estimate(
    location: &LocationRecord,
    bill: Decimal,
    estimate: &BenefitEstimate,
) -> NewSolarEstimate {
    NewSolarEstimate {
        city: location.city.clone(),
        state: location.state.clone(),
        consumer_type: estimate.consumer_type,
        investment_model: estimate.investment_model,
        monthly_bill: bill,
        tariff: estimate.tariff,
        irradiance: estimate.irradiance,
        monthly_consumption_kwh: estimate.monthly_consumption_kwh,
        capacity_kw: estimate.capacity_kw,
        panel_count: estimate.panel_count,
        inverter_capacity_kw: estimate.inverter_capacity_kw,
        area_required_sqft: estimate.area_required_sqft,
        monthly_generation_kwh: estimate.monthly_generation_kwh,
        yearly_generation_kwh: estimate.yearly_generation_kwh,
        monthly_savings: estimate.monthly_savings,
        annual_savings: estimate.annual_savings,
        lifetime_savings: estimate.lifetime_savings,
        investment: estimate.investment,
        payback_years: estimate.payback_years,
        annual_co2_saved_tons: estimate.annual_co2_saved_tons,
        lifetime_co2_saved_tons: estimate.lifetime_co2_saved_tons,
        equivalent_trees: estimate.equivalent_trees,
    }
}
