//! Store-backed subcommands: `history`, `show`, `delete` and `summary`.

use anyhow::Result;
use clap::Args;

use solar_core::models::SolarEstimate;
use solar_report::format_inr;

use crate::commands::{StoreArgs, open_store};
use crate::utils::{opt_decimal_display, print_row};

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Only estimates for this city.
    #[arg(long)]
    pub city: Option<String>,

    /// Most recent estimates to show.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

pub async fn run(
    store_args: &StoreArgs,
    args: HistoryArgs,
) -> Result<()> {
    let store = open_store(store_args).await?;
    let estimates = store.list_estimates(args.city.as_deref()).await?;

    if estimates.is_empty() {
        match &args.city {
            Some(city) => println!("No saved estimates for {city}."),
            None => println!("No saved estimates."),
        }
        return Ok(());
    }

    println!(
        "{:>5}  {:<18}{:<18}{:<7}{:>10}{:>14}{:>10}",
        "ID", "Created", "City", "Model", "Capacity", "Monthly ₹", "Payback"
    );
    println!("{}", "-".repeat(84));
    for estimate in estimates.iter().take(args.limit) {
        println!(
            "{:>5}  {:<18}{:<18}{:<7}{:>10}{:>14}{:>10}",
            estimate.id,
            estimate.created_at.format("%Y-%m-%d %H:%M").to_string(),
            estimate.city,
            estimate.investment_model.as_str(),
            format!("{} kW", estimate.capacity_kw),
            format_inr(estimate.monthly_savings),
            opt_decimal_display(&estimate.payback_years),
        );
    }

    if estimates.len() > args.limit {
        println!();
        println!("Showing {} of {} estimates.", args.limit, estimates.len());
    }

    Ok(())
}

pub async fn show(
    store_args: &StoreArgs,
    id: i64,
) -> Result<()> {
    let store = open_store(store_args).await?;
    let estimate = store.get_estimate(id).await?;

    print_saved_estimate(&estimate);
    Ok(())
}

pub async fn delete(
    store_args: &StoreArgs,
    id: i64,
) -> Result<()> {
    let store = open_store(store_args).await?;
    store.delete_estimate(id).await?;

    println!("Deleted estimate #{id}.");
    Ok(())
}

pub async fn summary(store_args: &StoreArgs) -> Result<()> {
    let store = open_store(store_args).await?;
    let summary = store.summary().await?;

    print_row("Saved Estimates", summary.total_estimates);
    print_row("CAPEX", summary.capex_estimates);
    print_row("OPEX", summary.opex_estimates);
    match summary.average_capacity_kw {
        Some(kw) => print_row("Average Capacity", format!("{kw} kW")),
        None => print_row("Average Capacity", "—"),
    }

    if !summary.top_cities.is_empty() {
        println!();
        println!("Top Cities");
        for city in &summary.top_cities {
            print_row(&format!("  {}", city.city), city.estimates);
        }
    }

    Ok(())
}

fn print_saved_estimate(estimate: &SolarEstimate) {
    println!(
        "Estimate #{} for {}, {}",
        estimate.id, estimate.city, estimate.state
    );
    println!("{}", "=".repeat(60));
    print_row("Created", estimate.created_at.format("%Y-%m-%d %H:%M:%S"));
    print_row("Consumer Type", estimate.consumer_type.as_str());
    print_row("Investment Model", estimate.investment_model.as_str());
    print_row("Monthly Bill", format_inr(estimate.monthly_bill));
    print_row("Tariff", format!("₹{}/unit", estimate.tariff));
    print_row("Irradiance", format!("{} kWh/m²/day", estimate.irradiance));

    println!();
    println!("System");
    print_row("  Consumption", format!("{} kWh/month", estimate.monthly_consumption_kwh));
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
}
