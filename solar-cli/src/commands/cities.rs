//! The `cities` subcommand: browse the bundled location table.

use anyhow::Result;
use clap::Args;

use solar_core::models::LocationRecord;
use solar_data::LocationDirectory;

#[derive(Debug, Args)]
pub struct CitiesArgs {
    /// Only show cities in this state.
    #[arg(long)]
    pub state: Option<String>,
}

pub fn run(args: CitiesArgs) -> Result<()> {
    let directory = LocationDirectory::bundled()?;

    let records: Vec<&LocationRecord> = match &args.state {
        Some(state) => directory.in_state(state),
        None => directory.records().iter().collect(),
    };

    if records.is_empty() {
        match &args.state {
            Some(state) => println!("No cities found in {state}."),
            None => println!("The location table is empty."),
        }
        return Ok(());
    }

    println!("{:<20}{:<22}{:>12}{:>10}", "City", "State", "Irradiance", "Tariff");
    println!("{}", "-".repeat(64));
    for record in &records {
        println!(
            "{:<20}{:<22}{:>12}{:>10}",
            record.city, record.state, record.irradiance, record.tariff
        );
    }
    println!();
    println!("{} cities.", records.len());

    Ok(())
}
