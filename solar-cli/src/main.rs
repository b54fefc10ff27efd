use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use solar_cli::commands::{self, CitiesArgs, EstimateArgs, HistoryArgs, StoreArgs};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Rooftop solar benefit estimator for Indian electricity consumers.
///
/// Sizes a system from a monthly electricity bill, prices the
/// investment, and projects savings, payback and CO₂ impact. Estimates
/// can be saved to the configured store and rendered as full analysis
/// reports.
#[derive(Debug, Parser)]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate the solar benefit for a monthly electricity bill.
    Estimate(EstimateArgs),

    /// List the cities in the bundled location table.
    Cities(CitiesArgs),

    /// List saved estimates, newest first.
    History(HistoryArgs),

    /// Show one saved estimate in full.
    Show {
        /// Estimate id, as printed by `history`.
        id: i64,
    },

    /// Delete a saved estimate.
    Delete {
        /// Estimate id, as printed by `history`.
        id: i64,
    },

    /// Aggregate statistics over saved estimates.
    Summary,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Estimate(args) => commands::estimate::run(&cli.store, args).await,
        Command::Cities(args) => commands::cities::run(args),
        Command::History(args) => commands::history::run(&cli.store, args).await,
        Command::Show { id } => commands::history::show(&cli.store, id).await,
        Command::Delete { id } => commands::history::delete(&cli.store, id).await,
        Command::Summary => commands::history::summary(&cli.store).await,
    }
}
