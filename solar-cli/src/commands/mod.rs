//! One module per subcommand, plus the store plumbing they share.

pub mod cities;
pub mod estimate;
pub mod history;

pub use cities::CitiesArgs;
pub use estimate::EstimateArgs;
pub use history::HistoryArgs;

use clap::Args;
use tracing::debug;

use solar_core::ResultStore;
use solar_core::store::{MemoryStoreFactory, StoreConfig, StoreRegistry};
use solar_db_sqlite::SqliteStoreFactory;

/// Storage flags shared by every subcommand that touches saved
/// estimates.
#[derive(Debug, Args)]
pub struct StoreArgs {
    /// Storage backend to use.
    #[arg(long, global = true, default_value = "sqlite")]
    pub backend: String,

    /// Database connection string.
    /// For SQLite this is a file URL (e.g. `sqlite:solar.db?mode=rwc`)
    /// or `sqlite::memory:`.
    #[arg(long, global = true, default_value = "sqlite:solar.db?mode=rwc")]
    pub db: String,
}

/// Registry with every backend this binary ships.
pub fn build_registry() -> StoreRegistry {
    let mut registry = StoreRegistry::new();
    registry.register(Box::new(MemoryStoreFactory));
    registry.register(Box::new(SqliteStoreFactory));
    registry
}

/// Opens the store selected by the CLI flags.
pub async fn open_store(args: &StoreArgs) -> anyhow::Result<Box<dyn ResultStore>> {
    let config = StoreConfig {
        backend: args.backend.clone(),
        connection_string: args.db.clone(),
    };

    debug!("connecting to {} store", config.backend);
    let store = build_registry().create(&config).await?;
    Ok(store)
}
