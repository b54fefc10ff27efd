use async_trait::async_trait;

use solar_core::store::{StoreConfig, StoreFactory};
use solar_core::{ResultStore, StoreError};

use crate::store::SqliteStore;

/// [`StoreFactory`] for SQLite.
///
/// Register this with a [`solar_core::store::StoreRegistry`] to make the
/// `"sqlite"` backend available:
///
/// ```rust,no_run
/// use solar_core::store::StoreRegistry;
/// use solar_db_sqlite::SqliteStoreFactory;
///
/// let mut registry = StoreRegistry::new();
/// registry.register(Box::new(SqliteStoreFactory));
/// ```
pub struct SqliteStoreFactory;

#[async_trait]
impl StoreFactory for SqliteStoreFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    /// Opens the database described by `config.connection_string` and runs
    /// any pending migrations.
    ///
    /// Accepted connection-string values are sqlx SQLite URLs:
    /// * `sqlite:solar.db?mode=rwc` for a file, created if it does not
    ///   exist.
    /// * `sqlite::memory:` for an ephemeral in-memory database (useful
    ///   for tests).
    async fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn ResultStore>, StoreError> {
        let store = SqliteStore::new(&config.connection_string).await?;
        store.run_migrations().await?;
        Ok(Box::new(store))
    }
}
