//! SQLite persistence for solar estimates.
//!
//! Implements the [`solar_core::ResultStore`] trait on top of sqlx, with
//! decimal figures stored as TEXT so they round-trip exactly.

pub mod factory;
pub mod store;

pub use factory::SqliteStoreFactory;
pub use store::SqliteStore;
