pub mod calculations;
pub mod models;
pub mod store;

pub use models::*;
pub use store::result_store::{ResultStore, StoreError};
