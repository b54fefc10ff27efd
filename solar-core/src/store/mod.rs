pub mod factory;
pub mod memory;
pub mod result_store;

pub use factory::{StoreConfig, StoreFactory, StoreRegistry};
pub use memory::{MemoryStore, MemoryStoreFactory};
pub use result_store::{CityCount, ResultStore, StoreError, StoreSummary};
