mod memory;
mod trait_store;

pub use memory::MemoryStore;
pub use trait_store::{IntegrationStore, ResultStore, StoreError};
