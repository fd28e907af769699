#![forbid(unsafe_code)]

pub mod store;

pub use crate::store::{IntegrationStore, MemoryStore, ResultStore, StoreError};
