//! Infrastructure layer: store adapters for the allocation engine's ports.

pub mod store;

#[cfg(test)]
mod integration_tests;

pub use store::in_memory::{InMemoryLocationResolver, InMemoryWarehouseStore};
pub use store::postgres::{PostgresLocationResolver, PostgresWarehouseStore};
