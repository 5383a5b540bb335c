//! Warehouse capacity allocation engine.
//!
//! Decides whether a warehouse unit may be created at a location, replaced
//! in place, or archived, without violating the location's ceilings on unit
//! count and aggregate capacity. Everything here is deterministic decision
//! logic over two narrow ports: a location-metadata resolver and a warehouse
//! store. A location's current load is always recomputed from the active
//! warehouse set on each call, never cached.

pub mod location;
pub mod ports;
pub mod rejection;
pub mod usecases;
pub mod warehouse;

pub use location::Location;
pub use ports::{LocationResolver, StoreError, WarehouseStore};
pub use rejection::{Decision, Rejection};
pub use usecases::{ArchiveWarehouse, CreateWarehouse, ReplaceWarehouse};
pub use warehouse::Warehouse;
