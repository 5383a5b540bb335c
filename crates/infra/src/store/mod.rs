//! Warehouse store and location resolver adapters.

pub mod in_memory;
pub mod postgres;
