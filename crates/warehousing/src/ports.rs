//! Ports consumed by the allocation engine.
//!
//! Adapters live in `fulfilment-infra`; the engine only sees these traits.

use std::sync::Arc;

use thiserror::Error;

use fulfilment_core::{BusinessUnitCode, LocationId};

use crate::location::Location;
use crate::warehouse::Warehouse;

/// Infrastructure fault raised by a port adapter.
///
/// These are never turned into business rejections: a store that cannot be
/// reached is a fatal condition for the current call, not a validation
/// outcome. The engine propagates them untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),

    #[error("no async runtime available for a blocking store call")]
    NoRuntime,
}

/// Read access to location metadata.
pub trait LocationResolver: Send + Sync {
    /// Resolve a location by its identifier. `None` means the identifier is
    /// unknown, which the validators treat as a rejection of its own.
    fn resolve(&self, identifier: &LocationId) -> Result<Option<Location>, StoreError>;
}

/// Read/write access to warehouse records.
///
/// "Active" always means no archive timestamp; archived records never show
/// up in reads through this port. The engine treats these operations as
/// synchronous and does not provide cross-call atomicity: serializing
/// conflicting read-then-write sequences is the adapter's concern.
pub trait WarehouseStore: Send + Sync {
    /// All active warehouses across every location.
    fn all_active(&self) -> Result<Vec<Warehouse>, StoreError>;

    /// Active warehouses currently hosted at the given location. Order is
    /// irrelevant; the engine only aggregates over the set.
    fn active_by_location(&self, location: &LocationId) -> Result<Vec<Warehouse>, StoreError>;

    /// The active warehouse with the given business unit code, if any.
    fn find_active_by_code(
        &self,
        code: &BusinessUnitCode,
    ) -> Result<Option<Warehouse>, StoreError>;

    /// Persist a new active warehouse and return it.
    ///
    /// The adapter stamps `created_at` and clears `archived_at`; the engine
    /// never assigns identifiers beyond the caller-supplied business unit
    /// code.
    fn create_active(&self, warehouse: Warehouse) -> Result<Warehouse, StoreError>;

    /// Mark the given active warehouse as archived now, and persist it.
    ///
    /// Calling this on an already-archived record is a caller bug and is not
    /// validated here.
    fn archive(&self, warehouse: &Warehouse) -> Result<(), StoreError>;
}

impl<R> LocationResolver for Arc<R>
where
    R: LocationResolver + ?Sized,
{
    fn resolve(&self, identifier: &LocationId) -> Result<Option<Location>, StoreError> {
        (**self).resolve(identifier)
    }
}

impl<S> WarehouseStore for Arc<S>
where
    S: WarehouseStore + ?Sized,
{
    fn all_active(&self) -> Result<Vec<Warehouse>, StoreError> {
        (**self).all_active()
    }

    fn active_by_location(&self, location: &LocationId) -> Result<Vec<Warehouse>, StoreError> {
        (**self).active_by_location(location)
    }

    fn find_active_by_code(
        &self,
        code: &BusinessUnitCode,
    ) -> Result<Option<Warehouse>, StoreError> {
        (**self).find_active_by_code(code)
    }

    fn create_active(&self, warehouse: Warehouse) -> Result<Warehouse, StoreError> {
        (**self).create_active(warehouse)
    }

    fn archive(&self, warehouse: &Warehouse) -> Result<(), StoreError> {
        (**self).archive(warehouse)
    }
}
