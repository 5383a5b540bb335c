//! Creation flow: admit a brand-new warehouse to a location.

use tracing::debug;

use crate::ports::{LocationResolver, StoreError, WarehouseStore};
use crate::rejection::{Decision, Rejection};
use crate::warehouse::Warehouse;

/// Decides whether a brand-new warehouse may be admitted to a location, and
/// persists it when it may.
///
/// Checks run in a fixed order and short-circuit on the first failure; every
/// step before the final persist is a pure read. There is no isolation
/// boundary around the read-then-write sequence: two concurrent creations at
/// the same near-full location can both pass. Serializing conflicting calls
/// is the store's concern, not the engine's.
pub struct CreateWarehouse<S, R> {
    store: S,
    locations: R,
}

impl<S, R> CreateWarehouse<S, R>
where
    S: WarehouseStore,
    R: LocationResolver,
{
    pub fn new(store: S, locations: R) -> Self {
        Self { store, locations }
    }

    /// Validate `candidate` and, if accepted, persist it as a new active
    /// warehouse.
    ///
    /// The outer error is an infrastructure fault from a port; the inner
    /// [`Decision`] is the business outcome.
    pub fn execute(&self, candidate: Warehouse) -> Result<Decision, StoreError> {
        if candidate.stock > candidate.capacity {
            return Self::rejected(Rejection::StockExceedsCapacity);
        }

        let Some(location) = self.locations.resolve(&candidate.location)? else {
            return Self::rejected(Rejection::LocationNotFound);
        };

        if self
            .store
            .find_active_by_code(&candidate.business_unit_code)?
            .is_some()
        {
            return Self::rejected(Rejection::WarehouseAlreadyExists);
        }

        let hosted = self.store.active_by_location(&candidate.location)?;
        if hosted.len() as i32 >= location.max_number_of_warehouses {
            return Self::rejected(Rejection::MaxWarehousesReached {
                location: location.identifier,
            });
        }

        let sum_capacity: i32 = hosted.iter().map(|w| w.capacity).sum();
        if location.max_capacity - candidate.capacity < sum_capacity {
            return Self::rejected(Rejection::MaxCapacityReached {
                location: location.identifier,
            });
        }

        let created = self.store.create_active(candidate)?;
        debug!(code = %created.business_unit_code, location = %created.location, "warehouse created");
        Ok(Ok(created))
    }

    fn rejected(rejection: Rejection) -> Result<Decision, StoreError> {
        debug!(%rejection, "warehouse creation rejected");
        Ok(Err(rejection))
    }
}
