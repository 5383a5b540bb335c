//! Replacement flow: supersede an active warehouse with a new definition.

use tracing::debug;

use crate::ports::{LocationResolver, StoreError, WarehouseStore};
use crate::rejection::{Decision, Rejection};
use crate::warehouse::Warehouse;

/// Decides whether the active warehouse with the candidate's business unit
/// code may be superseded by the candidate, possibly changing location
/// and/or capacity, and commits the swap when it may.
///
/// Replacement preserves stock exactly. On acceptance the old record is
/// archived and the new one created, in that order; the two port calls are
/// one logical unit of work and the adapter is responsible for committing
/// them together. As with creation, the read-then-write sequence carries no
/// isolation boundary of its own.
pub struct ReplaceWarehouse<S, R> {
    store: S,
    locations: R,
}

impl<S, R> ReplaceWarehouse<S, R>
where
    S: WarehouseStore,
    R: LocationResolver,
{
    pub fn new(store: S, locations: R) -> Self {
        Self { store, locations }
    }

    /// Validate `candidate` against the warehouse it replaces and, if
    /// accepted, archive the old record and persist the new one.
    pub fn execute(&self, candidate: Warehouse) -> Result<Decision, StoreError> {
        if candidate.stock > candidate.capacity {
            return Self::rejected(Rejection::StockExceedsCapacity);
        }

        let Some(location) = self.locations.resolve(&candidate.location)? else {
            return Self::rejected(Rejection::LocationNotFound);
        };

        let Some(old) = self
            .store
            .find_active_by_code(&candidate.business_unit_code)?
        else {
            return Self::rejected(Rejection::WarehouseToReplaceNotFound);
        };

        if old.stock != candidate.stock {
            return Self::rejected(Rejection::StockMismatch {
                old: old.stock,
                new: candidate.stock,
            });
        }

        let at_new_location = self.store.active_by_location(&candidate.location)?;

        let same_location = candidate.location == old.location;
        // Moving out takes the old unit's capacity with it, so only a
        // same-location swap nets the two capacities off against each other.
        let delta_capacity = if same_location {
            candidate.capacity - old.capacity
        } else {
            candidate.capacity
        };

        let capacity_at_new_location: i32 = at_new_location.iter().map(|w| w.capacity).sum();
        if location.max_capacity - delta_capacity < capacity_at_new_location {
            return Self::rejected(Rejection::MaxCapacityReached {
                location: location.identifier,
            });
        }

        if !same_location {
            // One unit leaves the old location and one enters the new, so the
            // headcount check only matters when the locations differ.
            if at_new_location.len() as i32 >= location.max_number_of_warehouses {
                return Self::rejected(Rejection::MaxWarehousesReached {
                    location: location.identifier,
                });
            }

            // Pulling the old unit out must still leave its location with
            // enough capacity for the stock the warehouses there hold. This
            // models the moment the unit is gone but the move has not landed.
            let at_old_location = self.store.active_by_location(&old.location)?;
            let stock_at_old_location: i32 = at_old_location.iter().map(|w| w.stock).sum();
            let capacity_at_old_location: i32 =
                at_old_location.iter().map(|w| w.capacity).sum();
            if capacity_at_old_location - old.capacity < stock_at_old_location {
                return Self::rejected(Rejection::CannotAccommodateStock {
                    stock: stock_at_old_location,
                    location: location.identifier,
                    capacity: capacity_at_old_location - old.capacity,
                });
            }
        } else {
            // Swapping capacities in place: the location must still cover the
            // stock everyone there already holds, the old unit's included.
            let at_location = self.store.active_by_location(&old.location)?;
            let stock_at_location: i32 = at_location.iter().map(|w| w.stock).sum();
            let capacity_at_location: i32 = at_location.iter().map(|w| w.capacity).sum();
            let swapped_capacity = capacity_at_location + candidate.capacity - old.capacity;
            if swapped_capacity < stock_at_location {
                return Self::rejected(Rejection::CannotAccommodateStock {
                    stock: stock_at_location,
                    location: location.identifier,
                    capacity: swapped_capacity,
                });
            }
        }

        self.store.archive(&old)?;
        let created = self.store.create_active(candidate)?;
        debug!(
            code = %created.business_unit_code,
            from = %old.location,
            to = %created.location,
            "warehouse replaced"
        );
        Ok(Ok(created))
    }

    fn rejected(rejection: Rejection) -> Result<Decision, StoreError> {
        debug!(%rejection, "warehouse replacement rejected");
        Ok(Err(rejection))
    }
}
