//! Business rejections produced by the validators.

use thiserror::Error;

use fulfilment_core::LocationId;

use crate::warehouse::Warehouse;

/// Outcome of a validation pass: the accepted warehouse or the reason it
/// was turned down.
pub type Decision = Result<Warehouse, Rejection>;

/// Why a creation or replacement was refused.
///
/// The `Display` text of each variant is a complete sentence surfaced to
/// callers verbatim; downstream layers match on the exact wording.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Cannot create a warehouse with stock greater than capacity")]
    StockExceedsCapacity,

    #[error("Location not found")]
    LocationNotFound,

    #[error("Warehouse already exists")]
    WarehouseAlreadyExists,

    #[error("Warehouse to replace not found")]
    WarehouseToReplaceNotFound,

    /// Replacement preserves stock exactly; any numeric difference is refused.
    #[error("Stock match error old warehouse stock {old} but new warehouse stock {new}")]
    StockMismatch { old: i32, new: i32 },

    #[error("Location {location} has reached max number of warehouses")]
    MaxWarehousesReached { location: LocationId },

    #[error("Location {location} has reached max capacity")]
    MaxCapacityReached { location: LocationId },

    /// The location's post-change capacity no longer covers the stock its
    /// active warehouses already hold.
    #[error(
        "Cannot accommodate the current stock level {stock} because the new capacity for location {location} is {capacity}"
    )]
    CannotAccommodateStock {
        stock: i32,
        location: LocationId,
        capacity: i32,
    },
}
