use serde::{Deserialize, Serialize};

use fulfilment_core::{LocationId, ValueObject};

/// Immutable metadata of a named location: ceilings on how many warehouse
/// units it may host and on their aggregate capacity.
///
/// Resolved externally per validation call and never cached by the engine,
/// since ceilings can change between calls. A location's *current* load is
/// derived from the active warehouse set, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub identifier: LocationId,
    pub max_number_of_warehouses: i32,
    pub max_capacity: i32,
}

impl Location {
    pub fn new(
        identifier: impl Into<LocationId>,
        max_number_of_warehouses: i32,
        max_capacity: i32,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            max_number_of_warehouses,
            max_capacity,
        }
    }
}

impl ValueObject for Location {}
