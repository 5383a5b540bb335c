use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fulfilment_core::{BusinessUnitCode, Entity, LocationId};

/// A warehouse unit: the entity being validated.
///
/// `stock <= capacity` must hold for every active record; the validators
/// enforce it on the way in. Archival is permanent: once `archived_at` is
/// set, the record is excluded from every location aggregate and from active
/// lookups by business unit code, and is never un-archived or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub business_unit_code: BusinessUnitCode,
    pub location: LocationId,
    pub capacity: i32,
    pub stock: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub archived_at: Option<DateTime<Utc>>,
}

impl Warehouse {
    /// A candidate record as submitted by a caller: lifecycle timestamps
    /// unset. The store assigns `created_at` when the record is persisted.
    pub fn new(
        business_unit_code: impl Into<BusinessUnitCode>,
        location: impl Into<LocationId>,
        capacity: i32,
        stock: i32,
    ) -> Self {
        Self {
            business_unit_code: business_unit_code.into(),
            location: location.into(),
            capacity,
            stock,
            created_at: None,
            archived_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.archived_at.is_none()
    }
}

impl Entity for Warehouse {
    type Id = BusinessUnitCode;

    fn id(&self) -> &Self::Id {
        &self.business_unit_code
    }
}
