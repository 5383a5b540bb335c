use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use fulfilment_core::{BusinessUnitCode, LocationId};
use fulfilment_warehousing::{
    Location, LocationResolver, StoreError, Warehouse, WarehouseStore,
};

/// In-memory warehouse store.
///
/// Intended for tests/dev. Owns the clock for lifecycle timestamps, like the
/// production store: `create_active` stamps `created_at`, `archive` stamps
/// `archived_at`. Archived records stay in the vector but are filtered out
/// of every read.
#[derive(Debug, Default)]
pub struct InMemoryWarehouseStore {
    records: RwLock<Vec<Warehouse>>,
}

impl InMemoryWarehouseStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_poisoned() -> StoreError {
        StoreError::Backend("lock poisoned".to_string())
    }
}

impl WarehouseStore for InMemoryWarehouseStore {
    fn all_active(&self) -> Result<Vec<Warehouse>, StoreError> {
        let records = self.records.read().map_err(|_| Self::lock_poisoned())?;
        Ok(records.iter().filter(|w| w.is_active()).cloned().collect())
    }

    fn active_by_location(&self, location: &LocationId) -> Result<Vec<Warehouse>, StoreError> {
        let records = self.records.read().map_err(|_| Self::lock_poisoned())?;
        Ok(records
            .iter()
            .filter(|w| w.is_active() && &w.location == location)
            .cloned()
            .collect())
    }

    fn find_active_by_code(
        &self,
        code: &BusinessUnitCode,
    ) -> Result<Option<Warehouse>, StoreError> {
        let records = self.records.read().map_err(|_| Self::lock_poisoned())?;
        Ok(records
            .iter()
            .find(|w| w.is_active() && &w.business_unit_code == code)
            .cloned())
    }

    fn create_active(&self, mut warehouse: Warehouse) -> Result<Warehouse, StoreError> {
        warehouse.created_at = Some(Utc::now());
        warehouse.archived_at = None;

        let mut records = self.records.write().map_err(|_| Self::lock_poisoned())?;
        records.push(warehouse.clone());
        Ok(warehouse)
    }

    fn archive(&self, warehouse: &Warehouse) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| Self::lock_poisoned())?;
        if let Some(record) = records
            .iter_mut()
            .find(|w| w.is_active() && w.business_unit_code == warehouse.business_unit_code)
        {
            record.archived_at = Some(Utc::now());
        }
        Ok(())
    }
}

/// Location resolver backed by a fixed in-memory table.
///
/// Doubles as the static location gateway for deployments whose location
/// catalogue is configuration rather than data.
#[derive(Debug, Default)]
pub struct InMemoryLocationResolver {
    locations: RwLock<HashMap<LocationId, Location>>,
}

impl InMemoryLocationResolver {
    pub fn new(locations: impl IntoIterator<Item = Location>) -> Self {
        Self {
            locations: RwLock::new(
                locations
                    .into_iter()
                    .map(|l| (l.identifier.clone(), l))
                    .collect(),
            ),
        }
    }

    pub fn insert(&self, location: Location) -> Result<(), StoreError> {
        let mut locations = self
            .locations
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        locations.insert(location.identifier.clone(), location);
        Ok(())
    }
}

impl LocationResolver for InMemoryLocationResolver {
    fn resolve(&self, identifier: &LocationId) -> Result<Option<Location>, StoreError> {
        let locations = self
            .locations
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        Ok(locations.get(identifier).cloned())
    }
}
