//! Recording port doubles for use-case tests.
//!
//! `StubStore` is programmed per test with the answers the engine will read
//! and records every mutation it is asked to perform, so tests can assert
//! both the decision and the absence of side effects on rejection paths.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

use fulfilment_core::{BusinessUnitCode, LocationId};

use crate::location::Location;
use crate::ports::{LocationResolver, StoreError, WarehouseStore};
use crate::warehouse::Warehouse;

/// Location resolver backed by a fixed table.
#[derive(Default)]
pub struct FixedLocations {
    table: HashMap<LocationId, Location>,
}

impl FixedLocations {
    pub fn new(locations: impl IntoIterator<Item = Location>) -> Self {
        Self {
            table: locations
                .into_iter()
                .map(|l| (l.identifier.clone(), l))
                .collect(),
        }
    }

    /// Resolves nothing.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl LocationResolver for FixedLocations {
    fn resolve(&self, identifier: &LocationId) -> Result<Option<Location>, StoreError> {
        Ok(self.table.get(identifier).cloned())
    }
}

/// Programmable, recording warehouse store double.
#[derive(Default)]
pub struct StubStore {
    active_by_code: Mutex<HashMap<BusinessUnitCode, Warehouse>>,
    active_by_location: Mutex<HashMap<LocationId, Vec<Warehouse>>>,
    created: Mutex<Vec<Warehouse>>,
    archived: Mutex<Vec<Warehouse>>,
}

impl StubStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Program the answer to `find_active_by_code` for this warehouse's code.
    pub fn stub_active(&self, warehouse: Warehouse) {
        self.active_by_code
            .lock()
            .unwrap()
            .insert(warehouse.business_unit_code.clone(), warehouse);
    }

    /// Program the answer to `active_by_location` for a location.
    pub fn stub_location(
        &self,
        location: impl Into<LocationId>,
        warehouses: impl IntoIterator<Item = Warehouse>,
    ) {
        self.active_by_location
            .lock()
            .unwrap()
            .insert(location.into(), warehouses.into_iter().collect());
    }

    pub fn created(&self) -> Vec<Warehouse> {
        self.created.lock().unwrap().clone()
    }

    pub fn archived(&self) -> Vec<Warehouse> {
        self.archived.lock().unwrap().clone()
    }

    /// Total number of mutating calls the engine issued.
    pub fn mutation_count(&self) -> usize {
        self.created.lock().unwrap().len() + self.archived.lock().unwrap().len()
    }
}

impl WarehouseStore for StubStore {
    fn all_active(&self) -> Result<Vec<Warehouse>, StoreError> {
        let mut all: Vec<Warehouse> = self
            .active_by_location
            .lock()
            .unwrap()
            .values()
            .flatten()
            .cloned()
            .collect();
        all.extend(self.created.lock().unwrap().iter().cloned());
        Ok(all)
    }

    fn active_by_location(&self, location: &LocationId) -> Result<Vec<Warehouse>, StoreError> {
        Ok(self
            .active_by_location
            .lock()
            .unwrap()
            .get(location)
            .cloned()
            .unwrap_or_default())
    }

    fn find_active_by_code(
        &self,
        code: &BusinessUnitCode,
    ) -> Result<Option<Warehouse>, StoreError> {
        Ok(self.active_by_code.lock().unwrap().get(code).cloned())
    }

    fn create_active(&self, mut warehouse: Warehouse) -> Result<Warehouse, StoreError> {
        warehouse.created_at = Some(Utc::now());
        warehouse.archived_at = None;
        self.created.lock().unwrap().push(warehouse.clone());
        Ok(warehouse)
    }

    fn archive(&self, warehouse: &Warehouse) -> Result<(), StoreError> {
        let mut archived = warehouse.clone();
        archived.archived_at = Some(Utc::now());
        self.archived.lock().unwrap().push(archived);
        Ok(())
    }
}
