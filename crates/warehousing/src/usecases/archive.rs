//! Archive flow: permanently retire an active warehouse.

use tracing::debug;

use crate::ports::{StoreError, WarehouseStore};
use crate::warehouse::Warehouse;

/// Retires an active warehouse.
///
/// Archival is permanent: the record drops out of every active lookup and
/// location aggregate and is never un-archived. The store stamps the archive
/// timestamp; handing in an already-archived record is a caller bug and is
/// not validated here.
pub struct ArchiveWarehouse<S> {
    store: S,
}

impl<S> ArchiveWarehouse<S>
where
    S: WarehouseStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn execute(&self, warehouse: &Warehouse) -> Result<(), StoreError> {
        self.store.archive(warehouse)?;
        debug!(code = %warehouse.business_unit_code, "warehouse archived");
        Ok(())
    }
}
