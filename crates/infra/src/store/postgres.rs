//! Postgres-backed adapters for the warehouse store and location resolver.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE warehouse (
//!     id                  BIGSERIAL PRIMARY KEY,
//!     business_unit_code  TEXT        NOT NULL,
//!     location            TEXT        NOT NULL,
//!     capacity            INTEGER     NOT NULL,
//!     stock               INTEGER     NOT NULL,
//!     created_at          TIMESTAMPTZ NOT NULL,
//!     archived_at         TIMESTAMPTZ
//! );
//! CREATE TABLE location (
//!     identifier               TEXT PRIMARY KEY,
//!     max_number_of_warehouses INTEGER NOT NULL,
//!     max_capacity             INTEGER NOT NULL
//! );
//! ```
//!
//! The ports are synchronous, so every call hops onto the ambient tokio
//! runtime with `Handle::block_on`. A missing runtime surfaces as
//! `StoreError::NoRuntime` rather than a silent no-op: swallowing the fault
//! here would masquerade as a "not found" business rejection downstream.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::debug;

use fulfilment_core::{BusinessUnitCode, LocationId};
use fulfilment_warehousing::{
    Location, LocationResolver, StoreError, Warehouse, WarehouseStore,
};

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn runtime_handle() -> Result<tokio::runtime::Handle, StoreError> {
    tokio::runtime::Handle::try_current().map_err(|_| StoreError::NoRuntime)
}

fn row_to_warehouse(row: &PgRow) -> Result<Warehouse, StoreError> {
    Ok(Warehouse {
        business_unit_code: BusinessUnitCode::new(
            row.try_get::<String, _>("business_unit_code").map_err(backend)?,
        ),
        location: LocationId::new(row.try_get::<String, _>("location").map_err(backend)?),
        capacity: row.try_get("capacity").map_err(backend)?,
        stock: row.try_get("stock").map_err(backend)?,
        created_at: row
            .try_get::<Option<DateTime<Utc>>, _>("created_at")
            .map_err(backend)?,
        archived_at: row
            .try_get::<Option<DateTime<Utc>>, _>("archived_at")
            .map_err(backend)?,
    })
}

const WAREHOUSE_COLUMNS: &str =
    "business_unit_code, location, capacity, stock, created_at, archived_at";

/// Postgres-backed warehouse store.
///
/// Active-only filtering (`archived_at IS NULL`) is applied in SQL on every
/// read; archived rows are never loaded. The adapter owns the lifecycle
/// clock via `NOW()`.
pub struct PostgresWarehouseStore {
    pool: Arc<PgPool>,
}

impl PostgresWarehouseStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

impl WarehouseStore for PostgresWarehouseStore {
    fn all_active(&self) -> Result<Vec<Warehouse>, StoreError> {
        let handle = runtime_handle()?;
        let pool = self.pool.clone();

        handle.block_on(async move {
            let rows = sqlx::query(&format!(
                "SELECT {WAREHOUSE_COLUMNS} FROM warehouse WHERE archived_at IS NULL"
            ))
            .fetch_all(&*pool)
            .await
            .map_err(backend)?;

            rows.iter().map(row_to_warehouse).collect()
        })
    }

    fn active_by_location(&self, location: &LocationId) -> Result<Vec<Warehouse>, StoreError> {
        let handle = runtime_handle()?;
        let pool = self.pool.clone();
        let location = location.as_str().to_string();

        handle.block_on(async move {
            let rows = sqlx::query(&format!(
                "SELECT {WAREHOUSE_COLUMNS} FROM warehouse \
                 WHERE location = $1 AND archived_at IS NULL"
            ))
            .bind(&location)
            .fetch_all(&*pool)
            .await
            .map_err(backend)?;

            rows.iter().map(row_to_warehouse).collect()
        })
    }

    fn find_active_by_code(
        &self,
        code: &BusinessUnitCode,
    ) -> Result<Option<Warehouse>, StoreError> {
        let handle = runtime_handle()?;
        let pool = self.pool.clone();
        let code = code.as_str().to_string();

        handle.block_on(async move {
            let row = sqlx::query(&format!(
                "SELECT {WAREHOUSE_COLUMNS} FROM warehouse \
                 WHERE business_unit_code = $1 AND archived_at IS NULL"
            ))
            .bind(&code)
            .fetch_optional(&*pool)
            .await
            .map_err(backend)?;

            row.as_ref().map(row_to_warehouse).transpose()
        })
    }

    fn create_active(&self, mut warehouse: Warehouse) -> Result<Warehouse, StoreError> {
        let handle = runtime_handle()?;
        let pool = self.pool.clone();

        warehouse.archived_at = None;
        let code = warehouse.business_unit_code.as_str().to_string();
        let location = warehouse.location.as_str().to_string();
        let (capacity, stock) = (warehouse.capacity, warehouse.stock);

        let created_at = handle.block_on(async move {
            let row = sqlx::query(
                "INSERT INTO warehouse \
                 (business_unit_code, location, capacity, stock, created_at, archived_at) \
                 VALUES ($1, $2, $3, $4, NOW(), NULL) \
                 RETURNING created_at",
            )
            .bind(&code)
            .bind(&location)
            .bind(capacity)
            .bind(stock)
            .fetch_one(&*pool)
            .await
            .map_err(backend)?;

            row.try_get::<DateTime<Utc>, _>("created_at").map_err(backend)
        })?;

        warehouse.created_at = Some(created_at);
        debug!(code = %warehouse.business_unit_code, "warehouse row inserted");
        Ok(warehouse)
    }

    fn archive(&self, warehouse: &Warehouse) -> Result<(), StoreError> {
        let handle = runtime_handle()?;
        let pool = self.pool.clone();
        let code = warehouse.business_unit_code.as_str().to_string();

        handle.block_on(async move {
            sqlx::query(
                "UPDATE warehouse SET archived_at = NOW() \
                 WHERE business_unit_code = $1 AND archived_at IS NULL",
            )
            .bind(&code)
            .execute(&*pool)
            .await
            .map_err(backend)?;

            Ok(())
        })
    }
}

/// Postgres-backed location resolver.
pub struct PostgresLocationResolver {
    pool: Arc<PgPool>,
}

impl PostgresLocationResolver {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

impl LocationResolver for PostgresLocationResolver {
    fn resolve(&self, identifier: &LocationId) -> Result<Option<Location>, StoreError> {
        let handle = runtime_handle()?;
        let pool = self.pool.clone();
        let identifier = identifier.as_str().to_string();

        handle.block_on(async move {
            let row = sqlx::query(
                "SELECT identifier, max_number_of_warehouses, max_capacity \
                 FROM location WHERE identifier = $1",
            )
            .bind(&identifier)
            .fetch_optional(&*pool)
            .await
            .map_err(backend)?;

            row.map(|row| {
                Ok(Location {
                    identifier: LocationId::new(
                        row.try_get::<String, _>("identifier").map_err(backend)?,
                    ),
                    max_number_of_warehouses: row
                        .try_get("max_number_of_warehouses")
                        .map_err(backend)?,
                    max_capacity: row.try_get("max_capacity").map_err(backend)?,
                })
            })
            .transpose()
        })
    }
}
