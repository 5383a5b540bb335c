//! End-to-end flows: use cases wired to the in-memory adapters.

use std::sync::Arc;

use fulfilment_core::{BusinessUnitCode, LocationId};
use fulfilment_warehousing::{
    ArchiveWarehouse, CreateWarehouse, Location, ReplaceWarehouse, Warehouse, WarehouseStore,
};

use crate::store::in_memory::{InMemoryLocationResolver, InMemoryWarehouseStore};

fn resolver() -> Arc<InMemoryLocationResolver> {
    Arc::new(InMemoryLocationResolver::new([
        Location::new("AMSTERDAM-001", 3, 350),
        Location::new("ROTTERDAM-001", 2, 200),
    ]))
}

#[test]
fn created_warehouse_round_trips_through_an_active_lookup() {
    let store = Arc::new(InMemoryWarehouseStore::new());
    let create = CreateWarehouse::new(store.clone(), resolver());

    let accepted = create
        .execute(Warehouse::new("MWH.100", "AMSTERDAM-001", 120, 30))
        .unwrap()
        .expect("creation should be accepted");

    let found = store
        .find_active_by_code(&BusinessUnitCode::from("MWH.100"))
        .unwrap()
        .expect("accepted warehouse should be findable");

    assert_eq!(found, accepted);
    assert!(found.archived_at.is_none());
    assert_eq!(found.capacity, 120);
    assert_eq!(found.stock, 30);
    assert_eq!(found.location, LocationId::from("AMSTERDAM-001"));
}

#[test]
fn creation_is_validated_against_what_is_actually_stored() {
    let store = Arc::new(InMemoryWarehouseStore::new());
    let create = CreateWarehouse::new(store.clone(), resolver());

    // 150 + 150 fills Amsterdam's 350 ceiling up to 50 left.
    for code in ["MWH.101", "MWH.102"] {
        create
            .execute(Warehouse::new(code, "AMSTERDAM-001", 150, 0))
            .unwrap()
            .expect("seed creation should be accepted");
    }

    let rejected = create
        .execute(Warehouse::new("MWH.103", "AMSTERDAM-001", 60, 0))
        .unwrap()
        .unwrap_err();
    assert_eq!(
        rejected.to_string(),
        "Location AMSTERDAM-001 has reached max capacity"
    );

    create
        .execute(Warehouse::new("MWH.103", "AMSTERDAM-001", 50, 0))
        .unwrap()
        .expect("a 50-capacity unit still fits");

    // Third unit landed, so the headcount ceiling now trips.
    let rejected = create
        .execute(Warehouse::new("MWH.104", "AMSTERDAM-001", 0, 0))
        .unwrap()
        .unwrap_err();
    assert_eq!(
        rejected.to_string(),
        "Location AMSTERDAM-001 has reached max number of warehouses"
    );
}

#[test]
fn replacement_archives_the_old_record_and_activates_the_new_one() {
    let store = Arc::new(InMemoryWarehouseStore::new());
    let create = CreateWarehouse::new(store.clone(), resolver());
    let replace = ReplaceWarehouse::new(store.clone(), resolver());

    create
        .execute(Warehouse::new("MWH.200", "AMSTERDAM-001", 100, 40))
        .unwrap()
        .expect("creation should be accepted");

    let replaced = replace
        .execute(Warehouse::new("MWH.200", "AMSTERDAM-001", 150, 40))
        .unwrap()
        .expect("same-location replacement should be accepted");

    assert_eq!(replaced.capacity, 150);
    assert_eq!(replaced.stock, 40);

    // Exactly one active record remains under the code, the new one.
    let active = store
        .find_active_by_code(&BusinessUnitCode::from("MWH.200"))
        .unwrap()
        .expect("replacement should be active");
    assert_eq!(active.capacity, 150);
    assert_eq!(store.all_active().unwrap().len(), 1);
}

#[test]
fn replacement_can_move_a_warehouse_across_locations() {
    let store = Arc::new(InMemoryWarehouseStore::new());
    let create = CreateWarehouse::new(store.clone(), resolver());
    let replace = ReplaceWarehouse::new(store.clone(), resolver());

    create
        .execute(Warehouse::new("MWH.300", "ROTTERDAM-001", 80, 0))
        .unwrap()
        .expect("creation should be accepted");

    replace
        .execute(Warehouse::new("MWH.300", "AMSTERDAM-001", 80, 0))
        .unwrap()
        .expect("cross-location move should be accepted");

    let moved = store
        .find_active_by_code(&BusinessUnitCode::from("MWH.300"))
        .unwrap()
        .expect("moved warehouse should be active");
    assert_eq!(moved.location, LocationId::from("AMSTERDAM-001"));

    assert!(
        store
            .active_by_location(&LocationId::from("ROTTERDAM-001"))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn rejected_replacement_leaves_the_old_record_untouched() {
    let store = Arc::new(InMemoryWarehouseStore::new());
    let create = CreateWarehouse::new(store.clone(), resolver());
    let replace = ReplaceWarehouse::new(store.clone(), resolver());

    create
        .execute(Warehouse::new("MWH.400", "AMSTERDAM-001", 100, 25))
        .unwrap()
        .expect("creation should be accepted");
    let before = store.all_active().unwrap();

    let rejected = replace
        .execute(Warehouse::new("MWH.400", "AMSTERDAM-001", 100, 20))
        .unwrap()
        .unwrap_err();
    assert_eq!(
        rejected.to_string(),
        "Stock match error old warehouse stock 25 but new warehouse stock 20"
    );

    assert_eq!(store.all_active().unwrap(), before);
}

#[test]
fn archived_warehouses_free_their_location_slot() {
    let store = Arc::new(InMemoryWarehouseStore::new());
    let create = CreateWarehouse::new(store.clone(), resolver());
    let archive = ArchiveWarehouse::new(store.clone());

    let first = create
        .execute(Warehouse::new("MWH.500", "ROTTERDAM-001", 100, 0))
        .unwrap()
        .expect("creation should be accepted");
    create
        .execute(Warehouse::new("MWH.501", "ROTTERDAM-001", 100, 0))
        .unwrap()
        .expect("creation should be accepted");

    // Rotterdam hosts at most two units.
    let rejected = create
        .execute(Warehouse::new("MWH.502", "ROTTERDAM-001", 0, 0))
        .unwrap()
        .unwrap_err();
    assert_eq!(
        rejected.to_string(),
        "Location ROTTERDAM-001 has reached max number of warehouses"
    );

    archive.execute(&first).unwrap();

    create
        .execute(Warehouse::new("MWH.502", "ROTTERDAM-001", 100, 0))
        .unwrap()
        .expect("the archived unit's slot should be free again");
}
