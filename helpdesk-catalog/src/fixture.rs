//! Embedded demo dataset standing in for a real product backend.
//!
//! The stores are parsed once on first access and are read-only for the
//! process lifetime.

use std::sync::OnceLock;

use crate::inventory::InventoryStore;
use crate::product::CatalogStore;

static CATALOG: OnceLock<CatalogStore> = OnceLock::new();
static INVENTORY: OnceLock<InventoryStore> = OnceLock::new();

pub fn demo_catalog() -> &'static CatalogStore {
    CATALOG.get_or_init(|| {
        serde_json::from_str(include_str!("../data/catalog.json"))
            .expect("embedded catalog fixture is valid JSON")
    })
}

pub fn demo_inventory() -> &'static InventoryStore {
    INVENTORY.get_or_init(|| {
        serde_json::from_str(include_str!("../data/inventory.json"))
            .expect("embedded inventory fixture is valid JSON")
    })
}
