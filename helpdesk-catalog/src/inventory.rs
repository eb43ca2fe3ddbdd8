use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::product::{CatalogStore, Product};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    pub fn needs_attention(&self) -> bool {
        matches!(self, StockStatus::LowStock | StockStatus::OutOfStock)
    }
}

/// Stock counters for one product.
///
/// `status` is authored data carried verbatim from the fixture, not
/// recomputed from `stock` vs `reorder_level`; the two may diverge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub stock: u32,
    pub reserved: u32,
    pub reorder_level: u32,
    pub next_restock: NaiveDate,
    pub status: StockStatus,
}

impl InventoryRecord {
    /// Units free to sell. The dataset keeps `reserved <= stock`; the
    /// subtraction saturates rather than trusting that.
    pub fn available(&self) -> u32 {
        self.stock.saturating_sub(self.reserved)
    }
}

/// Read-only inventory table keyed by product id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryStore {
    records: BTreeMap<u32, InventoryRecord>,
}

impl InventoryStore {
    pub fn new(records: BTreeMap<u32, InventoryRecord>) -> Self {
        Self { records }
    }

    pub fn status(&self, product_id: u32) -> Option<&InventoryRecord> {
        self.records.get(&product_id)
    }

    /// Records whose authored status is low or out of stock, joined to the
    /// catalog by product id in ascending-id order. Ids with no matching
    /// catalog product are skipped.
    pub fn low_stock<'a>(
        &'a self,
        catalog: &'a CatalogStore,
    ) -> Vec<(&'a Product, &'a InventoryRecord)> {
        self.records
            .iter()
            .filter(|(_, record)| record.status.needs_attention())
            .filter_map(|(id, record)| catalog.product_by_id(*id).map(|p| (p, record)))
            .collect()
    }
}
