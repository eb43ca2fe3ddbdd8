use std::fmt;

use chrono::NaiveDate;
use helpdesk_catalog::inventory::{InventoryStore, StockStatus};
use helpdesk_catalog::product::CatalogStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum StockReport {
    Found {
        product_name: String,
        stock: u32,
        reserved: u32,
        available: u32,
        status: StockStatus,
        reorder_level: u32,
        next_restock: NaiveDate,
    },
    NoInventoryData {
        product_name: String,
    },
    ProductNotFound {
        query: String,
    },
}

impl fmt::Display for StockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockReport::Found {
                product_name,
                stock,
                reserved,
                available,
                status,
                reorder_level,
                next_restock,
            } => {
                writeln!(f, "**{product_name} - Stock Status**")?;
                writeln!(f, "Current Stock: {stock} units")?;
                writeln!(f, "Reserved: {reserved} units")?;
                writeln!(f, "Available: {available} units")?;
                writeln!(f, "Status: {}", status.label())?;
                writeln!(f, "Reorder Level: {reorder_level} units")?;
                writeln!(f, "Next Restock: {next_restock}")
            }
            StockReport::NoInventoryData { product_name } => {
                writeln!(f, "No inventory data found for {product_name}.")
            }
            StockReport::ProductNotFound { query } => {
                writeln!(f, "Product '{query}' not found in catalog.")
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RestockReport {
    Found {
        product_name: String,
        next_restock: NaiveDate,
        reorder_level: u32,
        stock: u32,
    },
    NoInventoryData {
        product_name: String,
    },
    ProductNotFound {
        query: String,
    },
}

impl fmt::Display for RestockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestockReport::Found {
                product_name,
                next_restock,
                reorder_level,
                stock,
            } => {
                writeln!(f, "**{product_name} - Restock Schedule**")?;
                writeln!(f, "Next Restock: {next_restock}")?;
                writeln!(f, "Reorder Level: {reorder_level} units")?;
                writeln!(f, "Current Stock: {stock} units")?;
                writeln!(
                    f,
                    "Will reorder when stock drops below {reorder_level} units."
                )
            }
            RestockReport::NoInventoryData { product_name } => {
                writeln!(f, "No restock information available for {product_name}.")
            }
            RestockReport::ProductNotFound { query } => {
                writeln!(f, "Product '{query}' not found in catalog.")
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LowStockItem {
    pub product_name: String,
    pub stock: u32,
    pub status: StockStatus,
    pub next_restock: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct LowStockReport {
    pub items: Vec<LowStockItem>,
}

impl fmt::Display for LowStockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return writeln!(f, "All items have sufficient stock levels.");
        }
        writeln!(f, "Low stock alert:")?;
        for item in &self.items {
            writeln!(
                f,
                "  - {}: {} units ({}) - restock {}",
                item.product_name,
                item.stock,
                item.status.label(),
                item.next_restock
            )?;
        }
        Ok(())
    }
}

/// Inventory tools: stock level, restock schedule, low-stock alerting.
///
/// Product arguments are names, not ids, so every method starts with a
/// catalog lookup and distinguishes "unknown product" from "known product
/// without inventory data".
pub struct InventoryTools<'a> {
    catalog: &'a CatalogStore,
    inventory: &'a InventoryStore,
}

impl<'a> InventoryTools<'a> {
    pub fn new(catalog: &'a CatalogStore, inventory: &'a InventoryStore) -> Self {
        Self { catalog, inventory }
    }

    pub fn stock_level(&self, product_name: &str) -> StockReport {
        let Some(product) = self.catalog.find_product(product_name) else {
            return StockReport::ProductNotFound {
                query: product_name.to_string(),
            };
        };
        match self.inventory.status(product.id) {
            Some(record) => StockReport::Found {
                product_name: product.name.clone(),
                stock: record.stock,
                reserved: record.reserved,
                available: record.available(),
                status: record.status,
                reorder_level: record.reorder_level,
                next_restock: record.next_restock,
            },
            None => StockReport::NoInventoryData {
                product_name: product.name.clone(),
            },
        }
    }

    pub fn restock_schedule(&self, product_name: &str) -> RestockReport {
        let Some(product) = self.catalog.find_product(product_name) else {
            return RestockReport::ProductNotFound {
                query: product_name.to_string(),
            };
        };
        match self.inventory.status(product.id) {
            Some(record) => RestockReport::Found {
                product_name: product.name.clone(),
                next_restock: record.next_restock,
                reorder_level: record.reorder_level,
                stock: record.stock,
            },
            None => RestockReport::NoInventoryData {
                product_name: product.name.clone(),
            },
        }
    }

    pub fn low_stock_report(&self) -> LowStockReport {
        LowStockReport {
            items: self
                .inventory
                .low_stock(self.catalog)
                .into_iter()
                .map(|(product, record)| LowStockItem {
                    product_name: product.name.clone(),
                    stock: record.stock,
                    status: record.status,
                    next_restock: record.next_restock,
                })
                .collect(),
        }
    }
}
