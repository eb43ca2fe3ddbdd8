pub mod fixture;
pub mod inventory;
pub mod product;

pub use inventory::{InventoryRecord, InventoryStore, StockStatus};
pub use product::{CatalogStore, Product, ProductGroup};
