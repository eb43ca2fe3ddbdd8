//! Tool adapters over the read-only demo stores.
//!
//! Each adapter method takes one or two scalar arguments, composes store
//! lookups, and returns a report that is both `Serialize` (structured
//! result) and `Display` (deterministic text). Misses render alternatives
//! rather than erroring, so an external tool-calling runtime always gets a
//! value back.

pub mod catalog;
pub mod inventory;
pub mod money;
pub mod shipping;

pub use catalog::CatalogTools;
pub use inventory::InventoryTools;
pub use shipping::ShippingTools;
