//! Runs every support tool once against the embedded demo stores. This is
//! the stand-in for an agent runtime registering the adapters as callable
//! tools.

use anyhow::Result;
use helpdesk_catalog::fixture::{demo_catalog, demo_inventory};
use helpdesk_logistics::fixture::{demo_shipping, demo_tracking};
use helpdesk_tools::{CatalogTools, InventoryTools, ShippingTools};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "helpdesk_catalog=debug,helpdesk_logistics=debug,helpdesk_demo=info".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("starting helpdesk tool demo");

    let catalog = CatalogTools::new(demo_catalog());
    let inventory = InventoryTools::new(demo_catalog(), demo_inventory());
    let shipping = ShippingTools::new(demo_shipping(), demo_tracking());

    println!("{}", catalog.product_details("iPhone 15 Pro"));
    println!("{}", catalog.search_catalog("apple", None));
    println!("{}", catalog.categories());

    println!("{}", inventory.stock_level("MacBook"));
    println!("{}", inventory.restock_schedule("iPad Air"));
    println!("{}", inventory.low_stock_report());

    println!("{}", shipping.estimate("94103", "expedited"));
    println!("{}", shipping.options());
    println!("{}", shipping.track("trk987654321"));
    println!("{}", shipping.free_shipping(2_000));

    // The same reports double as structured tool results.
    let structured = serde_json::to_string_pretty(&inventory.stock_level("Sony"))?;
    println!("{structured}");

    tracing::info!("demo complete");
    Ok(())
}
