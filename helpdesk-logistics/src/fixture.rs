//! Embedded demo shipping and tracking data, parsed once on first access.

use std::sync::OnceLock;

use crate::shipping::ShippingStore;
use crate::tracking::TrackingStore;

static SHIPPING: OnceLock<ShippingStore> = OnceLock::new();
static TRACKING: OnceLock<TrackingStore> = OnceLock::new();

pub fn demo_shipping() -> &'static ShippingStore {
    SHIPPING.get_or_init(|| {
        serde_json::from_str(include_str!("../data/shipping.json"))
            .expect("embedded shipping fixture is valid JSON")
    })
}

pub fn demo_tracking() -> &'static TrackingStore {
    TRACKING.get_or_init(|| {
        serde_json::from_str(include_str!("../data/tracking.json"))
            .expect("embedded tracking fixture is valid JSON")
    })
}
