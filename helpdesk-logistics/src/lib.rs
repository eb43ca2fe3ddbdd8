pub mod fixture;
pub mod shipping;
pub mod tracking;

pub use shipping::{
    free_shipping_eligibility, FreeShippingEligibility, ParseMethodError, ShippingMethod,
    ShippingOption, ShippingStore, FREE_SHIPPING_THRESHOLD_CENTS,
};
pub use tracking::{TrackingRecord, TrackingStatus, TrackingStore};
