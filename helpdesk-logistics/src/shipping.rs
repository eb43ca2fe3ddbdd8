use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fixed order-total threshold for free shipping, in cents.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i32 = 3_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    Standard,
    Expedited,
    Overnight,
    Free,
}

impl ShippingMethod {
    pub fn title(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard",
            ShippingMethod::Expedited => "Expedited",
            ShippingMethod::Overnight => "Overnight",
            ShippingMethod::Free => "Free",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown shipping method: {0}")]
pub struct ParseMethodError(pub String);

impl FromStr for ShippingMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(ShippingMethod::Standard),
            "expedited" => Ok(ShippingMethod::Expedited),
            "overnight" => Ok(ShippingMethod::Overnight),
            "free" => Ok(ShippingMethod::Free),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingOption {
    pub method: ShippingMethod,
    pub cost_cents: i32,
    pub days: u32,
    pub carrier: String,
    pub description: String,
}

impl ShippingOption {
    /// Expected delivery for a shipment leaving on `from`. Plain calendar
    /// addition; the rendered copy says business days but the arithmetic
    /// does not skip weekends.
    pub fn estimate_delivery(&self, from: NaiveDate) -> NaiveDate {
        from + Duration::days(i64::from(self.days))
    }
}

/// Read-only shipping-option table in authored order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingStore {
    options: Vec<ShippingOption>,
}

impl ShippingStore {
    pub fn new(options: Vec<ShippingOption>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &[ShippingOption] {
        &self.options
    }

    /// Case-insensitive method lookup. An unrecognized method name reports
    /// as a miss, same as a known-but-absent one.
    pub fn option(&self, method: &str) -> Option<&ShippingOption> {
        let parsed = ShippingMethod::from_str(method).ok()?;
        let hit = self.options.iter().find(|o| o.method == parsed);
        tracing::debug!(method, found = hit.is_some(), "shipping option lookup");
        hit
    }

    /// Display names of every offered method, in authored order.
    pub fn method_titles(&self) -> Vec<&'static str> {
        self.options.iter().map(|o| o.method.title()).collect()
    }
}

/// Outcome of the free-shipping check against the fixed threshold.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FreeShippingEligibility {
    pub order_total_cents: i32,
    pub eligible: bool,
    /// Cents still needed to qualify; zero when eligible.
    pub short_by_cents: i32,
}

pub fn free_shipping_eligibility(order_total_cents: i32) -> FreeShippingEligibility {
    let eligible = order_total_cents >= FREE_SHIPPING_THRESHOLD_CENTS;
    FreeShippingEligibility {
        order_total_cents,
        eligible,
        short_by_cents: if eligible {
            0
        } else {
            FREE_SHIPPING_THRESHOLD_CENTS - order_total_cents
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::demo_shipping;

    #[test]
    fn test_method_lookup_is_case_insensitive() {
        let store = demo_shipping();
        let upper = store.option("STANDARD").expect("known method");
        let lower = store.option("standard").expect("known method");
        assert_eq!(upper.method, lower.method);
        assert_eq!(upper.cost_cents, 499);
        assert_eq!(upper.days, 5);
        assert_eq!(upper.carrier, "USPS");
    }

    #[test]
    fn test_unknown_method_is_a_miss() {
        assert!(demo_shipping().option("drone").is_none());
        let err = ShippingMethod::from_str("drone").unwrap_err();
        assert!(err.to_string().contains("drone"));
    }

    #[test]
    fn test_options_keep_authored_order() {
        assert_eq!(
            demo_shipping().method_titles(),
            vec!["Standard", "Expedited", "Overnight", "Free"]
        );
    }

    #[test]
    fn test_estimate_delivery_adds_transit_days() {
        let store = demo_shipping();
        let from = NaiveDate::from_ymd_opt(2024, 11, 19).unwrap();
        let overnight = store.option("overnight").unwrap();
        assert_eq!(
            overnight.estimate_delivery(from),
            NaiveDate::from_ymd_opt(2024, 11, 20).unwrap()
        );
        let free = store.option("free").unwrap();
        assert_eq!(
            free.estimate_delivery(from),
            NaiveDate::from_ymd_opt(2024, 11, 26).unwrap()
        );
    }

    #[test]
    fn test_free_shipping_threshold() {
        let at = free_shipping_eligibility(3_500);
        assert!(at.eligible);
        assert_eq!(at.short_by_cents, 0);

        let below = free_shipping_eligibility(2_000);
        assert!(!below.eligible);
        assert_eq!(below.short_by_cents, 1_500);
    }
}
