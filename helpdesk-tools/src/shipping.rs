use std::fmt;

use chrono::{NaiveDate, Utc};
use helpdesk_logistics::shipping::{
    free_shipping_eligibility, FreeShippingEligibility, ShippingMethod, ShippingStore,
};
use helpdesk_logistics::tracking::{TrackingRecord, TrackingStore};
use serde::Serialize;

use crate::money::format_usd;

fn day_word(days: u32) -> &'static str {
    if days == 1 {
        "day"
    } else {
        "days"
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ShippingEstimate {
    Quote {
        destination_zip: String,
        method: ShippingMethod,
        carrier: String,
        cost_cents: i32,
        days: u32,
        expected_delivery: NaiveDate,
        description: String,
    },
    UnknownMethod {
        requested: String,
        available: Vec<&'static str>,
    },
}

impl fmt::Display for ShippingEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShippingEstimate::Quote {
                destination_zip,
                method,
                carrier,
                cost_cents,
                days,
                expected_delivery,
                description,
            } => {
                writeln!(f, "**Shipping to {destination_zip}**")?;
                writeln!(f, "Method: {} ({carrier})", method.title())?;
                writeln!(f, "Cost: {}", format_usd(*cost_cents))?;
                writeln!(f, "Delivery Time: {days} business {}", day_word(*days))?;
                writeln!(
                    f,
                    "Expected Delivery: {}",
                    expected_delivery.format("%A, %B %d, %Y")
                )?;
                writeln!(f, "{description}")
            }
            ShippingEstimate::UnknownMethod {
                requested,
                available,
            } => {
                writeln!(f, "Shipping method '{requested}' not available.")?;
                writeln!(f, "Available methods: {}", available.join(", "))
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OptionsList {
    pub options: Vec<OptionRow>,
}

#[derive(Debug, Serialize)]
pub struct OptionRow {
    pub method: ShippingMethod,
    pub cost_cents: i32,
    pub days: u32,
    pub carrier: String,
    pub description: String,
}

impl fmt::Display for OptionsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available shipping options:")?;
        for row in &self.options {
            writeln!(
                f,
                "  - {}: {} - {} {} via {}",
                row.method.title(),
                format_usd(row.cost_cents),
                row.days,
                day_word(row.days),
                row.carrier
            )?;
            writeln!(f, "    {}", row.description)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum TrackingReport {
    Found {
        tracking_number: String,
        record: TrackingRecord,
    },
    NotFound {
        tracking_number: String,
    },
}

impl fmt::Display for TrackingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackingReport::Found {
                tracking_number,
                record,
            } => {
                writeln!(f, "**Package Tracking: {tracking_number}**")?;
                writeln!(
                    f,
                    "Status: {} - {}",
                    record.status.label(),
                    record.status.describe()
                )?;
                writeln!(f, "Current Location: {}", record.location)?;
                writeln!(f, "Last Update: {}", record.timestamp.format("%Y-%m-%d %H:%M"))?;
                writeln!(f, "Carrier: {}", record.carrier)?;
                match record.estimated_delivery {
                    Some(date) => writeln!(f, "Estimated Delivery: {date}"),
                    None => writeln!(f, "Estimated Delivery: N/A"),
                }
            }
            TrackingReport::NotFound { tracking_number } => {
                writeln!(f, "Tracking number '{tracking_number}' not found.")?;
                writeln!(f, "Please verify the number or contact support.")
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FreeShippingReport {
    #[serde(flatten)]
    pub eligibility: FreeShippingEligibility,
}

impl fmt::Display for FreeShippingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.eligibility;
        if e.eligible {
            writeln!(
                f,
                "Your order of {} qualifies for free shipping.",
                format_usd(e.order_total_cents)
            )
        } else {
            writeln!(
                f,
                "Add {} more to your order to qualify for free shipping.",
                format_usd(e.short_by_cents)
            )
        }
    }
}

/// Shipping tools: quotes, the options list, package tracking and the
/// free-shipping check.
pub struct ShippingTools<'a> {
    shipping: &'a ShippingStore,
    tracking: &'a TrackingStore,
}

impl<'a> ShippingTools<'a> {
    pub fn new(shipping: &'a ShippingStore, tracking: &'a TrackingStore) -> Self {
        Self { shipping, tracking }
    }

    /// Quote for shipping to `zip`, leaving today.
    pub fn estimate(&self, zip: &str, method: &str) -> ShippingEstimate {
        self.estimate_on(zip, method, Utc::now().date_naive())
    }

    /// Same quote with an explicit ship date, for deterministic callers.
    pub fn estimate_on(&self, zip: &str, method: &str, from: NaiveDate) -> ShippingEstimate {
        match self.shipping.option(method) {
            Some(option) => ShippingEstimate::Quote {
                destination_zip: zip.to_string(),
                method: option.method,
                carrier: option.carrier.clone(),
                cost_cents: option.cost_cents,
                days: option.days,
                expected_delivery: option.estimate_delivery(from),
                description: option.description.clone(),
            },
            None => ShippingEstimate::UnknownMethod {
                requested: method.to_string(),
                available: self.shipping.method_titles(),
            },
        }
    }

    pub fn options(&self) -> OptionsList {
        OptionsList {
            options: self
                .shipping
                .options()
                .iter()
                .map(|o| OptionRow {
                    method: o.method,
                    cost_cents: o.cost_cents,
                    days: o.days,
                    carrier: o.carrier.clone(),
                    description: o.description.clone(),
                })
                .collect(),
        }
    }

    pub fn track(&self, tracking_number: &str) -> TrackingReport {
        match self.tracking.track(tracking_number) {
            Some(record) => TrackingReport::Found {
                tracking_number: tracking_number.to_uppercase(),
                record: record.clone(),
            },
            None => TrackingReport::NotFound {
                tracking_number: tracking_number.to_string(),
            },
        }
    }

    pub fn free_shipping(&self, order_total_cents: i32) -> FreeShippingReport {
        FreeShippingReport {
            eligibility: free_shipping_eligibility(order_total_cents),
        }
    }
}
