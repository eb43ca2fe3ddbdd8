use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingStatus {
    Processing,
    InTransit,
    Delivered,
}

impl TrackingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TrackingStatus::Processing => "Processing",
            TrackingStatus::InTransit => "In Transit",
            TrackingStatus::Delivered => "Delivered",
        }
    }

    /// Customer-facing one-liner for the status.
    pub fn describe(&self) -> &'static str {
        match self {
            TrackingStatus::Processing => "Your package is being prepared for shipment",
            TrackingStatus::InTransit => "Your package is on the way to its destination",
            TrackingStatus::Delivered => "Your package has been successfully delivered",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingRecord {
    pub status: TrackingStatus,
    pub location: String,
    pub timestamp: NaiveDateTime,
    pub carrier: String,
    pub estimated_delivery: Option<NaiveDate>,
}

/// Read-only tracking table. Keys are stored upper-case; lookups fold case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingStore {
    records: HashMap<String, TrackingRecord>,
}

impl TrackingStore {
    pub fn new(records: HashMap<String, TrackingRecord>) -> Self {
        Self { records }
    }

    pub fn track(&self, tracking_number: &str) -> Option<&TrackingRecord> {
        let hit = self.records.get(&tracking_number.to_uppercase());
        tracing::debug!(tracking_number, found = hit.is_some(), "tracking lookup");
        hit
    }
}
