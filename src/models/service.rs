use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Street location of a laundry service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// Contact channels for a laundry service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub whatsapp: String,
}

/// One laundry business in the directory.
///
/// Field names on the wire are camelCase; the cache stores records in the
/// same shape, so a cached payload and an API payload are interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaundryService {
    pub id: String,
    pub name: String,
    pub rating: f64,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
    /// Distance from the user in kilometers, as reported by the API.
    pub distance: f64,
    #[serde(rename = "priceRange")]
    pub price_range: String,
    pub location: Location,
    pub contact: ContactInfo,
    /// Names of offered services ("Wash", "Iron", ...).
    pub services: Vec<String>,
    /// Display price per offered service. BTreeMap keeps serialization
    /// order stable across cache round-trips.
    #[serde(rename = "servicePrices")]
    pub service_prices: BTreeMap<String, String>,
    #[serde(rename = "openingHours")]
    pub opening_hours: String,
    #[serde(rename = "deliveryTime")]
    pub delivery_time: String,
    #[serde(rename = "isOpen")]
    pub is_open: bool,
}

impl LaundryService {
    /// One-line summary for list output.
    pub fn summary(&self) -> String {
        format!(
            "{} ({:.1}★, {}) - {}",
            self.name,
            self.rating,
            self.price_range,
            if self.is_open { "open" } else { "closed" }
        )
    }

    pub fn display_distance(&self) -> String {
        format!("{:.1} km", self.distance)
    }
}
