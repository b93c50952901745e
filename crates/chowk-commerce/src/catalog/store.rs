//! Store types.

use crate::catalog::Category;
use crate::ids::StoreId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A local store visible on the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Unique store identifier.
    pub id: StoreId,
    /// Store name.
    pub name: String,
    /// Merchandise category.
    pub category: Category,
    /// Free-text description.
    pub description: String,
    /// Distance display string (e.g. "250m"). The collection uses meters;
    /// sorting parses the numeric value leniently via [`Store::distance_value`].
    pub distance: String,
    /// Average rating in [1, 5].
    pub rating: f64,
    /// Number of reviews.
    pub review_count: u32,
    /// Whether the store is currently open.
    pub is_open: bool,
    /// Closing time as opaque display text (e.g. "10:00 PM").
    pub closes_at: String,
    /// Whether the store currently runs offers.
    pub has_offers: bool,
    /// Delivery time display string.
    pub delivery_time: String,
    /// Contact number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City.
    pub location: String,
    /// Names of product lines carried.
    pub products: Vec<String>,
    /// Search keywords.
    pub keywords: Vec<String>,
    /// Display image (emoji or URL).
    pub image: String,
    /// When the store was listed.
    pub created_at: DateTime<Utc>,
}

impl Store {
    /// Parse the numeric distance out of the display string, in meters.
    ///
    /// Accepts "250m", "1.2km" and bare numbers. Returns `None` when no
    /// leading number is present; such stores sort last under the
    /// distance ordering.
    pub fn distance_value(&self) -> Option<f64> {
        let s = self.distance.trim();
        let end = s
            .char_indices()
            .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
            .map(|(i, c)| i + c.len_utf8())
            .last()?;
        let value: f64 = s[..end].parse().ok()?;
        let unit = s[end..].trim().to_lowercase();
        match unit.as_str() {
            "km" => Some(value * 1000.0),
            _ => Some(value),
        }
    }
}
