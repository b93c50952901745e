//! Deal types.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::DealId;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time-limited discount offer from a local store.
///
/// `discount` and `savings` are derived from the two prices and are
/// recomputed whenever either price changes; they are never set
/// directly. Whether a deal is *active* (`end_time` in the future and in
/// stock) is a time-varying predicate, not a stored flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    /// Unique deal identifier.
    pub id: DealId,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Name of the store offering the deal.
    pub store: String,
    /// Merchandise category.
    pub category: Category,
    /// Price before discount.
    pub original_price: Money,
    /// Discounted price, strictly below `original_price`.
    pub discount_price: Money,
    /// Derived discount percentage, 0..=100.
    pub discount: u8,
    /// Derived amount saved (`original_price - discount_price`).
    pub savings: Money,
    /// Display image (emoji or URL).
    pub image: String,
    /// Average rating in [1, 5].
    pub rating: f64,
    /// Number of reviews.
    pub review_count: u32,
    /// Distance from the shopper in kilometers.
    pub distance_km: f64,
    /// City the deal is offered in.
    pub location: String,
    /// When the deal expires.
    pub end_time: DateTime<Utc>,
    /// Whether the discounted item is in stock.
    pub in_stock: bool,
    /// Whether the store offers fast delivery for this deal.
    pub fast_delivery: bool,
    /// Whether the deal is editorially featured.
    pub featured: bool,
    /// Tags for filtering and search.
    pub tags: Vec<String>,
    /// When the deal was created.
    pub created_at: DateTime<Utc>,
}

impl Deal {
    /// Create a new deal, validating the pricing invariant.
    ///
    /// Returns an error if either price is not positive or if the
    /// discount price is not strictly below the original price.
    pub fn new(
        id: impl Into<DealId>,
        title: impl Into<String>,
        store: impl Into<String>,
        category: Category,
        original_price: Money,
        discount_price: Money,
        end_time: DateTime<Utc>,
    ) -> Result<Self, CommerceError> {
        validate_prices(original_price, discount_price)?;
        let now = Utc::now();
        Ok(Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            store: store.into(),
            category,
            original_price,
            discount_price,
            discount: discount_percent(original_price, discount_price),
            savings: original_price - discount_price,
            image: String::new(),
            rating: 4.0,
            review_count: 0,
            distance_km: 0.0,
            location: "Mumbai".to_string(),
            end_time,
            in_stock: true,
            fast_delivery: false,
            featured: false,
            tags: Vec::new(),
            created_at: now,
        })
    }

    /// Replace both prices, revalidating and recomputing the derived fields.
    pub fn set_prices(
        &mut self,
        original_price: Money,
        discount_price: Money,
    ) -> Result<(), CommerceError> {
        validate_prices(original_price, discount_price)?;
        self.original_price = original_price;
        self.discount_price = discount_price;
        self.discount = discount_percent(original_price, discount_price);
        self.savings = original_price - discount_price;
        Ok(())
    }

    /// Whether the deal can still be claimed at `now`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.end_time > now && self.in_stock
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the rating, clamped to the valid [1, 5] range.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating.clamp(1.0, 5.0);
        self
    }

    /// Set the review count.
    pub fn with_review_count(mut self, count: u32) -> Self {
        self.review_count = count;
        self
    }

    /// Set the distance in kilometers.
    pub fn with_distance_km(mut self, km: f64) -> Self {
        self.distance_km = km.max(0.0);
        self
    }

    /// Set the city.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the display image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Mark the deal as featured.
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Set the creation timestamp (seed data backdates deals).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

fn validate_prices(original: Money, discounted: Money) -> Result<(), CommerceError> {
    if !original.is_positive() {
        return Err(CommerceError::NonPositivePrice(original.to_string()));
    }
    if !discounted.is_positive() {
        return Err(CommerceError::NonPositivePrice(discounted.to_string()));
    }
    if discounted >= original {
        return Err(CommerceError::InvalidPricing {
            original: original.to_string(),
            discount: discounted.to_string(),
        });
    }
    Ok(())
}

/// Discount percentage, rounded to the nearest whole percent.
fn discount_percent(original: Money, discounted: Money) -> u8 {
    let original = original.paise() as f64;
    let discounted = discounted.paise() as f64;
    (((original - discounted) / original) * 100.0).round() as u8
}
