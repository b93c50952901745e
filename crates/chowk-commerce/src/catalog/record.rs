//! The polymorphic record flowing through the query pipeline.

use crate::catalog::{Category, Deal, Product, Store};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A store, product or deal, dispatched by kind tag.
///
/// The pipeline treats the three kinds uniformly through the accessors
/// below; variant-specific fields come back as `Option` so predicates
/// and comparators can decide how to treat records that lack them. The
/// serialized form carries a `type` tag, matching the shape search
/// results use on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    Deal(Deal),
    Store(Store),
    Product(Product),
}

impl Record {
    /// The record's identifier as a string.
    pub fn id_str(&self) -> &str {
        match self {
            Record::Deal(d) => d.id.as_str(),
            Record::Store(s) => s.id.as_str(),
            Record::Product(p) => p.id.as_str(),
        }
    }

    /// Display name (a deal's title).
    pub fn name(&self) -> &str {
        match self {
            Record::Deal(d) => &d.title,
            Record::Store(s) => &s.name,
            Record::Product(p) => &p.name,
        }
    }

    /// Merchandise category.
    pub fn category(&self) -> &Category {
        match self {
            Record::Deal(d) => &d.category,
            Record::Store(s) => &s.category,
            Record::Product(p) => &p.category,
        }
    }

    /// Free-text description, where the kind has one.
    pub fn description(&self) -> Option<&str> {
        match self {
            Record::Deal(d) => Some(&d.description),
            Record::Store(s) => Some(&s.description),
            Record::Product(_) => None,
        }
    }

    /// Name of the vendor behind the record, where distinct from the name.
    pub fn vendor_name(&self) -> Option<&str> {
        match self {
            Record::Deal(d) => Some(&d.store),
            Record::Store(_) => None,
            Record::Product(p) => Some(&p.store_name),
        }
    }

    /// Average rating, where the kind carries one.
    pub fn rating(&self) -> Option<f64> {
        match self {
            Record::Deal(d) => Some(d.rating),
            Record::Store(s) => Some(s.rating),
            Record::Product(_) => None,
        }
    }

    /// Review count, where the kind carries one.
    pub fn review_count(&self) -> Option<u32> {
        match self {
            Record::Deal(d) => Some(d.review_count),
            Record::Store(s) => Some(s.review_count),
            Record::Product(_) => None,
        }
    }

    /// The price a shopper would pay.
    pub fn effective_price(&self) -> Option<Money> {
        match self {
            Record::Deal(d) => Some(d.discount_price),
            Record::Store(_) => None,
            Record::Product(p) => Some(p.price),
        }
    }

    /// Discount percentage (deals only).
    pub fn discount(&self) -> Option<u8> {
        match self {
            Record::Deal(d) => Some(d.discount),
            _ => None,
        }
    }

    /// Open/closed status (stores only).
    pub fn is_open(&self) -> Option<bool> {
        match self {
            Record::Store(s) => Some(s.is_open),
            _ => None,
        }
    }

    /// City, where the kind carries one.
    pub fn location(&self) -> Option<&str> {
        match self {
            Record::Deal(d) => Some(&d.location),
            Record::Store(s) => Some(&s.location),
            Record::Product(_) => None,
        }
    }

    /// Deal expiry time.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Record::Deal(d) => Some(d.end_time),
            _ => None,
        }
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Record::Deal(d) => d.created_at,
            Record::Store(s) => s.created_at,
            Record::Product(p) => p.created_at,
        }
    }

    /// Numeric distance for ordering. Deals are stored in kilometers and
    /// converted to meters so the two kinds order consistently.
    pub fn distance_value(&self) -> Option<f64> {
        match self {
            Record::Deal(d) => Some(d.distance_km * 1000.0),
            Record::Store(s) => s.distance_value(),
            Record::Product(_) => None,
        }
    }

    /// Whether the record may appear in listings at `now`.
    ///
    /// Deals must be unexpired and in stock; stores and products are
    /// always listable.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        match self {
            Record::Deal(d) => d.is_active(now),
            _ => true,
        }
    }

    /// The fields relevance scoring evaluates, in evaluation order.
    pub fn relevance_fields(&self) -> [&str; 3] {
        match self {
            Record::Deal(d) => [&d.title, d.category.as_str(), &d.store],
            Record::Store(s) => [&s.name, s.category.as_str(), &s.description],
            Record::Product(p) => [&p.name, p.category.as_str(), &p.store_name],
        }
    }

    /// Every field free-text filtering may match against.
    ///
    /// Stores additionally expose their keyword and product-line lists,
    /// so "veg" finds a store that carries "Vegetables".
    pub fn search_haystacks(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = vec![self.name(), self.category().as_str()];
        if let Some(description) = self.description() {
            fields.push(description);
        }
        if let Some(vendor) = self.vendor_name() {
            fields.push(vendor);
        }
        if let Record::Store(s) = self {
            fields.extend(s.keywords.iter().map(String::as_str));
            fields.extend(s.products.iter().map(String::as_str));
        }
        fields
    }
}

impl From<Deal> for Record {
    fn from(deal: Deal) -> Self {
        Record::Deal(deal)
    }
}

impl From<Store> for Record {
    fn from(store: Store) -> Self {
        Record::Store(store)
    }
}

impl From<Product> for Record {
    fn from(product: Product) -> Self {
        Record::Product(product)
    }
}
