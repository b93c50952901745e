//! Product types.

use crate::catalog::Category;
use crate::ids::{ProductId, StoreId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single product carried by a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Merchandise category.
    pub category: Category,
    /// Shelf price.
    pub price: Money,
    /// Store carrying the product.
    pub store_id: StoreId,
    /// Store display name, denormalized for search.
    pub store_name: String,
    /// Whether the product is in stock.
    pub in_stock: bool,
    /// Display image (emoji or URL).
    pub image: String,
    /// When the product was listed.
    pub created_at: DateTime<Utc>,
}
