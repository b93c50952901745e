//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog and query operations.
///
/// Expected browsing conditions (empty results, malformed filter values,
/// unknown sort keys) are normalized away and never surface here; these
/// variants cover write-time invariant violations and genuine upstream
/// unavailability.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Deal not found.
    #[error("Deal not found: {0}")]
    DealNotFound(String),

    /// Store not found.
    #[error("Store not found: {0}")]
    StoreNotFound(String),

    /// Discount price must be strictly below the original price.
    #[error("Invalid pricing: discount price {discount} must be below original price {original}")]
    InvalidPricing { original: String, discount: String },

    /// Prices must be positive.
    #[error("Invalid price: {0} is not positive")]
    NonPositivePrice(String),

    /// Catalog source could not be queried.
    #[error("Catalog source unavailable: {0}")]
    SourceUnavailable(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
