//! Catalog domain types and the deal query pipeline for Chowk.
//!
//! This crate provides the deterministic core of the marketplace:
//!
//! - **Catalog**: deals, stores, products and the tagged [`Record`] union
//! - **Search**: filter predicates, relevance scoring, sort strategies
//!   and pagination, composed by the query orchestrator
//!
//! The pipeline is stateless and side-effect-free per invocation: it
//! borrows a read-only snapshot of a collection, and only filters,
//! scores and orders views over it.
//!
//! # Example
//!
//! ```rust,ignore
//! use chowk_commerce::prelude::*;
//!
//! let criteria = QueryParams::default().normalize(CollectionKind::Deals);
//! let outcome = execute(&criteria, records, Utc::now());
//! println!("{} of {} deals", outcome.data.len(), outcome.pagination.total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod search;

pub use catalog::Record;
pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Category, Deal, Product, Record, Store};

    // Search
    pub use crate::search::{
        execute, paginate, CollectionKind, FilterCriteria, Pagination, QueryCriteria,
        QueryOutcome, QueryParams, SortKey,
    };
}
