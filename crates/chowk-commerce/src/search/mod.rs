//! The query pipeline: filter, score, sort, paginate.
//!
//! Data flow per request: raw [`QueryParams`] are normalized into
//! [`QueryCriteria`]; the [`FilterCriteria`] predicate is applied to a
//! borrowed snapshot of the collection; relevance scores are attached
//! when a free-text query is present; the sort strategy orders the
//! survivors; pagination slices the page and computes continuation
//! metadata. No step mutates a record and no step performs I/O.

pub mod filter;
pub mod pipeline;
pub mod relevance;
pub mod results;
pub mod sort;

pub use filter::FilterCriteria;
pub use pipeline::{execute, QueryCriteria, QueryParams};
pub use results::{paginate, Pagination, QueryOutcome};
pub use sort::{sort_records, CollectionKind, SortKey};
