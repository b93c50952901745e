//! Chowk REST API.
//!
//! Thin axum layer over the `chowk-commerce` query pipeline: handlers
//! fetch a snapshot from the catalog source, run the pipeline, and wrap
//! the outcome in the storefront's response envelopes.

pub mod config;
pub mod envelope;
pub mod handlers;
pub mod seed;
pub mod state;
pub mod suggest;

use axum::routing::get;
use axum::{Extension, Router};
use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/deals", get(handlers::list_deals))
        .route("/deals/featured", get(handlers::featured_deals))
        .route("/deals/categories", get(handlers::list_categories))
        .route("/deals/{id}", get(handlers::deal_by_id))
        .route("/search", get(handlers::search_all))
        .route("/search/history", get(handlers::search_history))
        .route("/search/trending", get(handlers::trending_searches))
        .route("/search/assist", get(handlers::assist))
        .layer(Extension(state))
}
