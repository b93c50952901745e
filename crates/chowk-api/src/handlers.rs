//! Request handlers.
//!
//! Each handler fetches a catalog snapshot, runs the query pipeline over
//! it, and wraps the outcome in a response envelope. Failure to fetch
//! the snapshot is a 500 with an error envelope; a query that matches
//! nothing is a 200 with an empty data array.

use crate::envelope::{
    missing_param, not_found, upstream_error, ApiError, CountEnvelope, ItemEnvelope, ListEnvelope,
    SearchEnvelope,
};
use crate::state::AppState;
use crate::suggest;
use axum::extract::{Path, Query};
use axum::{Extension, Json};
use chowk_ai::SearchInsight;
use chowk_commerce::catalog::{Deal, Record};
use chowk_commerce::search::{execute, CollectionKind, FilterCriteria, QueryParams};
use chrono::Utc;
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

const FEATURED_DEFAULT_LIMIT: usize = 6;
const FEATURED_MAX_LIMIT: usize = 50;

/// Deals that qualify for featured backfill.
const BACKFILL_MIN_DISCOUNT: u8 = 20;

/// GET /deals — filtered, sorted, paginated deal listing.
pub async fn list_deals(
    Extension(state): Extension<AppState>,
    Query(mut params): Query<QueryParams>,
) -> Result<Json<ListEnvelope<Deal>>, ApiError> {
    if params.location.is_none() {
        params.location = Some(state.default_location.clone());
    }
    let criteria = params.normalize(CollectionKind::Deals);

    let deals = state
        .source
        .deals()
        .await
        .map_err(|e| upstream_error("deals", e))?;
    let records = deals.into_iter().map(Record::from).collect();
    let outcome = execute(&criteria, records, Utc::now());

    if let Some(query) = params.search_text() {
        state.searches.record(query);
    }

    let deals = outcome
        .data
        .into_iter()
        .filter_map(|record| match record {
            Record::Deal(deal) => Some(deal),
            _ => None,
        })
        .collect();
    Ok(Json(ListEnvelope::new(deals, outcome.pagination)))
}

#[derive(Debug, Default, Deserialize)]
pub struct FeaturedParams {
    pub location: Option<String>,
    pub limit: Option<String>,
}

/// GET /deals/featured — editorially featured deals, backfilled with
/// high-discount active deals when the flagged set is short.
pub async fn featured_deals(
    Extension(state): Extension<AppState>,
    Query(params): Query<FeaturedParams>,
) -> Result<Json<CountEnvelope<Deal>>, ApiError> {
    let limit = params
        .limit
        .as_deref()
        .and_then(|l| l.trim().parse::<usize>().ok())
        .filter(|l| *l >= 1)
        .unwrap_or(FEATURED_DEFAULT_LIMIT)
        .min(FEATURED_MAX_LIMIT);

    let location = params
        .location
        .clone()
        .unwrap_or_else(|| state.default_location.clone());
    let filter = FilterCriteria::default().with_location(&location);

    let now = Utc::now();
    let deals = state
        .source
        .deals()
        .await
        .map_err(|e| upstream_error("featured deals", e))?;
    let mut eligible: Vec<Deal> = deals
        .into_iter()
        .filter(|deal| filter.matches(&Record::Deal(deal.clone()), now))
        .collect();

    let mut picked: Vec<Deal> = Vec::new();
    let mut rest: Vec<Deal> = Vec::new();
    for deal in eligible.drain(..) {
        if deal.featured {
            picked.push(deal);
        } else {
            rest.push(deal);
        }
    }
    picked.sort_by(|a, b| {
        b.discount
            .cmp(&a.discount)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });

    if picked.len() < limit {
        rest.retain(|deal| deal.discount >= BACKFILL_MIN_DISCOUNT);
        rest.sort_by(|a, b| {
            b.discount
                .cmp(&a.discount)
                .then_with(|| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal))
        });
        picked.extend(rest);
    }
    picked.truncate(limit);

    Ok(Json(CountEnvelope::new(picked)))
}

/// GET /deals/categories — distinct deal categories, "All" first.
pub async fn list_categories(
    Extension(state): Extension<AppState>,
) -> Result<Json<ItemEnvelope<Vec<String>>>, ApiError> {
    let deals = state
        .source
        .deals()
        .await
        .map_err(|e| upstream_error("categories", e))?;

    let distinct: BTreeSet<String> = deals
        .iter()
        .map(|deal| deal.category.as_str().to_string())
        .collect();
    let mut categories = vec!["All".to_string()];
    categories.extend(distinct);
    Ok(Json(ItemEnvelope::new(categories)))
}

/// GET /deals/{id} — a single deal by identifier.
pub async fn deal_by_id(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemEnvelope<Deal>>, ApiError> {
    let deals = state
        .source
        .deals()
        .await
        .map_err(|e| upstream_error("deal", e))?;
    deals
        .into_iter()
        .find(|deal| deal.id.as_str() == id)
        .map(|deal| Json(ItemEnvelope::new(deal)))
        .ok_or_else(|| not_found("Deal not found"))
}

/// GET /search — combined search over deals, stores and products.
pub async fn search_all(
    Extension(state): Extension<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<SearchEnvelope<Record>>, ApiError> {
    let criteria = params.normalize(CollectionKind::Search);

    let deals = state
        .source
        .deals()
        .await
        .map_err(|e| upstream_error("search", e))?;
    let stores = state
        .source
        .stores()
        .await
        .map_err(|e| upstream_error("search", e))?;
    let products = state
        .source
        .products()
        .await
        .map_err(|e| upstream_error("search", e))?;

    let mut records: Vec<Record> = Vec::with_capacity(deals.len() + stores.len() + products.len());
    records.extend(deals.into_iter().map(Record::from));
    records.extend(stores.into_iter().map(Record::from));
    records.extend(products.into_iter().map(Record::from));

    let outcome = execute(&criteria, records, Utc::now());

    if let Some(query) = params.search_text() {
        state.searches.record(query);
    }

    let suggestions = match &criteria.filter.search {
        Some(query) => suggest::for_results(query, &outcome.data),
        None => Vec::new(),
    };
    Ok(Json(SearchEnvelope::new(
        outcome.data,
        outcome.pagination,
        suggestions,
    )))
}

/// GET /search/history — recent queries, newest first.
pub async fn search_history(
    Extension(state): Extension<AppState>,
) -> Json<ItemEnvelope<Vec<String>>> {
    Json(ItemEnvelope::new(state.searches.list()))
}

/// GET /search/trending — popular queries.
pub async fn trending_searches() -> Json<ItemEnvelope<Vec<String>>> {
    Json(ItemEnvelope::new(suggest::trending()))
}

#[derive(Debug, Default, Deserialize)]
pub struct AssistParams {
    pub q: Option<String>,
}

/// GET /search/assist — smart-search interpretation of a query.
pub async fn assist(
    Extension(state): Extension<AppState>,
    Query(params): Query<AssistParams>,
) -> Result<Json<ItemEnvelope<SearchInsight>>, ApiError> {
    let query = match params.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => q.to_string(),
        _ => return Err(missing_param("q")),
    };

    let stores = state
        .source
        .stores()
        .await
        .map_err(|e| upstream_error("smart search", e))?;
    let insight = state
        .assistant
        .search(&query, &stores)
        .await
        .map_err(|e| upstream_error("smart search", e))?;

    state.searches.record(&query);
    Ok(Json(ItemEnvelope::new(insight)))
}
