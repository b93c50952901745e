//! The query orchestrator: normalize, filter, score, sort, paginate.

use crate::catalog::Record;
use crate::money::Money;
use crate::search::filter::FilterCriteria;
use crate::search::relevance;
use crate::search::results::{paginate, QueryOutcome};
use crate::search::sort::{sort_records, CollectionKind, SortKey};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Raw request parameters, exactly as they arrive on the query string.
///
/// Every field is an optional string so that malformed input (a
/// non-numeric `minPrice`, an unknown `sortBy`) can be dropped during
/// normalization instead of failing the whole request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    pub category: Option<String>,
    pub location: Option<String>,
    pub search: Option<String>,
    /// Short alias for `search`, accepted by the combined search endpoint.
    pub q: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_discount: Option<String>,
    pub min_rating: Option<String>,
    pub open_only: Option<String>,
    pub sort_by: Option<String>,
    /// Accepted for compatibility; direction is encoded in the sort key.
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl QueryParams {
    /// The free-text query, with `search` taking precedence over `q`.
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref().or(self.q.as_deref())
    }

    /// Normalize raw parameters into executable criteria.
    ///
    /// Strings are trimmed, numeric strings coerced (silently dropping
    /// anything unparseable), page defaults to 1, and the limit defaults
    /// per collection and is clamped to 1..=100.
    pub fn normalize(&self, kind: CollectionKind) -> QueryCriteria {
        let mut filter = FilterCriteria::default();
        if let Some(category) = &self.category {
            filter = filter.with_category(category);
        }
        if let Some(search) = self.search_text() {
            filter = filter.with_search(search);
        }
        if let Some(location) = &self.location {
            filter = filter.with_location(location);
        }
        filter.min_price = parse_number(self.min_price.as_deref(), "minPrice").map(Money::from_rupees);
        filter.max_price = parse_number(self.max_price.as_deref(), "maxPrice").map(Money::from_rupees);
        filter.min_discount =
            parse_number(self.min_discount.as_deref(), "minDiscount").map(|d| d.clamp(0.0, 100.0) as u8);
        filter.min_rating = parse_number(self.min_rating.as_deref(), "minRating");
        filter.open_only = matches!(
            self.open_only.as_deref().map(str::trim),
            Some("true") | Some("1")
        );

        let explicit_sort = self
            .sort_by
            .as_deref()
            .map(str::trim)
            .is_some_and(|s| !s.is_empty());
        let sort = if explicit_sort {
            SortKey::parse(self.sort_by.as_deref().unwrap_or(""), kind.default_sort())
        } else {
            kind.default_sort()
        };

        let page = parse_number(self.page.as_deref(), "page")
            .map(|p: f64| p as i64)
            .filter(|p| *p >= 1)
            .unwrap_or(1) as usize;
        let default_limit = match kind {
            CollectionKind::Deals | CollectionKind::Stores => 20,
            CollectionKind::Search => 10,
        };
        let limit = parse_number(self.limit.as_deref(), "limit")
            .map(|l: f64| l as i64)
            .filter(|l| *l >= 1)
            .unwrap_or(default_limit)
            .min(100) as usize;

        QueryCriteria {
            kind,
            filter,
            sort,
            explicit_sort,
            page,
            limit,
        }
    }
}

/// Normalized, executable query criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryCriteria {
    /// Collection the query runs over.
    pub kind: CollectionKind,
    /// Filter constraints.
    pub filter: FilterCriteria,
    /// Requested ordering.
    pub sort: SortKey,
    /// Whether `sort` came from an explicit `sortBy` parameter.
    pub explicit_sort: bool,
    /// 1-indexed page.
    pub page: usize,
    /// Page size, 1..=100.
    pub limit: usize,
}

impl QueryCriteria {
    /// The ordering actually applied: relevance is auto-selected when a
    /// free-text query is present and no explicit sort was given.
    pub fn effective_sort(&self) -> SortKey {
        if self.filter.search.is_some() && !self.explicit_sort {
            SortKey::Relevance
        } else {
            self.sort
        }
    }
}

/// Execute the pipeline over a borrowed snapshot of the collection.
///
/// Pure computation: filter, then order (scoring only when a free-text
/// query is present), then paginate. Invoking this twice with identical
/// criteria over an unchanged snapshot yields identical output.
pub fn execute(criteria: &QueryCriteria, records: Vec<Record>, now: DateTime<Utc>) -> QueryOutcome {
    let filtered: Vec<Record> = records
        .into_iter()
        .filter(|record| criteria.filter.matches(record, now))
        .collect();

    tracing::debug!(
        kind = ?criteria.kind,
        matched = filtered.len(),
        sort = criteria.effective_sort().as_str(),
        "query filtered"
    );

    let ordered = match (criteria.effective_sort(), &criteria.filter.search) {
        (SortKey::Relevance, Some(query)) => relevance::rank(filtered, query),
        (SortKey::Relevance, None) => {
            // Relevance without a query degenerates to the collection default.
            let mut records = filtered;
            sort_records(&mut records, fallback_for(criteria.kind));
            records
        }
        (key, _) => {
            let mut records = filtered;
            sort_records(&mut records, key);
            records
        }
    };

    let (data, pagination) = paginate(ordered, criteria.page, criteria.limit);
    QueryOutcome { data, pagination }
}

fn fallback_for(kind: CollectionKind) -> SortKey {
    match kind {
        CollectionKind::Deals => SortKey::Discount,
        CollectionKind::Stores => SortKey::Distance,
        // Mixed results with no query: newest keeps the order deterministic.
        CollectionKind::Search => SortKey::Newest,
    }
}

fn parse_number(raw: Option<&str>, name: &'static str) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            // Forgiving by contract: a malformed filter is ignored, not an error.
            tracing::debug!(param = name, value = raw, "ignoring malformed numeric filter");
            None
        }
    }
}
