//! Shared application state: the catalog source and search history.

use async_trait::async_trait;
use chowk_ai::SearchAssistant;
use chowk_commerce::catalog::{Deal, Product, Store};
use chowk_commerce::CommerceError;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

const MAX_HISTORY: usize = 10;

/// Read-only access to catalog snapshots.
///
/// The pipeline borrows one snapshot per request; fetching it is the
/// single upstream call that can fail. An `Err` here means "couldn't
/// query", which handlers surface distinctly from "no matches".
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn deals(&self) -> Result<Vec<Deal>, CommerceError>;
    async fn stores(&self) -> Result<Vec<Store>, CommerceError>;
    async fn products(&self) -> Result<Vec<Product>, CommerceError>;
}

/// In-memory catalog source backed by seed fixtures.
pub struct InMemorySource {
    deals: Vec<Deal>,
    stores: Vec<Store>,
    products: Vec<Product>,
}

impl InMemorySource {
    pub fn new(deals: Vec<Deal>, stores: Vec<Store>, products: Vec<Product>) -> Self {
        Self {
            deals,
            stores,
            products,
        }
    }
}

#[async_trait]
impl CatalogSource for InMemorySource {
    async fn deals(&self) -> Result<Vec<Deal>, CommerceError> {
        Ok(self.deals.clone())
    }

    async fn stores(&self) -> Result<Vec<Store>, CommerceError> {
        Ok(self.stores.clone())
    }

    async fn products(&self) -> Result<Vec<Product>, CommerceError> {
        Ok(self.products.clone())
    }
}

/// A source whose backing store cannot be reached. Lets tests and
/// operational drills exercise the unavailable-result path.
pub struct UnavailableSource;

#[async_trait]
impl CatalogSource for UnavailableSource {
    async fn deals(&self) -> Result<Vec<Deal>, CommerceError> {
        Err(CommerceError::SourceUnavailable("deal store offline".to_string()))
    }

    async fn stores(&self) -> Result<Vec<Store>, CommerceError> {
        Err(CommerceError::SourceUnavailable("store directory offline".to_string()))
    }

    async fn products(&self) -> Result<Vec<Product>, CommerceError> {
        Err(CommerceError::SourceUnavailable("product index offline".to_string()))
    }
}

/// Capped, deduplicated list of recent search queries, newest first.
///
/// Recording is fire-and-forget from the handler's point of view: it
/// never affects the correctness of a query response.
#[derive(Default)]
pub struct RecentSearches {
    entries: Mutex<VecDeque<String>>,
}

impl RecentSearches {
    /// Record a query, moving repeats to the front.
    pub fn record(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        if let Ok(mut entries) = self.entries.lock() {
            entries.retain(|entry| entry != query);
            entries.push_front(query.to_string());
            entries.truncate(MAX_HISTORY);
        }
    }

    /// Most recent queries, newest first.
    pub fn list(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Everything a handler needs, shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn CatalogSource>,
    pub searches: Arc<RecentSearches>,
    pub assistant: Arc<dyn SearchAssistant>,
    pub default_location: String,
}

impl AppState {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        assistant: Arc<dyn SearchAssistant>,
        default_location: impl Into<String>,
    ) -> Self {
        Self {
            source,
            searches: Arc::new(RecentSearches::default()),
            assistant,
            default_location: default_location.into(),
        }
    }
}
