//! Deterministic local search assistant.

use crate::{AssistantError, RecommendedStore, SearchAssistant, SearchInsight};
use chowk_commerce::catalog::Store;

const MAX_RECOMMENDATIONS: usize = 3;

/// Simple text matching over the store snapshot.
///
/// This is both the default backend and the fallback path for the LLM
/// backend, so its behavior must stay deterministic: stores are matched
/// by case-insensitive substring over name, description and category, in
/// snapshot order, capped at three.
#[derive(Debug, Default, Clone)]
pub struct LocalAssistant;

impl LocalAssistant {
    /// Synchronous core, shared with the LLM backend's fallback path.
    pub(crate) fn search_sync(&self, query: &str, stores: &[Store]) -> SearchInsight {
        let needle = query.trim().to_lowercase();

        let recommended_stores: Vec<RecommendedStore> = stores
            .iter()
            .filter(|store| {
                store.name.to_lowercase().contains(&needle)
                    || store.description.to_lowercase().contains(&needle)
                    || store.category.as_str().to_lowercase().contains(&needle)
            })
            .take(MAX_RECOMMENDATIONS)
            .map(|store| RecommendedStore {
                id: store.id.as_str().to_string(),
                name: store.name.clone(),
                category: store.category.as_str().to_string(),
                match_reason: "Matches your search terms".to_string(),
                distance: store.distance.clone(),
                rating: store.rating,
                review_count: store.review_count,
                is_open: store.is_open,
                closes_at: store.closes_at.clone(),
            })
            .collect();

        SearchInsight {
            interpretation: format!("Searching for \"{}\" in available stores", query.trim()),
            extracted_intent: "product_search".to_string(),
            time_preference: None,
            price_range: None,
            recommended_stores,
            alternatives: vec![
                "Try searching for specific categories".to_string(),
                "Include time preferences like 'open late'".to_string(),
                "Mention budget if looking for deals".to_string(),
            ],
        }
    }
}

#[async_trait::async_trait]
impl SearchAssistant for LocalAssistant {
    async fn search(&self, query: &str, stores: &[Store]) -> Result<SearchInsight, AssistantError> {
        Ok(self.search_sync(query, stores))
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
