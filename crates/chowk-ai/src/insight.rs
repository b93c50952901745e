//! Structured output of a smart search.

use serde::{Deserialize, Serialize};

/// The assistant's interpretation of a query plus its recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInsight {
    /// Brief explanation of what the shopper is looking for.
    pub interpretation: String,
    /// Primary intent, e.g. "product_search", "store_type", "location_based".
    pub extracted_intent: String,
    /// When the shopper wants to shop, if mentioned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_preference: Option<String>,
    /// Budget preference, if mentioned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    /// Top recommended stores, best match first.
    #[serde(default)]
    pub recommended_stores: Vec<RecommendedStore>,
    /// Alternative search suggestions.
    #[serde(default)]
    pub alternatives: Vec<String>,
}

/// One recommended store with the reason it matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedStore {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Why this store matches the query.
    pub match_reason: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub closes_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_provider_shaped_json() {
        let json = r#"{
            "interpretation": "Looking for fresh produce",
            "extractedIntent": "product_search",
            "timePreference": "now",
            "recommendedStores": [{
                "id": "s1",
                "name": "Fresh Market",
                "category": "Groceries",
                "matchReason": "Carries fresh vegetables",
                "distance": "250m",
                "rating": 4.8,
                "reviewCount": 248,
                "isOpen": true,
                "closesAt": "10:00 PM"
            }],
            "alternatives": ["organic groceries"]
        }"#;
        let insight: SearchInsight = serde_json::from_str(json).unwrap();
        assert_eq!(insight.extracted_intent, "product_search");
        assert_eq!(insight.recommended_stores.len(), 1);
        assert_eq!(insight.recommended_stores[0].name, "Fresh Market");
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "interpretation": "x",
            "extractedIntent": "product_search"
        }"#;
        let insight: SearchInsight = serde_json::from_str(json).unwrap();
        assert!(insight.recommended_stores.is_empty());
        assert_eq!(insight.time_preference, None);
    }
}
