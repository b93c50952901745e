//! LLM-backed search assistant.
//!
//! Sends a prompt-templated, JSON-mode chat request to an
//! OpenAI-compatible endpoint and parses the structured reply. Any
//! transport or parse failure falls back to the deterministic
//! [`LocalAssistant`], so shoppers always get an answer.

use crate::local::LocalAssistant;
use crate::{AssistantError, SearchAssistant, SearchInsight};
use chowk_commerce::catalog::Store;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Assistant backed by an OpenAI-compatible chat-completions API.
pub struct LlmAssistant {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    fallback: LocalAssistant,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl LlmAssistant {
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
            fallback: LocalAssistant,
        }
    }

    /// Render the analysis prompt over a digest of the store snapshot.
    fn build_prompt(query: &str, stores: &[Store]) -> String {
        let digest: Vec<serde_json::Value> = stores
            .iter()
            .map(|store| {
                json!({
                    "id": store.id.as_str(),
                    "name": store.name,
                    "category": store.category.as_str(),
                    "description": store.description,
                    "rating": store.rating,
                    "distance": store.distance,
                    "isOpen": store.is_open,
                    "closesAt": store.closes_at,
                    "hasOffers": store.has_offers,
                })
            })
            .collect();

        format!(
            "Analyze this search query and find the best matching stores:\n\n\
             User Query: \"{query}\"\n\n\
             Available Stores:\n{stores}\n\n\
             Respond with a JSON object of this shape:\n\
             {{\n\
               \"interpretation\": \"brief explanation of what the user is looking for\",\n\
               \"extractedIntent\": \"primary intent (product_search, store_type, location_based)\",\n\
               \"timePreference\": \"when they want to shop, if mentioned\",\n\
               \"priceRange\": \"budget preference, if mentioned\",\n\
               \"recommendedStores\": [{{\"id\": \"...\", \"name\": \"...\", \"category\": \"...\", \
                 \"matchReason\": \"...\", \"distance\": \"...\", \"rating\": 0, \
                 \"reviewCount\": 0, \"isOpen\": true, \"closesAt\": \"...\"}}],\n\
               \"alternatives\": [\"alternative suggestion\"]\n\
             }}\n\n\
             Consider store categories and specialties, opening hours, ratings, \
             distance and offers. Provide the top 3 most relevant stores with a \
             specific reason each.",
            query = query,
            stores = serde_json::to_string_pretty(&digest).unwrap_or_default(),
        )
    }

    async fn request_insight(
        &self,
        query: &str,
        stores: &[Store],
    ) -> Result<SearchInsight, AssistantError> {
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": Self::build_prompt(query, stores) }],
            "response_format": { "type": "json_object" },
            "temperature": 0.5,
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        let content = response
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| AssistantError::MalformedResponse("no choices".to_string()))?;

        parse_insight(content)
    }
}

/// Parse the model's reply, tolerating markdown code fences around the JSON.
fn parse_insight(content: &str) -> Result<SearchInsight, AssistantError> {
    let trimmed = content
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    serde_json::from_str(trimmed).map_err(|e| AssistantError::MalformedResponse(e.to_string()))
}

#[async_trait::async_trait]
impl SearchAssistant for LlmAssistant {
    async fn search(&self, query: &str, stores: &[Store]) -> Result<SearchInsight, AssistantError> {
        match self.request_insight(query, stores).await {
            Ok(insight) => Ok(insight),
            Err(e) => {
                tracing::warn!(error = %e, "LLM search failed, falling back to local matching");
                Ok(self.fallback.search_sync(query, stores))
            }
        }
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chowk_commerce::catalog::Category;
    use chowk_commerce::ids::StoreId;
    use chrono::Utc;

    fn store() -> Store {
        Store {
            id: StoreId::new("s1"),
            name: "Fresh Market".to_string(),
            category: Category::Groceries,
            description: "Fresh vegetables and fruits".to_string(),
            distance: "250m".to_string(),
            rating: 4.8,
            review_count: 248,
            is_open: true,
            closes_at: "10:00 PM".to_string(),
            has_offers: true,
            delivery_time: "15 min".to_string(),
            phone: String::new(),
            address: String::new(),
            location: "Noida".to_string(),
            products: Vec::new(),
            keywords: Vec::new(),
            image: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_prompt_includes_query_and_store_digest() {
        let prompt = LlmAssistant::build_prompt("birthday cake", &[store()]);
        assert!(prompt.contains("User Query: \"birthday cake\""));
        assert!(prompt.contains("\"name\": \"Fresh Market\""));
        assert!(prompt.contains("recommendedStores"));
    }

    #[test]
    fn test_parse_insight_plain_json() {
        let insight = parse_insight(
            r#"{"interpretation": "produce", "extractedIntent": "product_search"}"#,
        )
        .unwrap();
        assert_eq!(insight.interpretation, "produce");
    }

    #[test]
    fn test_parse_insight_tolerates_code_fences() {
        let fenced = "```json\n{\"interpretation\": \"x\", \"extractedIntent\": \"store_type\"}\n```";
        let insight = parse_insight(fenced).unwrap();
        assert_eq!(insight.extracted_intent, "store_type");
    }

    #[test]
    fn test_parse_insight_rejects_garbage() {
        assert!(matches!(
            parse_insight("sorry, I can't help with that"),
            Err(AssistantError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back_to_local() {
        let assistant = LlmAssistant::new(
            // Unroutable port on localhost: the request fails fast.
            "http://127.0.0.1:9/v1/chat/completions".to_string(),
            "sk-test".to_string(),
            "test-model".to_string(),
        );
        let insight = assistant.search("fresh", &[store()]).await.unwrap();
        assert_eq!(insight.recommended_stores.len(), 1);
        assert_eq!(insight.recommended_stores[0].name, "Fresh Market");
    }
}
