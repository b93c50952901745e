//! Smart-search capability for Chowk.
//!
//! The storefront's "AI search" is modeled as a capability interface
//! with two interchangeable implementations:
//!
//! - [`LocalAssistant`] — deterministic text matching over the store
//!   snapshot; fully testable with no network dependency.
//! - [`LlmAssistant`] — a prompt-templated, JSON-mode call to an
//!   OpenAI-compatible chat endpoint, falling back to the local
//!   implementation when the call fails or returns unparseable output.
//!
//! Which one serves a request is decided once, from configuration, via
//! [`assistant_from_config`].

mod insight;
mod llm;
mod local;

pub use insight::{RecommendedStore, SearchInsight};
pub use llm::LlmAssistant;
pub use local::LocalAssistant;

use chowk_commerce::catalog::Store;
use std::sync::Arc;
use thiserror::Error;

/// Errors from the smart-search capability.
///
/// Callers rarely see these: the LLM backend recovers by falling back to
/// the local implementation, which cannot fail.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Transport-level failure talking to the provider.
    #[error("assistant request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with something other than the expected JSON.
    #[error("assistant returned malformed output: {0}")]
    MalformedResponse(String),
}

/// A search assistant interprets a free-text query against a snapshot of
/// nearby stores and recommends the best matches.
#[async_trait::async_trait]
pub trait SearchAssistant: Send + Sync {
    /// Interpret `query` and recommend up to three stores.
    async fn search(&self, query: &str, stores: &[Store]) -> Result<SearchInsight, AssistantError>;

    /// Short backend name for logging.
    fn name(&self) -> &'static str;
}

/// Configuration for selecting and wiring an assistant backend.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Provider API key; absent means the local backend is used.
    pub api_key: Option<String>,
    /// Chat-completions endpoint URL.
    pub api_url: String,
    /// Model identifier.
    pub model: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

/// Build the assistant selected by configuration.
pub fn assistant_from_config(config: &AssistantConfig) -> Arc<dyn SearchAssistant> {
    match &config.api_key {
        Some(key) if !key.trim().is_empty() => {
            tracing::info!(model = %config.model, "smart search using LLM backend");
            Arc::new(LlmAssistant::new(
                config.api_url.clone(),
                key.clone(),
                config.model.clone(),
            ))
        }
        _ => {
            tracing::info!("smart search using local backend");
            Arc::new(LocalAssistant::default())
        }
    }
}
