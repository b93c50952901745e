//! Server configuration.

use clap::Parser;
use std::net::SocketAddr;

/// Chowk local-commerce deal API.
#[derive(Debug, Parser)]
#[command(name = "chowk-api", version, about)]
pub struct ServerArgs {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:4000", env = "CHOWK_BIND")]
    pub bind: SocketAddr,

    /// City assumed when a request carries no location parameter.
    #[arg(long, default_value = "Mumbai", env = "CHOWK_DEFAULT_LOCATION")]
    pub default_location: String,

    /// API key for the LLM search backend. When absent, smart search
    /// runs the deterministic local backend.
    #[arg(long, env = "CHOWK_AI_API_KEY")]
    pub ai_api_key: Option<String>,

    /// Chat-completions endpoint for the LLM search backend.
    #[arg(
        long,
        default_value = "https://api.openai.com/v1/chat/completions",
        env = "CHOWK_AI_URL"
    )]
    pub ai_api_url: String,

    /// Model used by the LLM search backend.
    #[arg(long, default_value = "gpt-4o-mini", env = "CHOWK_AI_MODEL")]
    pub ai_model: String,
}

impl ServerArgs {
    /// Assistant configuration derived from the server arguments.
    pub fn assistant_config(&self) -> chowk_ai::AssistantConfig {
        chowk_ai::AssistantConfig {
            api_key: self.ai_api_key.clone(),
            api_url: self.ai_api_url.clone(),
            model: self.ai_model.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = ServerArgs::parse_from(["chowk-api"]);
        assert_eq!(args.default_location, "Mumbai");
        assert_eq!(args.bind.port(), 4000);
        assert!(args.ai_api_key.is_none());
    }

    #[test]
    fn test_flag_overrides() {
        let args = ServerArgs::parse_from([
            "chowk-api",
            "--bind",
            "0.0.0.0:8080",
            "--default-location",
            "Delhi",
        ]);
        assert_eq!(args.bind.port(), 8080);
        assert_eq!(args.default_location, "Delhi");
    }
}
