//! Provider selection from configuration.

use std::sync::Arc;
use std::time::Duration;
use parley_core::provider::Provider;
use tracing::info;
use crate::ollama::{self, OllamaProvider};
use crate::openai_compat::OpenAiCompatProvider;

/// Build the configured provider.
///
/// `"ollama"` talks to Ollama's native chat API; every other name is treated
/// as an OpenAI-compatible endpoint. `api_url` overrides the well-known base
/// URL for either kind.
pub fn build_from_config(config: &parley_config::AppConfig) -> Arc<dyn Provider> {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let name = config.provider.as_str();

    let provider: Arc<dyn Provider> = if name == "ollama" {
        let base_url = config
            .api_url
            .clone()
            .unwrap_or_else(|| ollama::DEFAULT_BASE_URL.into());
        Arc::new(OllamaProvider::new(base_url, timeout))
    } else {
        let base_url = config
            .api_url
            .clone()
            .unwrap_or_else(|| default_base_url(name));
        let api_key = config.api_key.clone().unwrap_or_default();
        Arc::new(OpenAiCompatProvider::with_timeout(name, base_url, api_key, timeout))
    };

    info!(provider = provider.name(), model = %config.model, "Generation provider ready");
    provider
}

/// Get the default base URL for well-known OpenAI-compatible providers.
fn default_base_url(provider_name: &str) -> String {
    match provider_name {
        "openrouter" => "https://openrouter.ai/api/v1".into(),
        "openai" => "https://api.openai.com/v1".into(),
        "deepseek" => "https://api.deepseek.com/v1".into(),
        "groq" => "https://api.groq.com/openai/v1".into(),
        "together" => "https://api.together.xyz/v1".into(),
        "vllm" => "http://localhost:8000/v1".into(),
        "llamacpp" | "llama.cpp" => "http://localhost:8080/v1".into(),
        _ => format!("https://{provider_name}.api.example.com/v1"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_urls() {
        assert!(default_base_url("openrouter").contains("openrouter.ai"));
        assert!(default_base_url("openai").contains("api.openai.com"));
        assert!(default_base_url("vllm").contains("localhost:8000"));
    }

    #[test]
    fn build_from_default_config_is_ollama() {
        let config = parley_config::AppConfig::default();
        let provider = build_from_config(&config);
        assert_eq!(provider.name(), "ollama");
    }

    #[test]
    fn other_names_are_openai_compatible() {
        let config = parley_config::AppConfig {
            provider: "groq".into(),
            api_key: Some("gsk-test".into()),
            ..Default::default()
        };
        let provider = build_from_config(&config);
        assert_eq!(provider.name(), "groq");
    }
}
