//! Provider construction from configuration.

use std::sync::Arc;
use std::time::Duration;

use studyplan_config::{AppConfig, ConfigError};
use studyplan_core::provider::Provider;

use crate::openai_compat::OpenAiCompatProvider;

/// Build the configured completion provider.
///
/// Fails with [`ConfigError::MissingApiKey`] before anything touches the
/// network when no credential is available.
pub fn build_from_config(config: &AppConfig) -> Result<Arc<dyn Provider>, ConfigError> {
    let api_key = config.require_api_key()?;

    let base_url = config
        .api_url
        .clone()
        .unwrap_or_else(|| default_base_url(&config.provider));

    let provider = OpenAiCompatProvider::new(
        &config.provider,
        base_url,
        api_key,
        Duration::from_secs(config.request_timeout_secs),
    )
    .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    tracing::debug!(provider = %config.provider, base_url = %provider.base_url(), "Provider ready");
    Ok(Arc::new(provider))
}

/// Get the default base URL for well-known providers.
pub fn default_base_url(provider_name: &str) -> String {
    match provider_name {
        "groq" => "https://api.groq.com/openai/v1".into(),
        "openai" => "https://api.openai.com/v1".into(),
        "openrouter" => "https://openrouter.ai/api/v1".into(),
        "together" => "https://api.together.xyz/v1".into(),
        "deepseek" => "https://api.deepseek.com/v1".into(),
        "ollama" => "http://localhost:11434/v1".into(),
        "vllm" => "http://localhost:8000/v1".into(),
        "llamacpp" | "llama.cpp" => "http://localhost:8080/v1".into(),
        _ => format!("https://{provider_name}.api.example.com/v1"),
    }
}
