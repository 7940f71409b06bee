//! Anthropic Messages API adapter (`POST /v1/messages`).

use async_trait::async_trait;

use crate::config::{GenerationConfig, ProviderConfig};
use crate::llm::provider::{
    build_client, non_empty, send_json, ProviderError, TextGenerationProvider,
};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Calls Claude models through the Messages API.
///
/// The key goes in the `x-api-key` header.  It is sent even when empty so a
/// missing credential surfaces as the provider's own authentication error.
pub struct AnthropicProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl AnthropicProvider {
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self {
            client: build_client(config),
            config: config.clone(),
        }
    }

    fn request_body(&self, prompt: &str, params: &GenerationConfig) -> serde_json::Value {
        serde_json::json!({
            "model":       self.config.model,
            "max_tokens":  params.max_tokens,
            "temperature": params.temperature,
            "messages": [
                { "role": "user", "content": prompt }
            ]
        })
    }
}

/// First content block's text.
fn extract_text(json: &serde_json::Value) -> Result<String, ProviderError> {
    non_empty(json["content"][0]["text"].as_str().map(str::to_string))
}

#[async_trait]
impl TextGenerationProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationConfig,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/v1/messages", self.config.base_url);

        let request = self
            .client
            .post(&url)
            .header("x-api-key", self.config.api_key_or_empty())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&self.request_body(prompt, params));

        let json = send_json(request).await?;
        extract_text(&json)
    }
}
