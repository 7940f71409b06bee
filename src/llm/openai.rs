//! OpenAI Chat Completions adapter (`POST /v1/chat/completions`).
//!
//! Any OpenAI-compatible endpoint works by pointing `base_url` elsewhere.

use async_trait::async_trait;

use crate::config::{GenerationConfig, ProviderConfig};
use crate::llm::provider::{
    build_client, non_empty, send_json, ProviderError, TextGenerationProvider,
};

/// Calls GPT models through the chat-completions wire format.
pub struct OpenAiProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl OpenAiProvider {
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self {
            client: build_client(config),
            config: config.clone(),
        }
    }

    fn request_body(&self, prompt: &str, params: &GenerationConfig) -> serde_json::Value {
        serde_json::json!({
            "model":       self.config.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "stream":      false,
            "temperature": params.temperature,
            "max_tokens":  params.max_tokens
        })
    }
}

fn extract_text(json: &serde_json::Value) -> Result<String, ProviderError> {
    non_empty(
        json["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string),
    )
}

#[async_trait]
impl TextGenerationProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    /// The bearer header is always attached; an unset key is rejected by the
    /// server like any other bad credential.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationConfig,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);

        let request = self
            .client
            .post(&url)
            .bearer_auth(self.config.api_key_or_empty())
            .json(&self.request_body(prompt, params));

        let json = send_json(request).await?;
        extract_text(&json)
    }
}
