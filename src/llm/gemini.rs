//! Google Gemini adapter (`POST /v1beta/models/{model}:generateContent`).

use async_trait::async_trait;

use crate::config::{GenerationConfig, ProviderConfig};
use crate::llm::provider::{
    build_client, non_empty, send_json, ProviderError, TextGenerationProvider,
};

/// Calls Gemini models through the Generative Language API.
///
/// The key travels in the `x-goog-api-key` header rather than the query
/// string so it never shows up in logged URLs.
pub struct GeminiProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl GeminiProvider {
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self {
            client: build_client(config),
            config: config.clone(),
        }
    }

    fn request_body(&self, prompt: &str, params: &GenerationConfig) -> serde_json::Value {
        serde_json::json!({
            "contents": [
                { "role": "user", "parts": [ { "text": prompt } ] }
            ],
            "generationConfig": {
                "maxOutputTokens": params.max_tokens,
                "temperature":     params.temperature
            }
        })
    }
}

/// All text parts of the first candidate, concatenated.
fn extract_text(json: &serde_json::Value) -> Result<String, ProviderError> {
    let parts = json["candidates"][0]["content"]["parts"].as_array();
    let text = parts.map(|parts| {
        parts
            .iter()
            .filter_map(|part| part["text"].as_str())
            .collect::<String>()
    });
    non_empty(text)
}

#[async_trait]
impl TextGenerationProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationConfig,
    ) -> Result<String, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let request = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.config.api_key_or_empty())
            .json(&self.request_body(prompt, params));

        let json = send_json(request).await?;
        extract_text(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::llm::test_server::serve_once;

    fn local_provider(base_url: String) -> GeminiProvider {
        let mut config = ProviderConfig::gemini();
        config.base_url = base_url;
        config.api_key = Some("test-key".into());
        GeminiProvider::from_config(&config)
    }

    #[test]
    fn request_body_sets_generation_config() {
        let provider = GeminiProvider::from_config(&ProviderConfig::gemini());
        let body = provider.request_body("hello", &GenerationConfig::default());

        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 4000);
        assert_eq!(body["generationConfig"]["temperature"], 0.7);
    }

    #[test]
    fn concatenates_parts_of_first_candidate() {
        let response = json!({
            "candidates": [
                { "content": { "role": "model", "parts": [ { "text": "| A " }, { "text": "| B |" } ] } },
                { "content": { "parts": [ { "text": "other" } ] } }
            ]
        });
        assert_eq!(extract_text(&response).unwrap(), "| A | B |");
    }

    #[test]
    fn blocked_prompt_has_no_candidates() {
        let response = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        assert!(matches!(
            extract_text(&response),
            Err(ProviderError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn generate_posts_to_model_path_with_goog_key() {
        let reply = json!({
            "candidates": [
                { "content": { "parts": [
                    { "text": "| NARRATION | VISUALS |\n" },
                    { "text": "|-----------|---------|\n\n" }
                ] } }
            ]
        })
        .to_string();
        let (base_url, request) = serve_once(200, &reply).await;

        let text = local_provider(base_url)
            .generate("Write a script", &GenerationConfig::default())
            .await
            .unwrap();
        let request = request.await.unwrap();

        assert_eq!(text, "| NARRATION | VISUALS |\n|-----------|---------|\n\n");
        assert_eq!(
            request.request_line(),
            "POST /v1beta/models/gemini-2.5-pro:generateContent HTTP/1.1"
        );
        assert_eq!(request.header("x-goog-api-key"), Some("test-key"));
        assert_eq!(request.json()["contents"][0]["parts"][0]["text"], "Write a script");
    }

    #[tokio::test]
    async fn generate_maps_rejection_to_status_error() {
        let reply = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        let (base_url, request) = serve_once(400, reply).await;

        let err = local_provider(base_url)
            .generate("Write a script", &GenerationConfig::default())
            .await
            .unwrap_err();
        request.await.unwrap();

        assert!(matches!(
            err,
            ProviderError::Status { status: 400, ref message }
                if message == "API key not valid. Please pass a valid API key."
        ));
    }
}
