//! Core `TextGenerationProvider` trait, its error type, and the HTTP helpers
//! shared by the concrete adapters.
//!
//! Each adapter turns one prompt into one request against its provider's
//! REST API and pulls the primary text out of the response.  Connection
//! details come from [`ProviderConfig`]; nothing is hardcoded beyond the
//! default base URLs in the config module.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{GenerationConfig, ProviderConfig};

// ---------------------------------------------------------------------------
// ProviderError
// ---------------------------------------------------------------------------

/// Errors that can occur while calling a text-generation provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The provider answered with a non-success status (bad key, quota,
    /// content rejection, ...).
    #[error("provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be parsed as expected JSON.
    #[error("failed to parse provider response: {0}")]
    Parse(String),

    /// The response had no usable text content.
    #[error("provider returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Request(error_chain(&e))
        }
    }
}

/// `err` followed by every cause in its source chain, joined with `": "`.
///
/// A cause whose text already appears in the message is skipped, since some
/// errors repeat their source in their own `Display`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

// ---------------------------------------------------------------------------
// TextGenerationProvider trait
// ---------------------------------------------------------------------------

/// Async trait for a single-shot text-generation backend.
///
/// Implementors must be `Send + Sync` so one instance, built at startup, can
/// be shared behind `Arc<dyn TextGenerationProvider>`.
///
/// # Arguments
/// * `prompt` – The complete instruction text, sent as the only message.
/// * `params` – Output ceiling and temperature, identical for all providers.
#[async_trait]
pub trait TextGenerationProvider: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &str;

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationConfig,
    ) -> Result<String, ProviderError>;
}

// ---------------------------------------------------------------------------
// Shared HTTP helpers
// ---------------------------------------------------------------------------

/// Build the HTTP client for one provider.
///
/// A timeout is applied only when `config.timeout_secs` is set.  A default
/// client is used as a last-resort fallback if the builder fails.
pub(crate) fn build_client(config: &ProviderConfig) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }
    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}

/// Send a prepared request and decode the JSON body.
///
/// Non-success statuses become [`ProviderError::Status`], carrying the
/// provider's own error message when it can be found.
pub(crate) async fn send_json(
    request: reqwest::RequestBuilder,
) -> Result<serde_json::Value, ProviderError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }

    response
        .json()
        .await
        .map_err(|e| ProviderError::Parse(error_chain(&e)))
}

/// Pull `error.message` out of an error body, or return the body as-is.
///
/// Anthropic, OpenAI and Gemini all nest the human-readable reason there.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Reject missing or empty text.
pub(crate) fn non_empty(text: Option<String>) -> Result<String, ProviderError> {
    match text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ProviderError::EmptyResponse),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_nested_message() {
        let body = r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#;
        assert_eq!(error_message(body), "invalid x-api-key");
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
        assert_eq!(error_message(r#"{"detail":"nope"}"#), r#"{"detail":"nope"}"#);
    }

    #[test]
    fn non_empty_rejects_missing_and_blank() {
        assert!(matches!(non_empty(None), Err(ProviderError::EmptyResponse)));
        assert!(matches!(
            non_empty(Some(String::new())),
            Err(ProviderError::EmptyResponse)
        ));
        assert_eq!(non_empty(Some(" x ".into())).unwrap(), " x ");
    }

    #[test]
    fn status_error_display_includes_reason() {
        let err = ProviderError::Status {
            status: 401,
            message: "invalid x-api-key".into(),
        };
        assert_eq!(err.to_string(), "provider returned HTTP 401: invalid x-api-key");
    }

    #[derive(Debug, Error)]
    #[error("error sending request for url (http://127.0.0.1:1/v1/messages)")]
    struct Sending(#[source] Connecting);

    #[derive(Debug, Error)]
    #[error("client error (Connect)")]
    struct Connecting(#[source] std::io::Error);

    #[test]
    fn error_chain_appends_every_cause() {
        let err = Sending(Connecting(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        )));
        assert_eq!(
            error_chain(&err),
            "error sending request for url (http://127.0.0.1:1/v1/messages): \
             client error (Connect): Connection refused"
        );
    }

    #[derive(Debug, Error)]
    #[error("decode failed: {0}")]
    struct Repeats(#[source] std::io::Error);

    #[test]
    fn error_chain_skips_causes_already_in_the_message() {
        let err = Repeats(std::io::Error::other("eof"));
        assert_eq!(error_chain(&err), "decode failed: eof");
    }

    #[tokio::test]
    async fn refused_connection_keeps_the_underlying_cause() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let err = reqwest::Client::new()
            .post(format!("http://{addr}/v1/messages"))
            .send()
            .await
            .unwrap_err();

        let ProviderError::Request(message) = ProviderError::from(err) else {
            panic!("expected a request error");
        };
        assert!(message.starts_with("error sending request"), "{message}");
        assert!(message.to_lowercase().contains("refused"), "{message}");
    }

    #[test]
    fn build_client_with_and_without_timeout() {
        let mut config = ProviderConfig::openai();
        let _ = build_client(&config);
        config.timeout_secs = Some(5);
        let _ = build_client(&config);
    }
}
