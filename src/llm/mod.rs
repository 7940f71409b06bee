//! Text-generation providers for the script writer.
//!
//! This module provides:
//! * [`TextGenerationProvider`]: async trait implemented by every backend.
//! * [`AnthropicProvider`], [`OpenAiProvider`], [`GeminiProvider`]: REST
//!   adapters for the three supported services.
//! * [`ProviderKind`] / [`ProviderRegistry`]: selector labels and the
//!   lookup the script generator dispatches through.
//! * [`ProviderError`]: error variants for provider calls.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use script_writer::config::AppConfig;
//! use script_writer::llm::ProviderRegistry;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut config = AppConfig::default();
//!     config.apply_env();
//!
//!     let registry = ProviderRegistry::from_config(&config);
//!     let provider = registry.lookup("Claude 3.7").unwrap();
//!     let text = provider
//!         .generate("Say hello as a markdown table.", &config.generation)
//!         .await
//!         .unwrap();
//!     println!("{text}");
//! }
//! ```

pub mod anthropic;
pub mod gemini;
pub mod openai;
pub mod provider;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_server;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
pub use provider::{ProviderError, TextGenerationProvider};
pub use registry::{ProviderKind, ProviderRegistry};
