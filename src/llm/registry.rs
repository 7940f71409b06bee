//! Provider selector and the registry that maps it to an adapter.
//!
//! The settings record names its provider with a user-facing label
//! (`"Claude 3.7"`, `"GPT 4o"`, `"Gemini 2.5"`).  [`ProviderKind`] is the
//! closed set of recognised labels; [`ProviderRegistry`] holds one
//! `Arc<dyn TextGenerationProvider>` per kind, built once at startup.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::llm::anthropic::AnthropicProvider;
use crate::llm::gemini::GeminiProvider;
use crate::llm::openai::OpenAiProvider;
use crate::llm::provider::TextGenerationProvider;

// ---------------------------------------------------------------------------
// ProviderKind
// ---------------------------------------------------------------------------

/// The supported providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Anthropic,
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::Anthropic,
        ProviderKind::OpenAi,
        ProviderKind::Gemini,
    ];

    /// Exact-match lookup of a selector label.
    ///
    /// `"Gemini Pro"` is accepted as an alias because the Tiktok preset and
    /// older settings files use it.
    ///
    /// ```
    /// use script_writer::llm::ProviderKind;
    ///
    /// assert_eq!(ProviderKind::from_selector("GPT 4o"), Some(ProviderKind::OpenAi));
    /// assert_eq!(ProviderKind::from_selector("gpt 4o"), None);
    /// ```
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "Claude 3.7" => Some(ProviderKind::Anthropic),
            "GPT 4o" => Some(ProviderKind::OpenAi),
            "Gemini 2.5" | "Gemini Pro" => Some(ProviderKind::Gemini),
            _ => None,
        }
    }

    /// The canonical selector label.
    pub fn selector(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "Claude 3.7",
            ProviderKind::OpenAi => "GPT 4o",
            ProviderKind::Gemini => "Gemini 2.5",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

// ---------------------------------------------------------------------------
// ProviderRegistry
// ---------------------------------------------------------------------------

/// Lookup from [`ProviderKind`] to a ready-to-use adapter.
///
/// Adding a provider means one new adapter, one `ProviderKind` variant and
/// one `register` call.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, Arc<dyn TextGenerationProvider>>,
}

impl ProviderRegistry {
    /// An empty registry.  Every selector resolves to `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build all three HTTP adapters from application config.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut registry = Self::new();
        registry.register(
            ProviderKind::Anthropic,
            Arc::new(AnthropicProvider::from_config(&config.anthropic)),
        );
        registry.register(
            ProviderKind::OpenAi,
            Arc::new(OpenAiProvider::from_config(&config.openai)),
        );
        registry.register(
            ProviderKind::Gemini,
            Arc::new(GeminiProvider::from_config(&config.gemini)),
        );
        registry
    }

    /// Insert or replace the adapter for `kind`, returning the previous one.
    pub fn register(
        &mut self,
        kind: ProviderKind,
        provider: Arc<dyn TextGenerationProvider>,
    ) -> Option<Arc<dyn TextGenerationProvider>> {
        self.providers.insert(kind, provider)
    }

    pub fn get(&self, kind: ProviderKind) -> Option<Arc<dyn TextGenerationProvider>> {
        self.providers.get(&kind).cloned()
    }

    /// Resolve a selector label straight to its adapter.
    pub fn lookup(&self, selector: &str) -> Option<Arc<dyn TextGenerationProvider>> {
        ProviderKind::from_selector(selector).and_then(|kind| self.get(kind))
    }

    /// Registered kinds, in [`ProviderKind::ALL`] order.
    pub fn kinds(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|kind| self.providers.contains_key(kind))
            .collect()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
