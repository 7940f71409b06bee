//! Application settings structs, defaults and TOML loading.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files.  Provider credentials
//! normally come from the environment (see [`AppConfig::apply_env`]) rather
//! than the file, but a key written to `settings.toml` is honoured when the
//! matching variable is unset.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

/// Environment variable holding the Anthropic API key.
pub const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable holding the Google AI Studio API key.
pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";

// ---------------------------------------------------------------------------
// GenerationConfig
// ---------------------------------------------------------------------------

/// Generation parameters sent with every provider request.
///
/// The same values go to every provider; they are not tuned per backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Upper bound on the length of the generated script, in tokens.
    pub max_tokens: u32,
    /// Sampling temperature (0.0 – 1.0).
    pub temperature: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: 4000,
            temperature: 0.7,
        }
    }
}

// ---------------------------------------------------------------------------
// ProviderConfig
// ---------------------------------------------------------------------------

/// Connection settings for one text-generation provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// API key.  `None` until loaded from the environment or the file.
    pub api_key: Option<String>,
    /// Model identifier sent to the API.
    pub model: String,
    /// Per-request timeout.  `None` leaves the HTTP client's default in
    /// place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    fn new(base_url: &str, model: &str) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            model: model.into(),
            timeout_secs: None,
        }
    }

    /// Returns the API key, or an empty string when none is configured.
    pub fn api_key_or_empty(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }

    /// Default Anthropic Messages API settings.
    pub fn anthropic() -> Self {
        Self::new("https://api.anthropic.com", "claude-3-7-sonnet-latest")
    }

    /// Default OpenAI Chat Completions settings.
    pub fn openai() -> Self {
        Self::new("https://api.openai.com", "gpt-4o")
    }

    /// Default Google Gemini settings.
    pub fn gemini() -> Self {
        Self::new("https://generativelanguage.googleapis.com", "gemini-2.5-pro")
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use script_writer::config::AppConfig;
///
/// // Load (returns Default when file is missing), then overlay env keys.
/// let mut config = AppConfig::load().unwrap();
/// config.apply_env();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Parameters shared by all providers.
    pub generation: GenerationConfig,
    /// Anthropic (Claude) connection.
    pub anthropic: ProviderConfig,
    /// OpenAI (GPT) connection.
    pub openai: ProviderConfig,
    /// Google (Gemini) connection.
    pub gemini: ProviderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            anthropic: ProviderConfig::anthropic(),
            openai: ProviderConfig::openai(),
            gemini: ProviderConfig::gemini(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Overlay API keys from the process environment.
    ///
    /// Called once at startup.  Missing variables leave the file values
    /// untouched; an absent key is not an error here and only surfaces when
    /// the provider rejects the request.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    /// Overlay API keys using an arbitrary lookup (useful for tests).
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let targets = [
            (ANTHROPIC_API_KEY_ENV, &mut self.anthropic),
            (OPENAI_API_KEY_ENV, &mut self.openai),
            (GOOGLE_API_KEY_ENV, &mut self.gemini),
        ];
        for (var, provider) in targets {
            if let Some(key) = lookup(var).filter(|k| !k.is_empty()) {
                provider.api_key = Some(key);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
