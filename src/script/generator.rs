//! Script generator: compiles the prompt, dispatches to the selected
//! provider, and collapses any failure into a display string.
//!
//! Two layers:
//! * [`ScriptGenerator::try_generate`] returns a typed `Result` with
//!   [`ScriptError`] for callers that want to branch on the failure kind.
//! * [`ScriptGenerator::generate`] never fails: errors become strings that
//!   start with `"Error"`, which is what the form layer inspects.

use thiserror::Error;

use crate::config::{AppConfig, GenerationConfig};
use crate::llm::{ProviderError, ProviderRegistry};
use crate::script::prompt::compile_prompt;
use crate::script::settings::ScriptSettings;

/// Every error string produced by [`ScriptGenerator::generate`] starts with
/// this.
pub const ERROR_PREFIX: &str = "Error";

/// Returned verbatim when `ai_model` names no registered provider.
pub const INVALID_MODEL_MESSAGE: &str = "Error: Invalid AI model selected";

/// Returns `true` when `result` is an error string rather than a script.
///
/// ```
/// use script_writer::script::is_error_result;
///
/// assert!(is_error_result("Error: Invalid AI model selected"));
/// assert!(!is_error_result("| NARRATION | VISUALS |"));
/// ```
pub fn is_error_result(result: &str) -> bool {
    result.starts_with(ERROR_PREFIX)
}

// ---------------------------------------------------------------------------
// ScriptError
// ---------------------------------------------------------------------------

/// Why a script could not be generated.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// `ai_model` matched no registered provider.  No request was sent.
    #[error("invalid AI model selected: {0:?}")]
    InvalidModel(String),

    /// The provider call failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ScriptError {
    /// The string shown to users in place of a script.
    pub fn display_message(&self) -> String {
        match self {
            ScriptError::InvalidModel(_) => INVALID_MODEL_MESSAGE.to_string(),
            ScriptError::Provider(e) => format!("Error generating script: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// ScriptGenerator
// ---------------------------------------------------------------------------

/// Turns settings and an article into a two-column markdown script.
///
/// The registry and generation parameters are injected, so tests can swap in
/// fake providers without touching the network.
///
/// # Example
/// ```rust,no_run
/// use script_writer::config::AppConfig;
/// use script_writer::script::{ScriptGenerator, VideoType};
///
/// # async fn example() {
/// let mut config = AppConfig::default();
/// config.apply_env();
/// let generator = ScriptGenerator::from_config(&config);
///
/// let settings = VideoType::KidsNews.preset();
/// let script = generator.generate(&settings, "Volcanoes are mountains that...").await;
/// println!("{script}");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScriptGenerator {
    registry: ProviderRegistry,
    params: GenerationConfig,
}

impl ScriptGenerator {
    pub fn new(registry: ProviderRegistry, params: GenerationConfig) -> Self {
        Self { registry, params }
    }

    /// Build the HTTP adapters for every provider from application config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            ProviderRegistry::from_config(config),
            config.generation.clone(),
        )
    }

    /// Generate a script, returning the provider's text unmodified.
    ///
    /// Exactly one provider request is made on the success path, and none
    /// when the selector is unknown.
    pub async fn try_generate(
        &self,
        settings: &ScriptSettings,
        article: &str,
    ) -> Result<String, ScriptError> {
        let Some(provider) = self.registry.lookup(&settings.ai_model) else {
            log::warn!("No provider registered for {:?}", settings.ai_model);
            return Err(ScriptError::InvalidModel(settings.ai_model.clone()));
        };

        let prompt = compile_prompt(settings, article);
        log::info!(
            "Generating {} script via {} (prompt {} bytes, article {} bytes)",
            settings.video_type,
            provider.name(),
            prompt.len(),
            article.len()
        );

        let script = provider.generate(&prompt, &self.params).await?;
        log::debug!("{} returned {} bytes", provider.name(), script.len());
        Ok(script)
    }

    /// Generate a script, or an `"Error…"` string describing the failure.
    ///
    /// This never returns an error.
    pub async fn generate(&self, settings: &ScriptSettings, article: &str) -> String {
        match self.try_generate(settings, article).await {
            Ok(script) => script,
            Err(err) => {
                if let ScriptError::Provider(e) = &err {
                    log::warn!("Script generation failed: {e}");
                }
                err.display_message()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
