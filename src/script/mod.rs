//! Script settings, prompt compilation and generation.
//!
//! This module provides:
//! * [`ScriptSettings`]: the editorial settings record, plus
//!   [`VideoType::preset`] default bundles.
//! * [`compile_prompt`]: settings + article → instruction prompt.
//! * [`ScriptGenerator`]: dispatches the prompt to the selected provider and
//!   returns the script or an `"Error…"` string.
//! * [`save_script`]: markdown export.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use script_writer::config::AppConfig;
//! use script_writer::script::{is_error_result, ScriptGenerator, VideoType};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut config = AppConfig::default();
//!     config.apply_env();
//!     let generator = ScriptGenerator::from_config(&config);
//!
//!     let settings = VideoType::BroadcastNews.preset();
//!     let script = generator.generate(&settings, "City council votes...").await;
//!     if is_error_result(&script) {
//!         eprintln!("{script}");
//!     } else {
//!         println!("{script}");
//!     }
//! }
//! ```

pub mod export;
pub mod generator;
pub mod prompt;
pub mod settings;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use export::{save_script, DEFAULT_SCRIPT_FILE};
pub use generator::{
    is_error_result, ScriptError, ScriptGenerator, ERROR_PREFIX, INVALID_MODEL_MESSAGE,
};
pub use prompt::{compile_prompt, NEUTRAL_STANCE, TABLE_HEADER, TABLE_SEPARATOR};
pub use settings::{
    EconomicStance, KnowledgeLevel, PoliticalStance, ScriptSettings, SettingsError, SocialStance,
    Tone, VideoType,
};
