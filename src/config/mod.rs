//! Configuration module for the script writer.
//!
//! Provides `AppConfig` (generation parameters plus one connection section
//! per provider), `AppPaths` for the platform config directory, and TOML
//! loading via `AppConfig::load` / `AppConfig::load_from`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{
    AppConfig, GenerationConfig, ProviderConfig, ANTHROPIC_API_KEY_ENV, GOOGLE_API_KEY_ENV,
    OPENAI_API_KEY_ENV,
};
