//! Article-to-video-script writer.
//!
//! Collects editorial settings, compiles them into an instruction prompt and
//! asks one of several LLM providers for a two-column (NARRATION / VISUALS)
//! markdown script.

pub mod cli;
pub mod config;
pub mod llm;
pub mod script;
