//! Command-line arguments and their translation into [`ScriptSettings`].
//!
//! Settings are layered: the `--video-type` preset (or a `--settings` TOML
//! file) first, then any per-field flags, then stance normalization.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::script::{
    EconomicStance, KnowledgeLevel, PoliticalStance, ScriptSettings, SocialStance, Tone,
    VideoType, DEFAULT_SCRIPT_FILE,
};

#[derive(Parser, Debug)]
#[command(
    name = "script-writer",
    version,
    about = "Turn an article into a two-column video script using an LLM"
)]
pub struct Args {
    /// Article to convert; `-` reads from stdin
    #[arg(long, short)]
    pub article: String,

    /// Preset to start from: "Broadcast News", "Tiktok", "Opinion", "Kids News"
    #[arg(long, default_value = "Broadcast News")]
    pub video_type: VideoType,

    /// TOML file with a complete settings record (replaces the preset)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Application config file (defaults to the platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// AI model: "Claude 3.7", "GPT 4o" or "Gemini 2.5"
    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub tone: Option<Tone>,

    #[arg(long)]
    pub knowledge_level: Option<KnowledgeLevel>,

    /// Target length in minutes
    #[arg(long)]
    pub length: Option<f64>,

    /// Information density, 0.0 (low) to 1.0 (high)
    #[arg(long)]
    pub density: Option<f64>,

    #[arg(long)]
    pub language: Option<String>,

    #[arg(long)]
    pub geo_background: Option<String>,

    /// Presenter the narration should sound like
    #[arg(long)]
    pub similar_to: Option<String>,

    /// Inject the stance settings into the prompt (true/false)
    #[arg(long)]
    pub opinions: Option<bool>,

    #[arg(long)]
    pub political: Option<PoliticalStance>,

    #[arg(long)]
    pub economic: Option<EconomicStance>,

    #[arg(long)]
    pub social: Option<SocialStance>,

    /// Free-form instructions appended to the prompt
    #[arg(long)]
    pub instructions: Option<String>,

    /// Print the compiled prompt and exit without calling a provider
    #[arg(long)]
    pub print_prompt: bool,

    /// Write the script to this file instead of stdout; a bare `--output`
    /// writes `video_script.md`
    #[arg(long, short, num_args = 0..=1, default_missing_value = DEFAULT_SCRIPT_FILE)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Build the final, validated settings record.
    pub fn script_settings(&self) -> Result<ScriptSettings> {
        let mut s = match &self.settings {
            Some(path) => load_settings(path)?,
            None => self.video_type.preset(),
        };

        if let Some(v) = &self.model {
            s.ai_model = v.clone();
        }
        if let Some(v) = self.tone {
            s.tone = v;
        }
        if let Some(v) = self.knowledge_level {
            s.knowledge_level = v;
        }
        if let Some(v) = self.length {
            s.length = v;
        }
        if let Some(v) = self.density {
            s.density = v;
        }
        if let Some(v) = &self.language {
            s.language = v.clone();
        }
        if let Some(v) = &self.geo_background {
            s.geo_background = v.clone();
        }
        if let Some(v) = &self.similar_to {
            s.similar_to = v.clone();
        }
        if let Some(v) = self.opinions {
            s.enable_opinions = v;
        }
        if let Some(v) = self.political {
            s.political = v;
        }
        if let Some(v) = self.economic {
            s.economic = v;
        }
        if let Some(v) = self.social {
            s.social = v;
        }
        if let Some(v) = &self.instructions {
            s.additional_instructions = v.clone();
        }

        let s = s.normalized();
        s.validate()?;
        Ok(s)
    }

    /// Read the article from the file named by `--article`, or stdin.
    pub fn read_article(&self) -> Result<String> {
        let text = if self.article == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading article from stdin")?;
            buf
        } else {
            std::fs::read_to_string(&self.article)
                .with_context(|| format!("reading article {}", self.article))?
        };

        if text.trim().is_empty() {
            bail!("the article is empty");
        }
        Ok(text)
    }
}

/// Parse a complete settings record from TOML.
pub fn load_settings(path: &Path) -> Result<ScriptSettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing settings {}", path.display()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
