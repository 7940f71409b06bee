//! The editorial settings record that drives prompt compilation.
//!
//! [`ScriptSettings`] is a flat record built by the caller once per
//! generation.  The ordered categorical fields (tone, knowledge level and the
//! three stance axes) are enums whose labels are exactly the strings that end
//! up in the prompt; the presenter and locale fields are free-form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// SettingsError
// ---------------------------------------------------------------------------

/// Problems a caller can detect before handing settings to the generator.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    /// A categorical field was given a label it does not recognise.
    #[error("unknown {field} value: {value:?}")]
    UnknownValue { field: &'static str, value: String },

    /// Density must lie in `[0.0, 1.0]`.
    #[error("information density must be between 0 and 1, got {0}")]
    DensityOutOfRange(f64),

    /// Length must be a positive number of minutes.
    #[error("target length must be a positive number of minutes, got {0}")]
    InvalidLength(f64),

    /// No AI model was selected.
    #[error("no AI model selected")]
    EmptyModel,
}

// ---------------------------------------------------------------------------
// Labelled enums
// ---------------------------------------------------------------------------

macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            /// Every value, in ascending order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label shown to users and interpolated into prompts.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = SettingsError;

            /// Parses a label, ignoring ASCII case.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| SettingsError::UnknownValue {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

labelled_enum! {
    /// Category of video the script is written for.
    VideoType, "video type" {
        BroadcastNews => "Broadcast News",
        Tiktok => "Tiktok",
        Opinion => "Opinion",
        KidsNews => "Kids News",
    }
}

labelled_enum! {
    /// Overall register of the narration.
    Tone, "tone" {
        Casual => "Casual",
        Conversational => "Conversational",
        Professional => "Professional",
    }
}

labelled_enum! {
    /// Assumed background knowledge of the audience.
    KnowledgeLevel, "knowledge level" {
        Beginner => "Beginner",
        Intermediate => "Intermediate",
        Advanced => "Advanced",
    }
}

labelled_enum! {
    /// Political framing, left to right.
    PoliticalStance, "political stance" {
        Progressive => "Progressive",
        ModerateLeft => "Moderate Left",
        Centrist => "Centrist",
        ModerateRight => "Moderate Right",
        Conservative => "Conservative",
    }
}

labelled_enum! {
    /// Economic framing.
    EconomicStance, "economic stance" {
        ProLabor => "Pro-labor",
        Balanced => "Balanced",
        ProBusiness => "Pro-business",
    }
}

labelled_enum! {
    /// Social framing.
    SocialStance, "social stance" {
        Progressive => "Progressive",
        Balanced => "Balanced",
        Traditional => "Traditional",
    }
}

impl Default for PoliticalStance {
    fn default() -> Self {
        Self::Centrist
    }
}

impl Default for EconomicStance {
    fn default() -> Self {
        Self::Balanced
    }
}

impl Default for SocialStance {
    fn default() -> Self {
        Self::Balanced
    }
}

// ---------------------------------------------------------------------------
// ScriptSettings
// ---------------------------------------------------------------------------

/// Every editorial parameter that shapes one generated script.
///
/// All fields are required when deserialising, so a settings file with a
/// missing field is rejected up front instead of producing a partial prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSettings {
    pub video_type: VideoType,
    pub tone: Tone,
    /// Target duration in minutes.
    pub length: f64,
    /// Information density, `0.0` (low) to `1.0` (high).
    pub density: f64,
    pub knowledge_level: KnowledgeLevel,
    pub geo_background: String,
    pub similar_to: String,
    pub language: String,
    pub enable_opinions: bool,
    pub political: PoliticalStance,
    pub economic: EconomicStance,
    pub social: SocialStance,
    pub additional_instructions: String,
    /// Provider selector label, e.g. `"Claude 3.7"`.  Kept as a string so an
    /// unknown selection is an ordinary generation outcome.
    pub ai_model: String,
    /// Whether the user asked to draw on a custom dataset.  Recorded but not
    /// used for generation.
    #[serde(default)]
    pub custom_dataset: bool,
}

impl ScriptSettings {
    /// Returns a copy with the stance fields reset to their neutral defaults
    /// when opinions are disabled.
    ///
    /// ```
    /// use script_writer::script::{PoliticalStance, VideoType};
    ///
    /// let mut settings = VideoType::BroadcastNews.preset();
    /// settings.political = PoliticalStance::Conservative;
    /// assert_eq!(settings.normalized().political, PoliticalStance::Centrist);
    /// ```
    pub fn normalized(mut self) -> Self {
        if !self.enable_opinions {
            self.political = PoliticalStance::default();
            self.economic = EconomicStance::default();
            self.social = SocialStance::default();
        }
        self
    }

    /// Caller-side sanity checks.  The generator itself never calls this.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.density.is_finite() || !(0.0..=1.0).contains(&self.density) {
            return Err(SettingsError::DensityOutOfRange(self.density));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(SettingsError::InvalidLength(self.length));
        }
        if self.ai_model.trim().is_empty() {
            return Err(SettingsError::EmptyModel);
        }
        Ok(())
    }
}

impl Default for ScriptSettings {
    fn default() -> Self {
        VideoType::BroadcastNews.preset()
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

impl VideoType {
    /// The default settings bundle for this category.
    pub fn preset(self) -> ScriptSettings {
        let base = ScriptSettings {
            video_type: self,
            tone: Tone::Professional,
            length: 2.0,
            density: 0.7,
            knowledge_level: KnowledgeLevel::Advanced,
            geo_background: "U.S.".into(),
            similar_to: "News Anchor".into(),
            language: "English (US)".into(),
            enable_opinions: false,
            political: PoliticalStance::Centrist,
            economic: EconomicStance::Balanced,
            social: SocialStance::Balanced,
            additional_instructions: String::new(),
            ai_model: "Claude 3.7".into(),
            custom_dataset: false,
        };

        match self {
            VideoType::BroadcastNews => ScriptSettings {
                additional_instructions: "Use formal transitions between segments. \
                    Include clear attribution for sources and statistics. \
                    Start with a concise headline and end with a brief summary."
                    .into(),
                ..base
            },
            VideoType::Tiktok => ScriptSettings {
                tone: Tone::Casual,
                length: 0.3,
                density: 0.3,
                knowledge_level: KnowledgeLevel::Beginner,
                similar_to: "Social Media Influencer".into(),
                enable_opinions: true,
                ai_model: "Gemini Pro".into(),
                additional_instructions: "Use attention-grabbing first 3 seconds. \
                    Keep sentences under 10 words."
                    .into(),
                ..base
            },
            VideoType::Opinion => ScriptSettings {
                tone: Tone::Conversational,
                length: 3.0,
                density: 0.5,
                similar_to: "Podcaster".into(),
                enable_opinions: true,
                additional_instructions: "Start with personal anecdote or question. \
                    Present balanced counterarguments before addressing them. \
                    Use first-person perspective. Incorporate rhetorical questions. \
                    End with thought-provoking takeaway."
                    .into(),
                ..base
            },
            VideoType::KidsNews => ScriptSettings {
                tone: Tone::Casual,
                length: 1.5,
                density: 0.2,
                knowledge_level: KnowledgeLevel::Beginner,
                similar_to: "Neutral/Generic".into(),
                ai_model: "GPT 4o".into(),
                additional_instructions: "Use simple vocabulary (grades 3-5 reading level). \
                    Explain any complex terms. Ask engaging questions throughout. \
                    Use analogies related to school, family, or popular kids' culture. \
                    End with a fun fact. Avoid frightening content or tone. \
                    Include suggestions for adults to discuss topic further."
                    .into(),
                ..base
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
