//! Prompt compiler: turns a [`ScriptSettings`] record and an article into
//! the single instruction string sent to a provider.
//!
//! Section order:
//! 1. Role framing (video category)
//! 2. Writing style
//! 3. Stance block: three stance lines, or the neutral sentence
//! 4. Additional instructions (verbatim, possibly empty)
//! 5. Output format: the literal table template
//! 6. The article, unmodified
//! 7. Reminder of the format rules
//!
//! Compilation is pure: the same inputs always yield the same bytes.

use std::fmt::Write as _;

use super::settings::ScriptSettings;

// ---------------------------------------------------------------------------
// Fixed text
// ---------------------------------------------------------------------------

/// Emitted instead of the stance lines when opinions are disabled.
pub const NEUTRAL_STANCE: &str = "Maintain neutral, factual stance";

/// Header row of the generated table.
pub const TABLE_HEADER: &str = "| NARRATION | VISUALS |";

/// Separator row of the generated table.
pub const TABLE_SEPARATOR: &str = "|-----------|---------|";

const COLUMN_RULES: &str = "\
Please convert the following article into a video script following all the above guidelines. Format the output as a two-column script:

Column 1 - NARRATION: Contains ONLY the exact words the narrator will speak, broken down line by line. Each line should be a natural speaking segment (about 1-2 sentences). Do not include any stage directions, transitions, or visual notes in this column.

Column 2 - VISUALS: For each line of narration, describe the corresponding b-roll footage, graphics, or visual elements that should appear on screen while that line is being spoken. Be specific about the type of shot, graphics, or visual elements needed.
";

const TABLE_RULES: &str = "
Table rules:
- Begin with the header row and the separator row exactly as shown above.
- Write one narration segment and its visuals per row, as | text | text | with one space between each pipe and the cell text.
- Never use the pipe character inside a cell.
- Keep rows roughly equal in speaking time.
- Do not add any text before or after the table.
";

const REMINDER: &str = "
Remember:
1. Break the narration into natural speaking segments
2. Only put speakable text in the NARRATION column
3. Provide specific, actionable visual suggestions in the VISUALS column
4. Maintain consistent tone and style throughout
5. Each row should represent roughly the same amount of speaking time
";

// ---------------------------------------------------------------------------
// compile
// ---------------------------------------------------------------------------

/// Build the full instruction prompt for `settings` and `article`.
///
/// ```
/// use script_writer::script::{compile_prompt, VideoType, NEUTRAL_STANCE};
///
/// let settings = VideoType::BroadcastNews.preset();
/// let prompt = compile_prompt(&settings, "Sample article body.");
/// assert!(prompt.contains(NEUTRAL_STANCE));
/// assert!(prompt.contains("Sample article body."));
/// ```
pub fn compile_prompt(settings: &ScriptSettings, article: &str) -> String {
    let mut prompt = String::with_capacity(4096 + article.len());

    // `write!` into a String cannot fail.
    let _ = write!(
        prompt,
        "You are an expert script writer specializing in {} videos.\n\n",
        settings.video_type
    );

    prompt.push_str("Writing Style:\n");
    let _ = writeln!(prompt, "- Tone: {}", settings.tone);
    let _ = writeln!(prompt, "- Target Length: {} minutes", number(settings.length));
    let _ = writeln!(
        prompt,
        "- Information Density: {} (0=Low, 1=High)",
        number(settings.density)
    );
    let _ = writeln!(prompt, "- Knowledge Level: {}", settings.knowledge_level);
    let _ = writeln!(prompt, "- Geographic Background: {}", settings.geo_background);
    let _ = writeln!(prompt, "- Speaking Style: Similar to {}", settings.similar_to);
    let _ = writeln!(prompt, "- Language/Region: {}", settings.language);
    prompt.push('\n');

    prompt.push_str(&stance_block(settings));
    prompt.push_str("\n\n");

    prompt.push_str("Additional Instructions:\n");
    prompt.push_str(&settings.additional_instructions);
    prompt.push_str("\n\n");

    prompt.push_str(COLUMN_RULES);
    prompt.push_str("\nFormat the output as a markdown table using exactly this layout:\n\n");
    prompt.push_str(TABLE_HEADER);
    prompt.push('\n');
    prompt.push_str(TABLE_SEPARATOR);
    prompt.push_str("\n| First narration segment. | Visuals shown during the first segment. |");
    prompt.push_str("\n| Next narration segment. | Visuals shown during the next segment. |\n");
    prompt.push_str(TABLE_RULES);

    prompt.push_str("\nHere's the article to convert:\n\n");
    prompt.push_str(article);
    prompt.push('\n');

    prompt.push_str(REMINDER);
    prompt
}

/// The stance section, decided once per compilation.
fn stance_block(settings: &ScriptSettings) -> String {
    if settings.enable_opinions {
        format!(
            "Opinion/Stance Guidelines:\n- Political: {}\n- Economic: {}\n- Social: {}",
            settings.political, settings.economic, settings.social
        )
    } else {
        NEUTRAL_STANCE.to_string()
    }
}

/// Shortest round-trip form, always with a fractional part (`2.0`, `0.7`).
fn number(value: f64) -> String {
    format!("{value:?}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::settings::{
        EconomicStance, KnowledgeLevel, PoliticalStance, SocialStance, Tone, VideoType,
    };

    const STANCE_LABELS: &[&str] = &[
        "Progressive",
        "Moderate Left",
        "Centrist",
        "Moderate Right",
        "Conservative",
        "Pro-labor",
        "Balanced",
        "Pro-business",
        "Traditional",
    ];

    fn broadcast_settings() -> ScriptSettings {
        ScriptSettings {
            video_type: VideoType::BroadcastNews,
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
            additional_instructions: "Use formal transitions.".into(),
            ai_model: "<unsupported>".into(),
            custom_dataset: false,
        }
    }

    #[test]
    fn style_block_interpolates_every_field() {
        let prompt = compile_prompt(&broadcast_settings(), "Sample article body.");

        assert!(prompt.starts_with(
            "You are an expert script writer specializing in Broadcast News videos."
        ));
        assert!(prompt.contains("- Tone: Professional\n"));
        assert!(prompt.contains("- Target Length: 2.0 minutes\n"));
        assert!(prompt.contains("- Information Density: 0.7 (0=Low, 1=High)\n"));
        assert!(prompt.contains("- Knowledge Level: Advanced\n"));
        assert!(prompt.contains("- Geographic Background: U.S.\n"));
        assert!(prompt.contains("- Speaking Style: Similar to News Anchor\n"));
        assert!(prompt.contains("- Language/Region: English (US)\n"));
        assert!(prompt.contains("Additional Instructions:\nUse formal transitions.\n"));
    }

    #[test]
    fn opinions_disabled_emits_neutral_sentence_only() {
        let prompt = compile_prompt(&broadcast_settings(), "Sample article body.");

        assert!(prompt.contains(NEUTRAL_STANCE));
        assert!(!prompt.contains("Opinion/Stance Guidelines"));
        for label in STANCE_LABELS {
            assert!(!prompt.contains(label), "unexpected stance value {label:?}");
        }
    }

    #[test]
    fn opinions_disabled_hides_non_default_stances() {
        let mut settings = broadcast_settings();
        settings.political = PoliticalStance::Conservative;
        settings.economic = EconomicStance::ProLabor;
        settings.social = SocialStance::Traditional;

        let prompt = compile_prompt(&settings, "body");
        assert!(!prompt.contains("Conservative"));
        assert!(!prompt.contains("Pro-labor"));
        assert!(!prompt.contains("Traditional"));
    }

    #[test]
    fn opinions_enabled_emits_three_stance_lines() {
        let mut settings = broadcast_settings();
        settings.enable_opinions = true;
        let article = "Sample article body.";

        let prompt = compile_prompt(&settings, article);

        assert!(prompt.contains("Political: Centrist\n"));
        assert!(prompt.contains("Economic: Balanced\n"));
        assert!(prompt.contains("Social: Balanced\n"));
        assert!(!prompt.contains(NEUTRAL_STANCE));
        assert!(prompt.contains(article));
    }

    #[test]
    fn article_is_inserted_verbatim() {
        let article = "Line one | with a pipe\n\n  *markdown* <b>html</b> \"quotes\" {braces}\n";
        let prompt = compile_prompt(&broadcast_settings(), article);

        assert!(prompt.contains(&format!("Here's the article to convert:\n\n{article}")));
    }

    #[test]
    fn empty_additional_instructions_keeps_section() {
        let mut settings = broadcast_settings();
        settings.additional_instructions.clear();

        let prompt = compile_prompt(&settings, "body");
        assert!(prompt.contains("Additional Instructions:\n\n"));
    }

    #[test]
    fn format_block_uses_literal_template() {
        let prompt = compile_prompt(&broadcast_settings(), "body");

        assert!(prompt.contains("| NARRATION | VISUALS |\n|-----------|---------|\n"));
        assert!(prompt.contains("| text | text |"));
        let template = prompt.find(TABLE_HEADER).unwrap();
        let article = prompt.find("Here's the article to convert:").unwrap();
        let reminder = prompt.find("Remember:").unwrap();
        assert!(template < article && article < reminder);
    }

    #[test]
    fn format_block_states_row_timing_before_the_article() {
        let prompt = compile_prompt(&broadcast_settings(), "body");

        let rule = prompt
            .find("- Keep rows roughly equal in speaking time.\n")
            .unwrap();
        let article = prompt.find("Here's the article to convert:").unwrap();
        assert!(rule < article);
    }

    #[test]
    fn reminder_closes_the_prompt() {
        let prompt = compile_prompt(&broadcast_settings(), "body");
        assert!(prompt.ends_with(
            "5. Each row should represent roughly the same amount of speaking time\n"
        ));
        assert!(prompt.contains("2. Only put speakable text in the NARRATION column"));
    }

    #[test]
    fn compilation_is_deterministic() {
        let settings = VideoType::Opinion.preset();
        let a = compile_prompt(&settings, "Same article.");
        let b = compile_prompt(&settings, "Same article.");
        assert_eq!(a, b);
    }

    #[test]
    fn numbers_keep_fractional_part() {
        assert_eq!(number(2.0), "2.0");
        assert_eq!(number(0.7), "0.7");
        assert_eq!(number(0.3), "0.3");
        assert_eq!(number(10.0), "10.0");
    }
}
