//! Application entry point: article-to-video-script writer.
//!
//! # Startup sequence
//!
//! 1. Load `.env` and initialise logging.
//! 2. Parse command-line arguments.
//! 3. Load [`AppConfig`] from disk (default on first run) and overlay the
//!    provider API keys from the environment.
//! 4. Build the settings record and read the article.
//! 5. Build the [`ScriptGenerator`] and run exactly one generation.
//! 6. Print or export the script; exit non-zero on an error result.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use script_writer::{
    cli::Args,
    config::AppConfig,
    script::{compile_prompt, is_error_result, save_script, ScriptGenerator},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // 1. Environment + logging
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. Arguments
    let args = Args::parse();

    // 3. Configuration; an explicit --config must load, the default may not exist
    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config ({e}); using defaults");
            AppConfig::default()
        }),
    };
    config.apply_env();

    // 4. Inputs
    let settings = args.script_settings()?;
    let article = args.read_article()?;

    if args.print_prompt {
        print!("{}", compile_prompt(&settings, &article));
        return Ok(ExitCode::SUCCESS);
    }

    // 5. Generation
    log::info!(
        "Script writer starting: {} / {}",
        settings.video_type,
        settings.ai_model
    );
    let generator = ScriptGenerator::from_config(&config);
    let script = generator.generate(&settings, &article).await;

    // 6. Output
    if is_error_result(&script) {
        eprintln!("{script}");
        return Ok(ExitCode::FAILURE);
    }

    match &args.output {
        Some(path) => save_script(path, &script)?,
        None => println!("{script}"),
    }
    Ok(ExitCode::SUCCESS)
}
