//! Writing a generated script to disk.

use std::path::Path;

use anyhow::{bail, Context, Result};

use super::generator::is_error_result;

/// File name used when the user does not pick one.
pub const DEFAULT_SCRIPT_FILE: &str = "video_script.md";

/// Write `script` to `path` as markdown, creating parent directories as
/// needed.
///
/// Refuses to write an error string, so a failed generation never
/// overwrites a previously exported script.
pub fn save_script(path: &Path, script: &str) -> Result<()> {
    if is_error_result(script) {
        bail!("refusing to export a failed generation: {script}");
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, script).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Script written to {}", path.display());
    Ok(())
}
