use crate::foundation::error::{AmbleError, AmbleResult};
use chrono::{FixedOffset, Utc};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Environment variable overriding the renderer binary.
pub const RENDERER_ENV: &str = "AMBLE_RENDERER";
/// Default renderer binary looked up on `PATH`.
pub const DEFAULT_RENDERER: &str = "amble-render";
/// Default GL backend flag passed to the renderer. Headless machines need a
/// software rasterizer; `--gl=swiftshader` is the usual fallback.
pub const DEFAULT_GL_FLAG: &str = "--gl=angle";

/// Timestamps use this fixed offset (UTC+05:30).
const TIMESTAMP_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Renderer binary: the override variable when set, the default otherwise.
pub fn renderer_bin() -> String {
    std::env::var(RENDERER_ENV).unwrap_or_else(|_| DEFAULT_RENDERER.to_owned())
}

/// `YYYY-MM-DD_HH-mm-ss` at UTC+05:30, for output filenames.
pub fn timestamp() -> String {
    let offset = FixedOffset::east_opt(TIMESTAMP_OFFSET_SECS).expect("valid fixed offset");
    Utc::now()
        .with_timezone(&offset)
        .format("%Y-%m-%d_%H-%M-%S")
        .to_string()
}

/// Output filename `<ConfigName>_<CompositionName>_<timestamp>.mp4`.
///
/// The default config contributes no prefix, matching the renderer's naming
/// convention for unprefixed runs.
pub fn output_filename(config_name: &str, composition: &str) -> String {
    let prefix = match config_name {
        "default" | "" => String::new(),
        other => format!("{other}_"),
    };
    format!("{prefix}{composition}_{}.mp4", timestamp())
}

/// Invoke the external renderer for `composition`, feeding it the resolved
/// scene JSON and the GL backend flag.
///
/// The renderer owns rasterization and encoding; this side only builds the
/// command, waits, and propagates failure. Stderr is captured so a failing
/// run reports something actionable.
pub fn invoke_renderer(
    composition: &str,
    scene_json: &Path,
    out_path: &Path,
    gl_flag: &str,
) -> AmbleResult<()> {
    ensure_parent_dir(out_path)?;

    let bin = renderer_bin();
    let output = Command::new(&bin)
        .arg("render")
        .arg(composition)
        .arg(scene_json)
        .arg(out_path)
        .arg(gl_flag)
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            AmbleError::render(format!(
                "failed to spawn renderer '{bin}' (is it installed and on PATH?): {e}"
            ))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AmbleError::render(format!(
            "renderer exited with status {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> AmbleResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write the resolved scene JSON the renderer consumes.
pub fn write_scene_json(
    config: &crate::timeline::model::SceneConfig,
    total_frames: u64,
    path: &Path,
) -> AmbleResult<PathBuf> {
    ensure_parent_dir(path)?;
    let doc = serde_json::json!({
        "totalFrames": total_frames,
        "scene": config,
    });
    let json = serde_json::to_string_pretty(&doc)
        .map_err(|e| AmbleError::render(format!("failed to serialize scene json: {e}")))?;
    std::fs::write(path, json)
        .map_err(|e| AmbleError::render(format!("failed to write '{}': {e}", path.display())))?;
    Ok(path.to_owned())
}

#[cfg(test)]
#[path = "../../tests/unit/render/invoke.rs"]
mod tests;
