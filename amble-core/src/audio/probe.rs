use crate::foundation::error::{AmbleError, AmbleResult};
use std::path::Path;

/// Measure the duration of a media file through the system `ffprobe`.
pub fn media_duration_secs(path: &Path) -> AmbleResult<f64> {
    let out = std::process::Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "json",
        ])
        .arg(path)
        .output()
        .map_err(|e| AmbleError::audio(format!("failed to run ffprobe: {e}")))?;

    if !out.status.success() {
        return Err(AmbleError::audio(format!(
            "ffprobe failed for '{}': {}",
            path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: serde_json::Value = serde_json::from_slice(&out.stdout)
        .map_err(|e| AmbleError::audio(format!("ffprobe json parse failed: {e}")))?;

    parsed
        .get("format")
        .and_then(|f| f.get("duration"))
        .and_then(|d| d.as_str())
        .and_then(|d| d.parse::<f64>().ok())
        .ok_or_else(|| {
            AmbleError::audio(format!(
                "missing duration in ffprobe output for '{}'",
                path.display()
            ))
        })
}

/// Return `true` when `ffprobe` can be invoked from `PATH`.
pub fn is_ffprobe_on_path() -> bool {
    std::process::Command::new("ffprobe")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
