use crate::audio::probe::media_duration_secs;
use crate::foundation::core::Fps;
use crate::foundation::error::AmbleResult;
use crate::timeline::model::{CameraSequenceItem, ConversationSegment, SceneConfig};
use tracing::warn;

/// Nominal segment length used when no audio clip backs a line.
pub const DEFAULT_SEGMENT_FRAMES: u64 = 90;
/// Breathing room appended after each audio-measured line.
pub const SEGMENT_PAUSE_FRAMES: u64 = 15;
/// Scene length used when there is neither conversation nor background track.
pub const DEFAULT_TOTAL_FRAMES: u64 = 900;

/// Measures the duration of a media source.
///
/// The production implementation shells out to ffprobe; tests inject fixed
/// durations through this seam.
pub trait DurationProbe {
    /// Duration of `src` in seconds.
    fn duration_secs(&self, src: &str) -> AmbleResult<f64>;
}

/// [`DurationProbe`] backed by the system `ffprobe` binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct FfprobeDurations;

impl DurationProbe for FfprobeDurations {
    fn duration_secs(&self, src: &str) -> AmbleResult<f64> {
        media_duration_secs(src.as_ref())
    }
}

/// A scene config whose intervals have been reconciled with real audio.
#[derive(Clone, Debug)]
pub struct ResolvedScene {
    /// The processed copy of the input config.
    pub config: SceneConfig,
    /// Total scene length in frames.
    pub total_frames: u64,
}

impl ResolvedScene {
    /// Wrap an authored config without rewriting its intervals, for previews
    /// and frame dumps that want the nominal timing.
    pub fn from_authored(config: SceneConfig) -> Self {
        let conversation_end = config.conversation.last().map(|s| s.end).unwrap_or(0);
        let camera_end = config.camera_sequence.last().map(|s| s.end).unwrap_or(0);
        let total_frames = conversation_end.max(camera_end).max(1);
        Self {
            config,
            total_frames,
        }
    }
}

/// Rewrite the timeline so dialogue and camera cuts line up with measured
/// speech lengths.
///
/// Produces a new config; the input is untouched. Rules:
/// - an audio-backed segment lasts its measured duration (rounded up to whole
///   frames) plus [`SEGMENT_PAUSE_FRAMES`];
/// - segments without audio, and segments whose clip cannot be measured, keep
///   the nominal [`DEFAULT_SEGMENT_FRAMES`]; a failed probe logs a warning
///   and the pass continues;
/// - a background track, when measurable, pins the total length; otherwise
///   the conversation's cumulative length does;
/// - camera intervals are rescaled proportionally from their nominal timing,
///   and the last interval ends exactly at the total.
pub fn resolve_scene(
    config: &SceneConfig,
    fps: Fps,
    probe: &dyn DurationProbe,
) -> AmbleResult<ResolvedScene> {
    config.validate()?;

    let mut total_frames = DEFAULT_TOTAL_FRAMES;
    let mut total_pinned = false;

    if let Some(track) = &config.background_audio {
        match probe.duration_secs(track) {
            Ok(secs) => {
                total_frames = fps.secs_to_frames_ceil(secs);
                total_pinned = true;
            }
            Err(e) => {
                warn!(track = track.as_str(), error = %e, "failed to measure background audio, keeping nominal length");
            }
        }
    }

    let mut cumulative = 0u64;
    let mut conversation = Vec::with_capacity(config.conversation.len());
    for segment in &config.conversation {
        let duration = segment_duration(segment, fps, probe);
        conversation.push(ConversationSegment {
            start: cumulative,
            end: cumulative + duration,
            speaker: segment.speaker,
            text: segment.text.clone(),
            audio_src: segment.audio_src.clone(),
        });
        cumulative += duration;
    }

    if !conversation.is_empty() && !total_pinned {
        total_frames = cumulative;
    }

    let camera_sequence = rescale_camera_sequence(&config.camera_sequence, total_frames);

    Ok(ResolvedScene {
        config: SceneConfig {
            conversation,
            camera_sequence,
            ..config.clone()
        },
        total_frames,
    })
}

fn segment_duration(segment: &ConversationSegment, fps: Fps, probe: &dyn DurationProbe) -> u64 {
    let Some(src) = &segment.audio_src else {
        return DEFAULT_SEGMENT_FRAMES;
    };
    match probe.duration_secs(src) {
        Ok(secs) => fps.secs_to_frames_ceil(secs) + SEGMENT_PAUSE_FRAMES,
        Err(e) => {
            warn!(
                clip = src.as_str(),
                text = segment.text.as_str(),
                error = %e,
                "failed to measure segment audio, using nominal duration"
            );
            DEFAULT_SEGMENT_FRAMES
        }
    }
}

/// Scale camera intervals from their authored timing onto `total_frames`,
/// preserving shot order and relative weighting. Boundaries stay monotonic
/// and contiguous; the final interval always ends exactly at the total.
fn rescale_camera_sequence(
    sequence: &[CameraSequenceItem],
    total_frames: u64,
) -> Vec<CameraSequenceItem> {
    if sequence.is_empty() {
        return Vec::new();
    }

    let nominal_total = sequence.last().map(|item| item.end).unwrap_or(0);
    let count = sequence.len();

    // Degenerate authored timing: fall back to an equal split.
    if nominal_total == 0 {
        let width = total_frames / count as u64;
        return sequence
            .iter()
            .enumerate()
            .map(|(i, item)| CameraSequenceItem {
                shot_name: item.shot_name.clone(),
                start: i as u64 * width,
                end: if i == count - 1 {
                    total_frames
                } else {
                    (i as u64 + 1) * width
                },
            })
            .collect();
    }

    let scale = total_frames as f64 / nominal_total as f64;
    let mut out = Vec::with_capacity(count);
    let mut prev_end = 0u64;
    for (i, item) in sequence.iter().enumerate() {
        let end = if i == count - 1 {
            total_frames
        } else {
            ((item.end as f64 * scale).round() as u64).clamp(prev_end, total_frames)
        };
        out.push(CameraSequenceItem {
            shot_name: item.shot_name.clone(),
            start: prev_end,
            end,
        });
        prev_end = end;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/resolve.rs"]
mod tests;
