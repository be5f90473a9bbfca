use crate::camera::shots::{CameraShot, interpolate_shots, shot};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::math::{SpringConfig, spring_progress};
use crate::timeline::model::CameraSequenceItem;

/// Fraction of an interval over which an incoming cut blends from the
/// previous shot.
pub const TRANSITION_WINDOW: f32 = 0.1;

/// Resolve the camera pose for `frame`.
///
/// Looks up the active interval; within the first 10% of an interval the pose
/// is a spring-eased blend from the previous interval's shot, where the spring
/// progress is itself a pure function of `(frame - start, fps)`, never of
/// wall-clock time. Frames outside every interval, and unknown shot names,
/// resolve to the wide shot.
pub fn current_shot(frame: FrameIndex, sequence: &[CameraSequenceItem], fps: Fps) -> CameraShot {
    let Some(idx) = sequence
        .iter()
        .position(|item| item.start <= frame.0 && frame.0 < item.end)
    else {
        return *shot("wide");
    };

    let current = &sequence[idx];
    let target = shot(&current.shot_name);

    let len = current.end.saturating_sub(current.start);
    if len == 0 || idx == 0 {
        return *target;
    }

    let progress = (frame.0 - current.start) as f32 / len as f32;
    if progress >= TRANSITION_WINDOW {
        return *target;
    }

    let previous = shot(&sequence[idx - 1].shot_name);
    let eased = spring_progress(
        (frame.0 - current.start) as f32,
        fps,
        SpringConfig::default(),
    );
    interpolate_shots(previous, target, eased)
}

#[cfg(test)]
#[path = "../../tests/unit/camera/sequencer.rs"]
mod tests;
