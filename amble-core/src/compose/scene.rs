use crate::camera::sequencer::current_shot;
use crate::camera::shots::{CameraShot, is_close_shot};
use crate::character::animator::{Animator, RigPose};
use crate::character::rig::CharacterRig;
use crate::env::factory::Environment;
use crate::foundation::core::{Fps, FrameIndex, FrameRange, Vec3};
use crate::foundation::error::AmbleResult;
use crate::timeline::model::Speaker;
use crate::timeline::query::{segment_at, shot_name_at, speaker_at};
use crate::timeline::resolve::ResolvedScene;

/// Walking speed in world units per second.
pub const WALK_SPEED: f32 = 0.7;
/// Lateral positions of the two walkers.
pub const CHARACTER_X: [f32; 2] = [-0.8, 0.8];
/// Subtitles fade in/out over this fraction of their segment.
pub const SUBTITLE_FADE: f32 = 0.1;
/// Letterbox opacity on close shots.
pub const LETTERBOX_OPACITY: f32 = 0.8;

/// Subtitle overlay state for one frame.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct SubtitleState {
    /// Text to show (empty hides the overlay).
    pub text: String,
    /// Overlay opacity in `[0, 1]`.
    pub opacity: f32,
    /// Vertical offset of the overlay in pixels from the bottom.
    pub offset_y: f32,
}

/// One character's state for one frame.
#[derive(Clone, Debug, serde::Serialize)]
pub struct CharacterState {
    /// World position (biome lift included).
    pub position: Vec3,
    /// Articulated pose.
    pub pose: RigPose,
}

/// Everything the renderer needs to draw one frame.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SceneFrame {
    /// The evaluated frame.
    pub frame: FrameIndex,
    /// Elapsed time in seconds.
    pub time: f32,
    /// Distance travelled so far.
    pub distance: f32,
    /// Active speaker.
    pub speaker: Speaker,
    /// Subtitle overlay.
    pub subtitle: SubtitleState,
    /// Resolved camera pose (spring-blended at cut boundaries).
    pub camera: CameraShot,
    /// Letterbox opacity (0 outside close shots).
    pub letterbox_opacity: f32,
    /// The two walkers.
    pub characters: Vec<CharacterState>,
}

/// The composed scene: environment, characters and timeline behind a
/// stateless-per-frame evaluation call.
///
/// `evaluate` derives everything (environment scroll, walk poses, camera
/// blend, subtitle fade) from the absolute frame number, so an external
/// renderer may request frames out of order or in
/// parallel worker processes and every request reproduces the same frame.
pub struct WalkScene {
    scene: ResolvedScene,
    fps: Fps,
    env: Environment,
    rigs: [CharacterRig; 2],
    animators: [Animator; 2],
}

impl WalkScene {
    /// Build the scene for a resolved config.
    pub fn new(scene: ResolvedScene, fps: Fps, seed: u32) -> AmbleResult<Self> {
        let env = Environment::create(scene.config.environment, seed)?;
        let pair = scene.config.character_pair();
        let rigs = [
            CharacterRig::build(&pair.character1),
            CharacterRig::build(&pair.character2),
        ];
        // Opposite walk phases so the walkers do not stride in lockstep.
        let animators = [Animator::new(0.0), Animator::new(std::f32::consts::PI)];
        Ok(Self {
            scene,
            fps,
            env,
            rigs,
            animators,
        })
    }

    /// Evaluate the scene state for `frame`.
    pub fn evaluate(&mut self, frame: FrameIndex) -> SceneFrame {
        let time = self.fps.frames_to_secs(frame.0) as f32;
        let distance = time * WALK_SPEED;
        self.env.update_by_frame(distance);

        let conversation = &self.scene.config.conversation;
        let sequence = &self.scene.config.camera_sequence;

        let speaker = speaker_at(frame, conversation);
        let subtitle = subtitle_state(frame, conversation);
        let camera = current_shot(frame, sequence, self.fps);
        let letterbox_opacity = if is_close_shot(shot_name_at(frame, sequence)) {
            LETTERBOX_OPACITY
        } else {
            0.0
        };

        let lift = self.env.config().character_y_offset.unwrap_or(0.0);
        let characters = (0..2)
            .map(|i| {
                let pose = self.animators[i].pose(time, i, speaker);
                CharacterState {
                    position: Vec3::new(CHARACTER_X[i], lift + pose.body_lift, 0.0),
                    pose,
                }
            })
            .collect();

        SceneFrame {
            frame,
            time,
            distance,
            speaker,
            subtitle,
            camera,
            letterbox_opacity,
            characters,
        }
    }

    /// Total scene length in frames.
    pub fn total_frames(&self) -> u64 {
        self.scene.total_frames
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// The environment being walked through.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// The two rigs, in character order.
    pub fn rigs(&self) -> &[CharacterRig; 2] {
        &self.rigs
    }

    /// The resolved scene record.
    pub fn resolved(&self) -> &ResolvedScene {
        &self.scene
    }
}

fn subtitle_state(
    frame: FrameIndex,
    conversation: &[crate::timeline::model::ConversationSegment],
) -> SubtitleState {
    let Some(segment) = segment_at(frame, conversation) else {
        return SubtitleState::default();
    };
    let text = segment.text.as_str();
    if text.is_empty() {
        return SubtitleState::default();
    }
    let range = FrameRange {
        start: FrameIndex(segment.start),
        end: FrameIndex(segment.end),
    };
    let progress = range.progress(frame);

    let (opacity, offset_y) = if progress < SUBTITLE_FADE {
        let t = progress / SUBTITLE_FADE;
        (t, 100.0 - 20.0 * t)
    } else if progress < 1.0 - SUBTITLE_FADE {
        (1.0, 80.0)
    } else {
        let t = (progress - (1.0 - SUBTITLE_FADE)) / SUBTITLE_FADE;
        (1.0 - t, 80.0 - 20.0 * t)
    };

    SubtitleState {
        text: text.to_owned(),
        opacity,
        offset_y,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/scene.rs"]
mod tests;
