use crate::foundation::core::Vec3;
use crate::foundation::math::degrees_to_radians;
use crate::timeline::model::Speaker;

/// Mouth scale when the character is not speaking. The coupling is exact:
/// a non-speaker's mouth is at this scale, not near it.
pub const MOUTH_CLOSED_SCALE: Vec3 = Vec3::new(0.7, 0.2, 0.5);

/// Intermediate phases derived from elapsed time.
#[derive(Clone, Copy, Debug)]
pub struct AnimationState {
    /// Walk cycle phase.
    pub walk_phase: f32,
    /// Talk envelope phase.
    pub talk_phase: f32,
    /// Upper-body gesture phase.
    pub gesture_phase: f32,
}

/// Local transforms for every articulated part at one instant.
///
/// Rotations are radians around X (pitch) unless named otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RigPose {
    /// Whole-body vertical bob.
    pub body_lift: f32,
    /// Whole-body roll sway.
    pub body_sway: f32,
    /// Left leg hip swing.
    pub left_leg_swing: f32,
    /// Right leg hip swing (opposite phase).
    pub right_leg_swing: f32,
    /// Left foot lift above rest height.
    pub left_foot_lift: f32,
    /// Right foot lift above rest height (opposite phase).
    pub right_foot_lift: f32,
    /// Left arm shoulder pitch.
    pub left_arm_pitch: f32,
    /// Left arm shoulder roll.
    pub left_arm_roll: f32,
    /// Right arm shoulder pitch.
    pub right_arm_pitch: f32,
    /// Right arm shoulder roll.
    pub right_arm_roll: f32,
    /// Left elbow pitch.
    pub left_forearm_pitch: f32,
    /// Right elbow pitch.
    pub right_forearm_pitch: f32,
    /// Head yaw toward the conversational partner.
    pub head_yaw: f32,
    /// Head pitch (bob, nods).
    pub head_pitch: f32,
    /// Mouth scale; [`MOUTH_CLOSED_SCALE`] whenever this character is silent.
    pub mouth_scale: Vec3,
}

/// Closed-form pose evaluator for one character.
///
/// `pose` depends only on its arguments and the two construction constants;
/// there is no per-call state, so a renderer may re-request any frame at any
/// time and always get the same pose back.
#[derive(Clone, Copy, Debug)]
pub struct Animator {
    /// Phase offset so the two walkers do not stride in lockstep.
    pub walk_offset: f32,
    /// Walk cycle speed multiplier.
    pub animation_speed: f32,
}

impl Animator {
    /// Animator with the given phase offset and unit speed.
    pub fn new(walk_offset: f32) -> Self {
        Self {
            walk_offset,
            animation_speed: 1.0,
        }
    }

    /// Whether `character_index` is the active speaker under `speaker`.
    pub fn is_speaking(character_index: usize, speaker: Speaker) -> bool {
        speaker == Speaker::Both
            || (character_index == 0 && speaker == Speaker::Character1)
            || (character_index == 1 && speaker == Speaker::Character2)
    }

    /// Whether the other character is the active speaker.
    pub fn other_is_speaking(character_index: usize, speaker: Speaker) -> bool {
        speaker == Speaker::Both
            || (character_index == 0 && speaker == Speaker::Character2)
            || (character_index == 1 && speaker == Speaker::Character1)
    }

    /// Evaluate the pose at `time` seconds.
    pub fn pose(&self, time: f32, character_index: usize, speaker: Speaker) -> RigPose {
        let state = AnimationState {
            walk_phase: time * 4.0 * self.animation_speed + self.walk_offset,
            talk_phase: time * 3.0 + character_index as f32 * std::f32::consts::PI * 0.7,
            gesture_phase: time * if character_index == 0 { 0.7 } else { 1.1 }
                + character_index as f32 * std::f32::consts::PI,
        };
        let is_speaking = Self::is_speaking(character_index, speaker);
        let other_is_speaking = Self::other_is_speaking(character_index, speaker);

        let mut pose = RigPose {
            mouth_scale: MOUTH_CLOSED_SCALE,
            ..RigPose::default()
        };
        self.walk_cycle(&state, &mut pose);
        self.upper_body(&state, is_speaking, &mut pose);
        self.face(
            &state,
            character_index,
            time,
            is_speaking,
            other_is_speaking,
            &mut pose,
        );
        pose
    }

    fn walk_cycle(&self, state: &AnimationState, pose: &mut RigPose) {
        let walk = state.walk_phase;
        pose.body_lift = (walk * 2.0).sin() * 0.05;
        pose.body_sway = walk.sin() * 0.02;

        let leg_swing = walk.sin() * 15.0;
        pose.left_leg_swing = degrees_to_radians(leg_swing);
        pose.right_leg_swing = degrees_to_radians(-leg_swing);

        pose.left_foot_lift = walk.sin().max(0.0) * 0.1;
        pose.right_foot_lift = (walk + std::f32::consts::PI).sin().max(0.0) * 0.1;
    }

    fn upper_body(&self, state: &AnimationState, is_speaking: bool, pose: &mut RigPose) {
        let walk = state.walk_phase;
        let gesture_phase = state.gesture_phase;

        let arm_swing = (walk + std::f32::consts::PI).sin() * 25.0;
        let gesture_amplitude = if is_speaking { 30.0 } else { 20.0 };
        let gesture = gesture_phase.sin() * gesture_amplitude;

        pose.left_arm_pitch = degrees_to_radians(-15.0 + arm_swing + gesture);
        pose.left_arm_roll = degrees_to_radians(-20.0 + gesture_phase.sin() * 10.0);
        pose.right_arm_pitch = degrees_to_radians(-15.0 - arm_swing + gesture * 0.7);
        pose.right_arm_roll =
            degrees_to_radians(15.0 + (gesture_phase + std::f32::consts::PI).sin() * 10.0);

        let forearm_amplitude = if is_speaking { 20.0 } else { 15.0 };
        pose.left_forearm_pitch =
            degrees_to_radians(5.0 + (gesture_phase * 1.2).sin() * forearm_amplitude);
        pose.right_forearm_pitch = degrees_to_radians(
            5.0 + (gesture_phase * 0.9 + std::f32::consts::PI).sin() * forearm_amplitude,
        );
    }

    fn face(
        &self,
        state: &AnimationState,
        character_index: usize,
        time: f32,
        is_speaking: bool,
        other_is_speaking: bool,
        pose: &mut RigPose,
    ) {
        let toward_partner = if character_index == 0 { 1.0 } else { -1.0 };
        // Listeners face the speaker squarely; speakers split their gaze
        // between the partner and the path ahead.
        let (look_direction, head_turn) = if other_is_speaking && !is_speaking {
            (toward_partner * 20.0, 12.0)
        } else if is_speaking {
            (toward_partner * 10.0, 15.0)
        } else {
            (toward_partner * 15.0, 8.0)
        };

        let head_bob = (state.walk_phase * 2.0).sin() * 2.0;
        let occasional_nod =
            (time * 0.3 + character_index as f32 * std::f32::consts::PI).sin() * 5.0;
        let speaking_nod = if is_speaking {
            (time * 2.5).sin() * 3.0
        } else {
            0.0
        };

        pose.head_yaw = degrees_to_radians(
            look_direction + (time * 0.5 + character_index as f32).sin() * head_turn,
        );
        pose.head_pitch = degrees_to_radians(head_bob + occasional_nod + speaking_nod);

        if is_speaking {
            let talking = (state.talk_phase * 4.0).sin().abs() * 0.15
                + (state.talk_phase * 7.0).sin().abs() * 0.05;
            pose.mouth_scale = Vec3::new(
                MOUTH_CLOSED_SCALE.x,
                MOUTH_CLOSED_SCALE.y + talking,
                MOUTH_CLOSED_SCALE.z + talking * 0.3,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/character/animator.rs"]
mod tests;
