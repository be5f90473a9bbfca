//! Amble renders the state of a short animated video: two characters walking
//! and conversing through a procedurally generated, infinitely scrolling
//! environment, synchronized to a scripted conversation with camera cuts,
//! subtitles and optionally synthesized speech.
//!
//! The hard core is deterministic, frame-indexed evaluation: every generator
//! derives positions from seeded pseudo-random sequences fixed at
//! construction, and every per-frame quantity is a pure function of the
//! absolute frame number. An external renderer may therefore request frames
//! out of order or in parallel across worker processes and always get
//! bit-identical scene state.
//!
//! Pipeline overview:
//!
//! 1. **Configure**: load a [`SceneConfig`] (preset or JSON)
//! 2. **Resolve**: [`resolve_scene`] reconciles intervals with measured audio
//! 3. **Compose**: [`WalkScene::evaluate`] produces a [`SceneFrame`] per frame
//! 4. **Render** (external): the renderer binary turns scene state into video
//!
//! Rasterization, video encoding and the TTS service itself live outside this
//! crate and are reached through narrow subprocess/HTTP seams.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod audio;
mod camera;
mod character;
mod compose;
mod env;
mod foundation;
mod render;
mod scene;
mod timeline;

pub use audio::probe::{is_ffprobe_on_path, media_duration_secs};
pub use audio::tts::{
    API_KEY_ENV, AudioMetadata, CALL_PACING, METADATA_FILENAME, SpeechSynthesizer, TTS_ENDPOINT,
};
pub use camera::sequencer::{TRANSITION_WINDOW, current_shot};
pub use camera::shots::{
    CameraShot, DEFAULT_FOV, interpolate_shots, is_close_shot, shot, shot_table,
};
pub use character::animator::{Animator, AnimationState, MOUTH_CLOSED_SCALE, RigPose};
pub use character::rig::{CharacterRig, RigGroup, RigPart};
pub use character::style::{CharacterStyle, Gender, VoiceConfig};
pub use compose::scene::{
    CHARACTER_X, CharacterState, LETTERBOX_OPACITY, SUBTITLE_FADE, SceneFrame, SubtitleState,
    WALK_SPEED, WalkScene,
};
pub use env::beach::{
    BeachEnvironment, PalmParams, PalmSize, Seagull, SeagullState, TidalState, WaveState,
};
pub use env::cherry_blossom::{
    BlossomCluster, CherryBlossomEnvironment, CherryTreeParams, FallenPetal,
};
pub use env::desert::{
    CactusArm, CactusKind, CactusParams, DesertEnvironment, RockFormationParams, RockPiece,
};
pub use env::factory::{
    DEFAULT_ENVIRONMENT_SEED, Environment, EnvironmentConfig, EnvironmentKind,
};
pub use env::field::{Field, FieldInstance, INSTANCE_SEED_STRIDE, Spawn};
pub use env::jungle::{GROUND_CYCLE, JungleEnvironment};
pub use env::mountains::{
    MOUNTAIN_RANGES, MountainPalette, MountainParams, MountainRange, MountainTier, PeakParams,
};
pub use env::particles::{ParticleField, ParticleSpec};
pub use env::path::{PATH_WIDTH, PathField, PathSegment, SEGMENT_COUNT, SEGMENT_LENGTH};
pub use env::snowy_forest::SnowyForestEnvironment;
pub use env::trees::{TreeField, TreeKind, TreePalette, TreeParams};
pub use env::undergrowth::{UndergrowthField, UndergrowthKind, UndergrowthParams};
pub use foundation::core::{Color, Fps, FrameIndex, FrameRange, Vec3};
pub use foundation::error::{AmbleError, AmbleResult};
pub use foundation::math::{SeededRandom, SpringConfig, degrees_to_radians, spring_progress};
pub use render::invoke::{
    DEFAULT_GL_FLAG, DEFAULT_RENDERER, RENDERER_ENV, ensure_parent_dir, invoke_renderer,
    output_filename, renderer_bin, timestamp, write_scene_json,
};
pub use scene::placement::LoopablePlacement;
pub use scene::primitives::{Material, Piece, Primitive};
pub use timeline::model::{
    AudioSettings, CameraSequenceItem, CharacterPair, ConversationSegment, SceneConfig, Speaker,
};
pub use timeline::presets::{
    by_name, container_conversation, deep_conversation, default_scene, simple_conversation,
};
pub use timeline::query::{segment_at, shot_name_at, speaker_at, text_at};
pub use timeline::resolve::{
    DEFAULT_SEGMENT_FRAMES, DEFAULT_TOTAL_FRAMES, DurationProbe, FfprobeDurations, ResolvedScene,
    SEGMENT_PAUSE_FRAMES, resolve_scene,
};
