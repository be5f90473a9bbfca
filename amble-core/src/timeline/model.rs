use crate::character::style::CharacterStyle;
use crate::env::factory::EnvironmentKind;
use crate::foundation::error::{AmbleError, AmbleResult};
use std::path::Path;

/// Who is speaking during a conversation segment.
///
/// Serializes as the wire strings `NONE`, `CHARACTER_1`, `CHARACTER_2`,
/// `BOTH`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Speaker {
    /// Nobody speaks; no subtitle, mouths closed.
    #[default]
    #[serde(rename = "NONE")]
    None,
    /// The first walker speaks.
    #[serde(rename = "CHARACTER_1")]
    Character1,
    /// The second walker speaks.
    #[serde(rename = "CHARACTER_2")]
    Character2,
    /// Both speak at once.
    #[serde(rename = "BOTH")]
    Both,
}

/// One line of the conversation script, on a half-open frame interval.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSegment {
    /// First frame of the segment.
    pub start: u64,
    /// One past the last frame of the segment.
    pub end: u64,
    /// Active speaker.
    pub speaker: Speaker,
    /// Subtitle text (empty for silent segments).
    #[serde(default)]
    pub text: String,
    /// Audio clip backing this line, once generated or provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_src: Option<String>,
}

/// One camera cut, on a half-open frame interval.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSequenceItem {
    /// Shot name looked up in the shot table.
    pub shot_name: String,
    /// First frame of the cut.
    pub start: u64,
    /// One past the last frame of the cut.
    pub end: u64,
}

/// Voiceover generation settings for a scene.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSettings {
    /// Whether `amble audio` should synthesize the dialogue.
    #[serde(default)]
    pub generate_voiceover: bool,
    /// TTS model identifier.
    #[serde(default = "default_tts_model")]
    pub model: String,
}

fn default_tts_model() -> String {
    "gpt-4o-mini-tts".to_owned()
}

/// The two character styles of a scene.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CharacterPair {
    /// Style of the first walker.
    pub character1: CharacterStyle,
    /// Style of the second walker.
    pub character2: CharacterStyle,
}

impl Default for CharacterPair {
    fn default() -> Self {
        Self {
            character1: CharacterStyle::alex(),
            character2: CharacterStyle::maya(),
        }
    }
}

/// The aggregate scene record: biome, camera cuts, conversation, audio.
///
/// Hand-authored as a preset or loaded from JSON, optionally transformed by
/// the duration resolver into a processed copy. Never mutated in place after
/// processing.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    /// Display name used in output filenames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Which biome to walk through.
    #[serde(default)]
    pub environment: EnvironmentKind,
    /// Camera cut schedule.
    pub camera_sequence: Vec<CameraSequenceItem>,
    /// Conversation script.
    pub conversation: Vec<ConversationSegment>,
    /// Optional background track; when present its measured duration pins
    /// the total scene length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_audio: Option<String>,
    /// Character styles; defaults to Alex and Maya when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<CharacterPair>,
    /// Voiceover generation settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_settings: Option<AudioSettings>,
}

impl SceneConfig {
    /// Load a scene config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> AmbleResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            AmbleError::config(format!("failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_json(&data).map_err(|e| {
            AmbleError::config(format!("failed to parse config '{}': {e}", path.display()))
        })
    }

    /// Parse a scene config from a JSON string.
    pub fn from_json(data: &str) -> AmbleResult<Self> {
        let config: Self = serde_json::from_str(data)
            .map_err(|e| AmbleError::config(format!("invalid scene config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate interval shape; called after parsing and by the resolver.
    pub fn validate(&self) -> AmbleResult<()> {
        for seg in &self.conversation {
            if seg.end < seg.start {
                return Err(AmbleError::config(format!(
                    "conversation segment [{}, {}) is inverted",
                    seg.start, seg.end
                )));
            }
        }
        for item in &self.camera_sequence {
            if item.end < item.start {
                return Err(AmbleError::config(format!(
                    "camera interval [{}, {}) is inverted",
                    item.start, item.end
                )));
            }
        }
        Ok(())
    }

    /// The styles in effect, falling back to the default pair.
    pub fn character_pair(&self) -> CharacterPair {
        self.characters.clone().unwrap_or_default()
    }

    /// Name used in output filenames.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Custom Configuration")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
