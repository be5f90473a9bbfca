use crate::foundation::core::Color;

/// Gender variant driving rig proportion scaling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Reference proportions.
    #[default]
    Male,
    /// Narrower shoulders, smaller head and hands.
    Female,
}

impl Gender {
    /// `(shoulder width, head, hands)` scale factors for this variant.
    pub fn proportions(self) -> (f32, f32, f32) {
        match self {
            Self::Male => (1.0, 1.0, 1.0),
            Self::Female => (0.85, 0.92, 0.85),
        }
    }
}

/// Voice configuration for synthesized speech.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    /// TTS voice name (e.g. `alloy`, `nova`, `onyx`).
    pub voice: String,
    /// Optional personality/emotion instructions for expressive models.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_instructions: Option<String>,
    /// Speech speed in `[0.25, 4.0]`; `None` means the service default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

/// Appearance and voice of one character. Immutable after construction; the
/// rig builder reads it once.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterStyle {
    /// Display name (used in subtitles and audio filenames).
    pub name: String,
    /// Proportion variant.
    #[serde(default)]
    pub gender: Gender,
    /// Shirt color.
    pub primary_color: Color,
    /// Pants color.
    pub secondary_color: Color,
    /// Hair color.
    pub hair_color: Color,
    /// Skin tone.
    pub skin_tone: Color,
    /// Voice for synthesized dialogue, when audio generation is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_config: Option<VoiceConfig>,
}

impl CharacterStyle {
    /// The default first walker: blue outfit, brown hair.
    pub fn alex() -> Self {
        Self {
            name: "Alex".to_owned(),
            gender: Gender::Male,
            primary_color: Color::from_u32(0x2563EB),
            secondary_color: Color::from_u32(0x1E3A8A),
            hair_color: Color::from_u32(0x8B4513),
            skin_tone: Color::from_u32(0xDEB887),
            audio_config: Some(VoiceConfig {
                voice: "alloy".to_owned(),
                voice_instructions: Some(
                    "Thoughtful and contemplative, speaking with measured cadence".to_owned(),
                ),
                speed: None,
            }),
        }
    }

    /// The default second walker: red outfit, dark purple hair.
    pub fn maya() -> Self {
        Self {
            name: "Maya".to_owned(),
            gender: Gender::Female,
            primary_color: Color::from_u32(0xDC2626),
            secondary_color: Color::from_u32(0x991B1B),
            hair_color: Color::from_u32(0x2D1B69),
            skin_tone: Color::from_u32(0xCD853F),
            audio_config: Some(VoiceConfig {
                voice: "nova".to_owned(),
                voice_instructions: Some(
                    "Warm and welcoming, conversational tone with natural rhythm".to_owned(),
                ),
                speed: None,
            }),
        }
    }
}
