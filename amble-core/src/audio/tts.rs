use crate::audio::probe::media_duration_secs;
use crate::character::style::{CharacterStyle, VoiceConfig};
use crate::foundation::error::{AmbleError, AmbleResult};
use crate::timeline::model::{SceneConfig, Speaker};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info, warn};

/// Speech synthesis endpoint.
pub const TTS_ENDPOINT: &str = "https://api.openai.com/v1/audio/speech";
/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Fixed pause between calls, to stay clear of service rate limits.
pub const CALL_PACING: Duration = Duration::from_millis(500);
/// Sidecar file recording every generated clip.
pub const METADATA_FILENAME: &str = "audio_metadata.json";

/// Record of one generated clip, persisted to the metadata sidecar.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AudioMetadata {
    /// Path of the generated mp3.
    pub filepath: String,
    /// Measured duration in seconds (0 when measurement failed).
    pub duration: f64,
    /// The spoken text.
    pub text: String,
    /// Speaking character's name.
    pub speaker: String,
    /// Voice used.
    pub voice: String,
}

/// Off-band, pre-render speech synthesis for a scene's dialogue.
///
/// Calls are sequential with a fixed pause; a failed call for one clip logs
/// the failure and the batch continues. There is no cancellation.
pub struct SpeechSynthesizer {
    out_dir: PathBuf,
    api_key: Option<String>,
}

impl SpeechSynthesizer {
    /// Create a synthesizer writing into `out_dir` (created if missing).
    ///
    /// A missing credential does not fail construction: generation then
    /// degrades to silent mode with a logged notice.
    pub fn new(out_dir: impl Into<PathBuf>) -> AmbleResult<Self> {
        let out_dir = out_dir.into();
        std::fs::create_dir_all(&out_dir).map_err(|e| {
            AmbleError::audio(format!(
                "failed to create output directory '{}': {e}",
                out_dir.display()
            ))
        })?;
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        Ok(Self { out_dir, api_key })
    }

    /// Synthesize every spoken segment of `config`, writing
    /// `dialogue_<index>_<characterKey>_<name>.mp3` files plus the metadata
    /// sidecar, and recording each clip path back onto its segment.
    pub fn generate_scene_audio(
        &self,
        config: &mut SceneConfig,
    ) -> AmbleResult<Vec<AudioMetadata>> {
        let Some(settings) = config.audio_settings.clone() else {
            info!("voiceover generation is disabled for this scene");
            return Ok(Vec::new());
        };
        if !settings.generate_voiceover {
            info!("voiceover generation is disabled for this scene");
            return Ok(Vec::new());
        }
        let Some(api_key) = self.api_key.as_deref() else {
            warn!(
                "{API_KEY_ENV} is not set; rendering will be silent (no dialogue audio generated)"
            );
            return Ok(Vec::new());
        };

        let characters = config.character_pair();
        let mut metadata = Vec::new();

        for i in 0..config.conversation.len() {
            let (speaker, text) = {
                let segment = &config.conversation[i];
                (segment.speaker, segment.text.clone())
            };
            if text.is_empty() || speaker == Speaker::None {
                continue;
            }

            for (style, key) in speaking_characters(speaker, &characters) {
                let Some(voice) = &style.audio_config else {
                    warn!(character = style.name.as_str(), "no audio config, skipping");
                    continue;
                };

                let filename = format!(
                    "dialogue_{}_{}_{}.mp3",
                    i + 1,
                    key,
                    style.name.to_lowercase()
                );
                match self.generate_speech(&text, &filename, voice, &settings.model, api_key) {
                    Ok(path) => {
                        let duration = match media_duration_secs(&path) {
                            Ok(d) => d,
                            Err(e) => {
                                warn!(file = filename.as_str(), error = %e, "could not measure clip duration");
                                0.0
                            }
                        };
                        metadata.push(AudioMetadata {
                            filepath: path.to_string_lossy().into_owned(),
                            duration,
                            text: text.clone(),
                            speaker: style.name.clone(),
                            voice: voice.voice.clone(),
                        });
                        config.conversation[i].audio_src =
                            Some(path.to_string_lossy().into_owned());
                    }
                    Err(e) => {
                        error!(file = filename.as_str(), error = %e, "speech synthesis failed, continuing");
                    }
                }
            }

            std::thread::sleep(CALL_PACING);
        }

        info!(clips = metadata.len(), "audio generation complete");
        self.write_metadata(&metadata)?;
        Ok(metadata)
    }

    /// One synthesis call: POST the request, persist the mp3 payload.
    fn generate_speech(
        &self,
        text: &str,
        filename: &str,
        voice: &VoiceConfig,
        model: &str,
        api_key: &str,
    ) -> AmbleResult<PathBuf> {
        let mut body = serde_json::json!({
            "model": model,
            "input": text,
            "voice": voice.voice,
            "response_format": "mp3",
            "speed": voice.speed.unwrap_or(1.0),
        });
        if model == "gpt-4o-mini-tts"
            && let Some(instructions) = &voice.voice_instructions
        {
            body["instructions"] = serde_json::Value::String(instructions.clone());
        }

        info!(voice = voice.voice.as_str(), model, "generating audio for \"{}\"",
            text.chars().take(50).collect::<String>());

        let response = ureq::post(TTS_ENDPOINT)
            .set("Authorization", &format!("Bearer {api_key}"))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| AmbleError::audio(format!("speech request failed: {e}")))?;

        let mut payload = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut payload)
            .map_err(|e| AmbleError::audio(format!("failed to read speech payload: {e}")))?;

        let path = self.out_dir.join(filename);
        std::fs::write(&path, &payload).map_err(|e| {
            AmbleError::audio(format!("failed to write '{}': {e}", path.display()))
        })?;
        Ok(path)
    }

    fn write_metadata(&self, metadata: &[AudioMetadata]) -> AmbleResult<()> {
        let path = self.out_dir.join(METADATA_FILENAME);
        let json = serde_json::to_string_pretty(metadata)
            .map_err(|e| AmbleError::audio(format!("failed to serialize audio metadata: {e}")))?;
        std::fs::write(&path, json).map_err(|e| {
            AmbleError::audio(format!(
                "failed to write audio metadata '{}': {e}",
                path.display()
            ))
        })?;
        info!(path = %path.display(), "audio metadata saved");
        Ok(())
    }

    /// Output directory for generated clips.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Whether a credential is present (generation will not be silent).
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

fn speaking_characters<'a>(
    speaker: Speaker,
    characters: &'a crate::timeline::model::CharacterPair,
) -> Vec<(&'a CharacterStyle, &'static str)> {
    match speaker {
        Speaker::Character1 => vec![(&characters.character1, "character1")],
        Speaker::Character2 => vec![(&characters.character2, "character2")],
        Speaker::Both => vec![
            (&characters.character1, "character1"),
            (&characters.character2, "character2"),
        ],
        Speaker::None => Vec::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/tts.rs"]
mod tests;
