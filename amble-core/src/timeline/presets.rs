use crate::env::factory::EnvironmentKind;
use crate::timeline::model::{
    AudioSettings, CameraSequenceItem, CharacterPair, ConversationSegment, SceneConfig, Speaker,
};

fn seq(shot_name: &str, start: u64, end: u64) -> CameraSequenceItem {
    CameraSequenceItem {
        shot_name: shot_name.to_owned(),
        start,
        end,
    }
}

fn line(start: u64, end: u64, speaker: Speaker, text: &str) -> ConversationSegment {
    ConversationSegment {
        start,
        end,
        speaker,
        text: text.to_owned(),
        audio_src: None,
    }
}

/// The deep philosophical walk through the jungle (the default scene).
pub fn deep_conversation() -> SceneConfig {
    SceneConfig {
        name: Some("DeepConversation".to_owned()),
        environment: EnvironmentKind::Jungle,
        camera_sequence: vec![
            seq("environment", 0, 120),
            seq("wide", 120, 240),
            seq("character1Focus", 240, 420),
            seq("character2Focus", 420, 600),
            seq("closeUp", 600, 780),
            seq("overShoulder1", 780, 960),
            seq("overShoulder2", 960, 1140),
            seq("sideProfile", 1140, 1320),
            seq("tracking", 1320, 1500),
            seq("lowAngle", 1500, 1680),
            seq("highAngle", 1680, 1860),
            seq("frontView", 1860, 2040),
            seq("wide", 2040, 2160),
        ],
        conversation: vec![
            line(0, 120, Speaker::None, ""),
            line(
                120,
                240,
                Speaker::Character1,
                "You know, Maya, walking through this ancient forest makes me think about time itself.",
            ),
            line(240, 420, Speaker::Character2, "What do you mean, Alex? How so?"),
            line(
                420,
                600,
                Speaker::Character1,
                "These trees have been growing for centuries. They've witnessed countless stories, yet we only see this single moment.",
            ),
            line(
                600,
                780,
                Speaker::Character2,
                "That's profound. It reminds me of what my grandmother used to say about rivers...",
            ),
            line(780, 960, Speaker::Character1, "What did she say?"),
            line(
                960,
                1140,
                Speaker::Character2,
                "She said rivers never really change, yet the water is always different. Like our friendship - constant, but always evolving.",
            ),
            line(
                1140,
                1320,
                Speaker::Character1,
                "I never thought of it that way. We've known each other for years, but every conversation reveals something new.",
            ),
            line(
                1320,
                1500,
                Speaker::Character2,
                "Exactly! Sometimes I wonder what we'll discover about ourselves on this journey.",
            ),
            line(
                1500,
                1680,
                Speaker::Character1,
                "Maybe that's the real adventure - not just exploring the world, but understanding who we are within it.",
            ),
            line(
                1680,
                1860,
                Speaker::Character2,
                "And perhaps realizing that we're just as interconnected as this forest ecosystem around us.",
            ),
            line(1860, 2040, Speaker::Both, "The journey continues..."),
            line(2040, 2160, Speaker::None, ""),
        ],
        background_audio: None,
        characters: Some(CharacterPair::default()),
        audio_settings: Some(AudioSettings {
            generate_voiceover: true,
            model: "gpt-4o-mini-tts".to_owned(),
        }),
    }
}

/// A short, excitable jungle stroll.
pub fn simple_conversation() -> SceneConfig {
    SceneConfig {
        name: Some("SimpleConversation".to_owned()),
        environment: EnvironmentKind::Jungle,
        camera_sequence: vec![
            seq("environment", 0, 60),
            seq("wide", 60, 150),
            seq("character1Focus", 150, 240),
            seq("character2Focus", 240, 330),
            seq("closeUp", 330, 420),
            seq("sideProfile", 420, 480),
            seq("overShoulder1", 480, 540),
            seq("overShoulder2", 540, 600),
            seq("tracking", 600, 690),
            seq("lowAngle", 690, 750),
            seq("highAngle", 750, 810),
            seq("frontView", 810, 870),
            seq("wide", 870, 900),
        ],
        conversation: vec![
            line(0, 90, Speaker::None, ""),
            line(90, 180, Speaker::Character1, "This jungle path is incredible!"),
            line(
                180,
                270,
                Speaker::Character2,
                "I've never seen trees this tall before.",
            ),
            line(
                270,
                360,
                Speaker::Character1,
                "Look at all the wildlife around us!",
            ),
            line(360, 450, Speaker::Both, "Did you see that?!"),
            line(450, 540, Speaker::Character2, "It's so peaceful here."),
            line(540, 630, Speaker::Character1, "We should explore more often."),
            line(630, 720, Speaker::Character2, "Absolutely! This is amazing."),
            line(720, 810, Speaker::Both, "Adventure awaits!"),
            line(810, 900, Speaker::None, ""),
        ],
        background_audio: None,
        characters: Some(CharacterPair::default()),
        audio_settings: Some(AudioSettings {
            generate_voiceover: true,
            model: "gpt-4o-mini-tts".to_owned(),
        }),
    }
}

/// Two engineers talk shop on the beach.
pub fn container_conversation() -> SceneConfig {
    SceneConfig {
        name: Some("ContainerConversation".to_owned()),
        environment: EnvironmentKind::Beach,
        camera_sequence: vec![
            seq("environment", 0, 120),
            seq("wide", 120, 270),
            seq("character1Focus", 270, 420),
            seq("character2Focus", 420, 570),
            seq("overShoulder1", 570, 720),
            seq("sideProfile", 720, 870),
            seq("closeUp", 870, 1020),
            seq("wide", 1020, 1170),
        ],
        conversation: vec![
            line(0, 120, Speaker::None, ""),
            line(
                120,
                270,
                Speaker::Character1,
                "So the whole build ships as one container now? Even the asset pipeline?",
            ),
            line(
                270,
                420,
                Speaker::Character2,
                "Everything. If it runs on my machine, it runs on the cluster. That was the deal.",
            ),
            line(
                420,
                570,
                Speaker::Character1,
                "I remember when deploys meant a checklist and crossed fingers.",
            ),
            line(
                570,
                720,
                Speaker::Character2,
                "Now the checklist is a file, and the fingers are a scheduler's.",
            ),
            line(
                720,
                870,
                Speaker::Character1,
                "Somewhere an ops engineer just felt a chill and doesn't know why.",
            ),
            line(870, 1020, Speaker::Both, "Ship it!"),
            line(1020, 1170, Speaker::None, ""),
        ],
        background_audio: None,
        characters: Some(CharacterPair::default()),
        audio_settings: Some(AudioSettings {
            generate_voiceover: true,
            model: "gpt-4o-mini-tts".to_owned(),
        }),
    }
}

/// The default scene: the deep conversation.
pub fn default_scene() -> SceneConfig {
    deep_conversation()
}

/// Resolve a predefined name, or `None` for unknown names.
pub fn by_name(name: &str) -> Option<SceneConfig> {
    match name {
        "deep" => Some(deep_conversation()),
        "simple" => Some(simple_conversation()),
        "container" => Some(container_conversation()),
        "default" => Some(default_scene()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/presets.rs"]
mod tests;
