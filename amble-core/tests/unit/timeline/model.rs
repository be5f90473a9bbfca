use super::*;
use crate::env::factory::EnvironmentKind;

#[test]
fn speaker_serializes_as_wire_strings() {
    assert_eq!(serde_json::to_string(&Speaker::None).unwrap(), "\"NONE\"");
    assert_eq!(
        serde_json::to_string(&Speaker::Character1).unwrap(),
        "\"CHARACTER_1\""
    );
    assert_eq!(
        serde_json::to_string(&Speaker::Character2).unwrap(),
        "\"CHARACTER_2\""
    );
    assert_eq!(serde_json::to_string(&Speaker::Both).unwrap(), "\"BOTH\"");

    let s: Speaker = serde_json::from_str("\"CHARACTER_2\"").unwrap();
    assert_eq!(s, Speaker::Character2);
}

#[test]
fn config_parses_the_external_record_shape() {
    let json = r##"
{
  "name": "Custom Walk",
  "environment": "beach",
  "cameraSequence": [
    { "shotName": "environment", "start": 0, "end": 60 },
    { "shotName": "wide", "start": 60, "end": 120 }
  ],
  "conversation": [
    { "start": 0, "end": 60, "speaker": "NONE", "text": "" },
    { "start": 60, "end": 120, "speaker": "CHARACTER_1", "text": "Hello!", "audioSrc": "clips/hello.mp3" }
  ],
  "backgroundAudio": "music/waves.mp3"
}
"##;
    let config = SceneConfig::from_json(json).unwrap();
    assert_eq!(config.environment, EnvironmentKind::Beach);
    assert_eq!(config.camera_sequence.len(), 2);
    assert_eq!(config.conversation[1].speaker, Speaker::Character1);
    assert_eq!(
        config.conversation[1].audio_src.as_deref(),
        Some("clips/hello.mp3")
    );
    assert_eq!(config.background_audio.as_deref(), Some("music/waves.mp3"));
    assert_eq!(config.display_name(), "Custom Walk");
}

#[test]
fn missing_environment_defaults_to_jungle() {
    let json = r#"{ "cameraSequence": [], "conversation": [] }"#;
    let config = SceneConfig::from_json(json).unwrap();
    assert_eq!(config.environment, EnvironmentKind::Jungle);
}

#[test]
fn unknown_environment_degrades_to_jungle() {
    let json = r#"{ "environment": "space", "cameraSequence": [], "conversation": [] }"#;
    let config = SceneConfig::from_json(json).unwrap();
    assert_eq!(config.environment, EnvironmentKind::Jungle);
}

#[test]
fn inverted_intervals_are_config_errors() {
    let json = r#"
{
  "cameraSequence": [],
  "conversation": [ { "start": 50, "end": 10, "speaker": "NONE", "text": "" } ]
}
"#;
    assert!(SceneConfig::from_json(json).is_err());
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = SceneConfig::from_json("{ nope").unwrap_err();
    assert!(err.to_string().contains("config error"));
}

#[test]
fn character_pair_defaults_to_alex_and_maya() {
    let json = r#"{ "cameraSequence": [], "conversation": [] }"#;
    let config = SceneConfig::from_json(json).unwrap();
    let pair = config.character_pair();
    assert_eq!(pair.character1.name, "Alex");
    assert_eq!(pair.character2.name, "Maya");
}

#[test]
fn config_round_trips_through_serde() {
    let config = crate::timeline::presets::deep_conversation();
    let json = serde_json::to_string(&config).unwrap();
    let back = SceneConfig::from_json(&json).unwrap();
    assert_eq!(back.conversation.len(), config.conversation.len());
    assert_eq!(back.camera_sequence.len(), config.camera_sequence.len());
    assert_eq!(back.environment, config.environment);
}
