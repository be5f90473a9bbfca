use super::*;
use crate::timeline::model::CharacterPair;

#[test]
fn speaker_maps_to_the_right_characters() {
    let pair = CharacterPair::default();

    let one = speaking_characters(Speaker::Character1, &pair);
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].0.name, "Alex");
    assert_eq!(one[0].1, "character1");

    let two = speaking_characters(Speaker::Character2, &pair);
    assert_eq!(two[0].0.name, "Maya");

    let both = speaking_characters(Speaker::Both, &pair);
    assert_eq!(both.len(), 2);

    assert!(speaking_characters(Speaker::None, &pair).is_empty());
}

#[test]
fn metadata_round_trips_through_the_sidecar_format() {
    let record = AudioMetadata {
        filepath: "out/dialogue_2_character1_alex.mp3".to_owned(),
        duration: 3.42,
        text: "What did she say?".to_owned(),
        speaker: "Alex".to_owned(),
        voice: "alloy".to_owned(),
    };
    let json = serde_json::to_string_pretty(&[record.clone()]).unwrap();
    let back: Vec<AudioMetadata> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].filepath, record.filepath);
    assert_eq!(back[0].duration, record.duration);
    assert_eq!(back[0].voice, record.voice);
}

#[test]
fn synthesizer_creates_its_output_directory() {
    let dir = std::path::PathBuf::from("target")
        .join("tts_test")
        .join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let synth = SpeechSynthesizer::new(&dir).unwrap();
    assert!(dir.is_dir());
    assert_eq!(synth.out_dir(), dir.as_path());
}

#[test]
fn disabled_voiceover_generates_nothing() {
    let dir = std::path::PathBuf::from("target").join("tts_disabled");
    let synth = SpeechSynthesizer::new(&dir).unwrap();

    let mut config = crate::timeline::presets::deep_conversation();
    config.audio_settings = None;
    let generated = synth.generate_scene_audio(&mut config).unwrap();
    assert!(generated.is_empty());

    let mut config = crate::timeline::presets::deep_conversation();
    if let Some(settings) = &mut config.audio_settings {
        settings.generate_voiceover = false;
    }
    let generated = synth.generate_scene_audio(&mut config).unwrap();
    assert!(generated.is_empty());
}
