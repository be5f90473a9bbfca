use super::*;

#[test]
fn by_name_resolves_all_predefined_names() {
    assert!(by_name("deep").is_some());
    assert!(by_name("simple").is_some());
    assert!(by_name("container").is_some());
    assert!(by_name("default").is_some());
    assert!(by_name("mystery").is_none());
}

#[test]
fn default_is_the_deep_conversation() {
    let default = default_scene();
    let deep = deep_conversation();
    assert_eq!(default.name, deep.name);
    assert_eq!(default.conversation.len(), deep.conversation.len());
}

#[test]
fn preset_intervals_are_contiguous_from_zero() {
    for config in [
        deep_conversation(),
        simple_conversation(),
        container_conversation(),
    ] {
        assert_eq!(config.conversation[0].start, 0);
        for pair in config.conversation.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "gap in {:?}", config.name);
        }
        assert_eq!(config.camera_sequence[0].start, 0);
        for pair in config.camera_sequence.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "camera gap in {:?}", config.name);
        }
    }
}

#[test]
fn every_preset_shot_name_exists_in_the_table() {
    for config in [
        deep_conversation(),
        simple_conversation(),
        container_conversation(),
    ] {
        for item in &config.camera_sequence {
            assert!(
                crate::camera::shots::shot_table().contains_key(item.shot_name.as_str()),
                "preset {:?} references unknown shot '{}'",
                config.name,
                item.shot_name
            );
        }
    }
}

#[test]
fn deep_preset_opens_and_closes_in_silence() {
    let deep = deep_conversation();
    assert_eq!(deep.conversation.first().unwrap().speaker, Speaker::None);
    assert_eq!(deep.conversation.last().unwrap().speaker, Speaker::None);
    assert_eq!(deep.conversation.last().unwrap().end, 2160);
}

#[test]
fn container_preset_walks_the_beach() {
    let config = container_conversation();
    assert_eq!(config.environment, EnvironmentKind::Beach);
}
