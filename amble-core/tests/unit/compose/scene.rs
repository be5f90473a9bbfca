use super::*;
use crate::character::animator::MOUTH_CLOSED_SCALE;
use crate::timeline::presets::{container_conversation, deep_conversation};
use crate::timeline::resolve::ResolvedScene;

fn deep_scene() -> WalkScene {
    let resolved = ResolvedScene::from_authored(deep_conversation());
    WalkScene::new(resolved, Fps::new(30, 1).unwrap(), 12345).unwrap()
}

#[test]
fn distance_follows_the_walk_speed() {
    let mut scene = deep_scene();
    let state = scene.evaluate(FrameIndex(300));
    // 10 seconds at 0.7 units/second.
    assert!((state.distance - 7.0).abs() < 1e-4);
    assert!((state.time - 10.0).abs() < 1e-4);
}

#[test]
fn silent_frames_have_no_subtitle() {
    let mut scene = deep_scene();
    let state = scene.evaluate(FrameIndex(0));
    assert_eq!(state.speaker, Speaker::None);
    assert_eq!(state.subtitle.text, "");
    assert_eq!(state.subtitle.opacity, 0.0);
}

#[test]
fn subtitle_fades_in_holds_and_fades_out() {
    let mut scene = deep_scene();
    // Deep segment [120, 240): fade-in ends at 132, fade-out starts at 228.
    let early = scene.evaluate(FrameIndex(121));
    assert!(early.subtitle.opacity > 0.0 && early.subtitle.opacity < 1.0);

    let mid = scene.evaluate(FrameIndex(180));
    assert_eq!(mid.subtitle.opacity, 1.0);
    assert_eq!(mid.subtitle.offset_y, 80.0);

    let late = scene.evaluate(FrameIndex(236));
    assert!(late.subtitle.opacity < 1.0);
}

#[test]
fn letterbox_follows_close_shots() {
    let mut scene = deep_scene();
    // Frame 700 sits in the closeUp interval [600, 780).
    let close = scene.evaluate(FrameIndex(700));
    assert_eq!(close.letterbox_opacity, LETTERBOX_OPACITY);
    // Frame 150 sits in the wide interval [120, 240).
    let wide = scene.evaluate(FrameIndex(150));
    assert_eq!(wide.letterbox_opacity, 0.0);
}

#[test]
fn characters_hold_their_lanes() {
    let mut scene = deep_scene();
    let state = scene.evaluate(FrameIndex(42));
    assert_eq!(state.characters.len(), 2);
    assert_eq!(state.characters[0].position.x, CHARACTER_X[0]);
    assert_eq!(state.characters[1].position.x, CHARACTER_X[1]);
}

#[test]
fn beach_lift_raises_both_characters() {
    let resolved = ResolvedScene::from_authored(container_conversation());
    let mut scene = WalkScene::new(resolved, Fps::new(30, 1).unwrap(), 12345).unwrap();
    let state = scene.evaluate(FrameIndex(10));
    for c in &state.characters {
        // Lift 1.2 plus at most 0.05 of body bob.
        assert!(c.position.y > 1.0);
    }
}

#[test]
fn evaluation_is_stateless_per_frame() {
    let mut linear = deep_scene();
    let mut shuffled = deep_scene();

    let a = linear.evaluate(FrameIndex(500));
    shuffled.evaluate(FrameIndex(10));
    shuffled.evaluate(FrameIndex(1999));
    let b = shuffled.evaluate(FrameIndex(500));

    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn speakers_mouth_opens_only_on_their_lines() {
    let mut scene = deep_scene();
    // Frame 150: Character 1 speaks.
    let state = scene.evaluate(FrameIndex(150));
    assert_eq!(state.speaker, Speaker::Character1);
    assert_eq!(state.characters[1].pose.mouth_scale, MOUTH_CLOSED_SCALE);
    assert!(state.characters[0].pose.mouth_scale.y >= MOUTH_CLOSED_SCALE.y);
}
