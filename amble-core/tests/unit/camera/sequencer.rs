use super::*;
use crate::timeline::model::CameraSequenceItem;

fn item(shot_name: &str, start: u64, end: u64) -> CameraSequenceItem {
    CameraSequenceItem {
        shot_name: shot_name.to_owned(),
        start,
        end,
    }
}

fn fps() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn no_matching_interval_defaults_to_wide() {
    let sequence = vec![item("closeUp", 100, 200)];
    assert_eq!(current_shot(FrameIndex(500), &sequence, fps()), *shot("wide"));
    assert_eq!(current_shot(FrameIndex(0), &[], fps()), *shot("wide"));
}

#[test]
fn unknown_shot_names_resolve_to_wide() {
    let sequence = vec![item("nonexistentShot", 0, 100)];
    assert_eq!(current_shot(FrameIndex(50), &sequence, fps()), *shot("wide"));
}

#[test]
fn settled_interval_returns_the_exact_shot() {
    let sequence = vec![item("environment", 0, 100), item("closeUp", 100, 200)];
    // 50% into the second interval, far past the 10% blend window.
    assert_eq!(
        current_shot(FrameIndex(150), &sequence, fps()),
        *shot("closeUp")
    );
}

#[test]
fn first_interval_never_blends() {
    let sequence = vec![item("environment", 0, 100), item("closeUp", 100, 200)];
    assert_eq!(
        current_shot(FrameIndex(0), &sequence, fps()),
        *shot("environment")
    );
}

#[test]
fn cut_boundary_starts_at_the_previous_shot() {
    let sequence = vec![item("environment", 0, 100), item("closeUp", 100, 200)];
    // At the boundary frame the spring has not moved yet.
    let pose = current_shot(FrameIndex(100), &sequence, fps());
    assert_eq!(pose, *shot("environment"));
}

#[test]
fn blend_converges_toward_the_new_shot() {
    let sequence = vec![item("environment", 0, 100), item("closeUp", 100, 200)];
    let target = shot("closeUp");
    let early = current_shot(FrameIndex(101), &sequence, fps());
    let late = current_shot(FrameIndex(109), &sequence, fps());
    let d_early = (early.position - target.position).length();
    let d_late = (late.position - target.position).length();
    assert!(d_late < d_early);
}

#[test]
fn blend_is_pure_per_frame() {
    let sequence = vec![item("environment", 0, 100), item("closeUp", 100, 200)];
    let a = current_shot(FrameIndex(105), &sequence, fps());
    let _ = current_shot(FrameIndex(42), &sequence, fps());
    let b = current_shot(FrameIndex(105), &sequence, fps());
    assert_eq!(a, b);
}
