use super::*;

fn script() -> Vec<ConversationSegment> {
    vec![
        ConversationSegment {
            start: 0,
            end: 90,
            speaker: Speaker::None,
            text: String::new(),
            audio_src: None,
        },
        ConversationSegment {
            start: 90,
            end: 180,
            speaker: Speaker::Character1,
            text: "This jungle path is incredible!".to_owned(),
            audio_src: None,
        },
        ConversationSegment {
            start: 180,
            end: 270,
            speaker: Speaker::Both,
            text: "Did you see that?!".to_owned(),
            audio_src: None,
        },
    ]
}

#[test]
fn lookups_respect_half_open_intervals() {
    let conv = script();
    assert_eq!(speaker_at(FrameIndex(89), &conv), Speaker::None);
    assert_eq!(speaker_at(FrameIndex(90), &conv), Speaker::Character1);
    assert_eq!(speaker_at(FrameIndex(179), &conv), Speaker::Character1);
    assert_eq!(speaker_at(FrameIndex(180), &conv), Speaker::Both);
}

#[test]
fn out_of_range_frames_fall_back() {
    let conv = script();
    assert_eq!(speaker_at(FrameIndex(5000), &conv), Speaker::None);
    assert_eq!(text_at(FrameIndex(5000), &conv), "");
    assert!(segment_at(FrameIndex(5000), &conv).is_none());
}

#[test]
fn text_tracks_the_active_segment() {
    let conv = script();
    assert_eq!(text_at(FrameIndex(0), &conv), "");
    assert_eq!(text_at(FrameIndex(100), &conv), "This jungle path is incredible!");
}

#[test]
fn shot_lookup_defaults_to_wide() {
    let sequence = vec![
        CameraSequenceItem {
            shot_name: "environment".to_owned(),
            start: 0,
            end: 60,
        },
        CameraSequenceItem {
            shot_name: "tracking".to_owned(),
            start: 60,
            end: 120,
        },
    ];
    assert_eq!(shot_name_at(FrameIndex(0), &sequence), "environment");
    assert_eq!(shot_name_at(FrameIndex(60), &sequence), "tracking");
    assert_eq!(shot_name_at(FrameIndex(500), &sequence), "wide");
    assert_eq!(shot_name_at(FrameIndex(0), &[]), "wide");
}
