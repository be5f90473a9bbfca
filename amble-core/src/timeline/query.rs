use crate::foundation::core::FrameIndex;
use crate::timeline::model::{CameraSequenceItem, ConversationSegment, Speaker};

/// The conversation segment active at `frame`, if any.
pub fn segment_at(
    frame: FrameIndex,
    conversation: &[ConversationSegment],
) -> Option<&ConversationSegment> {
    conversation
        .iter()
        .find(|seg| seg.start <= frame.0 && frame.0 < seg.end)
}

/// The speaker at `frame`; [`Speaker::None`] outside every segment.
pub fn speaker_at(frame: FrameIndex, conversation: &[ConversationSegment]) -> Speaker {
    segment_at(frame, conversation)
        .map(|seg| seg.speaker)
        .unwrap_or(Speaker::None)
}

/// The subtitle text at `frame`; empty outside every segment.
pub fn text_at(frame: FrameIndex, conversation: &[ConversationSegment]) -> &str {
    segment_at(frame, conversation)
        .map(|seg| seg.text.as_str())
        .unwrap_or("")
}

/// The camera shot name at `frame`; `"wide"` outside every interval.
pub fn shot_name_at<'a>(frame: FrameIndex, sequence: &'a [CameraSequenceItem]) -> &'a str {
    sequence
        .iter()
        .find(|item| item.start <= frame.0 && frame.0 < item.end)
        .map(|item| item.shot_name.as_str())
        .unwrap_or("wide")
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/query.rs"]
mod tests;
