//! Off-band audio pipeline: duration probing and speech synthesis.
//!
//! Everything here runs before rendering, sequentially, and degrades
//! per-clip instead of aborting the batch.

/// Media duration measurement via `ffprobe`.
pub mod probe;
/// Text-to-speech generation and the metadata sidecar.
pub mod tts;
