//! The scene timeline: script model, presets, queries and the duration
//! resolver.

/// Scene configuration records.
pub mod model;
/// Hand-authored scene presets.
pub mod presets;
/// Frame-indexed interval lookups.
pub mod query;
/// The pre-render duration resolution pass.
pub mod resolve;
