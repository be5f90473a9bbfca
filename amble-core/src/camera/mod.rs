//! Named camera shots and the cut sequencer.

/// Frame-indexed cut resolution with spring-eased transitions.
pub mod sequencer;
/// The shot table.
pub mod shots;
