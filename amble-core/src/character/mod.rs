//! Character rig construction and closed-form animation.

/// Pure per-frame pose evaluation.
pub mod animator;
/// Primitive-shape rig hierarchy.
pub mod rig;
/// Appearance and voice styles.
pub mod style;
