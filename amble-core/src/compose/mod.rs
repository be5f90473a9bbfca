//! The composition layer: timeline state + environment + rigs per frame.

/// Stateless per-frame scene evaluation.
pub mod scene;
