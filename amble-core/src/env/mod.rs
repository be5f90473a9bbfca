//! Procedural biome environments.
//!
//! Every biome composes a handful of loopable field generators behind one
//! `update_by_frame(total_distance)` contract. All variation routes through
//! the seeded generator; positions are functions of absolute distance.

/// Sunset shoreline biome.
pub mod beach;
/// Cherry blossom avenue biome.
pub mod cherry_blossom;
/// Desert biome.
pub mod desert;
/// Biome dispatch, kinds and atmosphere records.
pub mod factory;
/// Generic loopable field generator.
pub mod field;
/// Jungle biome.
pub mod jungle;
/// Parallax mountain backdrops.
pub mod mountains;
/// Deterministic falling-particle fields.
pub mod particles;
/// The walkable path.
pub mod path;
/// Snowy forest biome.
pub mod snowy_forest;
/// Jungle tree fields (and their snow dressing).
pub mod trees;
/// Ground-cover plants.
pub mod undergrowth;
