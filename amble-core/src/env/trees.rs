use crate::env::field::{Field, Spawn};
use crate::foundation::core::{Color, Vec3};
use crate::foundation::error::AmbleResult;
use crate::foundation::math::SeededRandom;

/// Jungle tree silhouettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeKind {
    /// Tall trunk with a single squashed canopy sphere.
    TallJungle,
    /// Shorter trunk with a wide canopy and two side canopies.
    BroadJungle,
    /// Slim trunk with irregular foliage and hanging vines.
    VineCovered,
}

/// Trunk color choices, indexed by `trunk_color`.
pub const TRUNK_COLORS: [Color; 4] = [
    Color::from_u32(0x8B4513),
    Color::from_u32(0x654321),
    Color::from_u32(0x5D4E37),
    Color::from_u32(0x8B7355),
];

/// Foliage color choices, indexed by `foliage_color`.
pub const FOLIAGE_COLORS: [Color; 6] = [
    Color::from_u32(0x228B22),
    Color::from_u32(0x006400),
    Color::from_u32(0x32CD32),
    Color::from_u32(0x9ACD32),
    Color::from_u32(0x00FF7F),
    Color::from_u32(0x90EE90),
];

/// Shape parameters for one generated tree.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TreeParams {
    /// Silhouette variant.
    pub kind: TreeKind,
    /// Trunk height in world units.
    pub trunk_height: f32,
    /// Trunk radius at the base.
    pub trunk_radius: f32,
    /// Main canopy radius.
    pub canopy_radius: f32,
    /// Lengths of hanging vines (vine-covered variant only).
    pub vine_lengths: Vec<f32>,
    /// Yaw applied for variety.
    pub rotation_y: f32,
    /// Index into [`TRUNK_COLORS`].
    pub trunk_color: usize,
    /// Index into [`FOLIAGE_COLORS`].
    pub foliage_color: usize,
    /// Whether the canopy carries a snow cap (snowy biome dressing).
    pub snow_capped: bool,
}

/// Palette overrides applied on top of the per-tree color indices.
#[derive(Clone, Copy, Debug)]
pub struct TreePalette {
    /// Forced trunk color, if any.
    pub trunk_override: Option<Color>,
    /// Forced foliage color, if any.
    pub foliage_override: Option<Color>,
    /// Snow cap color, present only in the snowy dressing.
    pub snow_cap: Option<Color>,
}

impl TreePalette {
    /// Default jungle palette: per-tree sampled colors, no overrides.
    pub fn jungle() -> Self {
        Self {
            trunk_override: None,
            foliage_override: None,
            snow_cap: None,
        }
    }

    /// Snowy palette: frosted trunks, dark foliage under white caps.
    pub fn snowy() -> Self {
        Self {
            trunk_override: Some(Color::from_u32(0x8B7355)),
            foliage_override: Some(Color::from_u32(0x006400)),
            snow_cap: Some(Color::from_u32(0xFFFFFF)),
        }
    }
}

/// A loopable field of jungle trees flanking the path.
#[derive(Clone, Debug)]
pub struct TreeField {
    field: Field<TreeParams>,
    palette: TreePalette,
}

/// Loop span used by tree and undergrowth fields.
pub const TREE_LOOP_RESET: f32 = -80.0;
/// Upper loop edge matching [`TREE_LOOP_RESET`].
pub const TREE_LOOP_WRAP: f32 = 80.0;
/// Default tree population.
pub const DEFAULT_TREE_COUNT: usize = 60;

impl TreeField {
    /// Generate the standard jungle tree field.
    pub fn new(count: usize, reset_z: f32, wrap_z: f32, seed: u32) -> AmbleResult<Self> {
        let field = Field::generate(count, reset_z, wrap_z, seed, |rng, i| {
            let kind = match rng.index(3) {
                0 => TreeKind::TallJungle,
                1 => TreeKind::BroadJungle,
                _ => TreeKind::VineCovered,
            };
            let params = sample_tree(kind, rng);

            let side = rng.sign();
            let distance_from_path = rng.range(3.0, 23.0);
            let x = side * distance_from_path + rng.range(-2.5, 2.5);
            let z = (i as f32 - count as f32 / 2.0) * 6.0 + rng.range(-7.5, 7.5);
            Spawn::new(params, Vec3::new(x, -1.3, z))
        })?;
        Ok(Self {
            field,
            palette: TreePalette::jungle(),
        })
    }

    /// Generate the snow-dressed variant: same placement algorithm, frosted
    /// palette, snow caps flagged on every canopy.
    pub fn snowy(count: usize, reset_z: f32, wrap_z: f32, seed: u32) -> AmbleResult<Self> {
        let mut this = Self::new(count, reset_z, wrap_z, seed)?;
        this.palette = TreePalette::snowy();
        this.field.dress(|p| p.snow_capped = true);
        Ok(this)
    }

    /// Scroll all trees to their positions for `total_distance`.
    pub fn update_by_frame(&mut self, total_distance: f32) {
        self.field.update_by_frame(total_distance);
    }

    /// Underlying field.
    pub fn field(&self) -> &Field<TreeParams> {
        &self.field
    }

    /// Palette in effect.
    pub fn palette(&self) -> &TreePalette {
        &self.palette
    }
}

fn sample_tree(kind: TreeKind, rng: &mut SeededRandom) -> TreeParams {
    let trunk_color = rng.index(TRUNK_COLORS.len());
    let foliage_color = rng.index(FOLIAGE_COLORS.len());
    let (trunk_height, trunk_radius, canopy_radius, vine_lengths) = match kind {
        TreeKind::TallJungle => (
            rng.range(8.0, 20.0),
            rng.range(0.4, 1.0),
            rng.range(3.0, 5.0),
            Vec::new(),
        ),
        TreeKind::BroadJungle => (
            rng.range(7.0, 15.0),
            rng.range(0.5, 0.9),
            rng.range(4.0, 6.0),
            Vec::new(),
        ),
        TreeKind::VineCovered => {
            let trunk_height = rng.range(8.0, 18.0);
            let trunk_radius = rng.range(0.3, 0.6);
            let canopy_radius = rng.range(2.5, 4.0);
            let vines = (0..3).map(|_| rng.range(1.0, 3.0)).collect();
            (trunk_height, trunk_radius, canopy_radius, vines)
        }
    };
    TreeParams {
        kind,
        trunk_height,
        trunk_radius,
        canopy_radius,
        vine_lengths,
        rotation_y: rng.next() * std::f32::consts::TAU,
        trunk_color,
        foliage_color,
        snow_capped: false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/env/trees.rs"]
mod tests;
