use crate::env::field::{Field, Spawn};
use crate::env::trees::{TREE_LOOP_RESET, TREE_LOOP_WRAP};
use crate::foundation::core::{Color, Vec3};
use crate::foundation::error::AmbleResult;

/// Ground-cover plant variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndergrowthKind {
    /// Squashed sphere bush.
    Bush,
    /// Cluster of three leaning cones.
    Fern,
}

/// Bush foliage color.
pub const BUSH_COLOR: Color = Color::from_u32(0x228B22);
/// Fern foliage color.
pub const FERN_COLOR: Color = Color::from_u32(0x32CD32);

/// Shape parameters for one ground-cover plant.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct UndergrowthParams {
    /// Plant variant.
    pub kind: UndergrowthKind,
    /// Bush radius (bush variant).
    pub bush_radius: f32,
    /// Per-frond offset and lean (fern variant): (dx, dz, lean radians).
    pub fronds: Vec<(f32, f32, f32)>,
}

/// Default ground-cover population.
pub const DEFAULT_UNDERGROWTH_COUNT: usize = 40;

/// A loopable field of bushes and ferns under the trees.
#[derive(Clone, Debug)]
pub struct UndergrowthField {
    field: Field<UndergrowthParams>,
}

impl UndergrowthField {
    /// Generate the field with the default jungle layout.
    pub fn new(count: usize, seed: u32) -> AmbleResult<Self> {
        let field = Field::generate(count, TREE_LOOP_RESET, TREE_LOOP_WRAP, seed, |rng, i| {
            let kind = if rng.next() > 0.5 {
                UndergrowthKind::Bush
            } else {
                UndergrowthKind::Fern
            };
            let params = match kind {
                UndergrowthKind::Bush => UndergrowthParams {
                    kind,
                    bush_radius: rng.range(0.5, 1.5),
                    fronds: Vec::new(),
                },
                UndergrowthKind::Fern => UndergrowthParams {
                    kind,
                    bush_radius: 0.0,
                    fronds: (0..3)
                        .map(|_| {
                            (
                                rng.range(-0.4, 0.4),
                                rng.range(-0.4, 0.4),
                                rng.range(-0.25, 0.25),
                            )
                        })
                        .collect(),
                },
            };

            let side = rng.sign();
            let x = side * rng.range(2.5, 17.5);
            let z = (i as f32 - count as f32 / 2.0) * 8.0 + rng.range(-6.0, 6.0);
            Spawn::new(params, Vec3::new(x, -1.3, z))
        })?;
        Ok(Self { field })
    }

    /// Scroll all plants to their positions for `total_distance`.
    pub fn update_by_frame(&mut self, total_distance: f32) {
        self.field.update_by_frame(total_distance);
    }

    /// Underlying field.
    pub fn field(&self) -> &Field<UndergrowthParams> {
        &self.field
    }
}
