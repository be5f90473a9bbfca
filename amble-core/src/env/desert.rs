use crate::env::factory::EnvironmentConfig;
use crate::env::field::{Field, Spawn};
use crate::env::jungle::GROUND_CYCLE;
use crate::env::mountains::{MountainPalette, MountainRange, MountainTier};
use crate::env::path::PathField;
use crate::foundation::core::{Color, Vec3};
use crate::foundation::error::AmbleResult;
use crate::foundation::math::SeededRandom;

/// Atmosphere and surface record for the desert.
pub fn desert_config() -> EnvironmentConfig {
    EnvironmentConfig {
        background: Color::from_u32(0xFFE5B4),
        fog_color: Color::from_u32(0xFFD700),
        fog_near: 35.0,
        fog_far: 90.0,
        ground: Color::from_u32(0xF4A460),
        path: Color::from_u32(0xDEB887),
        enable_shadows: true,
        character_y_offset: None,
    }
}

/// Cactus green shared by all variants.
pub const CACTUS_COLOR: Color = Color::from_u32(0x228B22);
/// Plain rock color.
pub const ROCK_COLOR: Color = Color::from_u32(0x8B7355);
/// Red rock color.
pub const RED_ROCK_COLOR: Color = Color::from_u32(0xCD5C5C);

/// Cactus silhouettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CactusKind {
    /// Tall trunk with capsule arms.
    Saguaro,
    /// Squat ridged barrel.
    Barrel,
    /// Stacked rounded paddles.
    PricklyPear,
}

/// One saguaro arm.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct CactusArm {
    /// Arm length.
    pub height: f32,
    /// Attachment height on the trunk.
    pub attach_y: f32,
    /// Which side the arm grows from (-1 or 1).
    pub side: f32,
    /// Outward tilt in radians.
    pub tilt: f32,
}

/// Shape parameters for one cactus.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CactusParams {
    /// Silhouette variant.
    pub kind: CactusKind,
    /// Trunk or body height.
    pub height: f32,
    /// Trunk, barrel, or paddle radius.
    pub radius: f32,
    /// Arms (saguaro only).
    pub arms: Vec<CactusArm>,
    /// Paddle count (prickly pear only).
    pub paddles: usize,
}

/// One rock inside a formation.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct RockPiece {
    /// Rock size.
    pub size: f32,
    /// Offset from the formation center.
    pub offset: Vec3,
    /// Whether this rock uses the red palette.
    pub red: bool,
}

/// Shape parameters for one rock formation.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RockFormationParams {
    /// Overall size multiplier.
    pub size: f32,
    /// Rocks in the cluster.
    pub rocks: Vec<RockPiece>,
}

/// Cactus population and Z pitch.
pub const CACTUS_COUNT: usize = 25;
/// Z pitch between cacti.
pub const CACTUS_SPACING: f32 = 7.0;
/// Rock formation population and Z pitch.
pub const ROCK_COUNT: usize = 15;
/// Z pitch between rock formations.
pub const ROCK_SPACING: f32 = 12.0;

/// Cacti and rock formations under golden haze, desert mountains behind.
#[derive(Clone, Debug)]
pub struct DesertEnvironment {
    config: EnvironmentConfig,
    path: PathField,
    cacti: Field<CactusParams>,
    rocks: Field<RockFormationParams>,
    mountains: MountainRange,
    ground_z: f32,
}

impl DesertEnvironment {
    /// Build the desert from one seed.
    pub fn new(seed: u32) -> AmbleResult<Self> {
        let config = desert_config();

        let cactus_loop = CACTUS_COUNT as f32 * CACTUS_SPACING;
        let cacti = Field::generate(
            CACTUS_COUNT,
            -100.0,
            -100.0 + cactus_loop,
            seed.wrapping_add(1),
            |rng, i| {
                let x = (10.0 + rng.next() * 20.0) * rng.sign();
                let z = -80.0 + i as f32 * CACTUS_SPACING + rng.next() * 5.0;
                let kind = match rng.index(3) {
                    0 => CactusKind::Saguaro,
                    1 => CactusKind::Barrel,
                    _ => CactusKind::PricklyPear,
                };
                Spawn::new(sample_cactus(kind, rng), Vec3::new(x, -1.3, z))
            },
        )?;

        let rock_loop = ROCK_COUNT as f32 * ROCK_SPACING;
        let rocks = Field::generate(
            ROCK_COUNT,
            -100.0,
            -100.0 + rock_loop,
            seed.wrapping_add(2),
            |rng, i| {
                let x = (15.0 + rng.next() * 25.0) * rng.sign();
                let z = -80.0 + i as f32 * ROCK_SPACING + rng.next() * 8.0;
                let size = 0.8 + rng.next() * 0.6;
                Spawn::new(sample_rocks(size, rng), Vec3::new(x, 0.0, z))
            },
        )?;

        Ok(Self {
            path: PathField::new(config.path)?,
            cacti,
            rocks,
            mountains: MountainRange::with_palette(
                seed.wrapping_add(3),
                MountainPalette::desert(),
            )?,
            ground_z: 0.0,
            config,
        })
    }

    /// Advance every element to its position for `total_distance`.
    pub fn update_by_frame(&mut self, total_distance: f32) {
        self.ground_z = -total_distance.rem_euclid(GROUND_CYCLE);
        self.path.update_by_frame(total_distance);
        self.cacti.update_by_frame(total_distance);
        self.rocks.update_by_frame(total_distance);
        self.mountains.update_by_frame(total_distance);
    }

    /// Atmosphere record.
    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    /// Ground plane offset for the current distance.
    pub fn ground_z(&self) -> f32 {
        self.ground_z
    }

    /// Cactus field.
    pub fn cacti(&self) -> &Field<CactusParams> {
        &self.cacti
    }

    /// Rock formations.
    pub fn rocks(&self) -> &Field<RockFormationParams> {
        &self.rocks
    }

    /// Desert-toned mountain backdrop.
    pub fn mountains(&self) -> &MountainRange {
        &self.mountains
    }

    /// Packed-sand path.
    pub fn path(&self) -> &PathField {
        &self.path
    }
}

fn sample_cactus(kind: CactusKind, rng: &mut SeededRandom) -> CactusParams {
    match kind {
        CactusKind::Saguaro => {
            let height = 6.0 + rng.next() * 2.0;
            let radius = 0.6 + rng.next() * 0.3;
            let arm_count = rng.index(3) + 1;
            let arms = (0..arm_count)
                .map(|i| CactusArm {
                    height: 2.0 + rng.next() * 2.0,
                    attach_y: height * (0.4 + rng.next() * 0.4),
                    side: if i % 2 == 0 { 1.0 } else { -1.0 },
                    tilt: std::f32::consts::PI / 6.0
                        + rng.next() * std::f32::consts::PI / 6.0,
                })
                .collect();
            CactusParams {
                kind,
                height,
                radius,
                arms,
                paddles: 0,
            }
        }
        CactusKind::Barrel => {
            let radius = 1.2 + rng.next() * 0.6;
            CactusParams {
                kind,
                height: radius * 1.2,
                radius,
                arms: Vec::new(),
                paddles: 0,
            }
        }
        CactusKind::PricklyPear => CactusParams {
            kind,
            height: 1.5 + rng.next() * 0.5,
            radius: 1.2 + rng.next() * 0.4,
            arms: Vec::new(),
            paddles: 2 + rng.index(2),
        },
    }
}

fn sample_rocks(size: f32, rng: &mut SeededRandom) -> RockFormationParams {
    let rock_count = 3 + rng.index(3);
    let rocks = (0..rock_count)
        .map(|_| {
            let rock_size = (0.5 + rng.next() * 1.5) * size;
            RockPiece {
                size: rock_size,
                offset: Vec3::new(
                    (rng.next() - 0.5) * 3.0 * size,
                    rock_size * 0.5,
                    (rng.next() - 0.5) * 3.0 * size,
                ),
                red: rng.next() > 0.5,
            }
        })
        .collect();
    RockFormationParams { size, rocks }
}

#[cfg(test)]
#[path = "../../tests/unit/env/desert.rs"]
mod tests;
