use crate::env::factory::EnvironmentConfig;
use crate::env::field::{Field, Spawn};
use crate::env::jungle::GROUND_CYCLE;
use crate::env::particles::{ParticleField, ParticleSpec};
use crate::env::path::PathField;
use crate::foundation::core::{Color, Vec3};
use crate::foundation::error::AmbleResult;
use crate::foundation::math::SeededRandom;

/// Atmosphere and surface record for the cherry blossom avenue.
pub fn cherry_blossom_config() -> EnvironmentConfig {
    EnvironmentConfig {
        background: Color::from_u32(0xFFE4E1),
        fog_color: Color::from_u32(0xFFB6C1),
        fog_near: 25.0,
        fog_far: 80.0,
        ground: Color::from_u32(0x90EE90),
        path: Color::from_u32(0xD2691E),
        enable_shadows: true,
        character_y_offset: None,
    }
}

/// Trunk color of the cherry trees.
pub const CHERRY_TRUNK_COLOR: Color = Color::from_u32(0x4B3621);
/// Blossom cluster color.
pub const BLOSSOM_COLOR: Color = Color::from_u32(0xFFB6C1);
/// Fallen petal color.
pub const FALLEN_PETAL_COLOR: Color = Color::from_u32(0xFFC0CB);

/// Rows of tree pairs along the avenue.
pub const TREE_ROWS: usize = 30;
/// Z pitch between rows.
pub const ROW_SPACING: f32 = 6.0;

/// One blossom cluster on a cherry tree crown.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct BlossomCluster {
    /// Cluster radius.
    pub radius: f32,
    /// Angle around the trunk.
    pub angle: f32,
    /// Distance from the trunk axis.
    pub offset: f32,
    /// Height of the cluster center.
    pub height: f32,
}

/// Shape parameters for one cherry tree.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CherryTreeParams {
    /// Overall size multiplier.
    pub size: f32,
    /// Blossom clusters forming the crown.
    pub clusters: Vec<BlossomCluster>,
}

/// A petal resting on the ground (static decoration).
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct FallenPetal {
    /// World position on the ground plane.
    pub position: Vec3,
    /// Flat rotation.
    pub rotation: f32,
}

/// A pink-canopied avenue with drifting petals.
#[derive(Clone, Debug)]
pub struct CherryBlossomEnvironment {
    config: EnvironmentConfig,
    path: PathField,
    trees: Field<CherryTreeParams>,
    petals: ParticleField,
    fallen_petals: Vec<FallenPetal>,
    ground_z: f32,
}

impl CherryBlossomEnvironment {
    /// Build the avenue from one seed.
    pub fn new(seed: u32) -> AmbleResult<Self> {
        let config = cherry_blossom_config();
        let loop_distance = TREE_ROWS as f32 * ROW_SPACING;

        // Trees come in left/right pairs per row; even indices go left.
        let trees = Field::generate(
            TREE_ROWS * 2,
            -100.0,
            -100.0 + loop_distance,
            seed.wrapping_add(1),
            |rng, i| {
                let row = i / 2;
                let left = i % 2 == 0;
                let x = if left {
                    -8.0 - rng.next() * 5.0
                } else {
                    8.0 + rng.next() * 5.0
                };
                let z = -80.0 + row as f32 * ROW_SPACING;
                let size = 0.8 + rng.next() * 0.4;
                Spawn::new(sample_cherry_tree(size, rng), Vec3::new(x, 0.0, z))
            },
        )?;

        let fallen_petals = scatter_fallen_petals(seed.wrapping_add(2));
        let petals = ParticleField::new(ParticleSpec::petals(), seed.wrapping_add(3))?;

        Ok(Self {
            path: PathField::new(config.path)?,
            trees,
            petals,
            fallen_petals,
            ground_z: 0.0,
            config,
        })
    }

    /// Advance every element to its position for `total_distance`.
    pub fn update_by_frame(&mut self, total_distance: f32) {
        self.ground_z = -total_distance.rem_euclid(GROUND_CYCLE);
        self.path.update_by_frame(total_distance);
        self.trees.update_by_frame(total_distance);
        self.petals.update_by_frame_time(total_distance);
    }

    /// Atmosphere record.
    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    /// Ground plane offset for the current distance.
    pub fn ground_z(&self) -> f32 {
        self.ground_z
    }

    /// Avenue trees.
    pub fn trees(&self) -> &Field<CherryTreeParams> {
        &self.trees
    }

    /// Wooden path.
    pub fn path(&self) -> &PathField {
        &self.path
    }

    /// Airborne petals.
    pub fn petals(&self) -> &ParticleField {
        &self.petals
    }

    /// Static petals scattered on the grass.
    pub fn fallen_petals(&self) -> &[FallenPetal] {
        &self.fallen_petals
    }
}

fn sample_cherry_tree(size: f32, rng: &mut SeededRandom) -> CherryTreeParams {
    let cluster_count = 5 + rng.index(3);
    let clusters = (0..cluster_count)
        .map(|i| BlossomCluster {
            radius: (2.0 + rng.next() * 1.5) * size,
            angle: (i as f32 / cluster_count as f32) * std::f32::consts::TAU,
            offset: (1.5 + rng.next()) * size,
            height: (5.0 + rng.next() * 2.0) * size,
        })
        .collect();
    CherryTreeParams { size, clusters }
}

fn scatter_fallen_petals(seed: u32) -> Vec<FallenPetal> {
    let mut rng = SeededRandom::new(seed);
    (0..100)
        .map(|_| FallenPetal {
            position: Vec3::new(
                (rng.next() - 0.5) * 40.0,
                -1.25,
                (rng.next() - 0.5) * 100.0,
            ),
            rotation: rng.next() * std::f32::consts::TAU,
        })
        .collect()
}
