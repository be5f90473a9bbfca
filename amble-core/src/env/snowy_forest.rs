use crate::env::factory::EnvironmentConfig;
use crate::env::jungle::GROUND_CYCLE;
use crate::env::mountains::{MountainPalette, MountainRange};
use crate::env::particles::{ParticleField, ParticleSpec};
use crate::env::path::PathField;
use crate::env::trees::{DEFAULT_TREE_COUNT, TREE_LOOP_RESET, TREE_LOOP_WRAP, TreeField};
use crate::foundation::core::Color;
use crate::foundation::error::AmbleResult;

/// Atmosphere and surface record for the snowy forest.
pub fn snowy_forest_config() -> EnvironmentConfig {
    EnvironmentConfig {
        background: Color::from_u32(0xE0E5E5),
        fog_color: Color::from_u32(0xF0F8FF),
        fog_near: 20.0,
        fog_far: 70.0,
        ground: Color::from_u32(0xFAFAFA),
        path: Color::from_u32(0xD3D3D3),
        enable_shadows: true,
        character_y_offset: None,
    }
}

/// Frosted trees and whitened mountains under continuous snowfall.
#[derive(Clone, Debug)]
pub struct SnowyForestEnvironment {
    config: EnvironmentConfig,
    path: PathField,
    trees: TreeField,
    mountains: MountainRange,
    snow: ParticleField,
    ground_z: f32,
}

impl SnowyForestEnvironment {
    /// Build the snowy forest from one seed.
    pub fn new(seed: u32) -> AmbleResult<Self> {
        let config = snowy_forest_config();
        Ok(Self {
            path: PathField::new(config.path)?,
            trees: TreeField::snowy(
                DEFAULT_TREE_COUNT,
                TREE_LOOP_RESET,
                TREE_LOOP_WRAP,
                seed.wrapping_add(1),
            )?,
            mountains: MountainRange::with_palette(
                seed.wrapping_add(2),
                MountainPalette::snowy(),
            )?,
            snow: ParticleField::new(ParticleSpec::snow(), seed.wrapping_add(4))?,
            ground_z: 0.0,
            config,
        })
    }

    /// Advance every element to its position for `total_distance`.
    pub fn update_by_frame(&mut self, total_distance: f32) {
        self.ground_z = -total_distance.rem_euclid(GROUND_CYCLE);
        self.path.update_by_frame(total_distance);
        self.trees.update_by_frame(total_distance);
        self.mountains.update_by_frame(total_distance);
        self.snow.update_by_frame_time(total_distance);
    }

    /// Atmosphere record.
    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    /// Ground plane offset for the current distance.
    pub fn ground_z(&self) -> f32 {
        self.ground_z
    }

    /// Snow-dressed tree field.
    pub fn trees(&self) -> &TreeField {
        &self.trees
    }

    /// Whitened mountain backdrop.
    pub fn mountains(&self) -> &MountainRange {
        &self.mountains
    }

    /// Packed-snow path.
    pub fn path(&self) -> &PathField {
        &self.path
    }

    /// Falling snow.
    pub fn snow(&self) -> &ParticleField {
        &self.snow
    }
}
