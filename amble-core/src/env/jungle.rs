use crate::env::factory::EnvironmentConfig;
use crate::env::mountains::MountainRange;
use crate::env::path::PathField;
use crate::env::trees::{DEFAULT_TREE_COUNT, TREE_LOOP_RESET, TREE_LOOP_WRAP, TreeField};
use crate::env::undergrowth::{DEFAULT_UNDERGROWTH_COUNT, UndergrowthField};
use crate::foundation::core::Color;
use crate::foundation::error::AmbleResult;

/// Ground tile length; the ground plane snaps back every cycle.
pub const GROUND_CYCLE: f32 = 200.0;

/// Atmosphere and surface record for the jungle.
pub fn jungle_config() -> EnvironmentConfig {
    EnvironmentConfig {
        background: Color::from_u32(0x8FBC8F),
        fog_color: Color::from_u32(0x7A9B7A),
        fog_near: 25.0,
        fog_far: 80.0,
        ground: Color::from_u32(0x2F4F2F),
        path: Color::from_u32(0x8B4513),
        enable_shadows: true,
        character_y_offset: None,
    }
}

/// Dense forest flanking a packed-earth path, with layered mountains behind.
#[derive(Clone, Debug)]
pub struct JungleEnvironment {
    config: EnvironmentConfig,
    path: PathField,
    trees: TreeField,
    mountains: MountainRange,
    undergrowth: UndergrowthField,
    ground_z: f32,
}

impl JungleEnvironment {
    /// Build the jungle from one seed; each field gets a distinct offset so
    /// their procedural patterns stay uncorrelated.
    pub fn new(seed: u32) -> AmbleResult<Self> {
        let config = jungle_config();
        Ok(Self {
            path: PathField::new(config.path)?,
            trees: TreeField::new(
                DEFAULT_TREE_COUNT,
                TREE_LOOP_RESET,
                TREE_LOOP_WRAP,
                seed.wrapping_add(1),
            )?,
            mountains: MountainRange::new(seed.wrapping_add(2))?,
            undergrowth: UndergrowthField::new(DEFAULT_UNDERGROWTH_COUNT, seed.wrapping_add(3))?,
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
        self.undergrowth.update_by_frame(total_distance);
    }

    /// Atmosphere record.
    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    /// Ground plane offset for the current distance.
    pub fn ground_z(&self) -> f32 {
        self.ground_z
    }

    /// Tree field.
    pub fn trees(&self) -> &TreeField {
        &self.trees
    }

    /// Mountain backdrop.
    pub fn mountains(&self) -> &MountainRange {
        &self.mountains
    }

    /// Walkable path.
    pub fn path(&self) -> &PathField {
        &self.path
    }

    /// Ground cover.
    pub fn undergrowth(&self) -> &UndergrowthField {
        &self.undergrowth
    }
}
