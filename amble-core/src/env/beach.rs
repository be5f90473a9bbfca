use crate::env::factory::EnvironmentConfig;
use crate::env::field::{Field, Spawn};
use crate::env::mountains::{MountainParams, MountainTier, PeakParams};
use crate::env::path::PathField;
use crate::foundation::core::{Color, Vec3};
use crate::foundation::error::AmbleResult;
use crate::foundation::math::SeededRandom;

/// Atmosphere and surface record for the sunset beach.
pub fn beach_config() -> EnvironmentConfig {
    EnvironmentConfig {
        background: Color::from_u32(0xFFB6C1),
        fog_color: Color::from_u32(0xFFB6C1),
        fog_near: 50.0,
        fog_far: 200.0,
        ground: Color::from_u32(0xF4E4C1),
        path: Color::from_u32(0xD4A76A),
        enable_shadows: true,
        // Lift characters so their legs are not buried in the sand slope.
        character_y_offset: Some(1.2),
    }
}

/// Ocean water color.
pub const WATER_COLOR: Color = Color::from_u32(0x006994);
/// Wet sand strip color.
pub const WET_SAND_COLOR: Color = Color::from_u32(0xD4A76A);
/// Sun disc color.
pub const SUN_COLOR: Color = Color::from_u32(0xFFD700);

/// Beach terrain tiles this long; scenery loops over the same span.
pub const SECTION_LENGTH: f32 = 200.0;
/// Loop window lower edge for beach scenery.
const SHORE_RESET: f32 = -100.0;
/// Loop window upper edge for beach scenery.
const SHORE_WRAP: f32 = 100.0;
/// The shoreline: sand is flat on the walking side and slopes into the water
/// from this X onward.
pub const SHORELINE_X: f32 = 1.0;
/// Width of the wet sand strip along the shoreline.
pub const WET_SAND_WIDTH: f32 = 4.0;
/// Coastal mountains scroll at a fraction of the walking speed.
pub const COASTAL_PARALLAX: f32 = 0.3;

/// Palm tree size classes with weighted occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PalmSize {
    /// Short and narrow, few fronds.
    Small,
    /// Reference proportions.
    Medium,
    /// Tall and wide, many fronds.
    Large,
}

impl PalmSize {
    /// `(height multiplier, width multiplier, frond count)` for this class.
    pub fn multipliers(self) -> (f32, f32, usize) {
        match self {
            Self::Small => (0.6, 0.7, 6),
            Self::Medium => (1.0, 1.0, 8),
            Self::Large => (1.4, 1.2, 10),
        }
    }

    /// Coconuts hanging under the crown.
    pub fn coconut_count(self) -> usize {
        match self {
            Self::Small => 2,
            Self::Medium => 4,
            Self::Large => 6,
        }
    }
}

/// Shape parameters for one palm tree.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PalmParams {
    /// Size class.
    pub size: PalmSize,
    /// Lateral jitter of the trunk spine control points.
    pub trunk_curve: [f32; 4],
    /// Per-frond yaw jitter.
    pub frond_jitter: Vec<f32>,
}

/// Per-frame state of one shoreline wave sprite.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct WaveState {
    /// World position.
    pub position: Vec3,
    /// Vertical crest scale.
    pub scale_y: f32,
    /// Fade as the wave comes and goes.
    pub opacity: f32,
}

/// Construction parameters of one shoreline wave.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct WaveParams {
    /// Phase offset decorrelating the cycles.
    pub offset: f32,
    /// Base lateral position at the shoreline.
    pub x: f32,
}

/// Per-frame state of one tidal wash sweeping toward the walkers.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct TidalState {
    /// World position.
    pub position: Vec3,
    /// Sweep extent toward the characters.
    pub scale_x: f32,
    /// Fade in/out through the cycle.
    pub opacity: f32,
}

/// Construction parameters of one tidal wash plane.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct TidalParams {
    /// Phase offset decorrelating the cycles.
    pub offset: f32,
}

/// One circling seagull.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Seagull {
    /// Flight speed multiplier.
    pub speed: f32,
    /// Circle radius.
    pub radius: f32,
    /// Initial angle on the circle.
    pub start_angle: f32,
    /// Circle center X (out over the water).
    pub center_x: f32,
}

/// Per-frame state of one seagull.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SeagullState {
    /// World position.
    pub position: Vec3,
    /// Wing flap roll in radians (mirrored per wing).
    pub wing_roll: f32,
}

/// A sunset shoreline: sloping sand, animated water, tidal washes, palms,
/// seagulls and coastal mountains behind the tree line.
#[derive(Clone, Debug)]
pub struct BeachEnvironment {
    config: EnvironmentConfig,
    path: PathField,
    palms: Field<PalmParams>,
    waves: Field<WaveParams>,
    wave_states: Vec<WaveState>,
    tidal: Field<TidalParams>,
    tidal_states: Vec<TidalState>,
    seagulls: Vec<Seagull>,
    seagull_states: Vec<SeagullState>,
    mountains: Field<MountainParams>,
    ground_z: f32,
    wave_time: f32,
}

impl BeachEnvironment {
    /// Build the beach from one seed.
    pub fn new(seed: u32) -> AmbleResult<Self> {
        let config = beach_config();
        let palms = build_palms(seed.wrapping_add(1))?;
        let waves = build_waves(seed.wrapping_add(2))?;
        let tidal = build_tidal(seed.wrapping_add(3))?;
        let seagulls = build_seagulls(seed.wrapping_add(4));
        let mountains = build_coastal_mountains(seed.wrapping_add(5))?;

        let wave_count = waves.len();
        let tidal_count = tidal.len();
        let gull_count = seagulls.len();
        let mut this = Self {
            path: PathField::new(config.path)?,
            palms,
            waves,
            wave_states: vec![WaveState::default(); wave_count],
            tidal,
            tidal_states: vec![TidalState::default(); tidal_count],
            seagulls,
            seagull_states: vec![SeagullState::default(); gull_count],
            mountains,
            ground_z: 0.0,
            wave_time: 0.0,
            config,
        };
        this.update_by_frame(0.0);
        Ok(this)
    }

    /// Advance every element to its state for `total_distance`.
    pub fn update_by_frame(&mut self, total_distance: f32) {
        self.ground_z = -total_distance.rem_euclid(SECTION_LENGTH);
        self.wave_time = total_distance * 0.1;
        let wt = self.wave_time;

        self.path.update_by_frame(total_distance);
        self.palms.update_by_frame(total_distance);
        self.waves.update_by_frame(total_distance);
        self.tidal.update_by_frame(total_distance);
        self.mountains.update_by_frame(total_distance);

        for (state, inst) in self.wave_states.iter_mut().zip(self.waves.instances()) {
            let offset = inst.params.offset;
            let crest = (wt * 1.5 + offset).sin() * 0.4;
            state.position = Vec3::new(inst.x, -0.8 + crest.max(0.0), inst.z);
            state.scale_y = ((wt * 2.0 + offset).sin() * 0.3 + 0.7).max(0.1);
            state.opacity = ((wt * 1.2 + offset).sin() * 0.8 + 0.2).max(0.0);
        }

        for (state, inst) in self.tidal_states.iter_mut().zip(self.tidal.instances()) {
            *state = tidal_state(wt, inst.params.offset, inst.z);
        }

        for (state, gull) in self.seagull_states.iter_mut().zip(&self.seagulls) {
            let angle = gull.start_angle + wt * 3.0 * gull.speed;
            state.position = Vec3::new(
                gull.center_x + angle.cos() * gull.radius,
                15.0 + (wt * 2.0).sin() * 3.0,
                angle.sin() * gull.radius,
            );
            state.wing_roll = (wt * 10.0).sin() * 0.3;
        }
    }

    /// Water surface height at `(x, z)` for the current wave time.
    pub fn water_surface_height(&self, x: f32, z: f32) -> f32 {
        let wt = self.wave_time;
        (x * 0.1 + wt).sin() * 0.3 + (z * 0.1 + wt * 1.5).sin() * 0.2
    }

    /// Distant water surface height at `(x, z)`; calmer than the near plane.
    pub fn horizon_surface_height(&self, x: f32, z: f32) -> f32 {
        let wt = self.wave_time;
        (x * 0.05 + wt * 0.8).sin() * 0.2 + (z * 0.05 + wt * 1.2).sin() * 0.15
    }

    /// Terrain height of the sand at lateral position `x`: flat where the
    /// characters walk, sloping down to the water past the shoreline, with
    /// small static ripples.
    pub fn shore_profile(x: f32, z: f32) -> f32 {
        let slope = if x < SHORELINE_X {
            0.0
        } else {
            -(x - SHORELINE_X) * 0.1
        };
        slope + (x * 0.5).sin() * 0.05 + (z * 0.3).sin() * 0.03
    }

    /// Atmosphere record.
    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    /// Ground plane offset for the current distance.
    pub fn ground_z(&self) -> f32 {
        self.ground_z
    }

    /// Wet-sand path along the shoreline.
    pub fn path(&self) -> &PathField {
        &self.path
    }

    /// Palm field.
    pub fn palms(&self) -> &Field<PalmParams> {
        &self.palms
    }

    /// Shoreline wave sprites for the current frame.
    pub fn wave_states(&self) -> &[WaveState] {
        &self.wave_states
    }

    /// Tidal washes for the current frame.
    pub fn tidal_states(&self) -> &[TidalState] {
        &self.tidal_states
    }

    /// Seagulls for the current frame.
    pub fn seagull_states(&self) -> &[SeagullState] {
        &self.seagull_states
    }

    /// Coastal mountain field (parallax layer).
    pub fn mountains(&self) -> &Field<MountainParams> {
        &self.mountains
    }

    /// Static sun position above the horizon.
    pub fn sun_position(&self) -> Vec3 {
        Vec3::new(150.0, 30.0, -40.0)
    }
}

fn tidal_state(wt: f32, offset: f32, z: f32) -> TidalState {
    let cycle = (wt * 0.3 + offset).sin();
    if cycle > 0.0 {
        // Incoming: the wash sweeps from the water edge toward the walkers.
        let progress = cycle;
        TidalState {
            position: Vec3::new(2.0 - 3.0 * progress * 0.5, -0.7, z),
            scale_x: progress,
            opacity: progress * 0.4,
        }
    } else {
        let recede = cycle.abs();
        if recede > 0.1 {
            let amount = (recede - 0.1) / 0.9;
            TidalState {
                position: Vec3::new(0.5 + amount * 1.5, -0.7, z),
                scale_x: 1.0 - amount,
                opacity: (1.0 - amount) * 0.3,
            }
        } else {
            // Hidden between cycles.
            TidalState {
                position: Vec3::new(-1.0, -0.7, z),
                scale_x: 0.0,
                opacity: 0.0,
            }
        }
    }
}

/// Palm band layout: `(count, base_x, x_spread, weighted size pick)`.
struct PalmBand {
    count: usize,
    base_x: f32,
    x_spread: f32,
    sizes: fn(f32) -> PalmSize,
}

fn shoreline_sizes(r: f32) -> PalmSize {
    if r < 0.3 {
        PalmSize::Small
    } else if r < 0.7 {
        PalmSize::Medium
    } else {
        PalmSize::Large
    }
}

fn forest_sizes(r: f32) -> PalmSize {
    if r < 0.2 {
        PalmSize::Small
    } else if r < 0.5 {
        PalmSize::Medium
    } else {
        PalmSize::Large
    }
}

fn background_sizes(r: f32) -> PalmSize {
    if r < 0.7 { PalmSize::Large } else { PalmSize::Medium }
}

static PALM_BANDS: [PalmBand; 5] = [
    // Sparse trees on the walking side.
    PalmBand {
        count: 4,
        base_x: -15.0,
        x_spread: 10.0,
        sizes: shoreline_sizes,
    },
    // Near the water without blocking the view.
    PalmBand {
        count: 3,
        base_x: 8.0,
        x_spread: 5.0,
        sizes: shoreline_sizes,
    },
    // Dense forest toward the mountains.
    PalmBand {
        count: 12,
        base_x: -40.0,
        x_spread: 25.0,
        sizes: forest_sizes,
    },
    // Mid-distance scatter for depth.
    PalmBand {
        count: 8,
        base_x: -25.0,
        x_spread: 15.0,
        sizes: shoreline_sizes,
    },
    // Background silhouettes near the mountains.
    PalmBand {
        count: 6,
        base_x: -65.0,
        x_spread: 20.0,
        sizes: background_sizes,
    },
];

fn build_palms(seed: u32) -> AmbleResult<Field<PalmParams>> {
    let total: usize = PALM_BANDS.iter().map(|b| b.count).sum();
    Field::generate(total, SHORE_RESET, SHORE_WRAP, seed, |rng, i| {
        let (band, local) = palm_band_for_index(i);
        let x = band.base_x + rng.next() * band.x_spread;
        let pitch = SECTION_LENGTH / band.count as f32;
        let z = SHORE_RESET + local as f32 * pitch + rng.next() * pitch * 0.5;
        let size = (band.sizes)(rng.next());
        let (_, _, fronds) = size.multipliers();
        let params = PalmParams {
            size,
            trunk_curve: [
                0.2 + rng.next() * 0.2,
                0.1 + rng.next() * 0.2,
                0.1 + rng.next() * 0.1,
                -0.1 + rng.next() * 0.2,
            ],
            frond_jitter: (0..fronds).map(|_| rng.next() * 0.2).collect(),
        };
        Spawn::new(params, Vec3::new(x, 0.0, z))
    })
}

fn palm_band_for_index(i: usize) -> (&'static PalmBand, usize) {
    let mut local = i;
    for band in &PALM_BANDS {
        if local < band.count {
            return (band, local);
        }
        local -= band.count;
    }
    (&PALM_BANDS[4], local)
}

fn build_waves(seed: u32) -> AmbleResult<Field<WaveParams>> {
    Field::generate(4, SHORE_RESET, SHORE_WRAP, seed, |rng, i| {
        let params = WaveParams {
            offset: rng.next() * std::f32::consts::TAU,
            x: 1.5 + i as f32 * 0.5 + rng.next() * 0.3,
        };
        let z = SHORE_RESET + i as f32 * 50.0 + rng.next() * 20.0;
        Spawn::new(params, Vec3::new(params.x, -0.8, z))
    })
}

fn build_tidal(seed: u32) -> AmbleResult<Field<TidalParams>> {
    Field::generate(3, SHORE_RESET, SHORE_WRAP, seed, |rng, i| {
        let params = TidalParams {
            offset: rng.next() * std::f32::consts::TAU,
        };
        let z = SHORE_RESET + i as f32 * 66.0 + rng.next() * 30.0;
        Spawn::new(params, Vec3::new(-1.0, -0.7, z))
    })
}

fn build_seagulls(seed: u32) -> Vec<Seagull> {
    let mut rng = SeededRandom::new(seed);
    (0..3)
        .map(|_| Seagull {
            speed: 0.5 + rng.next() * 0.5,
            radius: 20.0 + rng.next() * 20.0,
            start_angle: rng.next() * std::f32::consts::TAU,
            center_x: 100.0 + rng.next() * 40.0,
        })
        .collect()
}

/// Coastal tiers: `(tier, base_x, count, height range, radius range, opacity)`.
const COASTAL_TIERS: [(MountainTier, f32, usize, (f32, f32), (f32, f32), f32); 3] = [
    (MountainTier::Far, -80.0, 5, (30.0, 50.0), (15.0, 25.0), 0.6),
    (MountainTier::Mid, -60.0, 4, (25.0, 40.0), (12.0, 20.0), 0.7),
    (MountainTier::Close, -45.0, 3, (20.0, 30.0), (10.0, 18.0), 0.8),
];

fn build_coastal_mountains(seed: u32) -> AmbleResult<Field<MountainParams>> {
    let total: usize = COASTAL_TIERS.iter().map(|t| t.2).sum();
    Field::generate(total, SHORE_RESET, SHORE_WRAP, seed, |rng, i| {
        let ((tier, base_x, count, heights, radii, opacity), local) = coastal_tier_for_index(i);
        let height = rng.range(heights.0, heights.1);
        let radius = rng.range(radii.0, radii.1);

        let num_peaks = 1 + rng.index(2);
        let peaks = (0..num_peaks)
            .map(|_| PeakParams {
                height: height * (0.5 + rng.next() * 0.3),
                radius: radius * (0.4 + rng.next() * 0.3),
                angle: rng.next() * std::f32::consts::TAU,
                offset: radius * 0.5,
            })
            .collect();

        let params = MountainParams {
            tier,
            height,
            radius,
            opacity,
            peaks,
            foothills: Vec::new(),
            rotation_y: rng.next() * std::f32::consts::TAU,
        };
        let x = base_x + rng.next() * 20.0 - 10.0;
        let z = SHORE_RESET + (local as f32 / count as f32) * 180.0 + rng.next() * 20.0;
        Spawn::new(params, Vec3::new(x, 0.0, z)).with_speed(COASTAL_PARALLAX)
    })
}

type CoastalTier = (MountainTier, f32, usize, (f32, f32), (f32, f32), f32);

fn coastal_tier_for_index(i: usize) -> (CoastalTier, usize) {
    let mut local = i;
    for &tier in &COASTAL_TIERS {
        if local < tier.2 {
            return (tier, local);
        }
        local -= tier.2;
    }
    (COASTAL_TIERS[2], local)
}

#[cfg(test)]
#[path = "../../tests/unit/env/beach.rs"]
mod tests;
