use crate::env::field::{Field, Spawn};
use crate::foundation::core::{Color, Vec3};
use crate::foundation::error::AmbleResult;
use crate::foundation::math::SeededRandom;

/// Which parallax layer a mountain belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MountainTier {
    /// Farthest, slowest layer.
    Far,
    /// Middle layer.
    Mid,
    /// Nearest, fastest layer.
    Close,
}

/// Static description of one parallax layer.
#[derive(Clone, Copy, Debug)]
pub struct RangeConfig {
    /// Tier of this layer.
    pub tier: MountainTier,
    /// Lateral distance band origin.
    pub distance: f32,
    /// Mountains in this layer.
    pub count: usize,
    /// Base peak height.
    pub base_height: f32,
    /// Additional random height.
    pub height_variation: f32,
    /// Layer opacity.
    pub opacity: f32,
    /// Parallax scroll speed.
    pub speed: f32,
}

/// The three layers of the default mountain backdrop.
pub static MOUNTAIN_RANGES: [RangeConfig; 3] = [
    RangeConfig {
        tier: MountainTier::Far,
        distance: 80.0,
        count: 8,
        base_height: 40.0,
        height_variation: 25.0,
        opacity: 0.7,
        speed: 0.003,
    },
    RangeConfig {
        tier: MountainTier::Mid,
        distance: 60.0,
        count: 6,
        base_height: 30.0,
        height_variation: 20.0,
        opacity: 0.8,
        speed: 0.005,
    },
    RangeConfig {
        tier: MountainTier::Close,
        distance: 45.0,
        count: 5,
        base_height: 25.0,
        height_variation: 15.0,
        opacity: 0.9,
        speed: 0.007,
    },
];

/// Secondary peak riding on a mountain's main cone.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct PeakParams {
    /// Peak height.
    pub height: f32,
    /// Peak base radius.
    pub radius: f32,
    /// Angle around the main peak.
    pub angle: f32,
    /// Offset from the main peak axis.
    pub offset: f32,
}

/// Shape parameters for one generated mountain.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MountainParams {
    /// Parallax tier.
    pub tier: MountainTier,
    /// Main peak height.
    pub height: f32,
    /// Main peak base radius.
    pub radius: f32,
    /// Layer opacity.
    pub opacity: f32,
    /// Ridge peaks.
    pub peaks: Vec<PeakParams>,
    /// Low, wider foothills.
    pub foothills: Vec<PeakParams>,
    /// Yaw applied for variety.
    pub rotation_y: f32,
}

/// Per-tier colors.
#[derive(Clone, Copy, Debug)]
pub struct MountainPalette {
    /// Far layer color.
    pub far: Color,
    /// Mid layer color.
    pub mid: Color,
    /// Close layer color.
    pub close: Color,
}

impl MountainPalette {
    /// Hazy blue defaults.
    pub fn default_blue() -> Self {
        Self {
            far: Color::from_u32(0x4682B4),
            mid: Color::from_u32(0x6495ED),
            close: Color::from_u32(0x708090),
        }
    }

    /// Sun-baked desert tones.
    pub fn desert() -> Self {
        Self {
            far: Color::from_u32(0xCD853F),
            mid: Color::from_u32(0xD2691E),
            close: Color::from_u32(0xBC8F8F),
        }
    }

    /// Uniform snow-hazed white.
    pub fn snowy() -> Self {
        let white = Color::from_u32(0xF0F8FF);
        Self {
            far: white,
            mid: white,
            close: white,
        }
    }

    /// Color for a tier.
    pub fn for_tier(&self, tier: MountainTier) -> Color {
        match tier {
            MountainTier::Far => self.far,
            MountainTier::Mid => self.mid,
            MountainTier::Close => self.close,
        }
    }
}

/// Loop span for the mountain backdrop.
pub const MOUNTAIN_LOOP_RESET: f32 = -120.0;
/// Upper loop edge matching [`MOUNTAIN_LOOP_RESET`].
pub const MOUNTAIN_LOOP_WRAP: f32 = 120.0;

/// Three parallax layers of distant mountains flanking the route.
#[derive(Clone, Debug)]
pub struct MountainRange {
    field: Field<MountainParams>,
    palette: MountainPalette,
}

impl MountainRange {
    /// Generate all three layers from one seed.
    pub fn new(seed: u32) -> AmbleResult<Self> {
        let total: usize = MOUNTAIN_RANGES.iter().map(|r| r.count).sum();
        let field = Field::generate(
            total,
            MOUNTAIN_LOOP_RESET,
            MOUNTAIN_LOOP_WRAP,
            seed,
            |rng, i| {
                let (range, local) = range_for_index(i);
                let height = range.base_height + rng.next() * range.height_variation;
                let radius = rng.range(12.0, 20.0);
                let params = sample_mountain(range, height, radius, rng);

                let side = rng.sign();
                let lateral = rng.range(50.0, 90.0);
                // Half the layer seeds ahead of the walkers, half behind.
                let z = if local < range.count / 2 {
                    range.distance + rng.range(0.0, 30.0)
                } else {
                    -range.distance - rng.range(0.0, 30.0)
                };
                Spawn::new(params, Vec3::new(side * lateral, -1.3, z)).with_speed(range.speed)
            },
        )?;
        Ok(Self {
            field,
            palette: MountainPalette::default_blue(),
        })
    }

    /// Generate with a palette override (desert, snowy).
    pub fn with_palette(seed: u32, palette: MountainPalette) -> AmbleResult<Self> {
        let mut this = Self::new(seed)?;
        this.palette = palette;
        Ok(this)
    }

    /// Scroll all layers; each instance applies its own parallax speed.
    pub fn update_by_frame(&mut self, total_distance: f32) {
        self.field.update_by_frame(total_distance);
    }

    /// Underlying field.
    pub fn field(&self) -> &Field<MountainParams> {
        &self.field
    }

    /// Palette in effect.
    pub fn palette(&self) -> &MountainPalette {
        &self.palette
    }
}

fn range_for_index(i: usize) -> (&'static RangeConfig, usize) {
    let mut local = i;
    for range in &MOUNTAIN_RANGES {
        if local < range.count {
            return (range, local);
        }
        local -= range.count;
    }
    (&MOUNTAIN_RANGES[2], local)
}

fn sample_mountain(
    range: &RangeConfig,
    height: f32,
    radius: f32,
    rng: &mut SeededRandom,
) -> MountainParams {
    let num_peaks = 2 + (rng.next() * 3.0) as usize;
    let peaks = (0..num_peaks)
        .map(|j| {
            let peak_height = height * rng.range(0.6, 0.9);
            let peak_radius = radius * rng.range(0.5, 0.9);
            PeakParams {
                height: peak_height,
                radius: peak_radius,
                angle: (j as f32 / num_peaks as f32) * std::f32::consts::TAU,
                offset: radius * 0.6,
            }
        })
        .collect();

    let num_foothills = 3 + (rng.next() * 4.0) as usize;
    let foothills = (0..num_foothills)
        .map(|_| {
            let foothill_height = height * rng.range(0.2, 0.5);
            let foothill_radius = radius * rng.range(0.8, 1.3);
            PeakParams {
                height: foothill_height,
                radius: foothill_radius,
                angle: rng.next() * std::f32::consts::TAU,
                offset: radius * rng.range(1.2, 2.0),
            }
        })
        .collect();

    MountainParams {
        tier: range.tier,
        height,
        radius,
        opacity: range.opacity,
        peaks,
        foothills,
        rotation_y: rng.next() * std::f32::consts::TAU,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/env/mountains.rs"]
mod tests;
