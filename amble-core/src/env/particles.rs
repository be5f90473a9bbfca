use crate::env::field::INSTANCE_SEED_STRIDE;
use crate::foundation::core::Vec3;
use crate::foundation::error::{AmbleError, AmbleResult};
use crate::foundation::math::SeededRandom;

/// Static description of a falling-particle volume.
#[derive(Clone, Copy, Debug)]
pub struct ParticleSpec {
    /// Number of particles.
    pub count: usize,
    /// Half extent of the spawn volume along X and Z.
    pub half_extent: f32,
    /// Top of the spawn volume; respawned particles re-enter here.
    pub top: f32,
    /// Ground threshold; particles crossing it respawn at the top.
    pub ground: f32,
    /// Fall speed range in units per time unit.
    pub fall_speed: (f32, f32),
    /// Lateral drift speed range (petals); zero range disables drift.
    pub drift_speed: (f32, f32),
    /// Sway amplitude (petals); zero disables sway.
    pub sway_amplitude: f32,
}

impl ParticleSpec {
    /// Falling snow: dense, drift-free.
    pub fn snow() -> Self {
        Self {
            count: 1000,
            half_extent: 50.0,
            top: 50.0,
            ground: -2.0,
            fall_speed: (1.0, 3.0),
            drift_speed: (0.0, 0.0),
            sway_amplitude: 0.0,
        }
    }

    /// Falling cherry petals: sparser, drifting and swaying.
    pub fn petals() -> Self {
        Self {
            count: 500,
            half_extent: 40.0,
            top: 30.0,
            ground: -2.0,
            fall_speed: (0.5, 1.5),
            drift_speed: (-0.5, 0.5),
            sway_amplitude: 0.3,
        }
    }
}

/// A deterministic falling-particle field (snow, cherry petals).
///
/// Particle positions are a closed-form function of the frame time: the fall
/// is resolved with modular arithmetic over the volume height, and each time a
/// particle crosses the ground threshold its respawn position is drawn from
/// `SeededRandom(seed + index * 1000 + cycle)`, the same sub-seeding scheme
/// the spatial fields use, so re-rendering any frame reproduces the exact
/// same flurry regardless of what was evaluated before it.
#[derive(Clone, Debug)]
pub struct ParticleField {
    spec: ParticleSpec,
    seed: u32,
    positions: Vec<Vec3>,
}

impl ParticleField {
    /// Create the field; fails on an empty volume or zero population.
    pub fn new(spec: ParticleSpec, seed: u32) -> AmbleResult<Self> {
        if spec.count == 0 {
            return Err(AmbleError::config("particle count must be > 0"));
        }
        if spec.top <= spec.ground {
            return Err(AmbleError::config(
                "particle volume top must be above ground",
            ));
        }
        let mut this = Self {
            spec,
            seed,
            positions: vec![Vec3::ZERO; spec.count],
        };
        this.update_by_frame_time(0.0);
        Ok(this)
    }

    /// Recompute all particle positions for `frame_time`.
    pub fn update_by_frame_time(&mut self, frame_time: f32) {
        for i in 0..self.spec.count {
            self.positions[i] = self.position_at(i, frame_time);
        }
    }

    /// Position of particle `index` at `frame_time`, without mutating state.
    pub fn position_at(&self, index: usize, frame_time: f32) -> Vec3 {
        let spec = &self.spec;
        let mut rng = self.cycle_rng(index, 0);
        let x0 = (rng.next() - 0.5) * spec.half_extent * 2.0;
        let y0 = spec.ground + rng.next() * (spec.top - spec.ground);
        let z0 = (rng.next() - 0.5) * spec.half_extent * 2.0;
        let fall = rng.range(spec.fall_speed.0, spec.fall_speed.1);
        let drift = rng.range(spec.drift_speed.0, spec.drift_speed.1);
        let phase = rng.next() * std::f32::consts::TAU;

        let span = spec.top - spec.ground;
        let dropped = fall * frame_time;
        let initial_height = y0 - spec.ground;

        let (cycle, height) = if dropped <= initial_height {
            // Still on the first descent (covers negative frame times too).
            (0u32, initial_height - dropped)
        } else {
            let past_first = dropped - initial_height;
            let cycle = 1 + (past_first / span) as u32;
            (cycle, span - past_first.rem_euclid(span))
        };

        let (x, z) = if cycle == 0 {
            (x0, z0)
        } else {
            // Respawn lateral position is re-drawn per cycle.
            let mut respawn = self.cycle_rng(index, cycle);
            (
                (respawn.next() - 0.5) * spec.half_extent * 2.0,
                (respawn.next() - 0.5) * spec.half_extent * 2.0,
            )
        };

        // Drift accumulates only within the current descent, so respawned
        // particles re-enter inside the volume instead of marching off it.
        let drift_time = if cycle == 0 {
            frame_time
        } else {
            (span - height) / fall
        };
        let sway = spec.sway_amplitude * (phase + frame_time * 2.0).sin();
        Vec3::new(x + drift * drift_time + sway, spec.ground + height, z)
    }

    /// Positions computed by the last update.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Particle population.
    pub fn len(&self) -> usize {
        self.spec.count
    }

    /// Whether the field is empty (never true for a constructed field).
    pub fn is_empty(&self) -> bool {
        self.spec.count == 0
    }

    fn cycle_rng(&self, index: usize, cycle: u32) -> SeededRandom {
        SeededRandom::new(
            self.seed
                .wrapping_add(index as u32 * INSTANCE_SEED_STRIDE)
                .wrapping_add(cycle),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/env/particles.rs"]
mod tests;
