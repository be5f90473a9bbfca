use crate::foundation::core::Vec3;
use crate::foundation::error::{AmbleError, AmbleResult};
use crate::foundation::math::SeededRandom;
use crate::scene::placement::LoopablePlacement;

/// Stride between per-instance sub-seeds, so instance streams never overlap.
pub const INSTANCE_SEED_STRIDE: u32 = 1000;

/// One spawned instance description returned by a field's build closure.
#[derive(Clone, Debug)]
pub struct Spawn<P> {
    /// Biome-specific shape parameters.
    pub params: P,
    /// World position at construction time.
    pub position: Vec3,
    /// Scroll speed multiplier (1.0 unless the layer is parallax).
    pub speed: f32,
}

impl<P> Spawn<P> {
    /// Spawn at full scroll speed.
    pub fn new(params: P, position: Vec3) -> Self {
        Self {
            params,
            position,
            speed: 1.0,
        }
    }

    /// Override the scroll speed for a parallax layer.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }
}

/// One placed instance owned by a [`Field`].
#[derive(Clone, Debug)]
pub struct FieldInstance<P> {
    /// Biome-specific shape parameters, fixed for the life of the field.
    pub params: P,
    /// Lateral position, fixed for the life of the field.
    pub x: f32,
    /// Vertical position, fixed for the life of the field.
    pub y: f32,
    /// Current scrolled position, rewritten by [`Field::update_by_frame`].
    pub z: f32,
    /// Loop metadata deriving `z` from absolute distance.
    pub placement: LoopablePlacement,
}

impl<P> FieldInstance<P> {
    /// Current world position.
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// A fixed set of procedurally placed instances scrolling on an infinite loop.
///
/// Instance shapes and lateral placement are decided once at construction from
/// per-instance sub-seeds (`seed + i * 1000`), so two fields built from the
/// same seed are identical and fields one seed apart are uncorrelated. The
/// per-frame update derives every position from the absolute total distance.
#[derive(Clone, Debug)]
pub struct Field<P> {
    instances: Vec<FieldInstance<P>>,
}

impl<P> Field<P> {
    /// Deterministically generate `count` instances inside `[reset, wrap)`.
    ///
    /// `build` receives a decorrelated random source and the instance index
    /// and returns the instance description. Construction is the only point
    /// where a field can fail: zero counts and empty loop windows are
    /// configuration errors, steady-state updates never fail.
    pub fn generate(
        count: usize,
        reset_boundary: f32,
        wrap_boundary: f32,
        seed: u32,
        mut build: impl FnMut(&mut SeededRandom, usize) -> Spawn<P>,
    ) -> AmbleResult<Self> {
        if count == 0 {
            return Err(AmbleError::config("field count must be > 0"));
        }
        let mut instances = Vec::with_capacity(count);
        for i in 0..count {
            let mut rng = SeededRandom::new(seed.wrapping_add(i as u32 * INSTANCE_SEED_STRIDE));
            let spawn = build(&mut rng, i);
            let placement = LoopablePlacement::with_speed(
                spawn.position.z,
                reset_boundary,
                wrap_boundary,
                spawn.speed,
            )?;
            instances.push(FieldInstance {
                params: spawn.params,
                x: spawn.position.x,
                y: spawn.position.y,
                z: spawn.position.z,
                placement,
            });
        }
        Ok(Self { instances })
    }

    /// Scroll every instance to its position for `total_distance`.
    ///
    /// Idempotent and order-independent: positions are a function of the
    /// argument, not of previous calls.
    pub fn update_by_frame(&mut self, total_distance: f32) {
        for inst in &mut self.instances {
            inst.z = inst.placement.position_at(total_distance);
        }
    }

    /// Position of instance `i` at `total_distance`, without mutating state.
    pub fn position_at(&self, i: usize, total_distance: f32) -> Vec3 {
        let inst = &self.instances[i];
        Vec3::new(inst.x, inst.y, inst.placement.position_at(total_distance))
    }

    /// All instances in construction order.
    pub fn instances(&self) -> &[FieldInstance<P>] {
        &self.instances
    }

    /// Number of instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the field is empty (never true for a constructed field).
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Apply an in-place transform to every instance's parameters.
    ///
    /// Biome specializations dress a base field this way (snow caps, palette
    /// swaps) instead of subclassing it.
    pub fn dress(&mut self, mut f: impl FnMut(&mut P)) {
        for inst in &mut self.instances {
            f(&mut inst.params);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/env/field.rs"]
mod tests;
