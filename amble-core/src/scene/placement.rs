use crate::foundation::error::{AmbleError, AmbleResult};

/// Scroll metadata for an object that loops along the walking axis.
///
/// Position is always derived from the absolute total distance travelled, via
/// modular arithmetic over the loop span. No delta accumulation happens
/// anywhere: re-evaluating the same distance always yields the same position,
/// which is what lets an external renderer request frames out of order or in
/// parallel.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct LoopablePlacement {
    /// Z position assigned at field-generation time.
    pub original_z: f32,
    /// Lower edge of the loop window; positions below it wrap forward.
    pub reset_boundary: f32,
    /// Upper edge of the loop window.
    pub wrap_boundary: f32,
    /// Scroll speed multiplier (parallax layers move slower than 1.0).
    pub scroll_speed: f32,
}

impl LoopablePlacement {
    /// Create a placement with the default scroll speed of 1.
    pub fn new(original_z: f32, reset_boundary: f32, wrap_boundary: f32) -> AmbleResult<Self> {
        Self::with_speed(original_z, reset_boundary, wrap_boundary, 1.0)
    }

    /// Create a placement with an explicit scroll speed.
    pub fn with_speed(
        original_z: f32,
        reset_boundary: f32,
        wrap_boundary: f32,
        scroll_speed: f32,
    ) -> AmbleResult<Self> {
        if wrap_boundary <= reset_boundary {
            return Err(AmbleError::config(format!(
                "loop window must be non-empty (reset {reset_boundary}, wrap {wrap_boundary})"
            )));
        }
        Ok(Self {
            original_z,
            reset_boundary,
            wrap_boundary,
            scroll_speed,
        })
    }

    /// Length of one full loop.
    pub fn loop_distance(&self) -> f32 {
        self.wrap_boundary - self.reset_boundary
    }

    /// Z position after the scene has travelled `total_distance`.
    ///
    /// Pure in `total_distance`; negative distances (walking backward) resolve
    /// through the same euclidean-modulo formula.
    pub fn position_at(&self, total_distance: f32) -> f32 {
        let loop_distance = self.loop_distance();
        let moved = (total_distance * self.scroll_speed).rem_euclid(loop_distance);
        let mut z = self.original_z - moved;
        if z < self.reset_boundary {
            z += loop_distance;
        }
        z
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/placement.rs"]
mod tests;
