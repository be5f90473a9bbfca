use crate::env::field::{Field, Spawn};
use crate::foundation::core::{Color, Vec3};
use crate::foundation::error::AmbleResult;

/// Length of one path segment.
pub const SEGMENT_LENGTH: f32 = 40.0;
/// Number of tiled segments.
pub const SEGMENT_COUNT: usize = 6;
/// Segments overlap slightly so seams never open up mid-walk.
pub const SEGMENT_PITCH: f32 = 0.8;
/// Path width.
pub const PATH_WIDTH: f32 = 3.0;

/// Parameters of one path segment (the tile geometry is uniform).
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct PathSegment {
    /// Tile width.
    pub width: f32,
    /// Tile length.
    pub length: f32,
}

/// The walkable path: a short chain of overlapping tiles on an infinite loop.
///
/// Loop distance is `SEGMENT_LENGTH * SEGMENT_COUNT * SEGMENT_PITCH` (192),
/// with the wrap window centered on the walkers at ±96.
#[derive(Clone, Debug)]
pub struct PathField {
    field: Field<PathSegment>,
    surface: Color,
}

impl PathField {
    /// Build the path with the given surface color.
    pub fn new(surface: Color) -> AmbleResult<Self> {
        let loop_distance = SEGMENT_LENGTH * SEGMENT_COUNT as f32 * SEGMENT_PITCH;
        let half = loop_distance / 2.0;
        let field = Field::generate(SEGMENT_COUNT, -half, half, 0, |_rng, i| {
            let z = (i as f32 - SEGMENT_COUNT as f32 / 2.0) * SEGMENT_LENGTH * SEGMENT_PITCH;
            Spawn::new(
                PathSegment {
                    width: PATH_WIDTH,
                    length: SEGMENT_LENGTH,
                },
                Vec3::new(0.0, -1.25, z),
            )
        })?;
        Ok(Self { field, surface })
    }

    /// Scroll all segments to their positions for `total_distance`.
    pub fn update_by_frame(&mut self, total_distance: f32) {
        self.field.update_by_frame(total_distance);
    }

    /// Underlying field.
    pub fn field(&self) -> &Field<PathSegment> {
        &self.field
    }

    /// Surface color (packed earth, wet sand, snow, planks per biome).
    pub fn surface(&self) -> Color {
        self.surface
    }
}

#[cfg(test)]
#[path = "../../tests/unit/env/path.rs"]
mod tests;
