//! Data-only scene primitives handed across the renderer boundary.
//!
//! Amble never rasterizes. Fields and rigs describe their geometry with these
//! declarative records; the external renderer owns meshes, materials and
//! lighting.

use crate::foundation::core::{Color, Vec3};

/// A primitive shape, dimensioned in world units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    /// Cylinder with independent top/bottom radii.
    Cylinder {
        /// Radius at the top cap.
        radius_top: f32,
        /// Radius at the bottom cap.
        radius_bottom: f32,
        /// Height along Y.
        height: f32,
    },
    /// Sphere.
    Sphere {
        /// Radius.
        radius: f32,
    },
    /// Cone standing on its base.
    Cone {
        /// Base radius.
        radius: f32,
        /// Height along Y.
        height: f32,
    },
    /// Axis-aligned box.
    Box {
        /// Extent along X.
        width: f32,
        /// Extent along Y.
        height: f32,
        /// Extent along Z.
        depth: f32,
    },
    /// Flat plane (lies in XZ after the renderer's ground rotation).
    Plane {
        /// Extent along X.
        width: f32,
        /// Extent along Z.
        depth: f32,
    },
}

/// Surface description for a primitive.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Material {
    /// Base color.
    pub color: Color,
    /// Opacity in `[0, 1]`; below 1 the renderer enables blending.
    pub opacity: f32,
}

impl Material {
    /// Opaque material of the given color.
    pub const fn solid(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }

    /// Translucent material of the given color.
    pub const fn translucent(color: Color, opacity: f32) -> Self {
        Self { color, opacity }
    }
}

/// A primitive with its local transform, relative to the owning part.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Piece {
    /// Shape of this piece.
    pub primitive: Primitive,
    /// Surface of this piece.
    pub material: Material,
    /// Local translation.
    pub offset: Vec3,
    /// Local non-uniform scale.
    pub scale: Vec3,
}

impl Piece {
    /// Piece at the given offset with unit scale.
    pub fn new(primitive: Primitive, material: Material, offset: Vec3) -> Self {
        Self {
            primitive,
            material,
            offset,
            scale: Vec3::ONE,
        }
    }

    /// Override the local scale.
    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}
