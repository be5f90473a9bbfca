use crate::character::style::CharacterStyle;
use crate::foundation::core::{Color, Vec3};
use crate::scene::primitives::{Material, Piece, Primitive};

/// The articulated parts the animator poses each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RigPart {
    /// Head group: skull, hair, face features.
    Head,
    /// Mouth, scaled by the talk envelope.
    Mouth,
    /// Left arm group pivoting at the shoulder.
    LeftArm,
    /// Right arm group pivoting at the shoulder.
    RightArm,
    /// Left forearm group pivoting at the elbow.
    LeftForearm,
    /// Right forearm group pivoting at the elbow.
    RightForearm,
    /// Left leg group pivoting at the hip.
    LeftLeg,
    /// Right leg group pivoting at the hip.
    RightLeg,
    /// Left shoe.
    LeftShoe,
    /// Right shoe.
    RightShoe,
}

/// One articulated group of the rig: its pivot and the pieces hanging off it.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RigGroup {
    /// Which part this is.
    pub part: RigPart,
    /// Pivot position relative to the character origin.
    pub pivot: Vec3,
    /// Pieces attached to the group.
    pub pieces: Vec<Piece>,
}

/// A fixed humanoid hierarchy of primitive shapes, built once from a style.
///
/// Construction is pure: two rigs built from the same style are identical.
/// The rig itself never changes per frame; the animator produces a
/// [`crate::character::animator::RigPose`] of local transforms instead.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CharacterRig {
    /// Static torso pieces (shirt, pants, shoulders).
    pub torso: Vec<Piece>,
    /// Articulated groups, keyed by part.
    pub groups: Vec<RigGroup>,
}

const MOUTH_COLOR: Color = Color::from_u32(0x2A0505);
const EYE_WHITE: Color = Color::from_u32(0xFFFFFF);
const PUPIL_COLOR: Color = Color::from_u32(0x1A1A1A);
const SHOE_COLOR: Color = Color::from_u32(0x2A1A0A);

impl CharacterRig {
    /// Build the rig for `style`.
    pub fn build(style: &CharacterStyle) -> Self {
        let (shoulder_scale, head_scale, hand_scale) = style.gender.proportions();
        let skin = Material::solid(style.skin_tone);
        let shirt = Material::solid(style.primary_color);
        let pants = Material::solid(style.secondary_color);

        let torso = vec![
            Piece::new(
                Primitive::Cylinder {
                    radius_top: 0.4 * shoulder_scale,
                    radius_bottom: 0.5,
                    height: 1.2,
                },
                shirt,
                Vec3::new(0.0, 0.75, 0.0),
            ),
            Piece::new(
                Primitive::Cylinder {
                    radius_top: 0.45,
                    radius_bottom: 0.5,
                    height: 0.9,
                },
                pants,
                Vec3::new(0.0, 0.15, 0.0),
            ),
            Piece::new(
                Primitive::Sphere {
                    radius: 0.35 * shoulder_scale,
                },
                skin,
                Vec3::new(0.0, 1.4, 0.0),
            )
            .scaled(Vec3::new(1.0, 0.6, 1.0)),
        ];

        let mut groups = vec![Self::head_group(style, head_scale)];
        groups.push(Self::mouth_group(head_scale));
        for side in [-1.0f32, 1.0] {
            groups.extend(Self::arm_groups(side, shoulder_scale, hand_scale, skin));
            groups.push(Self::leg_group(side, pants));
            groups.push(Self::shoe_group(side));
        }

        Self { torso, groups }
    }

    /// Find a group by part.
    pub fn group(&self, part: RigPart) -> Option<&RigGroup> {
        self.groups.iter().find(|g| g.part == part)
    }

    fn head_group(style: &CharacterStyle, head_scale: f32) -> RigGroup {
        let skin = Material::solid(style.skin_tone);
        let hair = Material::solid(style.hair_color);
        let s = head_scale;
        let mut pieces = vec![
            Piece::new(Primitive::Sphere { radius: 0.48 * s }, skin, Vec3::ZERO),
            Piece::new(
                Primitive::Cylinder {
                    radius_top: 0.48 * s,
                    radius_bottom: 0.4 * s,
                    height: 0.33,
                },
                hair,
                Vec3::new(0.0, 0.4 * s, -0.08),
            ),
            // Nose.
            Piece::new(
                Primitive::Sphere { radius: 0.04 * s },
                skin,
                Vec3::new(0.0, -0.08 * s, 0.47 * s),
            ),
        ];
        for side in [-1.0f32, 1.0] {
            // Eye white, pupil, brow.
            pieces.push(
                Piece::new(
                    Primitive::Sphere { radius: 0.09 * s },
                    Material::solid(EYE_WHITE),
                    Vec3::new(side * 0.14 * s, 0.08 * s, 0.42 * s),
                )
                .scaled(Vec3::new(1.0, 0.8, 0.6)),
            );
            pieces.push(Piece::new(
                Primitive::Sphere { radius: 0.035 * s },
                Material::solid(PUPIL_COLOR),
                Vec3::new(side * 0.14 * s, 0.08 * s, 0.48 * s),
            ));
            pieces.push(Piece::new(
                Primitive::Box {
                    width: 0.1 * s,
                    height: 0.025,
                    depth: 0.025,
                },
                hair,
                Vec3::new(side * 0.14 * s, 0.18 * s, 0.45 * s),
            ));
        }
        RigGroup {
            part: RigPart::Head,
            pivot: Vec3::new(0.0, 2.2, 0.0),
            pieces,
        }
    }

    fn mouth_group(head_scale: f32) -> RigGroup {
        // The mouth is its own group so the talk envelope can scale it
        // without touching the rest of the face.
        RigGroup {
            part: RigPart::Mouth,
            pivot: Vec3::new(0.0, 2.2 - 0.22 * head_scale, 0.45 * head_scale),
            pieces: vec![Piece::new(
                Primitive::Sphere { radius: 0.08 * head_scale },
                Material::solid(MOUTH_COLOR),
                Vec3::ZERO,
            )],
        }
    }

    fn arm_groups(
        side: f32,
        shoulder_scale: f32,
        hand_scale: f32,
        skin: Material,
    ) -> [RigGroup; 2] {
        let (arm, forearm) = if side < 0.0 {
            (RigPart::LeftArm, RigPart::LeftForearm)
        } else {
            (RigPart::RightArm, RigPart::RightForearm)
        };
        let upper = RigGroup {
            part: arm,
            pivot: Vec3::new(side * 0.4 * shoulder_scale, 1.2, 0.0),
            pieces: vec![Piece::new(
                Primitive::Cylinder {
                    radius_top: 0.12,
                    radius_bottom: 0.12,
                    height: 0.6,
                },
                skin,
                Vec3::new(0.0, -0.3, 0.0),
            )],
        };
        let lower = RigGroup {
            part: forearm,
            // Pivot relative to the arm group (the elbow).
            pivot: Vec3::new(0.0, -0.6, 0.0),
            pieces: vec![
                Piece::new(
                    Primitive::Cylinder {
                        radius_top: 0.1,
                        radius_bottom: 0.12,
                        height: 0.5,
                    },
                    skin,
                    Vec3::new(0.0, -0.25, 0.0),
                ),
                Piece::new(
                    Primitive::Sphere {
                        radius: 0.15 * hand_scale,
                    },
                    skin,
                    Vec3::new(0.0, -0.5, 0.0),
                )
                .scaled(Vec3::new(1.0, 0.8, 1.0)),
            ],
        };
        [upper, lower]
    }

    fn leg_group(side: f32, pants: Material) -> RigGroup {
        RigGroup {
            part: if side < 0.0 {
                RigPart::LeftLeg
            } else {
                RigPart::RightLeg
            },
            pivot: Vec3::new(side * 0.2, 0.0, 0.0),
            pieces: vec![Piece::new(
                Primitive::Cylinder {
                    radius_top: 0.15,
                    radius_bottom: 0.18,
                    height: 1.2,
                },
                pants,
                Vec3::new(0.0, -0.6, 0.0),
            )],
        }
    }

    fn shoe_group(side: f32) -> RigGroup {
        RigGroup {
            part: if side < 0.0 {
                RigPart::LeftShoe
            } else {
                RigPart::RightShoe
            },
            pivot: Vec3::new(side * 0.2, -1.25, 0.0),
            pieces: vec![Piece::new(
                Primitive::Box {
                    width: 0.3,
                    height: 0.1,
                    depth: 0.5,
                },
                Material::solid(SHOE_COLOR),
                Vec3::ZERO,
            )],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/character/rig.rs"]
mod tests;
