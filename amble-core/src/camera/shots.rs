use crate::foundation::core::Vec3;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// A named camera pose: position, look-at target, field of view.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraShot {
    /// Camera position.
    pub position: Vec3,
    /// Look-at target.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
}

/// Default field of view used when blending with an unspecified shot.
pub const DEFAULT_FOV: f32 = 60.0;

/// Look up a shot by name. Unknown names resolve to the wide shot: a bad
/// shot name degrades a cut, it never fails a render.
pub fn shot(name: &str) -> &'static CameraShot {
    let table = shot_table();
    table.get(name).unwrap_or_else(|| &table["wide"])
}

/// Whether `name` is a close framing that gets the cinematic letterbox.
pub fn is_close_shot(name: &str) -> bool {
    matches!(
        name,
        "closeUp" | "character1Focus" | "character2Focus" | "overShoulder1" | "overShoulder2"
    )
}

/// The full shot table, keyed by wire name.
pub fn shot_table() -> &'static BTreeMap<&'static str, CameraShot> {
    static TABLE: OnceLock<BTreeMap<&'static str, CameraShot>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut m = BTreeMap::new();
        m.insert(
            "wide",
            CameraShot {
                position: Vec3::new(-3.0, 4.0, 8.0),
                target: Vec3::new(0.0, 2.0, 0.0),
                fov: 60.0,
            },
        );
        m.insert(
            "closeUp",
            CameraShot {
                position: Vec3::new(0.0, 2.5, 3.0),
                target: Vec3::new(0.0, 2.2, 0.0),
                fov: 50.0,
            },
        );
        m.insert(
            "overShoulder1",
            CameraShot {
                position: Vec3::new(-1.5, 2.8, 1.0),
                target: Vec3::new(0.8, 2.2, -1.0),
                fov: 55.0,
            },
        );
        m.insert(
            "overShoulder2",
            CameraShot {
                position: Vec3::new(1.5, 2.8, 1.0),
                target: Vec3::new(-0.8, 2.2, -1.0),
                fov: 55.0,
            },
        );
        m.insert(
            "sideProfile",
            CameraShot {
                position: Vec3::new(4.0, 2.5, 0.0),
                target: Vec3::new(0.0, 2.0, 0.0),
                fov: 50.0,
            },
        );
        m.insert(
            "lowAngle",
            CameraShot {
                position: Vec3::new(0.0, 0.5, 4.0),
                target: Vec3::new(0.0, 2.5, 0.0),
                fov: 65.0,
            },
        );
        m.insert(
            "highAngle",
            CameraShot {
                position: Vec3::new(0.0, 8.0, 5.0),
                target: Vec3::new(0.0, 1.0, 0.0),
                fov: 55.0,
            },
        );
        m.insert(
            "walkingAlongside",
            CameraShot {
                position: Vec3::new(-3.0, 2.0, 0.0),
                target: Vec3::new(0.0, 2.0, 0.0),
                fov: 50.0,
            },
        );
        m.insert(
            "frontView",
            CameraShot {
                position: Vec3::new(0.0, 2.5, -5.0),
                target: Vec3::new(0.0, 2.0, 0.0),
                fov: 55.0,
            },
        );
        m.insert(
            "tracking",
            CameraShot {
                position: Vec3::new(-2.0, 3.0, 4.0),
                target: Vec3::new(0.0, 2.0, -1.0),
                fov: 58.0,
            },
        );
        m.insert(
            "character1Focus",
            CameraShot {
                position: Vec3::new(-2.0, 2.5, 2.0),
                target: Vec3::new(-0.8, 2.2, 0.0),
                fov: 45.0,
            },
        );
        m.insert(
            "character2Focus",
            CameraShot {
                position: Vec3::new(2.0, 2.5, 2.0),
                target: Vec3::new(0.8, 2.2, 0.0),
                fov: 45.0,
            },
        );
        m.insert(
            "environment",
            CameraShot {
                position: Vec3::new(-5.0, 6.0, 10.0),
                target: Vec3::new(0.0, 3.0, -5.0),
                fov: 70.0,
            },
        );
        m.insert(
            "dutchAngle",
            CameraShot {
                position: Vec3::new(-2.0, 3.0, 5.0),
                target: Vec3::new(0.0, 2.0, 0.0),
                fov: 55.0,
            },
        );
        m
    })
}

/// Linear blend between two shots; `progress` in `[0, 1]`.
pub fn interpolate_shots(a: &CameraShot, b: &CameraShot, progress: f32) -> CameraShot {
    CameraShot {
        position: a.position.lerp(b.position, progress),
        target: a.target.lerp(b.target, progress),
        fov: a.fov + (b.fov - a.fov) * progress,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/shots.rs"]
mod tests;
