use crate::env::beach::BeachEnvironment;
use crate::env::cherry_blossom::CherryBlossomEnvironment;
use crate::env::desert::DesertEnvironment;
use crate::env::jungle::JungleEnvironment;
use crate::env::snowy_forest::SnowyForestEnvironment;
use crate::foundation::core::Color;
use crate::foundation::error::AmbleResult;
use tracing::warn;

/// Default seed used when a scene does not pin one.
pub const DEFAULT_ENVIRONMENT_SEED: u32 = 12345;

/// Per-biome atmosphere and surface record. Immutable after construction.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct EnvironmentConfig {
    /// Sky color.
    pub background: Color,
    /// Fog color.
    pub fog_color: Color,
    /// Fog start distance.
    pub fog_near: f32,
    /// Fog full-occlusion distance.
    pub fog_far: f32,
    /// Ground color.
    pub ground: Color,
    /// Path surface color.
    pub path: Color,
    /// Whether the renderer should cast shadows.
    pub enable_shadows: bool,
    /// Vertical lift applied to the characters (beach sand).
    pub character_y_offset: Option<f32>,
}

/// The named biome presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EnvironmentKind {
    /// Dense forest with layered mountains.
    Jungle,
    /// Sunset shoreline with palms and surf.
    Beach,
    /// Cacti and red rock under golden haze.
    Desert,
    /// Frosted forest under continuous snowfall.
    SnowyForest,
    /// Pink-canopied avenue with drifting petals.
    CherryBlossom,
}

impl EnvironmentKind {
    /// Parse a wire name. Unknown names log a warning and fall back to the
    /// jungle rather than failing the scene.
    pub fn from_name(name: &str) -> Self {
        match name {
            "jungle" => Self::Jungle,
            "beach" => Self::Beach,
            "desert" => Self::Desert,
            "snowyForest" => Self::SnowyForest,
            "cherryBlossom" => Self::CherryBlossom,
            other => {
                warn!(environment = other, "unknown environment type, defaulting to jungle");
                Self::Jungle
            }
        }
    }

    /// Wire name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Jungle => "jungle",
            Self::Beach => "beach",
            Self::Desert => "desert",
            Self::SnowyForest => "snowyForest",
            Self::CherryBlossom => "cherryBlossom",
        }
    }
}

impl Default for EnvironmentKind {
    fn default() -> Self {
        Self::Jungle
    }
}

impl<'de> serde::Deserialize<'de> for EnvironmentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_name(&s))
    }
}

/// A constructed biome, dispatched behind the common
/// `update_by_frame` / `config` capability set.
#[derive(Clone, Debug)]
pub enum Environment {
    /// See [`JungleEnvironment`].
    Jungle(JungleEnvironment),
    /// See [`BeachEnvironment`].
    Beach(BeachEnvironment),
    /// See [`DesertEnvironment`].
    Desert(DesertEnvironment),
    /// See [`SnowyForestEnvironment`].
    SnowyForest(SnowyForestEnvironment),
    /// See [`CherryBlossomEnvironment`].
    CherryBlossom(CherryBlossomEnvironment),
}

impl Environment {
    /// Construct the biome for `kind` from `seed`.
    pub fn create(kind: EnvironmentKind, seed: u32) -> AmbleResult<Self> {
        Ok(match kind {
            EnvironmentKind::Jungle => Self::Jungle(JungleEnvironment::new(seed)?),
            EnvironmentKind::Beach => Self::Beach(BeachEnvironment::new(seed)?),
            EnvironmentKind::Desert => Self::Desert(DesertEnvironment::new(seed)?),
            EnvironmentKind::SnowyForest => Self::SnowyForest(SnowyForestEnvironment::new(seed)?),
            EnvironmentKind::CherryBlossom => {
                Self::CherryBlossom(CherryBlossomEnvironment::new(seed)?)
            }
        })
    }

    /// Advance every element to its state for `total_distance`.
    pub fn update_by_frame(&mut self, total_distance: f32) {
        match self {
            Self::Jungle(env) => env.update_by_frame(total_distance),
            Self::Beach(env) => env.update_by_frame(total_distance),
            Self::Desert(env) => env.update_by_frame(total_distance),
            Self::SnowyForest(env) => env.update_by_frame(total_distance),
            Self::CherryBlossom(env) => env.update_by_frame(total_distance),
        }
    }

    /// Atmosphere record of this biome.
    pub fn config(&self) -> &EnvironmentConfig {
        match self {
            Self::Jungle(env) => env.config(),
            Self::Beach(env) => env.config(),
            Self::Desert(env) => env.config(),
            Self::SnowyForest(env) => env.config(),
            Self::CherryBlossom(env) => env.config(),
        }
    }

    /// Which biome this is.
    pub fn kind(&self) -> EnvironmentKind {
        match self {
            Self::Jungle(_) => EnvironmentKind::Jungle,
            Self::Beach(_) => EnvironmentKind::Beach,
            Self::Desert(_) => EnvironmentKind::Desert,
            Self::SnowyForest(_) => EnvironmentKind::SnowyForest,
            Self::CherryBlossom(_) => EnvironmentKind::CherryBlossom,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/env/factory.rs"]
mod tests;
