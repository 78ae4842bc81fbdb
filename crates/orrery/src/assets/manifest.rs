use std::collections::HashSet;
use std::fmt;
use serde::{Deserialize, Serialize};
use crate::assets::catalog;
use crate::components::label::LabelStyle;

/// Scene manifest describing the star, its planets and the label style.
/// Loaded from JSON at runtime, or built in via `solar_system()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneManifest {
    /// The central star.
    pub star: StarDescriptor,
    /// Planets in draw order (innermost first).
    #[serde(default)]
    pub planets: Vec<PlanetDescriptor>,
    /// Label style shared by every body.
    #[serde(default)]
    pub label_style: LabelStyle,
}

/// Describes the central star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarDescriptor {
    /// Lowercase identifier (e.g., "sun"). Also names the CSS classes.
    pub name: String,
    /// Rendered diameter in pixels.
    #[serde(default)]
    pub size: f32,
    /// CSS color.
    #[serde(default)]
    pub color: String,
}

/// Describes a single planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetDescriptor {
    /// Lowercase identifier (e.g., "earth"). Keys the speed multiplier
    /// and the orbit-track lookup.
    pub name: String,
    /// Rendered diameter in pixels.
    #[serde(default)]
    pub size: f32,
    /// CSS color.
    #[serde(default)]
    pub color: String,
    /// Degrees per tick before the multiplier. Falls back to the
    /// built-in table for known planets, else 0.
    #[serde(default)]
    pub base_speed: Option<f64>,
}

impl PlanetDescriptor {
    /// Base speed from the descriptor, then the catalog, then 0.
    pub fn resolved_base_speed(&self) -> f64 {
        self.base_speed
            .or_else(|| catalog::planet(&self.name).map(|p| p.base_speed))
            .unwrap_or(0.0)
    }
}

/// Problems `SceneManifest::validate` can report.
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestError {
    EmptyName,
    DuplicateName(String),
    InvalidSpeed { name: String, speed: f64 },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "body with an empty name"),
            Self::DuplicateName(name) => write!(f, "duplicate body name `{name}`"),
            Self::InvalidSpeed { name, speed } => {
                write!(f, "planet `{name}` has non-finite speed {speed}")
            }
        }
    }
}

impl std::error::Error for ManifestError {}

impl SceneManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The sun and the eight planets with their demo sizes and colors.
    pub fn solar_system() -> Self {
        Self {
            star: StarDescriptor {
                name: catalog::SUN_NAME.to_string(),
                size: catalog::SUN_SIZE,
                color: catalog::SUN_COLOR.to_string(),
            },
            planets: catalog::PLANETS
                .iter()
                .map(|p| PlanetDescriptor {
                    name: p.name.to_string(),
                    size: p.size,
                    color: p.color.to_string(),
                    base_speed: Some(p.base_speed),
                })
                .collect(),
            label_style: LabelStyle::default(),
        }
    }

    /// Number of bodies, star included.
    pub fn body_count(&self) -> usize {
        1 + self.planets.len()
    }

    /// Names must be non-empty and unique; speeds must be finite.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let mut seen = HashSet::with_capacity(self.body_count());
        let names = std::iter::once(&self.star.name).chain(self.planets.iter().map(|p| &p.name));
        for name in names {
            if name.trim().is_empty() {
                return Err(ManifestError::EmptyName);
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(ManifestError::DuplicateName(name.clone()));
            }
        }
        for planet in &self.planets {
            let speed = planet.resolved_base_speed();
            if !speed.is_finite() {
                return Err(ManifestError::InvalidSpeed {
                    name: planet.name.clone(),
                    speed,
                });
            }
        }
        Ok(())
    }
}

impl Default for SceneManifest {
    fn default() -> Self {
        Self::solar_system()
    }
}
