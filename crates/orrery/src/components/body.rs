use glam::DVec2;
use crate::api::config::STAR_LABEL_OFFSET;
use crate::api::types::{LabelAnchor, LabelPosition, PositionUpdate};
use crate::assets::catalog;
use crate::core::kinematics::{self, OrbitalState, LABEL_OFFSET};
use crate::core::rng::Rng;

/// Presentational properties. Never read by the kinematics.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    /// Rendered diameter in pixels.
    pub size: f32,
    /// CSS color.
    pub color: String,
}

impl Appearance {
    pub fn new(size: f32, color: impl Into<String>) -> Self {
        Self {
            size,
            color: color.into(),
        }
    }
}

/// A star anchored at the scene center.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub name: String,
    pub appearance: Appearance,
    /// Label offset from the scene center.
    pub label_offset: DVec2,
}

impl Star {
    pub fn new(name: impl Into<String>, appearance: Appearance) -> Self {
        Self {
            name: name.into(),
            appearance,
            label_offset: STAR_LABEL_OFFSET,
        }
    }

    pub fn with_label_offset(mut self, offset: DVec2) -> Self {
        self.label_offset = offset;
        self
    }

    /// The star never moves; only its label is placed, always at the same spot.
    pub fn update_position(&self) -> PositionUpdate {
        PositionUpdate {
            body: None,
            label: Some(LabelPosition {
                anchor: LabelAnchor::SceneCenter,
                offset: self.label_offset,
            }),
        }
    }
}

/// A planet on a circular orbit around the scene center.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub name: String,
    pub appearance: Appearance,
    state: OrbitalState,
    label_offset: DVec2,
}

impl Planet {
    /// Create a planet at a random starting angle. The speed multiplier
    /// comes from the catalog, keyed by name.
    pub fn new(
        name: impl Into<String>,
        appearance: Appearance,
        base_angular_speed: f64,
        orbit_radius: f64,
        rng: &mut Rng,
    ) -> Self {
        Self::with_angle(name, appearance, base_angular_speed, orbit_radius, rng.next_angle())
    }

    /// Create a planet at a known starting angle (degrees).
    pub fn with_angle(
        name: impl Into<String>,
        appearance: Appearance,
        base_angular_speed: f64,
        orbit_radius: f64,
        angle: f64,
    ) -> Self {
        let name = name.into();
        let state = OrbitalState {
            angle,
            base_angular_speed,
            speed_multiplier: catalog::speed_multiplier(&name),
            orbit_radius,
        };
        Self {
            name,
            appearance,
            state,
            label_offset: LABEL_OFFSET,
        }
    }

    pub fn with_label_offset(mut self, offset: DVec2) -> Self {
        self.label_offset = offset;
        self
    }

    pub fn state(&self) -> &OrbitalState {
        &self.state
    }

    pub fn angle(&self) -> f64 {
        self.state.angle
    }

    pub fn orbit_radius(&self) -> f64 {
        self.state.orbit_radius
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.state.speed_multiplier
    }

    /// Current offset from the orbit center, without advancing.
    pub fn offset(&self) -> DVec2 {
        kinematics::orbit_offset(self.state.angle, self.state.orbit_radius)
    }

    /// Advance one tick and report where the planet and its label go.
    pub fn update_position(&mut self) -> PositionUpdate {
        let next = kinematics::advance(&self.state);
        self.state.angle = next.angle;
        PositionUpdate {
            body: Some(next.offset),
            label: Some(LabelPosition {
                anchor: LabelAnchor::Origin,
                offset: kinematics::label_offset(next.offset, self.label_offset),
            }),
        }
    }
}

/// A body in the scene: either the fixed star or an orbiting planet.
#[derive(Debug, Clone, PartialEq)]
pub enum CelestialBody {
    Star(Star),
    Planet(Planet),
}

impl CelestialBody {
    pub fn name(&self) -> &str {
        match self {
            Self::Star(s) => &s.name,
            Self::Planet(p) => &p.name,
        }
    }

    pub fn appearance(&self) -> &Appearance {
        match self {
            Self::Star(s) => &s.appearance,
            Self::Planet(p) => &p.appearance,
        }
    }

    pub fn as_planet(&self) -> Option<&Planet> {
        match self {
            Self::Planet(p) => Some(p),
            Self::Star(_) => None,
        }
    }

    pub fn update_position(&mut self) -> PositionUpdate {
        match self {
            Self::Star(s) => s.update_position(),
            Self::Planet(p) => p.update_position(),
        }
    }
}

impl From<Star> for CelestialBody {
    fn from(star: Star) -> Self {
        Self::Star(star)
    }
}

impl From<Planet> for CelestialBody {
    fn from(planet: Planet) -> Self {
        Self::Planet(planet)
    }
}
