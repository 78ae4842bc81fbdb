pub mod api;
pub mod core;
pub mod components;
pub mod renderer;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::config::SceneConfig;
pub use api::types::{BodyId, LabelAnchor, LabelPosition, PositionUpdate};
pub use assets::manifest::{ManifestError, PlanetDescriptor, SceneManifest, StarDescriptor};
pub use assets::measure::{parse_css_px, OrbitMeasure};
pub use components::body::{Appearance, CelestialBody, Planet, Star};
pub use components::label::{LabelSpec, LabelStyle};
pub use crate::core::driver::{AnimationDriver, FrameOutcome, FrameScheduler};
pub use crate::core::kinematics::{advance, orbit_offset, Advance, OrbitalState};
pub use crate::core::rng::Rng;
pub use crate::core::scene::Scene;
pub use renderer::instance::{TransformBuffer, TransformInstance};
pub use renderer::traits::{RecordingSink, RenderSink};
