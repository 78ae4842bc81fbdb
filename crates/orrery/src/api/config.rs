use glam::DVec2;
use crate::core::kinematics::LABEL_OFFSET;

/// Star label offset from the scene center, in pixels.
pub const STAR_LABEL_OFFSET: DVec2 = DVec2::new(0.0, -30.0);

/// Configuration for a scene, provided by the host page.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Seed for the initial planet angles (default: 42).
    pub seed: u64,
    /// Label offset from its planet, in pixels (default: 10 right, 15 up).
    pub label_offset: DVec2,
    /// Star label offset from the scene center (default: 30 up).
    pub star_label_offset: DVec2,
    /// Capacity hint for per-body buffers (default: 16).
    pub max_bodies: usize,
    /// CSS selector of the element that holds the scene (default: `.solar-system`).
    pub container_selector: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            label_offset: LABEL_OFFSET,
            star_label_offset: STAR_LABEL_OFFSET,
            max_bodies: 16,
            container_selector: ".solar-system".to_string(),
        }
    }
}

impl SceneConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_container(mut self, selector: impl Into<String>) -> Self {
        self.container_selector = selector.into();
        self
    }
}
