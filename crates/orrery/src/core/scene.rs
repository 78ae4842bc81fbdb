use crate::api::config::SceneConfig;
use crate::api::types::BodyId;
use crate::assets::manifest::SceneManifest;
use crate::assets::measure::{radius_from_width, OrbitMeasure};
use crate::components::body::{Appearance, CelestialBody, Planet, Star};
use crate::components::label::{LabelSpec, LabelStyle};
use crate::core::rng::Rng;
use crate::renderer::traits::RenderSink;

/// Ordered body storage. Order is draw order: star first, then planets
/// by increasing distance. Bodies are independent of one another.
pub struct Scene {
    bodies: Vec<CelestialBody>,
    label_style: LabelStyle,
    ticks: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    /// Create a scene with a specific body capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
            label_style: LabelStyle::default(),
            ticks: 0,
        }
    }

    /// Build a scene from a manifest, seeding initial angles from `config.seed`.
    pub fn build(
        manifest: &SceneManifest,
        config: &SceneConfig,
        measure: &mut impl OrbitMeasure,
    ) -> Self {
        let mut rng = Rng::new(config.seed);
        Self::build_with_rng(manifest, config, measure, &mut rng)
    }

    /// Build a scene from a manifest with a caller-supplied RNG.
    /// Planets whose orbit track cannot be measured get a radius of 0.
    pub fn build_with_rng(
        manifest: &SceneManifest,
        config: &SceneConfig,
        measure: &mut impl OrbitMeasure,
        rng: &mut Rng,
    ) -> Self {
        let mut scene = Self::with_capacity(manifest.body_count().max(config.max_bodies));
        scene.set_label_style(manifest.label_style.clone());

        let star = &manifest.star;
        scene.spawn(
            Star::new(star.name.to_lowercase(), Appearance::new(star.size, star.color.clone()))
                .with_label_offset(config.star_label_offset),
        );

        for desc in &manifest.planets {
            let name = desc.name.to_lowercase();
            let radius = radius_from_width(&name, measure.orbit_width(&name));
            let planet = Planet::new(
                name,
                Appearance::new(desc.size, desc.color.clone()),
                desc.resolved_base_speed(),
                radius,
                rng,
            )
            .with_label_offset(config.label_offset);
            log::debug!(
                "{}: radius {:.1}px, start {:.1}°, multiplier {}",
                planet.name,
                planet.orbit_radius(),
                planet.angle(),
                planet.speed_multiplier()
            );
            scene.spawn(planet);
        }

        log::info!("scene built with {} bodies", scene.len());
        scene
    }

    /// Add a body at the end of the draw order.
    pub fn spawn(&mut self, body: impl Into<CelestialBody>) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(body.into());
        id
    }

    pub fn label_style(&self) -> &LabelStyle {
        &self.label_style
    }

    pub fn set_label_style(&mut self, style: LabelStyle) {
        self.label_style = style;
    }

    /// One label description per body, in draw order.
    pub fn labels(&self) -> Vec<LabelSpec> {
        self.iter()
            .map(|(id, body)| LabelSpec::for_body(id, body.name()))
            .collect()
    }

    /// Ask the sink for every label, then place the labels of bodies that
    /// never move so they are correct before the first tick.
    pub fn attach(&self, sink: &mut impl RenderSink) {
        for spec in self.labels() {
            sink.create_label(&spec, &self.label_style);
        }
        for (id, body) in self.iter() {
            if let CelestialBody::Star(star) = body {
                sink.apply(id, &star.update_position());
            }
        }
    }

    /// Advance every body once, in draw order, forwarding each update.
    pub fn tick(&mut self, sink: &mut impl RenderSink) {
        for (idx, body) in self.bodies.iter_mut().enumerate() {
            let update = body.update_position();
            if !update.is_empty() {
                sink.apply(BodyId(idx as u32), &update);
            }
        }
        self.ticks += 1;
    }

    /// Number of ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.index())
    }

    /// Find a body by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<(BodyId, &CelestialBody)> {
        self.iter().find(|(_, b)| b.name().eq_ignore_ascii_case(name))
    }

    /// Iterate over bodies in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (BodyId(i as u32), b))
    }

    /// Number of bodies in the scene.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
