use wasm_bindgen::JsValue;
use orrery::{
    AnimationDriver, FrameOutcome, Scene, SceneConfig, SceneManifest, TransformBuffer,
};
use crate::scheduler::RafScheduler;
use crate::stage::{DomMeasure, DomStage};

/// Wires a scene to the page: DOM stage, transform buffer and
/// `requestAnimationFrame` loop.
///
/// Each page keeps one runner in a `thread_local!` and exports free
/// functions via `#[wasm_bindgen]` (see `export_orrery!`), because the
/// animation callback has to reach the runner without owning it.
pub struct OrreryRunner {
    scene: Scene,
    stage: DomStage,
    /// Same offsets as the DOM gets, for canvas/WebGPU hosts.
    transforms: TransformBuffer,
    driver: AnimationDriver,
    scheduler: RafScheduler,
}

impl OrreryRunner {
    /// Measure orbits, build the scene, create labels and place the star's.
    /// `on_frame` must route back to `frame()` on this runner.
    pub fn new(config: SceneConfig, manifest: SceneManifest, on_frame: fn()) -> Result<Self, JsValue> {
        manifest
            .validate()
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("`window` has no `document`"))?;

        let scene = {
            let mut measure = DomMeasure::new(&window, &document);
            Scene::build(&manifest, &config, &mut measure)
        };

        let mut stage = DomStage::new(document, &config.container_selector)?;
        stage.bind_bodies(&scene);

        let mut transforms = TransformBuffer::with_capacity(config.max_bodies);
        scene.attach(&mut (&mut stage, &mut transforms));

        Ok(Self {
            scene,
            stage,
            transforms,
            driver: AnimationDriver::new(),
            scheduler: RafScheduler::new(window, on_frame),
        })
    }

    /// Start (or resume) the loop. The first tick runs now so bodies are
    /// in place before the next repaint.
    pub fn start(&mut self) {
        let mut sink = (&mut self.stage, &mut self.transforms);
        self.driver
            .start_immediate(&mut self.scene, &mut sink, &mut self.scheduler);
    }

    pub fn stop(&mut self) {
        self.driver.stop(&mut self.scheduler);
    }

    /// Animation-frame callback body.
    pub fn frame(&mut self) -> FrameOutcome {
        self.scheduler.frame_fired();
        let mut sink = (&mut self.stage, &mut self.transforms);
        self.driver.on_frame(&mut self.scene, &mut sink, &mut self.scheduler)
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn frames(&self) -> u64 {
        self.driver.frames()
    }

    pub fn body_count(&self) -> u32 {
        self.scene.len() as u32
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn transforms_ptr(&self) -> *const f32 {
        self.transforms.instances_ptr()
    }

    pub fn transform_count(&self) -> u32 {
        self.transforms.instance_count()
    }
}
