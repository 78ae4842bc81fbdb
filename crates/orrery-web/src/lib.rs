pub mod runner;
pub mod scheduler;
pub mod stage;

pub use orrery;
pub use runner::OrreryRunner;

/// Generate the `#[wasm_bindgen]` exports for an orrery page.
///
/// Generates:
/// - `thread_local!` storage for the OrreryRunner
/// - `with_runner()` helper function
/// - the frame callback handed to `requestAnimationFrame`
/// - exports: `orrery_start`, `orrery_stop`, and data accessors
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// orrery_web::export_orrery!("solar-system");
/// ```
///
/// The calling crate depends on `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook`.
///
/// # Arguments
///
/// - `$scene_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_orrery {
    ($scene_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::OrreryRunner>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::OrreryRunner) -> R) -> Option<R> {
            RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
        }

        fn orrery_frame() {
            with_runner(|r| r.frame());
        }

        /// Build the scene from the page and start animating.
        /// `manifest_json` overrides the built-in solar system; `seed`
        /// fixes the starting angles. Without either, an existing scene
        /// resumes where it stopped.
        #[wasm_bindgen]
        pub fn orrery_start(manifest_json: Option<String>, seed: Option<f64>) -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            if manifest_json.is_none() && seed.is_none() && with_runner(|r| r.start()).is_some() {
                log::info!("{}: resumed", $scene_name);
                return Ok(());
            }

            let manifest = match manifest_json {
                Some(json) => $crate::orrery::SceneManifest::from_json(&json)
                    .map_err(|err| JsValue::from_str(&format!("bad manifest: {err}")))?,
                None => $crate::orrery::SceneManifest::solar_system(),
            };
            let mut config = $crate::orrery::SceneConfig::default();
            if let Some(seed) = seed {
                config.seed = seed as u64;
            }

            // Dropping the old runner cancels its frame and removes its labels.
            let previous = RUNNER.with(|cell| cell.borrow_mut().take());
            drop(previous);

            let mut runner = $crate::OrreryRunner::new(config, manifest, orrery_frame).map_err(|err| {
                log::error!("{}: setup failed: {err:?}", $scene_name);
                err
            })?;
            runner.start();

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: started", $scene_name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn orrery_stop() {
            with_runner(|r| r.stop());
        }

        #[wasm_bindgen]
        pub fn orrery_is_running() -> bool {
            with_runner(|r| r.is_running()).unwrap_or(false)
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_frame_count() -> f64 {
            with_runner(|r| r.frames() as f64).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_body_count() -> u32 {
            with_runner(|r| r.body_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_transforms_ptr() -> *const f32 {
            with_runner(|r| r.transforms_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_transform_count() -> u32 {
            with_runner(|r| r.transform_count()).unwrap_or(0)
        }
    };
}
