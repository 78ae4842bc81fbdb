use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use orrery::FrameScheduler;

/// `requestAnimationFrame`-backed scheduler.
///
/// The JS callback is created once and reused for every request; it calls
/// a plain `fn()` that finds the runner in thread-local storage, because
/// the runner itself owns this scheduler.
pub struct RafScheduler {
    window: Window,
    callback: Closure<dyn FnMut()>,
    pending: Option<i32>,
}

impl RafScheduler {
    pub fn new(window: Window, on_frame: fn()) -> Self {
        let callback = Closure::wrap(Box::new(move || on_frame()) as Box<dyn FnMut()>);
        Self {
            window,
            callback,
            pending: None,
        }
    }

    /// Mark the pending request as consumed. Call at the top of each frame.
    pub fn frame_fired(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        if self.is_pending() {
            return;
        }
        match self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref::<js_sys::Function>())
        {
            Ok(handle) => self.pending = Some(handle),
            Err(err) => log::error!("requestAnimationFrame failed: {err:?}"),
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(handle) {
                log::warn!("cancelAnimationFrame failed: {err:?}");
            }
        }
    }
}

impl Drop for RafScheduler {
    /// The closure dies with the scheduler, so a pending frame must not fire.
    fn drop(&mut self) {
        self.cancel_frame();
    }
}
