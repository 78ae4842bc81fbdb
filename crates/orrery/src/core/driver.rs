//! Self-rescheduling animation loop.
//!
//! The host owns the repaint primitive (`requestAnimationFrame` in a
//! browser); the driver only decides whether to ask for another frame.
//! Each frame runs exactly one scene tick, and a stopped driver simply
//! never asks again.

use crate::core::scene::Scene;
use crate::renderer::traits::RenderSink;

/// Host hook for "call me back before the next repaint".
pub trait FrameScheduler {
    /// Request one callback before the next repaint.
    fn request_frame(&mut self);

    /// Drop a pending request, if any.
    fn cancel_frame(&mut self) {}
}

/// What `AnimationDriver::on_frame` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The scene ticked and the next frame is requested.
    Rescheduled,
    /// The driver is stopped; nothing ran.
    Stopped,
}

#[derive(Debug, Default)]
pub struct AnimationDriver {
    running: bool,
    frames: u64,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the first frame. No-op while already running.
    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) {
        if self.running {
            return;
        }
        self.running = true;
        scheduler.request_frame();
        log::info!("animation started");
    }

    /// Tick once right away, then keep going on the host's frames, so
    /// bodies are placed before the first repaint. No-op while running.
    pub fn start_immediate(
        &mut self,
        scene: &mut Scene,
        sink: &mut impl RenderSink,
        scheduler: &mut impl FrameScheduler,
    ) -> FrameOutcome {
        if self.running {
            return FrameOutcome::Rescheduled;
        }
        self.running = true;
        log::info!("animation started");
        self.on_frame(scene, sink, scheduler)
    }

    /// Frame callback: tick the scene once, then ask for the next frame.
    pub fn on_frame(
        &mut self,
        scene: &mut Scene,
        sink: &mut impl RenderSink,
        scheduler: &mut impl FrameScheduler,
    ) -> FrameOutcome {
        if !self.running {
            return FrameOutcome::Stopped;
        }
        scene.tick(sink);
        self.frames += 1;
        scheduler.request_frame();
        FrameOutcome::Rescheduled
    }

    /// Stop after the current frame. Idempotent.
    pub fn stop(&mut self, scheduler: &mut impl FrameScheduler) {
        if !self.running {
            return;
        }
        self.running = false;
        scheduler.cancel_frame();
        log::info!("animation stopped after {} frames", self.frames);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames run since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;
    use crate::components::body::{Appearance, Planet, Star};
    use crate::renderer::traits::RecordingSink;

    /// Scheduler that counts requests and tracks one pending frame.
    #[derive(Default)]
    struct ManualScheduler {
        requests: u32,
        cancels: u32,
        pending: bool,
    }

    impl ManualScheduler {
        /// Simulate the host firing the pending frame.
        fn fire(&mut self) -> bool {
            std::mem::take(&mut self.pending)
        }
    }

    impl FrameScheduler for ManualScheduler {
        fn request_frame(&mut self) {
            self.requests += 1;
            self.pending = true;
        }

        fn cancel_frame(&mut self) {
            self.cancels += 1;
            self.pending = false;
        }
    }

    fn small_scene() -> Scene {
        let mut scene = Scene::new();
        scene.spawn(Star::new("sun", Appearance::new(60.0, "#ff9933")));
        scene.spawn(Planet::with_angle("earth", Appearance::new(16.0, "#3498db"), 1.0, 100.0, 0.0));
        scene
    }

    #[test]
    fn runs_one_tick_per_frame_and_reschedules() {
        let mut scene = small_scene();
        let mut sink = RecordingSink::new();
        let mut sched = ManualScheduler::default();
        let mut driver = AnimationDriver::new();

        driver.start(&mut sched);
        for _ in 0..5 {
            assert!(sched.fire());
            let outcome = driver.on_frame(&mut scene, &mut sink, &mut sched);
            assert_eq!(outcome, FrameOutcome::Rescheduled);
        }
        assert_eq!(driver.frames(), 5);
        assert_eq!(scene.tick_count(), 5);
        assert_eq!(sched.requests, 6);
        assert!(sched.pending);

        let earth = scene.get(BodyId(1)).unwrap().as_planet().unwrap();
        assert!((earth.angle() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn stop_suppresses_next_frame() {
        let mut scene = small_scene();
        let mut sink = RecordingSink::new();
        let mut sched = ManualScheduler::default();
        let mut driver = AnimationDriver::new();

        driver.start(&mut sched);
        sched.fire();
        driver.on_frame(&mut scene, &mut sink, &mut sched);
        driver.stop(&mut sched);

        assert!(!driver.is_running());
        assert!(!sched.pending);
        assert_eq!(sched.cancels, 1);

        // A callback that was already in flight does nothing.
        let outcome = driver.on_frame(&mut scene, &mut sink, &mut sched);
        assert_eq!(outcome, FrameOutcome::Stopped);
        assert_eq!(scene.tick_count(), 1);
        assert!(!sched.pending);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut sched = ManualScheduler::default();
        let mut driver = AnimationDriver::new();
        driver.start(&mut sched);
        driver.start(&mut sched);
        assert_eq!(sched.requests, 1);
        driver.stop(&mut sched);
        driver.stop(&mut sched);
        assert_eq!(sched.cancels, 1);
    }

    #[test]
    fn restart_after_stop() {
        let mut scene = small_scene();
        let mut sink = RecordingSink::new();
        let mut sched = ManualScheduler::default();
        let mut driver = AnimationDriver::new();
        driver.start(&mut sched);
        driver.stop(&mut sched);
        driver.start(&mut sched);
        assert!(sched.fire());
        assert_eq!(
            driver.on_frame(&mut scene, &mut sink, &mut sched),
            FrameOutcome::Rescheduled
        );
    }

    #[test]
    fn start_immediate_ticks_before_first_frame() {
        let mut scene = small_scene();
        let mut sink = RecordingSink::new();
        let mut sched = ManualScheduler::default();
        let mut driver = AnimationDriver::new();

        let outcome = driver.start_immediate(&mut scene, &mut sink, &mut sched);
        assert_eq!(outcome, FrameOutcome::Rescheduled);
        assert_eq!(scene.tick_count(), 1);
        assert_eq!(sink.updates_for(BodyId(1)).count(), 1);
        assert_eq!(sched.requests, 1);

        // Already running: no extra tick, no second pending frame.
        driver.start_immediate(&mut scene, &mut sink, &mut sched);
        assert_eq!(scene.tick_count(), 1);
        assert_eq!(sched.requests, 1);
    }

    #[test]
    fn restart_keeps_one_label_per_body() {
        let mut scene = small_scene();
        let mut sink = RecordingSink::new();
        let mut sched = ManualScheduler::default();
        let mut driver = AnimationDriver::new();
        scene.attach(&mut sink);

        driver.start_immediate(&mut scene, &mut sink, &mut sched);
        sched.fire();
        driver.on_frame(&mut scene, &mut sink, &mut sched);
        driver.stop(&mut sched);
        driver.start_immediate(&mut scene, &mut sink, &mut sched);

        assert!(driver.is_running());
        assert_eq!(sink.labels.len(), scene.len());
        assert_eq!(scene.tick_count(), 3);
        assert!(sched.pending);
    }
}
