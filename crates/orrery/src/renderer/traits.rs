//! The rendering boundary.
//!
//! The scene never touches the DOM. It hands label descriptions and
//! per-tick offsets to a `RenderSink`; the web crate implements one over
//! real elements, `TransformBuffer` implements one over a flat `f32` buffer.

use crate::api::types::{BodyId, PositionUpdate};
use crate::components::label::{LabelSpec, LabelStyle};

/// Receiver for everything a scene wants drawn.
///
/// # Example Implementation
///
/// ```ignore
/// struct CanvasSink {
///     ctx: web_sys::CanvasRenderingContext2d,
///     // ...
/// }
///
/// impl RenderSink for CanvasSink {
///     fn apply(&mut self, id: BodyId, update: &PositionUpdate) {
///         // Stash offsets, draw on the next paint...
///     }
/// }
/// ```
pub trait RenderSink {
    /// Create the label for one body. Called once per body, before any tick.
    fn create_label(&mut self, _spec: &LabelSpec, _style: &LabelStyle) {}

    /// Move a body and/or its label. Offsets are translations relative to
    /// each target's own anchor, not absolute screen coordinates.
    fn apply(&mut self, id: BodyId, update: &PositionUpdate);
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn create_label(&mut self, spec: &LabelSpec, style: &LabelStyle) {
        (**self).create_label(spec, style);
    }

    fn apply(&mut self, id: BodyId, update: &PositionUpdate) {
        (**self).apply(id, update);
    }
}

/// Fan out to two sinks, first then second.
impl<A: RenderSink, B: RenderSink> RenderSink for (A, B) {
    fn create_label(&mut self, spec: &LabelSpec, style: &LabelStyle) {
        self.0.create_label(spec, style);
        self.1.create_label(spec, style);
    }

    fn apply(&mut self, id: BodyId, update: &PositionUpdate) {
        self.0.apply(id, update);
        self.1.apply(id, update);
    }
}

/// Sink that records everything it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub labels: Vec<LabelSpec>,
    pub updates: Vec<(BodyId, PositionUpdate)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates received for one body, oldest first.
    pub fn updates_for(&self, id: BodyId) -> impl Iterator<Item = &PositionUpdate> {
        self.updates
            .iter()
            .filter(move |(uid, _)| *uid == id)
            .map(|(_, u)| u)
    }
}

impl RenderSink for RecordingSink {
    fn create_label(&mut self, spec: &LabelSpec, _style: &LabelStyle) {
        self.labels.push(spec.clone());
    }

    fn apply(&mut self, id: BodyId, update: &PositionUpdate) {
        self.updates.push((id, *update));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        let a = PositionUpdate { body: Some(DVec2::X), label: None };
        let b = PositionUpdate { body: Some(DVec2::Y), label: None };
        sink.apply(BodyId(1), &a);
        sink.apply(BodyId(0), &b);
        sink.apply(BodyId(1), &b);
        let ids: Vec<_> = sink.updates.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![BodyId(1), BodyId(0), BodyId(1)]);
        let for_one: Vec<_> = sink.updates_for(BodyId(1)).collect();
        assert_eq!(for_one, vec![&a, &b]);
    }

    #[test]
    fn mutable_reference_forwards() {
        fn label_sun<S: RenderSink>(mut sink: S) {
            sink.create_label(&LabelSpec::for_body(BodyId(0), "sun"), &LabelStyle::default());
        }

        let mut sink = RecordingSink::new();
        label_sun(&mut sink);
        assert_eq!(sink.labels.len(), 1);
        assert_eq!(sink.labels[0].text, "Sun");
    }

    #[test]
    fn pair_fans_out_to_both() {
        let mut first = RecordingSink::new();
        let mut second = RecordingSink::new();
        {
            let mut both = (&mut first, &mut second);
            both.apply(BodyId(4), &PositionUpdate::default());
            both.create_label(&LabelSpec::for_body(BodyId(4), "mars"), &LabelStyle::default());
        }
        assert_eq!(first.updates.len(), 1);
        assert_eq!(second.updates.len(), 1);
        assert_eq!(second.labels[0].text, "Mars");
    }
}
