use bytemuck::{Pod, Zeroable};
use crate::api::types::{BodyId, LabelAnchor, PositionUpdate};
use crate::renderer::traits::RenderSink;

/// Per-body transform data for hosts that read a shared buffer instead of
/// receiving DOM calls (canvas, WebGPU). 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct TransformInstance {
    /// Body translation X in pixels.
    pub body_x: f32,
    /// Body translation Y in pixels.
    pub body_y: f32,
    /// Label translation X in pixels.
    pub label_x: f32,
    /// Label translation Y in pixels.
    pub label_y: f32,
    /// Bit set of `FLAG_*` values.
    pub flags: f32,
    pub _pad: [f32; 3],
}

impl TransformInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    /// Body translation has been written.
    pub const FLAG_BODY: u32 = 1;
    /// Label translation has been written.
    pub const FLAG_LABEL: u32 = 2;
    /// Label is measured from the scene center.
    pub const FLAG_LABEL_CENTERED: u32 = 4;

    pub fn flag_bits(&self) -> u32 {
        self.flags as u32
    }

    pub fn has(&self, flag: u32) -> bool {
        self.flag_bits() & flag != 0
    }

    fn set_flag(&mut self, flag: u32, on: bool) {
        let bits = if on {
            self.flag_bits() | flag
        } else {
            self.flag_bits() & !flag
        };
        self.flags = bits as f32;
    }
}

/// One `TransformInstance` per body, indexed by `BodyId`.
pub struct TransformBuffer {
    pub instances: Vec<TransformInstance>,
}

impl TransformBuffer {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn get(&self, id: BodyId) -> Option<&TransformInstance> {
        self.instances.get(id.index())
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Flat float view of all instances.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for TransformBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for TransformBuffer {
    fn apply(&mut self, id: BodyId, update: &PositionUpdate) {
        let idx = id.index();
        if idx >= self.instances.len() {
            self.instances.resize(idx + 1, TransformInstance::default());
        }
        let inst = &mut self.instances[idx];
        if let Some(body) = update.body {
            inst.body_x = body.x as f32;
            inst.body_y = body.y as f32;
            inst.set_flag(TransformInstance::FLAG_BODY, true);
        }
        if let Some(label) = update.label {
            inst.label_x = label.offset.x as f32;
            inst.label_y = label.offset.y as f32;
            inst.set_flag(TransformInstance::FLAG_LABEL, true);
            inst.set_flag(
                TransformInstance::FLAG_LABEL_CENTERED,
                label.anchor == LabelAnchor::SceneCenter,
            );
        }
    }
}
