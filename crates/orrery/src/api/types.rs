use glam::DVec2;

/// Handle to a body in the scene. Doubles as its index in draw order,
/// so a collaborator can keep its render targets in a parallel `Vec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a label's offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    /// The label's own layout position (translated like its body).
    Origin,
    /// The center of the scene container, with the label centered on
    /// its own width before the offset is applied.
    SceneCenter,
}

/// Where a label goes this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPosition {
    pub anchor: LabelAnchor,
    /// Pixel offset from the anchor.
    pub offset: DVec2,
}

/// Per-tick output of a body: translations for its render target and its label.
/// `None` leaves that target untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionUpdate {
    pub body: Option<DVec2>,
    pub label: Option<LabelPosition>,
}

impl PositionUpdate {
    /// True when neither the body nor its label moves.
    pub fn is_empty(&self) -> bool {
        self.body.is_none() && self.label.is_none()
    }
}
