use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};
use orrery::{
    parse_css_px, BodyId, LabelAnchor, LabelSpec, LabelStyle, OrbitMeasure, PositionUpdate, Scene,
};

/// CSS `transform` for a translation relative to the element's own position.
pub fn translate(offset: DVec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

/// CSS `transform` for a label centered on its own width at the container
/// center, then shifted by `offset`.
pub fn centered_translate(offset: DVec2) -> String {
    if offset.x == 0.0 {
        format!("translate(-50%, {}px)", offset.y)
    } else {
        format!("translate(calc(-50% + {}px), {}px)", offset.x, offset.y)
    }
}

/// Store `value` in the slot for `id`, growing the table as needed.
/// Returns what the slot held before.
pub fn replace_slot<T: Clone>(slots: &mut Vec<Option<T>>, id: BodyId, value: T) -> Option<T> {
    let idx = id.index();
    if idx >= slots.len() {
        slots.resize(idx + 1, None);
    }
    slots[idx].replace(value)
}

/// Selector of a body's render target, e.g. `.earth`.
pub fn body_selector(name: &str) -> String {
    format!(".{name}")
}

/// Selector of a planet's orbit track, e.g. `.earth-orbit`.
pub fn orbit_selector(name: &str) -> String {
    format!(".{name}-orbit")
}

/// Reads orbit-track widths from the computed style of `.{name}-orbit`.
pub struct DomMeasure<'a> {
    window: &'a Window,
    document: &'a Document,
}

impl<'a> DomMeasure<'a> {
    pub fn new(window: &'a Window, document: &'a Document) -> Self {
        Self { window, document }
    }
}

impl OrbitMeasure for DomMeasure<'_> {
    fn orbit_width(&mut self, name: &str) -> Option<f64> {
        let track = self.document.query_selector(&orbit_selector(name)).ok()??;
        let style = self.window.get_computed_style(&track).ok()??;
        let width = style.get_property_value("width").ok()?;
        parse_css_px(&width)
    }
}

/// DOM-backed render sink. Bodies are found by class name; labels are
/// created as `div`s inside the scene container.
pub struct DomStage {
    document: Document,
    container: Element,
    bodies: Vec<Option<HtmlElement>>,
    labels: Vec<Option<HtmlElement>>,
}

impl DomStage {
    /// Attach to the first element matching `container_selector`.
    pub fn new(document: Document, container_selector: &str) -> Result<Self, JsValue> {
        let container = document
            .query_selector(container_selector)?
            .ok_or_else(|| JsValue::from_str(&format!("no element matches `{container_selector}`")))?;
        Ok(Self {
            document,
            container,
            bodies: Vec::new(),
            labels: Vec::new(),
        })
    }

    /// Look up the render target of every body. A missing element only
    /// disables that body's movement.
    pub fn bind_bodies(&mut self, scene: &Scene) {
        self.bodies.clear();
        for (_, body) in scene.iter() {
            let selector = body_selector(body.name());
            let element = self
                .document
                .query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|e| e.dyn_into::<HtmlElement>().ok());
            if element.is_none() {
                log::warn!("{}: no element matches `{selector}`", body.name());
            }
            self.bodies.push(element);
        }
    }

    fn try_create_label(&self, spec: &LabelSpec, style: &LabelStyle) -> Result<HtmlElement, JsValue> {
        let label = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(JsValue::from)?;
        label.set_class_name(&spec.class_name);
        label.set_text_content(Some(&spec.text));
        let css = label.style();
        for (property, value) in style.declarations() {
            css.set_property(property, value)?;
        }
        self.container.append_child(&label)?;
        Ok(label)
    }

    fn move_label(label: &HtmlElement, anchor: LabelAnchor, offset: DVec2) -> Result<(), JsValue> {
        let css = label.style();
        match anchor {
            LabelAnchor::Origin => css.set_property("transform", &translate(offset)),
            LabelAnchor::SceneCenter => {
                css.set_property("left", "50%")?;
                css.set_property("top", "50%")?;
                css.set_property("transform", &centered_translate(offset))
            }
        }
    }
}

impl Drop for DomStage {
    /// Labels belong to the stage; a replaced runner must not leave its
    /// frozen copies behind.
    fn drop(&mut self) {
        for label in self.labels.drain(..).flatten() {
            label.remove();
        }
    }
}

impl orrery::RenderSink for DomStage {
    fn create_label(&mut self, spec: &LabelSpec, style: &LabelStyle) {
        match self.try_create_label(spec, style) {
            Ok(label) => {
                if let Some(stale) = replace_slot(&mut self.labels, spec.body, label) {
                    stale.remove();
                }
            }
            Err(err) => log::warn!("{}: label not created: {err:?}", spec.text),
        }
    }

    fn apply(&mut self, id: BodyId, update: &PositionUpdate) {
        if let (Some(offset), Some(Some(body))) = (update.body, self.bodies.get(id.index())) {
            if let Err(err) = body.style().set_property("transform", &translate(offset)) {
                log::warn!("body {}: transform rejected: {err:?}", id.0);
            }
        }
        if let (Some(pos), Some(Some(label))) = (update.label, self.labels.get(id.index())) {
            if let Err(err) = Self::move_label(label, pos.anchor, pos.offset) {
                log::warn!("label {}: transform rejected: {err:?}", id.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_formats_pixels() {
        assert_eq!(translate(DVec2::new(12.5, -3.0)), "translate(12.5px, -3px)");
    }

    #[test]
    fn star_label_matches_stylesheet_form() {
        assert_eq!(centered_translate(DVec2::new(0.0, -30.0)), "translate(-50%, -30px)");
        assert_eq!(
            centered_translate(DVec2::new(4.0, -30.0)),
            "translate(calc(-50% + 4px), -30px)"
        );
    }

    #[test]
    fn selectors_follow_class_names() {
        assert_eq!(body_selector("earth"), ".earth");
        assert_eq!(orbit_selector("earth"), ".earth-orbit");
    }

    #[test]
    fn replace_slot_keeps_one_entry_per_body() {
        let mut slots: Vec<Option<&str>> = Vec::new();
        assert_eq!(replace_slot(&mut slots, BodyId(2), "neptune"), None);
        assert_eq!(slots, [None, None, Some("neptune")]);

        // Creating the same body's label again hands back the old one.
        assert_eq!(replace_slot(&mut slots, BodyId(2), "neptune again"), Some("neptune"));
        assert_eq!(slots.len(), 3);
        assert_eq!(slots.iter().flatten().count(), 1);
    }
}
