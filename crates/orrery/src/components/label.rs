//! Text labels that track their bodies.
//!
//! The core only describes labels; the host creates one element per
//! `LabelSpec` and then moves it with the offsets from each tick.

use serde::{Deserialize, Serialize};
use crate::api::types::BodyId;

/// Visual style shared by all labels. Field values are CSS strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub position: String,
    pub color: String,
    pub font_size: String,
    pub font_family: String,
    pub text_shadow: String,
    /// Labels never intercept clicks meant for the page.
    pub pointer_events: String,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            position: "absolute".to_string(),
            color: "white".to_string(),
            font_size: "12px".to_string(),
            font_family: "Arial, sans-serif".to_string(),
            text_shadow: "0 0 2px black".to_string(),
            pointer_events: "none".to_string(),
        }
    }
}

impl LabelStyle {
    /// `(property, value)` pairs in CSS property syntax.
    pub fn declarations(&self) -> [(&'static str, &str); 6] {
        [
            ("position", self.position.as_str()),
            ("color", self.color.as_str()),
            ("font-size", self.font_size.as_str()),
            ("font-family", self.font_family.as_str()),
            ("text-shadow", self.text_shadow.as_str()),
            ("pointer-events", self.pointer_events.as_str()),
        ]
    }
}

/// Everything the host needs to create one label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    pub body: BodyId,
    /// Visible text, e.g. "Mercury".
    pub text: String,
    /// Space-separated CSS classes, e.g. "celestial-label mercury-label".
    pub class_name: String,
}

impl LabelSpec {
    pub fn for_body(body: BodyId, name: &str) -> Self {
        Self {
            body,
            text: display_name(name),
            class_name: class_name(name),
        }
    }
}

/// Body name with its first letter upper-cased.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// CSS classes for a body's label.
pub fn class_name(name: &str) -> String {
    format!("celestial-label {}-label", name.to_lowercase())
}
