//! Orbit radius measurement.
//!
//! The host lays out one orbit track per planet; its rendered width is the
//! orbit diameter. A track that cannot be measured gives a radius of 0 and
//! the planet sits on the star, without taking the rest of the scene down.

/// Source of orbit-track widths, in pixels.
pub trait OrbitMeasure {
    /// Rendered width of the orbit track for `name`, if it can be measured.
    fn orbit_width(&mut self, name: &str) -> Option<f64>;
}

/// Fixed widths, for tests and non-DOM hosts.
impl<F> OrbitMeasure for F
where
    F: FnMut(&str) -> Option<f64>,
{
    fn orbit_width(&mut self, name: &str) -> Option<f64> {
        self(name)
    }
}

/// Parse a CSS length the way JavaScript's `parseInt` does: leading
/// integer digits only, so `"300px"` is 300 and `"299.6px"` is 299.
pub fn parse_css_px(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<f64>().ok().map(|v| sign * v)
}

/// Orbit radius from a measured width. Missing, negative or non-finite
/// widths fall back to 0.
pub fn radius_from_width(name: &str, width: Option<f64>) -> f64 {
    match width {
        Some(w) if w.is_finite() && w >= 0.0 => w / 2.0,
        Some(w) => {
            log::warn!("{name}: unusable orbit width {w}, pinning to center");
            0.0
        }
        None => {
            log::warn!("{name}: orbit track not measurable, pinning to center");
            0.0
        }
    }
}
