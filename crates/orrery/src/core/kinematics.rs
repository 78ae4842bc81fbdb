//! Circular-orbit kinematics. Pure math, no scene or DOM dependencies.
//!
//! Angles are accumulated in degrees and never wrapped; only their cosine
//! and sine are consumed, so the period takes care of itself.
//! Uses f64 throughout (the angle of a fast planet grows without bound).

use glam::DVec2;

const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Label offset from its body, in pixels (right and up).
pub const LABEL_OFFSET: DVec2 = DVec2::new(10.0, -15.0);

/// Orbital state of one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalState {
    /// Accumulated angle in degrees.
    pub angle: f64,
    /// Degrees per tick before the multiplier.
    pub base_angular_speed: f64,
    /// Visual speed-up applied on top of the base speed.
    pub speed_multiplier: f64,
    /// Orbit radius in pixels.
    pub orbit_radius: f64,
}

impl OrbitalState {
    /// Degrees added to the angle on every tick.
    pub fn angular_step(&self) -> f64 {
        self.base_angular_speed * self.speed_multiplier
    }
}

/// Result of advancing an orbital state by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    /// New accumulated angle (degrees), to be written back by the owner.
    pub angle: f64,
    /// Offset from the orbit center in pixels.
    pub offset: DVec2,
}

/// Offset from the orbit center for a body at `angle_deg` on a circle of `radius`.
pub fn orbit_offset(angle_deg: f64, radius: f64) -> DVec2 {
    let theta = angle_deg * DEG_TO_RAD;
    DVec2::new(theta.cos() * radius, theta.sin() * radius)
}

/// Advance `state` by one tick.
pub fn advance(state: &OrbitalState) -> Advance {
    let angle = state.angle + state.angular_step();
    Advance {
        angle,
        offset: orbit_offset(angle, state.orbit_radius),
    }
}

/// Label position for a body at `body_offset`.
pub fn label_offset(body_offset: DVec2, label_offset: DVec2) -> DVec2 {
    body_offset + label_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earthlike() -> OrbitalState {
        OrbitalState {
            angle: 0.0,
            base_angular_speed: 1.0,
            speed_multiplier: 0.1,
            orbit_radius: 100.0,
        }
    }

    #[test]
    fn angle_grows_by_speed_times_multiplier() {
        let state = OrbitalState {
            angle: 42.0,
            base_angular_speed: 4.1,
            speed_multiplier: 0.1,
            orbit_radius: 50.0,
        };
        let next = advance(&state);
        assert_eq!(next.angle, 42.0 + 4.1 * 0.1);
    }

    #[test]
    fn one_tick_matches_reference_values() {
        let next = advance(&earthlike());
        assert!((next.angle - 0.1).abs() < 1e-12, "angle = {}", next.angle);
        assert!((next.offset.x - 99.9998).abs() < 1e-4, "x = {}", next.offset.x);
        assert!((next.offset.y - 0.1745).abs() < 1e-4, "y = {}", next.offset.y);
    }

    #[test]
    fn full_revolution_after_3600_ticks() {
        let mut state = earthlike();
        for _ in 0..3600 {
            state.angle = advance(&state).angle;
        }
        assert!((state.angle - 360.0).abs() < 1e-9, "angle = {}", state.angle);
        let pos = orbit_offset(state.angle, state.orbit_radius);
        assert!((pos.x - 100.0).abs() < 1e-6, "x = {}", pos.x);
        assert!(pos.y.abs() < 1e-6, "y = {}", pos.y);
    }

    #[test]
    fn orbit_is_circular() {
        let radius = 137.5;
        for i in 0..720 {
            let angle = i as f64 * 0.75 - 90.0;
            let p = orbit_offset(angle, radius);
            let r2 = p.x * p.x + p.y * p.y;
            assert!((r2 - radius * radius).abs() < 1e-6, "r² = {r2} at {angle}°");
        }
    }

    #[test]
    fn zero_radius_pins_to_center() {
        let mut state = earthlike();
        state.orbit_radius = 0.0;
        for _ in 0..10 {
            let next = advance(&state);
            assert_eq!(next.offset.length(), 0.0);
            state.angle = next.angle;
        }
    }

    #[test]
    fn zero_speed_is_static() {
        let mut state = earthlike();
        state.angle = 123.0;
        state.base_angular_speed = 0.0;
        let first = advance(&state);
        for _ in 0..100 {
            let next = advance(&state);
            assert_eq!(next, first);
            state.angle = next.angle;
        }
        assert_eq!(state.angle, 123.0);
    }

    #[test]
    fn label_sits_up_and_right_of_body() {
        let body = DVec2::new(-20.0, 35.0);
        assert_eq!(label_offset(body, LABEL_OFFSET), DVec2::new(-10.0, 20.0));
    }
}
