//! Built-in solar-system table: base speeds, visual speed-ups and appearance.
//!
//! Base speeds are degrees per tick with Earth at 1.0, so the inner/outer
//! ratios follow the real orbital periods. The multipliers then flatten that
//! falloff so Neptune still visibly moves at the shared time scale.

/// Multiplier for any planet not listed in `SPEED_MULTIPLIERS`.
pub const DEFAULT_SPEED_MULTIPLIER: f64 = 0.1;

/// Outer planets get a bigger visual speed-up.
pub const SPEED_MULTIPLIERS: [(&str, f64); 4] = [
    ("jupiter", 0.3),
    ("saturn", 0.5),
    ("uranus", 0.7),
    ("neptune", 0.9),
];

/// Speed multiplier for a planet, by name (case-insensitive).
pub fn speed_multiplier(name: &str) -> f64 {
    SPEED_MULTIPLIERS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, m)| m)
        .unwrap_or(DEFAULT_SPEED_MULTIPLIER)
}

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_NAME: &str = "sun";
pub const SUN_SIZE: f32 = 60.0;
pub const SUN_COLOR: &str = "#ff9933";

// ── Planets ──────────────────────────────────────────────────────────

/// One row of the planet table.
#[derive(Debug, Clone, Copy)]
pub struct PlanetRow {
    pub name: &'static str,
    /// Rendered diameter in pixels.
    pub size: f32,
    pub color: &'static str,
    /// Degrees per tick before the multiplier.
    pub base_speed: f64,
}

pub const PLANET_COUNT: usize = 8;

/// Planets in increasing distance from the sun (also draw order).
pub const PLANETS: [PlanetRow; PLANET_COUNT] = [
    PlanetRow { name: "mercury", size: 10.0, color: "#bdc3c7", base_speed: 4.1 },
    PlanetRow { name: "venus",   size: 15.0, color: "#e67e22", base_speed: 1.6 },
    PlanetRow { name: "earth",   size: 16.0, color: "#3498db", base_speed: 1.0 },
    PlanetRow { name: "mars",    size: 14.0, color: "#e74c3c", base_speed: 0.53 },
    PlanetRow { name: "jupiter", size: 30.0, color: "#f39c12", base_speed: 0.084 },
    PlanetRow { name: "saturn",  size: 28.0, color: "#f1c40f", base_speed: 0.034 },
    PlanetRow { name: "uranus",  size: 20.0, color: "#16a085", base_speed: 0.012 },
    PlanetRow { name: "neptune", size: 20.0, color: "#2980b9", base_speed: 0.006 },
];

/// Look up a planet row by name (case-insensitive).
pub fn planet(name: &str) -> Option<&'static PlanetRow> {
    PLANETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_resolve_exactly() {
        assert_eq!(speed_multiplier("jupiter"), 0.3);
        assert_eq!(speed_multiplier("saturn"), 0.5);
        assert_eq!(speed_multiplier("uranus"), 0.7);
        assert_eq!(speed_multiplier("neptune"), 0.9);
        assert_eq!(speed_multiplier("mercury"), 0.1);
    }

    #[test]
    fn inner_and_unknown_names_use_default() {
        for name in ["venus", "earth", "mars", "pluto", ""] {
            assert_eq!(speed_multiplier(name), DEFAULT_SPEED_MULTIPLIER, "{name}");
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(speed_multiplier("Jupiter"), 0.3);
        assert_eq!(planet("EARTH").map(|p| p.base_speed), Some(1.0));
    }

    #[test]
    fn base_speeds_decrease_outward() {
        for pair in PLANETS.windows(2) {
            assert!(
                pair[0].base_speed > pair[1].base_speed,
                "{} should be faster than {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in PLANETS.iter().enumerate() {
            for b in &PLANETS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
