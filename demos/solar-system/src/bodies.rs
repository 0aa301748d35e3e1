/// Body roster — sizes, orbit radii, and per-frame motion steps.
///
/// Values are stylized for readability, not derived from orbital physics:
/// each body spins and revolves by a fixed angle per frame.

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLUTO: usize = 8;
pub const PLANET_COUNT: usize = 9;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 16.0;
pub const SUN_SPIN_STEP: f32 = 0.004;
pub const SUN_COLOR: (f32, f32, f32) = (1.0, 0.9, 0.5);
pub const SUN_EMISSIVE: f32 = 3.5;

// ── Planets ──────────────────────────────────────────────────────────

/// Static description of one planet.
pub struct PlanetDesc {
    /// Lowercase id, used as the scene tag and in UI events.
    pub name: &'static str,
    /// Visual sphere radius.
    pub radius: f32,
    /// Distance from the sun along the orbit anchor's +X axis.
    pub orbit_radius: f32,
    /// Self-rotation step per frame, radians.
    pub spin_step: f32,
    /// Revolution step per frame, radians (applied to the orbit anchor).
    pub orbit_step: f32,
    /// Base color.
    pub color: (f32, f32, f32),
}

pub const PLANETS: [PlanetDesc; PLANET_COUNT] = [
    PlanetDesc { name: "mercury", radius: 6.0,  orbit_radius: 62.0,  spin_step: 0.004, orbit_step: 0.04,    color: (0.60, 0.55, 0.50) },
    PlanetDesc { name: "venus",   radius: 6.0,  orbit_radius: 62.0,  spin_step: 0.002, orbit_step: 0.015,   color: (0.90, 0.75, 0.40) },
    PlanetDesc { name: "earth",   radius: 6.0,  orbit_radius: 62.0,  spin_step: 0.02,  orbit_step: 0.01,    color: (0.20, 0.40, 0.80) },
    PlanetDesc { name: "mars",    radius: 6.0,  orbit_radius: 62.0,  spin_step: 0.018, orbit_step: 0.008,   color: (0.80, 0.30, 0.15) },
    PlanetDesc { name: "jupiter", radius: 12.0, orbit_radius: 100.0, spin_step: 0.04,  orbit_step: 0.002,   color: (0.80, 0.70, 0.50) },
    PlanetDesc { name: "saturn",  radius: 10.0, orbit_radius: 138.0, spin_step: 0.038, orbit_step: 0.0009,  color: (0.85, 0.75, 0.50) },
    PlanetDesc { name: "uranus",  radius: 7.0,  orbit_radius: 176.0, spin_step: 0.03,  orbit_step: 0.0004,  color: (0.50, 0.75, 0.85) },
    PlanetDesc { name: "neptune", radius: 7.0,  orbit_radius: 200.0, spin_step: 0.032, orbit_step: 0.0001,  color: (0.25, 0.35, 0.80) },
    PlanetDesc { name: "pluto",   radius: 2.8,  orbit_radius: 216.0, spin_step: 0.008, orbit_step: 0.00007, color: (0.70, 0.60, 0.50) },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_is_complete() {
        assert_eq!(PLANETS.len(), PLANET_COUNT);
        let expected = [
            (MERCURY, "mercury"),
            (VENUS, "venus"),
            (EARTH, "earth"),
            (MARS, "mars"),
            (JUPITER, "jupiter"),
            (SATURN, "saturn"),
            (URANUS, "uranus"),
            (NEPTUNE, "neptune"),
            (PLUTO, "pluto"),
        ];
        for (idx, name) in expected {
            assert_eq!(PLANETS[idx].name, name);
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

    #[test]
    fn motion_steps_are_positive() {
        for desc in &PLANETS {
            assert!(desc.spin_step > 0.0, "{} spin", desc.name);
            assert!(desc.orbit_step > 0.0, "{} orbit", desc.name);
            assert!(desc.radius > 0.0 && desc.orbit_radius > 0.0);
        }
    }
}
