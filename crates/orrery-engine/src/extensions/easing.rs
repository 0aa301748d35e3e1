// extensions/easing.rs
//
// Pure easing functions for animation interpolation.
// No dependencies on SceneNode/Scene — just math.

use serde::Deserialize;
use std::f32::consts::PI;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Slow start.
    QuadIn,
    /// Slow end.
    QuadOut,
    /// Slow start and end.
    QuadInOut,
    /// Stronger slow start.
    CubicIn,
    /// Stronger slow end.
    CubicOut,
    /// Stronger slow start and end.
    CubicInOut,
    /// Sine wave easing (smooth).
    SineInOut,
    /// Exponential settle.
    ExpoOut,
    /// Overshoot then settle.
    BackOut,
}

impl Easing {
    /// Apply the easing function to a normalized time value `t` in [0, 1].
    /// Returns the eased value, typically in [0, 1] (BackOut can overshoot).
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,

            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }

            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }

            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,

            Easing::ExpoOut => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }

            Easing::BackOut => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
        }
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec3 values.
#[inline]
pub fn lerp_vec3(a: glam::Vec3, b: glam::Vec3, t: f32) -> glam::Vec3 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}

/// Interpolate Vec3 with easing.
#[inline]
pub fn ease_vec3(a: glam::Vec3, b: glam::Vec3, t: f32, easing: Easing) -> glam::Vec3 {
    lerp_vec3(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn linear_endpoints() {
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn quad_out_front_loads_motion() {
        let mid = Easing::QuadOut.apply(0.5);
        assert!(mid > 0.5, "QuadOut at 0.5 should be > 0.5, got {mid}");
    }

    #[test]
    fn back_out_overshoots() {
        let early = Easing::BackOut.apply(0.3);
        assert!(early > 0.3, "BackOut should overshoot");
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::CubicInOut.apply(2.5), 1.0);
        assert_eq!(Easing::CubicInOut.apply(-1.0), 0.0);
    }

    #[test]
    fn ease_vec3_midpoint() {
        let result = ease_vec3(
            Vec3::ZERO,
            Vec3::new(100.0, 50.0, -20.0),
            0.5,
            Easing::Linear,
        );
        assert!((result - Vec3::new(50.0, 25.0, -10.0)).length() < 1e-4);
    }

    #[test]
    fn easing_names_deserialize() {
        let e: Easing = serde_json::from_str("\"quad-in-out\"").unwrap();
        assert_eq!(e, Easing::QuadInOut);
        let e: Easing = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(e, Easing::Linear);
    }
}
