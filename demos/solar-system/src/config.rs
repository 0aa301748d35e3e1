use glam::Vec3;
use orrery_engine::Easing;
use serde::Deserialize;

/// Tunable interaction parameters, loadable as JSON from the shell.
/// Defaults match the observed behavior of the scene.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Vertical displacement of a selected planet.
    pub raise_amount: f32,
    /// Signed offset from the body along the line of sight. Negative keeps
    /// the camera short of the body instead of inside it.
    pub zoom_distance: f32,
    /// Camera transition length in seconds. The default is long enough that
    /// a zoom reads as continuous tracking; any finite value snaps at the end.
    pub zoom_duration: f32,
    /// Opacity forced onto every non-selected planet each frame.
    pub dim_opacity: f32,
    /// World units of camera travel per pixel of pan drag.
    pub pan_sensitivity: f32,
    /// Easing curve for camera transitions.
    pub easing: Easing,
    /// Camera rest position, captured as the zoom-out home at startup.
    pub home: [f32; 3],
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            raise_amount: 20.0,
            zoom_distance: -80.0,
            zoom_duration: 100.0,
            dim_opacity: 0.3,
            pan_sensitivity: 0.5,
            easing: Easing::Linear,
            home: [0.0, 150.0, 200.0],
        }
    }
}

impl OrreryConfig {
    /// Apply a JSON override; absent fields fall back to defaults, and
    /// malformed input keeps the current values.
    pub fn apply_json(&mut self, json: &str) {
        match serde_json::from_str::<OrreryConfig>(json) {
            Ok(config) => *self = config,
            Err(err) => log::warn!("config rejected: {err}"),
        }
    }

    pub fn home_position(&self) -> Vec3 {
        Vec3::from_array(self.home)
    }
}
