use serde::Deserialize;

use crate::api::types::{GameEvent, NodeId};
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::render::camera::Camera3D;

/// Configuration for the engine, provided by the game.
/// The shell may also supply overrides as JSON before init (see `from_json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Initial viewport width in device pixels.
    pub viewport_width: f32,
    /// Initial viewport height in device pixels.
    pub viewport_height: f32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Maximum number of sphere instances in the render buffer (default: 64).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            fov_y_degrees: 45.0,
            max_instances: 64,
            max_events: 32,
        }
    }
}

impl GameConfig {
    /// Parse a partial JSON override; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state: spawn nodes, place the camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed-timestep tick. All queued input events have settled by the
    /// time a frame reads the scene or the camera.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32);

    /// Optional hook for shell-provided JSON tuning.
    fn load_config(&mut self, _json: &str) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        let aspect = if config.viewport_height > 0.0 {
            config.viewport_width / config.viewport_height
        } else {
            1.0
        };
        Self {
            scene: Scene::new(),
            camera: Camera3D::new(config.fov_y_degrees.to_radians(), aspect),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the shell.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_unique_and_increasing() {
        let mut ctx = EngineContext::default();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::default();
        ctx.emit_event(GameEvent { kind: 1.0, a: 2.0, b: 3.0, c: 4.0 });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn config_json_override_is_partial() {
        let config = GameConfig::from_json(r#"{"fov_y_degrees": 60.0}"#).unwrap();
        assert_eq!(config.fov_y_degrees, 60.0);
        assert_eq!(config.max_instances, GameConfig::default().max_instances);
    }

    #[test]
    fn context_camera_aspect_from_viewport() {
        let config = GameConfig {
            viewport_width: 1000.0,
            viewport_height: 500.0,
            ..GameConfig::default()
        };
        let ctx = EngineContext::new(&config);
        assert!((ctx.camera.aspect - 2.0).abs() < 1e-6);
    }
}
