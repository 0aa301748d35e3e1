pub mod api;
pub mod components;
pub mod core;
pub mod extensions;
pub mod input;
pub mod render;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{GameEvent, NodeId};
pub use components::node::SceneNode;
pub use components::sphere::{SphereColor, SphereComponent};
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use extensions::{ease, ease_vec3, lerp, lerp_vec3, Easing};
pub use input::queue::{InputEvent, InputQueue, Modifiers, PointerButton};
pub use render::camera::{viewport_to_ndc, Camera3D, CameraUniform};
pub use render::instance::{build_render_buffer, RenderBuffer, SphereInstance};
pub use render::ray::{pick_nearest, Hit, Ray};
