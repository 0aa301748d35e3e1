use glam::Vec3;

use crate::api::types::NodeId;
use crate::components::sphere::SphereComponent;

/// Fat scene node — a single struct with optional parts.
/// Designed for a small fixed scene rather than ECS generality.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Unique identifier.
    pub id: NodeId,
    /// String tag for finding nodes by name.
    pub tag: String,
    /// Whether this node is active (inactive nodes are skipped).
    pub active: bool,
    /// Position relative to the parent pivot (world position when unparented).
    pub pos: Vec3,
    /// Spin angle around the node's +Y axis, radians. Spinning a pivot
    /// revolves its children around it.
    pub spin: f32,
    /// Pivot this node revolves around (orbit anchor), if any.
    pub parent: Option<NodeId>,
    /// Sphere visual (optional — meshless nodes act as pivots).
    pub sphere: Option<SphereComponent>,
}

impl SceneNode {
    /// Create a new node with the given ID at the origin.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            spin: 0.0,
            parent: None,
            sphere: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_sphere(mut self, sphere: SphereComponent) -> Self {
        self.sphere = Some(sphere);
        self
    }
}
