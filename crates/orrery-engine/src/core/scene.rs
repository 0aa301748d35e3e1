use glam::{Quat, Vec3};

use crate::api::types::NodeId;
use crate::components::node::SceneNode;

/// Upper bound on parent-chain walks, guarding against cycles from bad setup.
const MAX_PARENT_DEPTH: usize = 32;

/// Simple node storage using a flat Vec.
/// Designed for small scenes (dozens of nodes, not thousands).
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(32),
        }
    }

    /// Add a node to the scene.
    pub fn spawn(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    /// Get a reference to a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Get a mutable reference to a node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter()
    }

    /// Iterate over all nodes mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SceneNode> {
        self.nodes.iter_mut()
    }

    /// Find the first node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.tag == tag)
    }

    /// Find the first node with the given tag (mutable).
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut SceneNode> {
        self.nodes.iter_mut().find(|n| n.tag == tag)
    }

    /// Number of nodes in the scene.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear all nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// World position of a node, resolved through its pivot chain.
    /// Each ancestor's spin rotates the child's offset around the
    /// ancestor's +Y axis. Missing ancestors end the walk early rather
    /// than failing the lookup.
    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        let node = self.get(id)?;
        let mut pos = node.pos;
        let mut current = node.parent;
        let mut depth = 0;
        while let Some(parent_id) = current {
            let Some(parent) = self.get(parent_id) else {
                break;
            };
            pos = parent.pos + Quat::from_rotation_y(parent.spin) * pos;
            current = parent.parent;
            depth += 1;
            if depth >= MAX_PARENT_DEPTH {
                break;
            }
        }
        Some(pos)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
