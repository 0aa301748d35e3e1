use bytemuck::{Pod, Zeroable};

use crate::core::scene::Scene;

/// Per-instance render data written to SharedArrayBuffer for the TypeScript
/// renderer. Must match the TypeScript protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SphereInstance {
    /// World position.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Sphere radius in world units.
    pub radius: f32,
    /// Base color.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub opacity: f32,
    /// HDR glow multiplier.
    pub emissive: f32,
    /// Spin angle around +Y, for texture rotation on the shell side.
    pub spin: f32,
    pub _pad: [f32; 2],
}

impl SphereInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all sphere instances for one frame.
/// Bounded by the capacity handed to the shell at startup.
pub struct RenderBuffer {
    pub instances: Vec<SphereInstance>,
    max_instances: usize,
}

impl RenderBuffer {
    pub fn with_capacity(max_instances: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_instances),
            max_instances,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Append an instance. Returns false once the shared buffer is full.
    pub fn push(&mut self, instance: SphereInstance) -> bool {
        if self.instances.len() >= self.max_instances {
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn max_instances(&self) -> usize {
        self.max_instances
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

/// Rebuild the frame's instance list from every active sphere node,
/// resolved to world positions. Overflow drops the remaining nodes with a
/// warning rather than writing past the shared buffer.
pub fn build_render_buffer(scene: &Scene, buf: &mut RenderBuffer) {
    buf.clear();
    for node in scene.iter() {
        if !node.active {
            continue;
        }
        let Some(sphere) = node.sphere else {
            continue;
        };
        let Some(pos) = scene.world_position(node.id) else {
            continue;
        };
        let instance = SphereInstance {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            radius: sphere.radius,
            r: sphere.color.r,
            g: sphere.color.g,
            b: sphere.color.b,
            opacity: sphere.opacity,
            emissive: sphere.emissive,
            spin: node.spin,
            _pad: [0.0; 2],
        };
        if !buf.push(instance) {
            log::warn!("render buffer full, dropping node {:?}", node.id);
            break;
        }
    }
}
