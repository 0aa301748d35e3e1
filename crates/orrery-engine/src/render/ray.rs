use glam::Vec3;

use crate::api::types::NodeId;
use crate::core::scene::Scene;

/// A ray in world space. Direction is unit length (or zero when built from a
/// degenerate direction, in which case nothing intersects it).
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Nearest non-negative intersection distance with a sphere, if any.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let t = -b - sqrt_disc;
        if t >= 0.0 {
            return Some(t);
        }
        // Origin inside the sphere: the exit point still counts as a hit.
        let t = -b + sqrt_disc;
        (t >= 0.0).then_some(t)
    }
}

/// Result of a pick query.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub id: NodeId,
    pub distance: f32,
}

/// Nearest sphere-bearing node hit by `ray`, in world space.
/// Inactive nodes and nodes whose world position cannot be resolved are
/// skipped; zero hits yields `None`.
pub fn pick_nearest(scene: &Scene, ray: Ray) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for node in scene.iter() {
        if !node.active {
            continue;
        }
        let Some(sphere) = node.sphere else {
            continue;
        };
        let Some(center) = scene.world_position(node.id) else {
            continue;
        };
        if let Some(t) = ray.intersect_sphere(center, sphere.radius) {
            if best.map_or(true, |h| t < h.distance) {
                best = Some(Hit {
                    id: node.id,
                    distance: t,
                });
            }
        }
    }
    best
}
