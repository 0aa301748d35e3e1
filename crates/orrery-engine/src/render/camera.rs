use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use crate::render::ray::Ray;

/// Perspective camera for the 3D scene.
/// Owns a position and an aim point; produces view/projection matrices for
/// the shell renderer and picking rays for the input dispatcher.
pub struct Camera3D {
    /// Camera position in world space.
    pub pos: Vec3,
    /// Point the camera is aimed at.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 16;
}

impl Camera3D {
    pub fn new(fov_y: f32, aspect: f32) -> Self {
        Self {
            pos: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            fov_y,
            aspect,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Build the right-handed look-at view matrix.
    /// A camera sitting exactly on its target looks down -Z instead of
    /// producing a degenerate basis.
    pub fn view_matrix(&self) -> Mat4 {
        let forward = self.target - self.pos;
        if forward.length_squared() < 1e-12 {
            Mat4::look_at_rh(self.pos, self.pos - Vec3::Z, Vec3::Y)
        } else {
            Mat4::look_at_rh(self.pos, self.target, Vec3::Y)
        }
    }

    /// Perspective projection with depth in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
        }
    }

    /// Re-aim the camera at a point without moving it.
    pub fn look_at(&mut self, point: Vec3) {
        self.target = point;
    }

    /// Update the aspect ratio from a new viewport size (e.g. on resize).
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_height > 0.0 {
            self.aspect = viewport_width / viewport_height;
        }
    }

    /// Ray from the camera through a point in normalized device coordinates.
    /// Unprojects the near and far planes through the inverse view-projection;
    /// a degenerate unprojection falls back to the view axis rather than
    /// emitting NaN.
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let near = inv.project_point3(ndc.extend(0.0));
        let far = inv.project_point3(ndc.extend(1.0));
        let dir = far - near;
        if dir.is_finite() && near.is_finite() && dir.length_squared() > 1e-12 {
            Ray::new(near, dir)
        } else {
            Ray::new(self.pos, self.target - self.pos)
        }
    }
}

/// Convert viewport pixel coordinates (origin top-left, Y down) to
/// normalized device coordinates (origin center, Y up).
pub fn viewport_to_ndc(pos: Vec2, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(pos.x / width * 2.0 - 1.0, -(pos.y / height * 2.0 - 1.0))
}
