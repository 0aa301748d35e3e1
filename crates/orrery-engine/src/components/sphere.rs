/// RGB color for sphere shading.
#[derive(Debug, Clone, Copy)]
pub struct SphereColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl SphereColor {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for SphereColor {
    fn default() -> Self {
        Self { r: 0.7, g: 0.7, b: 0.7 }
    }
}

impl From<(f32, f32, f32)> for SphereColor {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self { r, g, b }
    }
}

/// Renderable sphere attached to a scene node.
/// Nodes without one are invisible pivots.
#[derive(Debug, Clone, Copy)]
pub struct SphereComponent {
    pub radius: f32,
    pub color: SphereColor,
    /// 0.0 = invisible, 1.0 = fully opaque.
    pub opacity: f32,
    /// HDR glow multiplier (0.0 for unlit bodies).
    pub emissive: f32,
}

impl SphereComponent {
    pub fn new(radius: f32, color: SphereColor) -> Self {
        Self {
            radius,
            color,
            opacity: 1.0,
            emissive: 0.0,
        }
    }

    // -- Builder methods --

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }
}
