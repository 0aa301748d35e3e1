// Extensions — decoupled helpers with no Scene dependencies.

pub mod easing;

pub use easing::{ease, ease_vec3, lerp, lerp_vec3, Easing};
