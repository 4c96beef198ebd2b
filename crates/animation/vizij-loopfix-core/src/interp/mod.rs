//! Interpolation and easing helpers used by the loop blender.

pub mod functions;

pub use functions::{ease_in_out_quad, lerp_clamped, lerp_f32};
