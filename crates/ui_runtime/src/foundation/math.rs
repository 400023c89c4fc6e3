//! Math utilities and types
//!
//! Colors are plain RGBA vectors in the [0, 1] range. They are passed by
//! value into draw calls and never retained past a single call.

pub use nalgebra::Vector4;

/// RGBA color, each channel in [0, 1]
pub type Color = Vector4<f32>;

/// Opaque black
pub fn color_black() -> Color {
    Color::new(0.0, 0.0, 0.0, 1.0)
}

/// Opaque white
pub fn color_white() -> Color {
    Color::new(1.0, 1.0, 1.0, 1.0)
}

/// Linearly interpolate between two colors, clamping every channel to [0, 1]
pub fn lerp_color(a: &Color, b: &Color, t: f32) -> Color {
    let mut out = a + (b - a) * t;
    for channel in out.iter_mut() {
        *channel = channel.clamp(0.0, 1.0);
    }
    out
}

/// Clamp a cvar value into `[min, max]`
///
/// Unlike `f32::clamp` this never panics when `min > max`; the lower bound
/// is checked first.
pub fn clamp_cvar(min: f32, max: f32, value: f32) -> f32 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}
