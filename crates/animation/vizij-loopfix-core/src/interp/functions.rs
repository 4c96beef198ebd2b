//! Scalar interpolation helpers:
//! - lerp_f32 (unclamped)
//! - lerp_clamped (factor clamped to [0,1], matching engine lerp)
//! - ease_in_out_quad (quadratic ease with an influence multiplier)

/// Linear interpolation of scalars.
/// Weighted form: `b - a` is never formed, so it cannot overflow for
/// finite inputs of opposite sign.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Linear interpolation with the factor clamped to [0,1].
/// A NaN factor is treated as 0 so a bad window never poisons a curve.
#[inline]
pub fn lerp_clamped(a: f32, b: f32, t: f32) -> f32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    lerp_f32(a, b, t)
}

/// Quadratic ease-in-out scaled by `influence`.
///
/// - `t < 0.5`:  `2·t²·k`
/// - `t >= 0.5`: `1 − k·(−2t+2)²/2`
///
/// With `k == 1` this is the standard ease-in-out curve. With any other
/// influence the two halves do not meet at `t == 0.5`; existing clips were
/// authored against that exact shape, so it is kept as is.
#[inline]
pub fn ease_in_out_quad(t: f32, influence: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t * influence
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0 * influence
    }
}
