//! Automatic tangent recomputation.
//!
//! Interior keys get the neighbour-distance weighted mean of the incoming and
//! outgoing segment slopes, so a short segment dominates the tangent on its
//! side. End keys are flattened. `ClampedAuto` additionally flattens local
//! extrema and limits the slope to three times the smaller neighbouring
//! slope so the spline cannot overshoot between keys.

use crate::data::{Curve, Keyframe, TangentMode};
use crate::error::Result;

/// Slope of the segment `a -> b`; zero for degenerate spans.
#[inline]
fn segment_slope(a: &Keyframe, b: &Keyframe) -> f32 {
    let dx = b.time - a.time;
    if dx > f32::EPSILON {
        (b.value - a.value) / dx
    } else {
        0.0
    }
}

/// Smooth tangent for the key at `index` under `mode`.
/// Returns `None` for modes that keep their stored tangents.
pub fn auto_tangent(keys: &[Keyframe], index: usize, mode: TangentMode) -> Option<f32> {
    if !mode.is_auto() {
        return None;
    }
    let n = keys.len();
    if index == 0 || index + 1 >= n {
        return Some(0.0);
    }
    let prev = &keys[index - 1];
    let key = &keys[index];
    let next = &keys[index + 1];
    let dx1 = key.time - prev.time;
    let dx2 = next.time - key.time;
    let m1 = segment_slope(prev, key);
    let m2 = segment_slope(key, next);
    let span = dx1 + dx2;
    let mut slope = if span > f32::EPSILON {
        (m1 * dx2 + m2 * dx1) / span
    } else {
        0.0
    };

    if mode == TangentMode::ClampedAuto {
        if m1 * m2 <= 0.0 {
            slope = 0.0;
        } else {
            let limit = 3.0 * m1.abs().min(m2.abs());
            slope = slope.clamp(-limit, limit);
        }
    }
    // slopes between keys near f32::MAX overflow; fall back to flat
    Some(if slope.is_finite() { slope } else { 0.0 })
}

/// Assign `mode` to both sides of every key and recompute the tangents.
pub fn smooth_tangents(curve: &Curve, mode: TangentMode) -> Result<Curve> {
    let keys: Vec<Keyframe> = curve.keys().iter().map(|k| k.with_modes(mode, mode)).collect();
    let smoothed = keys
        .iter()
        .enumerate()
        .map(|(i, k)| match auto_tangent(&keys, i, mode) {
            Some(slope) => k.with_tangents(slope, slope),
            None => *k,
        })
        .collect();
    Curve::new(smoothed)
}
