//! Loop blender: close each curve's loop and ease its tail toward the head.
//!
//! Per curve (two or more keys):
//! 1. the last key takes the first key's value, so the loop closes exactly;
//! 2. keys in the window `[max(0, len - n - 1), len - 2]` are lerped toward
//!    the first value by `ease_in_out_quad((i - start) / (n - 1), influence)`;
//! 3. every key is switched to the configured auto tangent mode.
//!
//! Curves whose property name is filtered are deleted from the output. The
//! root forward translation (`RootT.z`) is never blended.

use std::ops::Range;

use log::{debug, info};

use crate::config::{LoopBlendConfig, UNBLENDED_PROPERTY};
use crate::data::{Curve, TangentMode};
use crate::duplicate::duplicate_clip;
use crate::error::{LoopFixError, Result};
use crate::ids::ClipId;
use crate::interp::{ease_in_out_quad, lerp_clamped};
use crate::outputs::{CurveChange, CurveReport, EditOutcome};
use crate::store::ClipStore;
use crate::tangents::smooth_tangents;

/// Key indices eased for a curve of `len` keys and a window of
/// `blend_keyframes`. The last key is excluded; it is set directly.
pub fn blend_window(len: usize, blend_keyframes: usize) -> Range<usize> {
    if len < 2 || blend_keyframes < 2 {
        return 0..0;
    }
    let start = len.saturating_sub(blend_keyframes.saturating_add(1));
    start..len - 1
}

/// Blend a single curve's tail back to its first value.
/// Curves with fewer than two keys are returned unchanged.
pub fn blend_curve(
    curve: &Curve,
    blend_keyframes: usize,
    influence: f32,
    tangent_mode: TangentMode,
) -> Result<Curve> {
    let len = curve.len();
    if len <= 1 {
        return Ok(curve.clone());
    }

    let mut out = curve.clone();
    let first_value = out.keys()[0].value;
    let last = out.keys()[len - 1];
    out.move_key(len - 1, last.with_value(first_value))?;

    let window = blend_window(len, blend_keyframes);
    let start = window.start;
    let denom = blend_keyframes.saturating_sub(1) as f32;
    for i in window {
        let t = ease_in_out_quad((i - start) as f32 / denom, influence);
        let key = out.keys()[i];
        out.move_key(i, key.with_value(lerp_clamped(key.value, first_value, t)))?;
    }

    smooth_tangents(&out, tangent_mode)
}

/// Duplicate `original` under `cfg.new_clip_name`, loop-blend every curve,
/// apply property filters and persist the result.
///
/// Fails with `InvalidInput` when `original` is `None` or `cfg` is out of
/// range; nothing is created in that case.
pub fn blend_loop<S: ClipStore + ?Sized>(
    store: &mut S,
    original: Option<ClipId>,
    cfg: &LoopBlendConfig,
) -> Result<EditOutcome> {
    let original = original.ok_or_else(LoopFixError::missing_source_clip)?;
    cfg.validate()?;

    let excluded = cfg.filter.excluded_names();
    let clip = duplicate_clip(store, original, &cfg.new_clip_name)?;
    let bindings = store.curve_bindings(clip)?;
    let mut curves = Vec::with_capacity(bindings.len());

    for binding in bindings {
        let property = binding.property_name.as_str();
        let change = if excluded.contains(property) {
            store.set_curve(clip, &binding, None)?;
            CurveChange::Removed
        } else if property == UNBLENDED_PROPERTY {
            CurveChange::Skipped
        } else {
            match store.curve(clip, &binding)? {
                Some(curve) if curve.len() > 1 => {
                    let blended = blend_curve(
                        &curve,
                        cfg.blend_keyframes,
                        cfg.easing_influence,
                        cfg.tangent_mode,
                    )?;
                    store.set_curve(clip, &binding, Some(blended))?;
                    CurveChange::Blended {
                        blended_keys: blend_window(curve.len(), cfg.blend_keyframes).len(),
                    }
                }
                _ => CurveChange::Unchanged,
            }
        };
        debug!("blend '{binding}': {change:?}");
        curves.push(CurveReport { binding, change });
    }

    store.persist(clip)?;
    let message = format!(
        "New animation clip '{}' created with first keyframe values copied to the last keyframe, \
         tangents smoothed, and end blended back to start with easing.",
        cfg.new_clip_name
    );
    info!("{message}");
    Ok(EditOutcome {
        clip,
        message,
        curves,
    })
}
