//! Keyframe clipper: drop trailing keys from every curve of a clip.

use log::{debug, info};

use crate::config::ClipConfig;
use crate::data::Curve;
use crate::duplicate::duplicate_clip;
use crate::error::{LoopFixError, Result};
use crate::ids::ClipId;
use crate::outputs::{CurveChange, CurveReport, EditOutcome};
use crate::store::ClipStore;

/// Remove the last `count` keys. Curves with `count` or fewer keys are
/// returned unchanged rather than emptied.
pub fn clip_curve(curve: &Curve, count: usize) -> Curve {
    if curve.len() > count {
        curve.prefix(curve.len() - count)
    } else {
        curve.clone()
    }
}

/// Duplicate `original` under `cfg.new_clip_name`, clip every curve and
/// persist the result.
pub fn clip_keyframes<S: ClipStore + ?Sized>(
    store: &mut S,
    original: Option<ClipId>,
    cfg: &ClipConfig,
) -> Result<EditOutcome> {
    let original = original.ok_or_else(LoopFixError::missing_source_clip)?;
    cfg.validate()?;

    let count = cfg.keyframes_to_clip;
    let clip = duplicate_clip(store, original, &cfg.new_clip_name)?;
    let bindings = store.curve_bindings(clip)?;
    let mut curves = Vec::with_capacity(bindings.len());

    for binding in bindings {
        let change = match store.curve(clip, &binding)? {
            Some(curve) if curve.len() > count && count > 0 => {
                store.set_curve(clip, &binding, Some(clip_curve(&curve, count)))?;
                CurveChange::Clipped { removed: count }
            }
            _ => CurveChange::Unchanged,
        };
        debug!("clip '{binding}': {change:?}");
        curves.push(CurveReport { binding, change });
    }

    store.persist(clip)?;
    let message = format!("{count} keyframes clipped from the end of the new animation.");
    info!("{message}");
    Ok(EditOutcome {
        clip,
        message,
        curves,
    })
}
