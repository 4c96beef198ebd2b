//! Clip duplication: the baseline both edits transform.

use log::debug;

use crate::error::Result;
use crate::ids::ClipId;
use crate::store::ClipStore;

/// Create `new_name` with the original's frame rate and wrap mode and copy
/// every curve binding verbatim. The original is only read.
pub fn duplicate_clip<S: ClipStore + ?Sized>(
    store: &mut S,
    original: ClipId,
    new_name: &str,
) -> Result<ClipId> {
    let settings = store.clip_settings(original)?;
    let copy = store.create_clip(new_name, settings.frame_rate, settings.wrap_mode)?;
    let bindings = store.curve_bindings(original)?;
    for binding in &bindings {
        let curve = store.curve(original, binding)?;
        store.set_curve(copy, binding, curve)?;
    }
    debug!(
        "duplicated clip '{}' as '{}' ({} curves)",
        settings.name,
        new_name,
        bindings.len()
    );
    Ok(copy)
}
