use serde::{Deserialize, Serialize};

use crate::data::{AnimationClip, Curve, CurveBinding, Keyframe, WrapMode};
use crate::error::{LoopFixError, Result};

/// Public API: parse a clip JSON document into the canonical AnimationClip.
///
/// Notes:
/// - `frameRate` defaults to 60 and `wrapMode` to `default` when omitted.
/// - Per-key tangents and tangent modes default to 0 / `free`.
/// - Key times must be strictly ascending within each curve.
/// - A binding may appear only once.
pub fn parse_clip_json(s: &str) -> Result<AnimationClip> {
    let doc: StoredClip =
        serde_json::from_str(s).map_err(|e| LoopFixError::store(format!("parse error: {e}")))?;

    if !doc.frame_rate.is_finite() || doc.frame_rate <= 0.0 {
        return Err(LoopFixError::invalid_input(format!(
            "clip '{}' frameRate must be positive",
            doc.name
        )));
    }

    let mut clip = AnimationClip::new(doc.name, doc.frame_rate, doc.wrap_mode);
    for sc in doc.curves {
        let binding = CurveBinding::new(sc.path, sc.property_name, sc.type_name);
        let curve = Curve::new(sc.keys).map_err(|e| match e {
            LoopFixError::InvalidCurve { reason } => {
                LoopFixError::invalid_curve(format!("'{binding}': {reason}"))
            }
            other => other,
        })?;
        if clip.curve(&binding).is_some() {
            return Err(LoopFixError::invalid_curve(format!(
                "duplicate binding '{binding}'"
            )));
        }
        clip.set_curve(binding, Some(curve));
    }
    Ok(clip)
}

/// Serialize a clip to its pretty-printed JSON document.
pub fn clip_to_json(clip: &AnimationClip) -> Result<String> {
    let doc = StoredClip {
        name: clip.name.clone(),
        frame_rate: clip.frame_rate,
        wrap_mode: clip.wrap_mode,
        curves: clip
            .curves()
            .map(|(b, c)| StoredCurve {
                path: b.path.clone(),
                property_name: b.property_name.clone(),
                type_name: b.type_name.clone(),
                keys: c.keys().to_vec(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&doc).map_err(|e| LoopFixError::store(format!("serialize: {e}")))
}

// ----- JSON schema (serde) -----

fn default_frame_rate() -> f32 {
    60.0
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredClip {
    name: String,
    #[serde(default = "default_frame_rate")]
    frame_rate: f32,
    #[serde(default)]
    wrap_mode: WrapMode,
    #[serde(default)]
    curves: Vec<StoredCurve>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCurve {
    #[serde(default)]
    path: String,
    property_name: String,
    #[serde(rename = "type", default)]
    type_name: String,
    keys: Vec<Keyframe>,
}
