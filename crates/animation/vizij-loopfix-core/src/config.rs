//! Configuration for the loop blender and the keyframe clipper.
//!
//! All structs deserialize with defaults so partial JSON settings files work.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::data::TangentMode;
use crate::error::{LoopFixError, Result};

pub const DEFAULT_CLIP_NAME: &str = "NewAnimationClip";

/// Property that is never blended, only removed when its own filter is on.
pub const UNBLENDED_PROPERTY: &str = "RootT.z";

/// Root-motion curves that can be stripped from the output clip.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyFilter {
    pub remove_root_tx: bool,
    pub remove_root_ty: bool,
    pub remove_root_tz: bool,
    pub remove_root_qx: bool,
    pub remove_root_qy: bool,
    pub remove_root_qz: bool,
    /// Further property names removed on exact match.
    pub extra: Vec<String>,
}

impl PropertyFilter {
    /// Exact property names removed from the output.
    pub fn excluded_names(&self) -> HashSet<String> {
        let toggles = [
            (self.remove_root_tx, "RootT.x"),
            (self.remove_root_ty, "RootT.y"),
            (self.remove_root_tz, "RootT.z"),
            (self.remove_root_qx, "RootQ.x"),
            (self.remove_root_qy, "RootQ.y"),
            (self.remove_root_qz, "RootQ.z"),
        ];
        toggles
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| (*name).to_string())
            .chain(self.extra.iter().cloned())
            .collect()
    }
}

/// Settings for [`crate::blend::blend_loop`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoopBlendConfig {
    /// Name of the clip created for the result.
    pub new_clip_name: String,
    /// Number of trailing keyframes eased toward the first value.
    /// Zero only closes the loop.
    pub blend_keyframes: usize,
    /// Multiplier applied by the ease-in-out function.
    pub easing_influence: f32,
    /// Tangent mode assigned to every key after blending.
    pub tangent_mode: TangentMode,
    pub filter: PropertyFilter,
}

impl Default for LoopBlendConfig {
    fn default() -> Self {
        Self {
            new_clip_name: DEFAULT_CLIP_NAME.to_string(),
            blend_keyframes: 5,
            easing_influence: 1.0,
            tangent_mode: TangentMode::Auto,
            filter: PropertyFilter::default(),
        }
    }
}

impl LoopBlendConfig {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.new_clip_name)?;
        if self.blend_keyframes == 1 {
            return Err(LoopFixError::invalid_input(
                "blend_keyframes must be 0 or at least 2",
            ));
        }
        if !self.easing_influence.is_finite() {
            return Err(LoopFixError::invalid_input(
                "easing_influence must be finite",
            ));
        }
        Ok(())
    }
}

/// Settings for [`crate::clipper::clip_keyframes`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClipConfig {
    pub new_clip_name: String,
    /// Number of keyframes removed from the end of each curve.
    pub keyframes_to_clip: usize,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            new_clip_name: DEFAULT_CLIP_NAME.to_string(),
            keyframes_to_clip: 1,
        }
    }
}

impl ClipConfig {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.new_clip_name)
    }
}

/// Clip names double as file stems in file-backed stores.
fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(LoopFixError::invalid_input("new clip name must not be empty"));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(LoopFixError::invalid_input(format!(
            "new clip name '{name}' must not contain path separators"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_editor_tool() {
        let cfg = LoopBlendConfig::default();
        assert_eq!(cfg.blend_keyframes, 5);
        assert_eq!(cfg.easing_influence, 1.0);
        assert_eq!(cfg.new_clip_name, "NewAnimationClip");
        assert_eq!(ClipConfig::default().keyframes_to_clip, 1);
        assert!(cfg.filter.excluded_names().is_empty());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: LoopBlendConfig =
            serde_json::from_str(r#"{ "blendKeyframes": 8, "filter": { "removeRootQy": true } }"#)
                .unwrap();
        assert_eq!(cfg.blend_keyframes, 8);
        assert_eq!(cfg.easing_influence, 1.0);
        let names = cfg.filter.excluded_names();
        assert_eq!(names.len(), 1);
        assert!(names.contains("RootQ.y"));
    }

    #[test]
    fn single_key_window_is_rejected() {
        let cfg = LoopBlendConfig {
            blend_keyframes: 1,
            ..LoopBlendConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(LoopFixError::InvalidInput { .. })
        ));
        let cfg = LoopBlendConfig {
            blend_keyframes: 0,
            ..LoopBlendConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn names_with_path_components_are_rejected() {
        for name in ["../x", "a/b", "dir\\clip", ".."] {
            let blend = LoopBlendConfig {
                new_clip_name: name.into(),
                ..LoopBlendConfig::default()
            };
            assert!(blend.validate().is_err(), "{name}");
            let clip = ClipConfig {
                new_clip_name: name.into(),
                ..ClipConfig::default()
            };
            assert!(clip.validate().is_err(), "{name}");
        }
        let ok = ClipConfig {
            new_clip_name: "Walk Loop.v2".into(),
            ..ClipConfig::default()
        };
        assert!(ok.validate().is_ok());
    }
}
