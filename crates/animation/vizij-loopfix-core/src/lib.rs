//! Vizij loop fixer core (engine-agnostic)
//!
//! Numeric edits over animation clip curves: the loop blender closes each
//! curve and eases its tail back toward its first value, the keyframe
//! clipper trims trailing keys. Clips live behind the [`ClipStore`] trait so
//! an editor host or a file-backed tool can drive the same code.

pub mod blend;
pub mod clipper;
pub mod config;
pub mod data;
pub mod duplicate;
pub mod error;
pub mod ids;
pub mod interp;
pub mod outputs;
pub mod store;
pub mod stored_clip;
pub mod tangents;

// Re-exports for consumers (hosts, CLI)
pub use blend::{blend_curve, blend_loop};
pub use clipper::{clip_curve, clip_keyframes};
pub use config::{ClipConfig, LoopBlendConfig, PropertyFilter};
pub use data::{AnimationClip, ClipSettings, Curve, CurveBinding, Keyframe, TangentMode, WrapMode};
pub use duplicate::duplicate_clip;
pub use error::LoopFixError;
pub use ids::ClipId;
pub use outputs::{CurveChange, CurveReport, EditOutcome};
pub use store::{ClipStore, MemoryClipStore};
pub use stored_clip::{clip_to_json, parse_clip_json};
pub use tangents::smooth_tangents;
